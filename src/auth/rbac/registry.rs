//! Role registry
//!
//! Immutable catalogue of roles, permissions and departments, built once at
//! startup and shared by every authorization decision.

use crate::core::models::directory::{DEPARTMENTS, Department};
use crate::utils::error::{AccessError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::catalogue::{BUILTIN_ROLES, PERMISSIONS};
use super::types::{PermissionDef, RoleConfig, RoleKey};

static GLOBAL_REGISTRY: Lazy<RoleRegistry> = Lazy::new(RoleRegistry::builtin);

static PERMISSION_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z_]*\.[a-z][a-z_]*$").expect("Invalid permission id regex")
});

/// Registry of roles, permissions and departments
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    pub(super) roles: &'static [RoleConfig],
    /// First definition wins when a key is duplicated; `validate` reports it
    pub(super) by_key: HashMap<RoleKey, &'static RoleConfig>,
    /// Ascending by level, ties broken by key
    pub(super) sorted: Vec<&'static RoleConfig>,
    pub(super) permissions: &'static [PermissionDef],
    pub(super) departments: &'static [Department],
}

impl RoleRegistry {
    /// Registry over the built-in catalogue
    pub fn builtin() -> Self {
        Self::from_tables(BUILTIN_ROLES, PERMISSIONS, DEPARTMENTS)
    }

    /// Registry over arbitrary static tables
    pub fn from_tables(
        roles: &'static [RoleConfig],
        permissions: &'static [PermissionDef],
        departments: &'static [Department],
    ) -> Self {
        let mut by_key = HashMap::with_capacity(roles.len());
        for role in roles {
            by_key.entry(role.key).or_insert(role);
        }

        let mut sorted: Vec<&'static RoleConfig> = roles.iter().collect();
        sorted.sort_by(|a, b| {
            a.level
                .cmp(&b.level)
                .then_with(|| a.key.as_str().cmp(b.key.as_str()))
        });

        debug!(
            roles = roles.len(),
            permissions = permissions.len(),
            departments = departments.len(),
            "Role registry built"
        );

        Self {
            roles,
            by_key,
            sorted,
            permissions,
            departments,
        }
    }

    /// Process-wide registry over the built-in catalogue
    pub fn global() -> &'static RoleRegistry {
        &GLOBAL_REGISTRY
    }

    /// Check catalogue integrity
    pub fn validate(&self) -> Result<()> {
        debug!("Validating role registry");

        let mut permission_ids = HashSet::new();
        for permission in self.permissions {
            if !is_well_formed_permission(permission.id) {
                return Err(AccessError::validation(format!(
                    "Malformed permission id: '{}'",
                    permission.id
                )));
            }
            if !permission_ids.insert(permission.id) {
                return Err(AccessError::validation(format!(
                    "Duplicate permission id: '{}'",
                    permission.id
                )));
            }
        }

        let mut role_keys = HashSet::new();
        for role in self.roles {
            if !role_keys.insert(role.key) {
                return Err(AccessError::validation(format!(
                    "Duplicate role key: '{}'",
                    role.key
                )));
            }
            if let Some(unknown) = role
                .permissions
                .iter()
                .find(|id| !permission_ids.contains(*id))
            {
                return Err(AccessError::validation(format!(
                    "Role '{}' references unknown permission '{}'",
                    role.key, unknown
                )));
            }
        }

        if let Some(missing) = RoleKey::ALL.iter().find(|key| !role_keys.contains(*key)) {
            return Err(AccessError::validation(format!(
                "Role '{}' has no configuration",
                missing
            )));
        }

        let mut codes = HashSet::new();
        for department in self.departments {
            if department.code.trim().is_empty() {
                return Err(AccessError::validation("Department code cannot be empty"));
            }
            if !codes.insert(department.code) {
                return Err(AccessError::validation(format!(
                    "Duplicate department code: '{}'",
                    department.code
                )));
            }
        }

        debug!("Role registry validation completed");
        Ok(())
    }

    /// List all permissions
    pub fn list_permissions(&self) -> &'static [PermissionDef] {
        self.permissions
    }

    /// Get permission by id
    pub fn get_permission(&self, id: &str) -> Option<&'static PermissionDef> {
        self.permissions.iter().find(|p| p.id == id)
    }

    pub fn is_known_permission(&self, id: &str) -> bool {
        self.get_permission(id).is_some()
    }

    /// Departments ordered by code
    pub fn departments(&self) -> Vec<&'static Department> {
        let mut departments: Vec<_> = self.departments.iter().collect();
        departments.sort_by_key(|d| d.code);
        departments
    }

    /// Look up a department; unknown codes yield `None`
    pub fn get_department_by_code(&self, code: &str) -> Option<&'static Department> {
        self.departments.iter().find(|d| d.code == code)
    }
}

/// Whether `id` has the `<resource>.<action>` shape
pub fn is_well_formed_permission(id: &str) -> bool {
    PERMISSION_ID_PATTERN.is_match(id)
}
