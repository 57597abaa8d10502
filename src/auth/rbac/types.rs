//! RBAC type definitions

use crate::core::models::i18n::{Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Effective permission set, ordered for stable output
pub type PermissionSet = BTreeSet<String>;

/// Administrative role key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    SystemAdmin,
    DirectorGeneral,
    DeputyDirector,
    ContentManager,
    DepartmentHead,
    HrManager,
    Editor,
    Librarian,
    SupportStaff,
}

impl RoleKey {
    pub const ALL: [RoleKey; 9] = [
        RoleKey::SystemAdmin,
        RoleKey::DirectorGeneral,
        RoleKey::DeputyDirector,
        RoleKey::ContentManager,
        RoleKey::DepartmentHead,
        RoleKey::HrManager,
        RoleKey::Editor,
        RoleKey::Librarian,
        RoleKey::SupportStaff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::SystemAdmin => "system_admin",
            RoleKey::DirectorGeneral => "director_general",
            RoleKey::DeputyDirector => "deputy_director",
            RoleKey::ContentManager => "content_manager",
            RoleKey::DepartmentHead => "department_head",
            RoleKey::HrManager => "hr_manager",
            RoleKey::Editor => "editor",
            RoleKey::Librarian => "librarian",
            RoleKey::SupportStaff => "support_staff",
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for RoleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Invalid role key: {}", s))
    }
}

/// Role definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleConfig {
    pub key: RoleKey,
    /// Rank, 0 is the highest authority
    pub level: u32,
    pub label: LocalizedText,
    pub description: Option<LocalizedText>,
    /// Presentation tag
    pub color: &'static str,
    /// Permissions granted by this role
    pub permissions: &'static [&'static str],
}

impl RoleConfig {
    pub fn label(&self, language: Language) -> &'static str {
        self.label.get(language)
    }

    pub fn description(&self, language: Language) -> Option<&'static str> {
        self.description.map(|d| d.get(language))
    }

    pub fn grants(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| *p == permission)
    }

    /// Whether this role carries at least the authority of `other`
    pub fn outranks_or_equals(&self, other: &RoleConfig) -> bool {
        self.level <= other.level
    }
}

/// Permission definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionDef {
    /// Identifier in `<resource>.<action>` form
    pub id: &'static str,
    /// Resource group for admin UI grouping
    pub group: &'static str,
    pub label: LocalizedText,
}

/// Where a granted permission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantSource {
    Role(RoleKey),
    Custom,
}

/// Why an authorization check failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    NoProfile,
    NoAdminRole,
    Deactivated,
    InsufficientRank { required: String },
    MissingPermission { permission: String },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::NoProfile => write!(f, "No user profile loaded"),
            DenialReason::NoAdminRole => write!(f, "User has no recognised administrative role"),
            DenialReason::Deactivated => write!(f, "Account is deactivated"),
            DenialReason::InsufficientRank { required } => {
                write!(f, "Role '{}' or higher required", required)
            }
            DenialReason::MissingPermission { permission } => {
                write!(f, "Missing permission: {}", permission)
            }
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Where the permission came from, if granted
    pub source: Option<GrantSource>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<DenialReason>,
}

impl PermissionCheck {
    pub(super) fn granted(source: GrantSource) -> Self {
        Self {
            granted: true,
            source: Some(source),
            denial_reason: None,
        }
    }

    pub(super) fn denied(reason: DenialReason) -> Self {
        Self {
            granted: false,
            source: None,
            denial_reason: Some(reason),
        }
    }
}

/// Requirement attached to a protected route or UI affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Role key the user must equal or outrank
    Role(String),
    /// Permission identifier the user must hold
    Permission(String),
}

impl Requirement {
    pub fn role(key: impl Into<String>) -> Self {
        Requirement::Role(key.into())
    }

    pub fn permission(id: impl Into<String>) -> Self {
        Requirement::Permission(id.into())
    }
}
