//! Role lookup and rank checks

use crate::core::models::user::UserProfile;
use tracing::trace;

use super::helpers::RbacHelpers;
use super::registry::RoleRegistry;
use super::types::{PermissionSet, RoleConfig, RoleKey};

impl RoleRegistry {
    /// Get role by key; unregistered keys yield `None`
    pub fn get_role_config(&self, key: &str) -> Option<&'static RoleConfig> {
        key.parse::<RoleKey>().ok().and_then(|key| self.role(key))
    }

    /// Get role by typed key
    pub fn role(&self, key: RoleKey) -> Option<&'static RoleConfig> {
        self.by_key.get(&key).copied()
    }

    /// Roles ascending by level, ties broken by key
    pub fn roles_sorted_by_level(&self) -> Vec<&'static RoleConfig> {
        self.sorted.clone()
    }

    /// Permissions configured on a role, empty for unregistered keys
    pub fn get_role_permissions(&self, key: &str) -> PermissionSet {
        self.get_role_config(key)
            .map(|role| self.role_permission_set(role))
            .unwrap_or_default()
    }

    /// Whether the profile's role equals or outranks `required`
    ///
    /// Compares levels, not keys: a level-0 role satisfies every requirement.
    /// Fails closed when either role is unregistered.
    pub fn has_role(&self, profile: Option<&UserProfile>, required: &str) -> bool {
        let Some(required_role) = self.get_role_config(required) else {
            trace!(required, "Unregistered role requirement");
            return false;
        };

        profile
            .and_then(|profile| self.profile_role(profile))
            .is_some_and(|role| role.outranks_or_equals(required_role))
    }

    /// Whether the profile holds a registered role on an account that is not
    /// deactivated
    pub fn is_admin(&self, profile: Option<&UserProfile>) -> bool {
        profile.is_some_and(|profile| {
            self.profile_role(profile).is_some() && !profile.is_deactivated()
        })
    }

    /// Whether `actor` may edit `target`'s account
    ///
    /// Profiles without a registered role rank below every role.
    pub fn can_manage(&self, actor: &UserProfile, target: &UserProfile) -> bool {
        if !self.is_admin(Some(actor)) {
            return false;
        }
        let Some(actor_role) = self.profile_role(actor) else {
            return false;
        };

        match self.profile_role(target) {
            Some(target_role) => actor_role.outranks_or_equals(target_role),
            None => true,
        }
    }

    /// Roles `actor` may hand out, most senior first
    pub fn assignable_roles(&self, actor: &UserProfile) -> Vec<&'static RoleConfig> {
        if !self.is_admin(Some(actor)) {
            return Vec::new();
        }
        match self.profile_role(actor) {
            Some(actor_role) => self
                .sorted
                .iter()
                .copied()
                .filter(|role| actor_role.outranks_or_equals(role))
                .collect(),
            None => Vec::new(),
        }
    }
}
