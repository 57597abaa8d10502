//! Helper methods for RBAC operations

use crate::core::models::user::UserProfile;

use super::registry::RoleRegistry;
use super::types::{PermissionSet, RoleConfig};

pub(super) trait RbacHelpers {
    /// Registered role of a profile, if any
    fn profile_role(&self, profile: &UserProfile) -> Option<&'static RoleConfig>;

    /// Permissions configured on a role
    fn role_permission_set(&self, role: &RoleConfig) -> PermissionSet;
}

impl RbacHelpers for RoleRegistry {
    fn profile_role(&self, profile: &UserProfile) -> Option<&'static RoleConfig> {
        profile
            .role_key()
            .and_then(|key| self.get_role_config(key))
    }

    fn role_permission_set(&self, role: &RoleConfig) -> PermissionSet {
        role.permissions.iter().map(|p| p.to_string()).collect()
    }
}
