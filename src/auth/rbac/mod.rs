//! Role-Based Access Control (RBAC) system
//!
//! Roles are ranked by a numeric level (0 is the most senior) and carry a flat
//! permission list. A profile's effective permissions are its role's
//! permissions plus its custom grants. Every predicate fails closed: a missing
//! profile, an unregistered role or an unknown permission yields "no access",
//! never an error.
//!
//! The free functions below answer against [`RoleRegistry::global`]; services
//! that inject their own registry call the same methods on it directly.

mod admin;
pub mod catalogue;
mod helpers;
mod permissions;
mod registry;
mod roles;
mod types;

// Re-export public types and structs
pub use catalogue::perms;
pub use registry::{RoleRegistry, is_well_formed_permission};
pub use types::{
    DenialReason, GrantSource, PermissionCheck, PermissionDef, PermissionSet, Requirement,
    RoleConfig, RoleKey,
};

use crate::core::models::directory::Department;
use crate::core::models::user::UserProfile;

pub fn get_role_config(key: &str) -> Option<&'static RoleConfig> {
    RoleRegistry::global().get_role_config(key)
}

pub fn get_roles_sorted_by_level() -> Vec<&'static RoleConfig> {
    RoleRegistry::global().roles_sorted_by_level()
}

pub fn get_department_by_code(code: &str) -> Option<&'static Department> {
    RoleRegistry::global().get_department_by_code(code)
}

pub fn get_role_permissions(key: &str) -> PermissionSet {
    RoleRegistry::global().get_role_permissions(key)
}

pub fn get_effective_permissions(profile: Option<&UserProfile>) -> PermissionSet {
    RoleRegistry::global().get_effective_permissions(profile)
}

pub fn has_permission(profile: Option<&UserProfile>, permission: &str) -> bool {
    RoleRegistry::global().has_permission(profile, permission)
}

pub fn has_role(profile: Option<&UserProfile>, required: &str) -> bool {
    RoleRegistry::global().has_role(profile, required)
}

pub fn is_admin(profile: Option<&UserProfile>) -> bool {
    RoleRegistry::global().is_admin(profile)
}
