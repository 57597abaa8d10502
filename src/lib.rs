//! # portal-rbac
//!
//! Role-based access control for the agency portal and its administrative CMS.
//!
//! ## Features
//!
//! - **Role registry**: ranked roles (level 0 is the most senior) with localized
//!   labels, color tags and flat permission lists
//! - **Permission resolver**: effective permissions, rank checks and the
//!   administrator gate, all failing closed on unknown input
//! - **Directory data**: departments, pay grades, account statuses and
//!   activity-log action kinds
//! - **Administrative edits**: role assignment, custom grants and status
//!   changes, each producing an activity log entry
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use portal_rbac::{RoleKey, UserProfile, has_permission, has_role};
//!
//! let profile = UserProfile::first_login("uid-1", None, RoleKey::SystemAdmin, Utc::now());
//!
//! assert!(has_role(Some(&profile), "support_staff"));
//! assert!(has_permission(Some(&profile), "user.delete"));
//! assert!(!has_permission(None, "user.delete"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AccessError, Result};

pub use auth::rbac::{
    DenialReason, GrantSource, PermissionCheck, PermissionSet, Requirement, RoleConfig, RoleKey,
    RoleRegistry, get_department_by_code, get_effective_permissions, get_role_config,
    get_role_permissions, get_roles_sorted_by_level, has_permission, has_role, is_admin, perms,
};
pub use crate::core::models::{
    AccountStatus, ActivityAction, ActivityLogEntry, Department, Language, LocalizedText,
    UserProfile,
};
