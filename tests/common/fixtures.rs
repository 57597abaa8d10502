//! Test fixtures and data factories
//!
//! Provides factory methods for creating profiles with sensible defaults.
//! All factories create real objects, not mocks.

use chrono::{DateTime, TimeZone, Utc};
use portal_rbac::{AccountStatus, RoleKey, UserProfile};
use uuid::Uuid;

/// Factory for creating test profiles
pub struct ProfileFactory;

impl ProfileFactory {
    /// Fixed clock so activity log timestamps are predictable
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    /// Create a profile the way first login does
    pub fn create() -> UserProfile {
        let uid = format!("uid-{}", &Uuid::new_v4().to_string()[..8]);
        let email = format!("{}@example.org", uid);
        UserProfile::first_login(uid, Some(email), RoleKey::SupportStaff, Self::now())
    }

    /// Create a profile holding `role`, which need not be registered
    pub fn with_role(role: &str) -> UserProfile {
        let mut profile = Self::create();
        profile.role = Some(role.to_string());
        profile
    }

    /// Create a profile with no role at all
    pub fn without_role() -> UserProfile {
        let mut profile = Self::create();
        profile.role = None;
        profile
    }

    /// Create a profile with a role and custom grants
    pub fn with_custom(role: Option<&str>, custom: &[&str]) -> UserProfile {
        let mut profile = Self::create();
        profile.role = role.map(str::to_string);
        profile.custom_permissions = custom.iter().map(|p| p.to_string()).collect();
        profile
    }

    /// Create a profile with `role` in `status`
    pub fn with_status(role: &str, status: AccountStatus) -> UserProfile {
        let mut profile = Self::with_role(role);
        profile.set_status(status, Self::now());
        profile
    }

    /// Create the seeded system administrator
    pub fn system_admin() -> UserProfile {
        Self::with_role(RoleKey::SystemAdmin.as_str())
    }
}
