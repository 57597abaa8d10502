//! Core user profile types and enums

use crate::auth::rbac::RoleKey;
use crate::core::models::i18n::{Language, LocalizedText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Profile of an authenticated principal, as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque principal identifier issued by the auth provider
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Role key; unset means the user is not an administrator
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Option<String>,
    /// Permissions granted outside the role
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_permissions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AccountStatus,
    /// Department code, empty when unassigned
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default)]
    pub pay_grade: Option<String>,
    /// Legacy deactivation flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Profile created on a principal's first successful authentication
    pub fn first_login(
        uid: impl Into<String>,
        email: Option<String>,
        default_role: RoleKey,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
            role: Some(default_role.as_str().to_string()),
            custom_permissions: Vec::new(),
            status: AccountStatus::Active,
            department: String::new(),
            pay_grade: None,
            is_active: true,
            created_at: now,
            updated_at: None,
            last_login_at: Some(now),
        }
    }

    /// Stamp an authentication event
    pub fn record_login(&mut self, now: DateTime<Utc>) {
        self.last_login_at = Some(now);
    }

    /// Stored role key exactly as persisted; blank values count as unset
    pub fn role_key(&self) -> Option<&str> {
        self.role
            .as_deref()
            .filter(|r| !r.trim().is_empty())
    }

    /// Department code, ignoring blank values
    pub fn department_code(&self) -> Option<&str> {
        let code = self.department.trim();
        (!code.is_empty()).then_some(code)
    }

    /// Whether either the legacy flag or the status marks the account as
    /// deactivated
    pub fn is_deactivated(&self) -> bool {
        !self.is_active || self.status.is_deactivating()
    }

    /// Move to `status`, keeping the legacy flag in step
    pub fn set_status(&mut self, status: AccountStatus, now: DateTime<Utc>) {
        self.status = status;
        self.is_active = !status.is_deactivating();
        self.updated_at = Some(now);
    }

    pub fn has_custom_permission(&self, permission: &str) -> bool {
        self.custom_permissions.iter().any(|p| p == permission)
    }
}

/// Account status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    OnLeave,
    Suspended,
    Retired,
    Deactivated,
    /// Stored value not recognised by this build
    #[serde(other)]
    Unknown,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 6] = [
        AccountStatus::Active,
        AccountStatus::OnLeave,
        AccountStatus::Suspended,
        AccountStatus::Retired,
        AccountStatus::Deactivated,
        AccountStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::OnLeave => "on_leave",
            AccountStatus::Suspended => "suspended",
            AccountStatus::Retired => "retired",
            AccountStatus::Deactivated => "deactivated",
            AccountStatus::Unknown => "unknown",
        }
    }

    /// Statuses that revoke administrative access
    pub fn is_deactivating(&self) -> bool {
        !matches!(self, AccountStatus::Active | AccountStatus::OnLeave)
    }

    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            AccountStatus::Active => LocalizedText::new("Active", "Actif"),
            AccountStatus::OnLeave => LocalizedText::new("On leave", "En congé"),
            AccountStatus::Suspended => LocalizedText::new("Suspended", "Suspendu"),
            AccountStatus::Retired => LocalizedText::new("Retired", "Retraité"),
            AccountStatus::Deactivated => LocalizedText::new("Deactivated", "Désactivé"),
            AccountStatus::Unknown => LocalizedText::new("Unknown", "Inconnu"),
        };
        text.get(language)
    }

    /// Badge color tag
    pub fn color(&self) -> &'static str {
        match self {
            AccountStatus::Active => "green",
            AccountStatus::OnLeave => "blue",
            AccountStatus::Suspended => "orange",
            AccountStatus::Retired => "gray",
            AccountStatus::Deactivated => "red",
            AccountStatus::Unknown => "gray",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "on_leave" => Ok(AccountStatus::OnLeave),
            "suspended" => Ok(AccountStatus::Suspended),
            "retired" => Ok(AccountStatus::Retired),
            "deactivated" => Ok(AccountStatus::Deactivated),
            _ => Err(format!("Invalid account status: {}", s)),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
