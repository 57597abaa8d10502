//! Activity log records

use crate::core::models::i18n::{Language, LocalizedText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single entry in the administrative activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: Uuid,
    /// Principal that performed the action
    pub actor_uid: String,
    /// Principal or resource the action applied to
    pub target: String,
    pub action: ActivityAction,
    /// Action-specific details
    #[serde(default)]
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(
        actor_uid: impl Into<String>,
        target: impl Into<String>,
        action: ActivityAction,
        details: serde_json::Value,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_uid: actor_uid.into(),
            target: target.into(),
            action,
            details,
            timestamp,
        }
    }
}

/// Activity log action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Login,
    Logout,
    Create,
    Update,
    Delete,
    Publish,
    Unpublish,
    Upload,
    RoleChange,
    PermissionGrant,
    PermissionRevoke,
    StatusChange,
}

impl ActivityAction {
    pub const ALL: [ActivityAction; 12] = [
        ActivityAction::Login,
        ActivityAction::Logout,
        ActivityAction::Create,
        ActivityAction::Update,
        ActivityAction::Delete,
        ActivityAction::Publish,
        ActivityAction::Unpublish,
        ActivityAction::Upload,
        ActivityAction::RoleChange,
        ActivityAction::PermissionGrant,
        ActivityAction::PermissionRevoke,
        ActivityAction::StatusChange,
    ];

    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            ActivityAction::Login => LocalizedText::new("Signed in", "Connexion"),
            ActivityAction::Logout => LocalizedText::new("Signed out", "Déconnexion"),
            ActivityAction::Create => LocalizedText::new("Created", "Création"),
            ActivityAction::Update => LocalizedText::new("Updated", "Modification"),
            ActivityAction::Delete => LocalizedText::new("Deleted", "Suppression"),
            ActivityAction::Publish => LocalizedText::new("Published", "Publication"),
            ActivityAction::Unpublish => LocalizedText::new("Unpublished", "Dépublication"),
            ActivityAction::Upload => LocalizedText::new("Uploaded", "Téléversement"),
            ActivityAction::RoleChange => LocalizedText::new("Role changed", "Changement de rôle"),
            ActivityAction::PermissionGrant => {
                LocalizedText::new("Permission granted", "Permission accordée")
            }
            ActivityAction::PermissionRevoke => {
                LocalizedText::new("Permission revoked", "Permission retirée")
            }
            ActivityAction::StatusChange => {
                LocalizedText::new("Status changed", "Changement de statut")
            }
        };
        text.get(language)
    }

    /// Badge color tag
    pub fn color(&self) -> &'static str {
        match self {
            ActivityAction::Login | ActivityAction::Logout => "gray",
            ActivityAction::Create | ActivityAction::Upload => "green",
            ActivityAction::Update => "blue",
            ActivityAction::Delete => "red",
            ActivityAction::Publish | ActivityAction::Unpublish => "purple",
            ActivityAction::RoleChange
            | ActivityAction::PermissionGrant
            | ActivityAction::PermissionRevoke
            | ActivityAction::StatusChange => "orange",
        }
    }

    /// Actions that change someone's access
    pub fn is_security_relevant(&self) -> bool {
        matches!(
            self,
            ActivityAction::RoleChange
                | ActivityAction::PermissionGrant
                | ActivityAction::PermissionRevoke
                | ActivityAction::StatusChange
        )
    }
}
