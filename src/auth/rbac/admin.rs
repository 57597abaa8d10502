//! Administrative edits to user profiles
//!
//! Each edit is authorized against the acting profile, applied to the target
//! in place, and returns the activity log entry to persist alongside it.

use crate::core::models::user::{AccountStatus, ActivityAction, ActivityLogEntry, UserProfile};
use crate::utils::error::{AccessError, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{info, warn};

use super::catalogue::perms;
use super::helpers::RbacHelpers;
use super::registry::RoleRegistry;
use super::types::RoleKey;

impl RoleRegistry {
    /// Assign `role` to `target`
    ///
    /// The actor needs `role.assign`, may not hand out a role more senior than
    /// their own, and may not change their own role.
    pub fn assign_role(
        &self,
        actor: &UserProfile,
        target: &mut UserProfile,
        role: RoleKey,
        now: DateTime<Utc>,
    ) -> Result<ActivityLogEntry> {
        self.ensure_can_edit(actor, target, perms::ROLE_ASSIGN)?;
        if actor.uid == target.uid {
            return Err(denied(actor, target, "Administrators cannot change their own role"));
        }

        let new_role = self
            .role(role)
            .ok_or_else(|| AccessError::not_found(format!("Role '{}' is not registered", role)))?;
        let actor_role = self
            .profile_role(actor)
            .ok_or_else(|| denied(actor, target, "Actor has no registered role"))?;
        if !actor_role.outranks_or_equals(new_role) {
            return Err(denied(
                actor,
                target,
                &format!("Cannot assign '{}', which outranks '{}'", role, actor_role.key),
            ));
        }

        let previous = target.role.replace(role.as_str().to_string());
        target.updated_at = Some(now);
        info!(actor = %actor.uid, target = %target.uid, role = %role, "Role assigned");

        Ok(ActivityLogEntry::new(
            &actor.uid,
            &target.uid,
            ActivityAction::RoleChange,
            json!({ "from": previous, "to": role.as_str() }),
            now,
        ))
    }

    /// Grant a catalogued permission outside the target's role
    ///
    /// The actor needs `user.update` and must hold `permission` themselves.
    pub fn grant_permission(
        &self,
        actor: &UserProfile,
        target: &mut UserProfile,
        permission: &str,
        now: DateTime<Utc>,
    ) -> Result<ActivityLogEntry> {
        self.ensure_can_edit(actor, target, perms::USER_UPDATE)?;
        if !self.is_known_permission(permission) {
            return Err(AccessError::not_found(format!(
                "Permission '{}' is not catalogued",
                permission
            )));
        }
        if !self.has_permission(Some(actor), permission) {
            return Err(denied(
                actor,
                target,
                &format!("Cannot grant '{}' without holding it", permission),
            ));
        }
        if target.has_custom_permission(permission) {
            return Err(AccessError::validation(format!(
                "Permission '{}' is already granted to '{}'",
                permission, target.uid
            )));
        }

        target.custom_permissions.push(permission.to_string());
        target.updated_at = Some(now);
        info!(actor = %actor.uid, target = %target.uid, permission, "Permission granted");

        Ok(ActivityLogEntry::new(
            &actor.uid,
            &target.uid,
            ActivityAction::PermissionGrant,
            json!({ "permission": permission }),
            now,
        ))
    }

    /// Remove a custom grant; role permissions are unaffected
    pub fn revoke_permission(
        &self,
        actor: &UserProfile,
        target: &mut UserProfile,
        permission: &str,
        now: DateTime<Utc>,
    ) -> Result<ActivityLogEntry> {
        self.ensure_can_edit(actor, target, perms::USER_UPDATE)?;
        if !target.has_custom_permission(permission) {
            return Err(AccessError::not_found(format!(
                "Permission '{}' is not a custom grant of '{}'",
                permission, target.uid
            )));
        }

        target.custom_permissions.retain(|p| p != permission);
        target.updated_at = Some(now);
        info!(actor = %actor.uid, target = %target.uid, permission, "Permission revoked");

        Ok(ActivityLogEntry::new(
            &actor.uid,
            &target.uid,
            ActivityAction::PermissionRevoke,
            json!({ "permission": permission }),
            now,
        ))
    }

    /// Move `target` to `status`; deactivation is a status, never a deletion
    pub fn set_status(
        &self,
        actor: &UserProfile,
        target: &mut UserProfile,
        status: AccountStatus,
        now: DateTime<Utc>,
    ) -> Result<ActivityLogEntry> {
        self.ensure_can_edit(actor, target, perms::USER_UPDATE)?;
        if actor.uid == target.uid {
            return Err(denied(actor, target, "Administrators cannot change their own status"));
        }
        if status == AccountStatus::Unknown {
            return Err(AccessError::validation("Cannot set an unknown account status"));
        }

        let previous = target.status;
        target.set_status(status, now);
        info!(
            actor = %actor.uid,
            target = %target.uid,
            from = %previous,
            to = %status,
            "Status changed"
        );

        Ok(ActivityLogEntry::new(
            &actor.uid,
            &target.uid,
            ActivityAction::StatusChange,
            json!({ "from": previous.as_str(), "to": status.as_str() }),
            now,
        ))
    }

    fn ensure_can_edit(
        &self,
        actor: &UserProfile,
        target: &UserProfile,
        permission: &str,
    ) -> Result<()> {
        if !self.is_admin(Some(actor)) {
            return Err(denied(actor, target, "Actor is not an active administrator"));
        }
        if !self.has_permission(Some(actor), permission) {
            return Err(denied(
                actor,
                target,
                &format!("Missing permission: {}", permission),
            ));
        }
        if !self.can_manage(actor, target) {
            return Err(denied(actor, target, "Target outranks the actor"));
        }
        Ok(())
    }
}

fn denied(actor: &UserProfile, target: &UserProfile, message: &str) -> AccessError {
    warn!(actor = %actor.uid, target = %target.uid, "{}", message);
    AccessError::forbidden(message)
}
