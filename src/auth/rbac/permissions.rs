//! Permission checking methods

use crate::core::models::user::UserProfile;
use tracing::debug;

use super::helpers::RbacHelpers;
use super::registry::RoleRegistry;
use super::types::{DenialReason, GrantSource, PermissionCheck, PermissionSet, Requirement};

impl RoleRegistry {
    /// Role permissions plus the profile's custom grants
    ///
    /// A missing profile or an unregistered role contributes nothing.
    pub fn get_effective_permissions(&self, profile: Option<&UserProfile>) -> PermissionSet {
        let Some(profile) = profile else {
            return PermissionSet::new();
        };

        let mut permissions = self
            .profile_role(profile)
            .map(|role| self.role_permission_set(role))
            .unwrap_or_default();
        permissions.extend(profile.custom_permissions.iter().cloned());
        permissions
    }

    /// Whether `permission` is among the profile's effective permissions
    pub fn has_permission(&self, profile: Option<&UserProfile>, permission: &str) -> bool {
        self.grant_source(profile, permission).is_some()
    }

    /// Check if the profile holds every one of `required`
    pub fn has_all_permissions(&self, profile: Option<&UserProfile>, required: &[&str]) -> bool {
        profile.is_some()
            && required
                .iter()
                .all(|permission| self.has_permission(profile, permission))
    }

    /// Check if the profile holds at least one of `required`
    pub fn has_any_permission(&self, profile: Option<&UserProfile>, required: &[&str]) -> bool {
        required
            .iter()
            .any(|permission| self.has_permission(profile, permission))
    }

    /// Detailed permission check, including the administrator gate
    pub fn check_permission_detailed(
        &self,
        profile: Option<&UserProfile>,
        permission: &str,
    ) -> PermissionCheck {
        self.authorize(profile, &Requirement::permission(permission))
    }

    /// Route-guard decision: the profile must be an active administrator and
    /// satisfy `requirement`
    pub fn authorize(
        &self,
        profile: Option<&UserProfile>,
        requirement: &Requirement,
    ) -> PermissionCheck {
        let check = self.evaluate(profile, requirement);
        if let Some(reason) = &check.denial_reason {
            debug!(
                uid = profile.map(|p| p.uid.as_str()).unwrap_or("<none>"),
                ?requirement,
                %reason,
                "Access denied"
            );
        }
        check
    }

    fn evaluate(
        &self,
        profile: Option<&UserProfile>,
        requirement: &Requirement,
    ) -> PermissionCheck {
        let Some(user) = profile else {
            return PermissionCheck::denied(DenialReason::NoProfile);
        };
        let Some(role) = self.profile_role(user) else {
            return PermissionCheck::denied(DenialReason::NoAdminRole);
        };
        if user.is_deactivated() {
            return PermissionCheck::denied(DenialReason::Deactivated);
        }

        match requirement {
            Requirement::Role(required) => {
                if self.has_role(profile, required) {
                    PermissionCheck::granted(GrantSource::Role(role.key))
                } else {
                    PermissionCheck::denied(DenialReason::InsufficientRank {
                        required: required.clone(),
                    })
                }
            }
            Requirement::Permission(permission) => match self.grant_source(profile, permission) {
                Some(source) => PermissionCheck::granted(source),
                None => PermissionCheck::denied(DenialReason::MissingPermission {
                    permission: permission.clone(),
                }),
            },
        }
    }

    /// Where the profile's `permission` comes from; the role wins over a
    /// duplicate custom grant
    fn grant_source(&self, profile: Option<&UserProfile>, permission: &str) -> Option<GrantSource> {
        let profile = profile?;
        if let Some(role) = self.profile_role(profile) {
            if role.grants(permission) {
                return Some(GrantSource::Role(role.key));
            }
        }
        profile
            .has_custom_permission(permission)
            .then_some(GrantSource::Custom)
    }
}
