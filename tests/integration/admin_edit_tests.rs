//! Administrative edit integration tests
//!
//! Role assignment, custom grants and status changes, checked through the
//! profile they mutate and the activity log entry they return.

#[cfg(test)]
mod tests {
    use crate::common::ProfileFactory;
    use portal_rbac::{
        AccessError, AccountStatus, ActivityAction, RoleKey, RoleRegistry, has_permission,
        is_admin, perms,
    };

    #[test]
    fn test_assign_role_records_change() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_role("deputy_director");
        let mut target = ProfileFactory::with_role("editor");

        let entry = registry
            .assign_role(&actor, &mut target, RoleKey::ContentManager, ProfileFactory::now())
            .unwrap();

        assert_eq!(target.role.as_deref(), Some("content_manager"));
        assert_eq!(target.updated_at, Some(ProfileFactory::now()));
        assert_eq!(entry.action, ActivityAction::RoleChange);
        assert_eq!(entry.actor_uid, actor.uid);
        assert_eq!(entry.target, target.uid);
        assert_eq!(entry.details["from"], "editor");
        assert_eq!(entry.details["to"], "content_manager");
        assert!(has_permission(Some(&target), perms::CONTENT_PUBLISH));
    }

    #[test]
    fn test_assign_role_cannot_exceed_actor() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_role("deputy_director");
        let mut target = ProfileFactory::with_role("editor");

        let result =
            registry.assign_role(&actor, &mut target, RoleKey::SystemAdmin, ProfileFactory::now());
        assert!(matches!(result, Err(AccessError::Forbidden(_))));
        assert_eq!(target.role.as_deref(), Some("editor"));
    }

    #[test]
    fn test_assign_role_requires_permission() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_role("content_manager");
        let mut target = ProfileFactory::with_role("editor");

        let result = registry.assign_role(&actor, &mut target, RoleKey::Librarian, ProfileFactory::now());
        assert!(result.unwrap_err().is_denial());
    }

    #[test]
    fn test_cannot_manage_more_senior_target() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_role("deputy_director");
        let mut target = ProfileFactory::with_role("director_general");

        let result = registry.set_status(
            &actor,
            &mut target,
            AccountStatus::Suspended,
            ProfileFactory::now(),
        );
        assert!(result.unwrap_err().is_denial());
        assert_eq!(target.status, AccountStatus::Active);
    }

    #[test]
    fn test_grant_and_revoke_custom_permission() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::system_admin();
        let mut target = ProfileFactory::with_role("editor");

        let entry = registry
            .grant_permission(&actor, &mut target, perms::REPORT_VIEW, ProfileFactory::now())
            .unwrap();
        assert_eq!(entry.action, ActivityAction::PermissionGrant);
        assert!(has_permission(Some(&target), perms::REPORT_VIEW));

        let again =
            registry.grant_permission(&actor, &mut target, perms::REPORT_VIEW, ProfileFactory::now());
        assert!(matches!(again, Err(AccessError::Validation(_))));

        let entry = registry
            .revoke_permission(&actor, &mut target, perms::REPORT_VIEW, ProfileFactory::now())
            .unwrap();
        assert_eq!(entry.action, ActivityAction::PermissionRevoke);
        assert!(!has_permission(Some(&target), perms::REPORT_VIEW));
    }

    #[test]
    fn test_grant_uncatalogued_permission() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::system_admin();
        let mut target = ProfileFactory::with_role("editor");

        let result =
            registry.grant_permission(&actor, &mut target, "rocket.launch", ProfileFactory::now());
        assert!(matches!(result, Err(AccessError::NotFound(_))));
        assert!(target.custom_permissions.is_empty());
    }

    #[test]
    fn test_revoke_role_permission_is_not_found() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::system_admin();
        let mut target = ProfileFactory::with_role("editor");

        let result =
            registry.revoke_permission(&actor, &mut target, perms::CONTENT_EDIT, ProfileFactory::now());
        assert!(matches!(result, Err(AccessError::NotFound(_))));
        assert!(has_permission(Some(&target), perms::CONTENT_EDIT));
    }

    #[test]
    fn test_deactivation_revokes_admin_access() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_role("hr_manager");
        let mut target = ProfileFactory::with_role("librarian");

        let entry = registry
            .set_status(&actor, &mut target, AccountStatus::Retired, ProfileFactory::now())
            .unwrap();

        assert_eq!(entry.action, ActivityAction::StatusChange);
        assert!(entry.action.is_security_relevant());
        assert_eq!(entry.details["to"], "retired");
        assert!(!target.is_active);
        assert!(!is_admin(Some(&target)));

        registry
            .set_status(&actor, &mut target, AccountStatus::Active, ProfileFactory::now())
            .unwrap();
        assert!(target.is_active);
        assert!(is_admin(Some(&target)));
    }

    #[test]
    fn test_self_edits_rejected() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::system_admin();
        let mut same = actor.clone();

        let result = registry.set_status(
            &actor,
            &mut same,
            AccountStatus::Deactivated,
            ProfileFactory::now(),
        );
        assert!(result.unwrap_err().is_denial());

        let result = registry.assign_role(&actor, &mut same, RoleKey::Editor, ProfileFactory::now());
        assert!(result.unwrap_err().is_denial());
    }

    #[test]
    fn test_padded_role_actor_cannot_edit() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_role("system_admin ");
        let mut target = ProfileFactory::with_role("editor");

        let result =
            registry.assign_role(&actor, &mut target, RoleKey::Librarian, ProfileFactory::now());
        assert!(result.unwrap_err().is_denial());
        assert_eq!(target.role.as_deref(), Some("editor"));
    }

    #[test]
    fn test_deactivated_actor_cannot_edit() {
        let registry = RoleRegistry::global();
        let actor = ProfileFactory::with_status("system_admin", AccountStatus::Suspended);
        let mut target = ProfileFactory::with_role("editor");

        let result =
            registry.grant_permission(&actor, &mut target, perms::REPORT_VIEW, ProfileFactory::now());
        assert!(result.unwrap_err().is_denial());
    }
}
