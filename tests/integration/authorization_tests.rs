//! Authorization integration tests
//!
//! Exercise the free functions and the global registry the way a route guard
//! and the admin UI call them.

#[cfg(test)]
mod tests {
    use crate::common::ProfileFactory;
    use portal_rbac::{
        AccountStatus, DenialReason, GrantSource, Language, Requirement, RoleKey, RoleRegistry,
        get_department_by_code, get_effective_permissions, get_role_config, get_role_permissions,
        get_roles_sorted_by_level, has_permission, has_role, is_admin, perms,
    };

    // ==================== Registry ====================

    #[test]
    fn test_builtin_registry_is_valid() {
        assert!(RoleRegistry::global().validate().is_ok());
    }

    #[test]
    fn test_roles_sorted_by_level() {
        let roles = get_roles_sorted_by_level();
        assert_eq!(roles.len(), RoleKey::ALL.len());
        assert_eq!(roles[0].key, RoleKey::SystemAdmin);
        assert_eq!(roles[roles.len() - 1].key, RoleKey::SupportStaff);
        assert!(roles.windows(2).all(|pair| pair[0].level <= pair[1].level));
    }

    #[test]
    fn test_role_lookup_fails_soft() {
        let editor = get_role_config("editor").unwrap();
        assert_eq!(editor.level, 6);
        assert_eq!(editor.label(Language::Fr), "Rédacteur");

        assert!(get_role_config("intern").is_none());
        assert!(get_role_config("").is_none());
        assert!(get_role_permissions("intern").is_empty());
    }

    #[test]
    fn test_department_lookup() {
        let finance = get_department_by_code("FIN").unwrap();
        assert_eq!(finance.code, "FIN");
        assert!(!finance.name(Language::En).is_empty());
        assert!(get_department_by_code("XYZ").is_none());
    }

    // ==================== Effective permissions ====================

    #[test]
    fn test_editor_with_custom_grant() {
        let profile = ProfileFactory::with_custom(Some("editor"), &["report.view"]);

        let effective = get_effective_permissions(Some(&profile));
        let expected = ["content.create", "content.edit", "media.upload", "report.view"];
        assert_eq!(effective.len(), expected.len());
        assert!(expected.iter().all(|p| effective.contains(*p)));

        assert!(has_permission(Some(&profile), "report.view"));
        assert!(!has_permission(Some(&profile), "content.publish"));
    }

    #[test]
    fn test_unknown_role_keeps_custom_grants() {
        let profile = ProfileFactory::with_custom(Some("intern"), &["library.edit"]);

        let effective = get_effective_permissions(Some(&profile));
        assert_eq!(effective.len(), 1);
        assert!(effective.contains("library.edit"));
        assert!(!is_admin(Some(&profile)));
    }

    #[test]
    fn test_missing_profile_has_nothing() {
        assert!(get_effective_permissions(None).is_empty());
        assert!(!has_permission(None, perms::CONTENT_CREATE));
        assert!(!has_role(None, "support_staff"));
        assert!(!is_admin(None));
    }

    #[test]
    fn test_system_admin_holds_every_catalogued_permission() {
        let profile = ProfileFactory::system_admin();
        for permission in RoleRegistry::global().list_permissions() {
            assert!(
                has_permission(Some(&profile), permission.id),
                "system_admin lacks {}",
                permission.id
            );
        }
    }

    #[test]
    fn test_padded_role_grants_nothing() {
        let registry = RoleRegistry::global();
        let profile = ProfileFactory::with_role(" system_admin ");

        assert!(get_role_config(" system_admin ").is_none());
        assert!(!is_admin(Some(&profile)));
        assert!(!has_role(Some(&profile), "director_general"));
        assert!(!has_permission(Some(&profile), perms::USER_DELETE));
        assert!(get_effective_permissions(Some(&profile)).is_empty());

        let check = registry.authorize(Some(&profile), &Requirement::permission(perms::USER_DELETE));
        assert!(!check.granted);
        assert_eq!(check.denial_reason, Some(DenialReason::NoAdminRole));
    }

    // ==================== Rank ====================

    #[test]
    fn test_rank_comparisons() {
        let director = ProfileFactory::with_role("director_general");
        assert!(has_role(Some(&director), "editor"));
        assert!(has_role(Some(&director), "director_general"));
        assert!(!has_role(Some(&director), "system_admin"));

        let librarian = ProfileFactory::with_role("librarian");
        assert!(!has_role(Some(&librarian), "editor"));
        assert!(has_role(Some(&librarian), "support_staff"));
    }

    #[test]
    fn test_rank_with_unknown_roles_fails_closed() {
        let admin = ProfileFactory::system_admin();
        assert!(!has_role(Some(&admin), "intern"));

        let unknown = ProfileFactory::with_role("intern");
        assert!(!has_role(Some(&unknown), "support_staff"));

        let roleless = ProfileFactory::without_role();
        assert!(!has_role(Some(&roleless), "support_staff"));
    }

    // ==================== Administrator gate ====================

    #[test]
    fn test_deactivated_admin_is_not_admin() {
        let mut profile = ProfileFactory::with_role("content_manager");
        assert!(is_admin(Some(&profile)));

        profile.is_active = false;
        assert!(!is_admin(Some(&profile)));
        // role checks stay pure
        assert!(has_role(Some(&profile), "editor"));
        assert!(has_permission(Some(&profile), perms::CONTENT_PUBLISH));
    }

    #[test]
    fn test_status_gate() {
        for status in AccountStatus::ALL {
            let profile = ProfileFactory::with_status("editor", status);
            let expected = matches!(status, AccountStatus::Active | AccountStatus::OnLeave);
            assert_eq!(is_admin(Some(&profile)), expected, "status {}", status);
        }
    }

    #[test]
    fn test_authorize_denial_order() {
        let registry = RoleRegistry::global();
        let requirement = Requirement::permission(perms::CONTENT_PUBLISH);

        let check = registry.authorize(None, &requirement);
        assert_eq!(check.denial_reason, Some(DenialReason::NoProfile));

        let roleless = ProfileFactory::with_custom(None, &[perms::CONTENT_PUBLISH]);
        let check = registry.authorize(Some(&roleless), &requirement);
        assert_eq!(check.denial_reason, Some(DenialReason::NoAdminRole));

        let suspended = ProfileFactory::with_status("content_manager", AccountStatus::Suspended);
        let check = registry.authorize(Some(&suspended), &requirement);
        assert_eq!(check.denial_reason, Some(DenialReason::Deactivated));

        let editor = ProfileFactory::with_role("editor");
        let check = registry.authorize(Some(&editor), &requirement);
        assert_eq!(
            check.denial_reason,
            Some(DenialReason::MissingPermission {
                permission: perms::CONTENT_PUBLISH.to_string()
            })
        );

        let check = registry.authorize(Some(&editor), &Requirement::role("content_manager"));
        assert_eq!(
            check.denial_reason,
            Some(DenialReason::InsufficientRank {
                required: "content_manager".to_string()
            })
        );
    }

    #[test]
    fn test_authorize_grant_sources() {
        let registry = RoleRegistry::global();
        let profile = ProfileFactory::with_custom(Some("editor"), &[perms::REPORT_VIEW]);

        let check = registry.check_permission_detailed(Some(&profile), perms::CONTENT_EDIT);
        assert!(check.granted);
        assert_eq!(check.source, Some(GrantSource::Role(RoleKey::Editor)));

        let check = registry.check_permission_detailed(Some(&profile), perms::REPORT_VIEW);
        assert!(check.granted);
        assert_eq!(check.source, Some(GrantSource::Custom));
        assert!(check.denial_reason.is_none());
    }

    #[test]
    fn test_on_leave_keeps_access() {
        let registry = RoleRegistry::global();
        let profile = ProfileFactory::with_status("hr_manager", AccountStatus::OnLeave);

        let check = registry.authorize(Some(&profile), &Requirement::permission(perms::USER_UPDATE));
        assert!(check.granted);
    }

    #[test]
    fn test_permission_check_serializes() {
        let registry = RoleRegistry::global();
        let editor = ProfileFactory::with_role("editor");

        let check = registry.check_permission_detailed(Some(&editor), perms::USER_DELETE);
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["granted"], false);
        assert_eq!(
            json["denial_reason"]["missing_permission"]["permission"],
            perms::USER_DELETE
        );
    }

    // ==================== Profiles from storage ====================

    #[test]
    fn test_stored_document_with_nulls() {
        let profile: portal_rbac::UserProfile = serde_json::from_str(
            r#"{
                "uid": "abc",
                "role": "editor",
                "customPermissions": null,
                "status": "archived",
                "department": null,
                "isActive": true,
                "createdAt": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert!(profile.custom_permissions.is_empty());
        assert_eq!(profile.status, AccountStatus::Unknown);
        assert!(profile.department_code().is_none());
        assert!(has_permission(Some(&profile), perms::CONTENT_EDIT));
        assert!(!is_admin(Some(&profile)));
    }
}
