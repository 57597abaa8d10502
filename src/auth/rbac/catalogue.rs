//! Built-in role and permission catalogue
//!
//! Roles are ranked by level (0 is the most senior). Permissions are flat
//! tokens; seniority is expressed through levels, never through permission
//! inheritance.

use super::types::{PermissionDef, RoleConfig, RoleKey};
use crate::core::models::i18n::LocalizedText;

/// Permission identifiers
pub mod perms {
    pub const USER_CREATE: &str = "user.create";
    pub const USER_READ: &str = "user.read";
    pub const USER_UPDATE: &str = "user.update";
    pub const USER_DELETE: &str = "user.delete";
    pub const ROLE_ASSIGN: &str = "role.assign";

    pub const CONTENT_CREATE: &str = "content.create";
    pub const CONTENT_EDIT: &str = "content.edit";
    pub const CONTENT_PUBLISH: &str = "content.publish";
    pub const CONTENT_DELETE: &str = "content.delete";

    pub const MEDIA_UPLOAD: &str = "media.upload";
    pub const MEDIA_DELETE: &str = "media.delete";

    pub const VACANCY_CREATE: &str = "vacancy.create";
    pub const VACANCY_EDIT: &str = "vacancy.edit";
    pub const VACANCY_PUBLISH: &str = "vacancy.publish";
    pub const VACANCY_DELETE: &str = "vacancy.delete";

    pub const DIVISION_MANAGE: &str = "division.manage";

    pub const LIBRARY_CREATE: &str = "library.create";
    pub const LIBRARY_EDIT: &str = "library.edit";
    pub const LIBRARY_DELETE: &str = "library.delete";

    pub const REPORT_VIEW: &str = "report.view";
    pub const SETTINGS_MANAGE: &str = "settings.manage";
    pub const ACTIVITY_LOG_VIEW: &str = "activity_log.view";
}

use perms::*;

const fn permission(
    id: &'static str,
    group: &'static str,
    en: &'static str,
    fr: &'static str,
) -> PermissionDef {
    PermissionDef {
        id,
        group,
        label: LocalizedText::new(en, fr),
    }
}

/// Every permission a role or a custom grant may reference
#[rustfmt::skip]
pub const PERMISSIONS: &[PermissionDef] = &[
    // Users and roles
    permission(USER_CREATE, "user", "Create users", "Créer des utilisateurs"),
    permission(USER_READ, "user", "View users", "Consulter les utilisateurs"),
    permission(USER_UPDATE, "user", "Edit users", "Modifier les utilisateurs"),
    permission(USER_DELETE, "user", "Delete users", "Supprimer des utilisateurs"),
    permission(ROLE_ASSIGN, "role", "Assign roles", "Attribuer des rôles"),
    // News and pages
    permission(CONTENT_CREATE, "content", "Create content", "Créer du contenu"),
    permission(CONTENT_EDIT, "content", "Edit content", "Modifier le contenu"),
    permission(CONTENT_PUBLISH, "content", "Publish content", "Publier du contenu"),
    permission(CONTENT_DELETE, "content", "Delete content", "Supprimer du contenu"),
    // Media library
    permission(MEDIA_UPLOAD, "media", "Upload media", "Téléverser des médias"),
    permission(MEDIA_DELETE, "media", "Delete media", "Supprimer des médias"),
    // Vacancies
    permission(VACANCY_CREATE, "vacancy", "Create vacancies", "Créer des offres d'emploi"),
    permission(VACANCY_EDIT, "vacancy", "Edit vacancies", "Modifier les offres d'emploi"),
    permission(VACANCY_PUBLISH, "vacancy", "Publish vacancies", "Publier les offres d'emploi"),
    permission(VACANCY_DELETE, "vacancy", "Delete vacancies", "Supprimer des offres d'emploi"),
    // Divisions
    permission(DIVISION_MANAGE, "division", "Manage divisions", "Gérer les divisions"),
    // Library catalogue
    permission(LIBRARY_CREATE, "library", "Add catalogue items", "Ajouter au catalogue"),
    permission(LIBRARY_EDIT, "library", "Edit catalogue items", "Modifier le catalogue"),
    permission(LIBRARY_DELETE, "library", "Remove catalogue items", "Retirer du catalogue"),
    // Oversight
    permission(REPORT_VIEW, "report", "View reports", "Consulter les rapports"),
    permission(SETTINGS_MANAGE, "settings", "Manage site settings", "Gérer les paramètres"),
    permission(ACTIVITY_LOG_VIEW, "activity_log", "View activity log", "Consulter le journal d'activité"),
];

/// Built-in roles, most senior first
#[rustfmt::skip]
pub const BUILTIN_ROLES: &[RoleConfig] = &[
    RoleConfig {
        key: RoleKey::SystemAdmin,
        level: 0,
        label: LocalizedText::new("System Administrator", "Administrateur système"),
        description: Some(LocalizedText::new(
            "Full control of the portal, its users and settings",
            "Contrôle total du portail, de ses utilisateurs et paramètres",
        )),
        color: "red",
        permissions: &[
            USER_CREATE, USER_READ, USER_UPDATE, USER_DELETE, ROLE_ASSIGN,
            CONTENT_CREATE, CONTENT_EDIT, CONTENT_PUBLISH, CONTENT_DELETE,
            MEDIA_UPLOAD, MEDIA_DELETE,
            VACANCY_CREATE, VACANCY_EDIT, VACANCY_PUBLISH, VACANCY_DELETE,
            DIVISION_MANAGE,
            LIBRARY_CREATE, LIBRARY_EDIT, LIBRARY_DELETE,
            REPORT_VIEW, SETTINGS_MANAGE, ACTIVITY_LOG_VIEW,
        ],
    },
    RoleConfig {
        key: RoleKey::DirectorGeneral,
        level: 1,
        label: LocalizedText::new("Director General", "Directeur général"),
        description: Some(LocalizedText::new(
            "Agency head with oversight of all content and staff accounts",
            "Direction de l'agence, supervision des contenus et des comptes",
        )),
        color: "purple",
        permissions: &[
            USER_CREATE, USER_READ, USER_UPDATE, USER_DELETE, ROLE_ASSIGN,
            CONTENT_CREATE, CONTENT_EDIT, CONTENT_PUBLISH, CONTENT_DELETE,
            MEDIA_UPLOAD, MEDIA_DELETE,
            VACANCY_CREATE, VACANCY_EDIT, VACANCY_PUBLISH, VACANCY_DELETE,
            DIVISION_MANAGE,
            LIBRARY_CREATE, LIBRARY_EDIT, LIBRARY_DELETE,
            REPORT_VIEW, ACTIVITY_LOG_VIEW,
        ],
    },
    RoleConfig {
        key: RoleKey::DeputyDirector,
        level: 2,
        label: LocalizedText::new("Deputy Director", "Directeur adjoint"),
        description: Some(LocalizedText::new(
            "Manages publications and staff assignments",
            "Gère les publications et les affectations",
        )),
        color: "indigo",
        permissions: &[
            USER_READ, USER_UPDATE, ROLE_ASSIGN,
            CONTENT_CREATE, CONTENT_EDIT, CONTENT_PUBLISH, CONTENT_DELETE,
            MEDIA_UPLOAD, MEDIA_DELETE,
            VACANCY_CREATE, VACANCY_EDIT, VACANCY_PUBLISH, VACANCY_DELETE,
            DIVISION_MANAGE,
            LIBRARY_CREATE, LIBRARY_EDIT, LIBRARY_DELETE,
            REPORT_VIEW, ACTIVITY_LOG_VIEW,
        ],
    },
    RoleConfig {
        key: RoleKey::ContentManager,
        level: 3,
        label: LocalizedText::new("Content Manager", "Responsable du contenu"),
        description: Some(LocalizedText::new(
            "Owns news, media and published vacancies",
            "Responsable des actualités, médias et offres publiées",
        )),
        color: "blue",
        permissions: &[
            CONTENT_CREATE, CONTENT_EDIT, CONTENT_PUBLISH, CONTENT_DELETE,
            MEDIA_UPLOAD, MEDIA_DELETE,
            VACANCY_CREATE, VACANCY_EDIT, VACANCY_PUBLISH,
            REPORT_VIEW,
        ],
    },
    RoleConfig {
        key: RoleKey::DepartmentHead,
        level: 4,
        label: LocalizedText::new("Department Head", "Chef de département"),
        description: Some(LocalizedText::new(
            "Drafts content and vacancies for a department",
            "Prépare les contenus et offres de son département",
        )),
        color: "teal",
        permissions: &[
            USER_READ,
            CONTENT_CREATE, CONTENT_EDIT,
            VACANCY_CREATE, VACANCY_EDIT,
            REPORT_VIEW,
        ],
    },
    RoleConfig {
        key: RoleKey::HrManager,
        level: 5,
        label: LocalizedText::new("HR Manager", "Responsable RH"),
        description: Some(LocalizedText::new(
            "Maintains staff records and vacancies",
            "Tient à jour les dossiers du personnel et les offres",
        )),
        color: "green",
        permissions: &[
            USER_READ, USER_UPDATE,
            VACANCY_CREATE, VACANCY_EDIT, VACANCY_PUBLISH, VACANCY_DELETE,
            REPORT_VIEW,
        ],
    },
    RoleConfig {
        key: RoleKey::Editor,
        level: 6,
        label: LocalizedText::new("Editor", "Rédacteur"),
        description: Some(LocalizedText::new(
            "Writes and edits news drafts",
            "Rédige et modifie les brouillons d'actualités",
        )),
        color: "cyan",
        permissions: &[CONTENT_CREATE, CONTENT_EDIT, MEDIA_UPLOAD],
    },
    RoleConfig {
        key: RoleKey::Librarian,
        level: 7,
        label: LocalizedText::new("Librarian", "Bibliothécaire"),
        description: Some(LocalizedText::new(
            "Maintains the library catalogue",
            "Gère le catalogue de la bibliothèque",
        )),
        color: "amber",
        permissions: &[LIBRARY_CREATE, LIBRARY_EDIT, LIBRARY_DELETE, MEDIA_UPLOAD],
    },
    RoleConfig {
        key: RoleKey::SupportStaff,
        level: 8,
        label: LocalizedText::new("Support Staff", "Personnel de soutien"),
        description: None,
        color: "gray",
        permissions: &[],
    },
];
