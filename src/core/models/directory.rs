//! Directory reference data
//!
//! Departments and pay grades are read-only catalogues. They are used for
//! display and filtering only and carry no authorization weight.

use super::i18n::{Language, LocalizedText};
use serde::Serialize;

/// Organisational department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Department {
    /// Unique department code
    pub code: &'static str,
    /// Department name
    pub name: LocalizedText,
}

impl Department {
    pub fn name(&self, language: Language) -> &'static str {
        self.name.get(language)
    }
}

/// Built-in department catalogue
pub const DEPARTMENTS: &[Department] = &[
    Department {
        code: "ADM",
        name: LocalizedText::new("Administration", "Administration"),
    },
    Department {
        code: "COM",
        name: LocalizedText::new("Communications", "Communication"),
    },
    Department {
        code: "FIN",
        name: LocalizedText::new("Finance", "Finances"),
    },
    Department {
        code: "HR",
        name: LocalizedText::new("Human Resources", "Ressources humaines"),
    },
    Department {
        code: "ICT",
        name: LocalizedText::new(
            "Information and Communication Technology",
            "Technologies de l'information et de la communication",
        ),
    },
    Department {
        code: "LEG",
        name: LocalizedText::new("Legal Affairs", "Affaires juridiques"),
    },
    Department {
        code: "LIB",
        name: LocalizedText::new("Library and Archives", "Bibliothèque et archives"),
    },
    Department {
        code: "PRS",
        name: LocalizedText::new("Planning and Research", "Planification et recherche"),
    },
];

/// Civil-service pay grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayGrade {
    /// Unique grade code as stored on profiles
    pub code: &'static str,
    /// Ordering rank, 1 is the most junior grade
    pub rank: u8,
    pub label: LocalizedText,
}

/// Built-in pay grade catalogue, most junior first
pub const PAY_GRADES: &[PayGrade] = &[
    PayGrade {
        code: "G1",
        rank: 1,
        label: LocalizedText::new("Assistant", "Assistant"),
    },
    PayGrade {
        code: "G2",
        rank: 2,
        label: LocalizedText::new("Senior Assistant", "Assistant principal"),
    },
    PayGrade {
        code: "G3",
        rank: 3,
        label: LocalizedText::new("Officer", "Agent"),
    },
    PayGrade {
        code: "G4",
        rank: 4,
        label: LocalizedText::new("Senior Officer", "Agent principal"),
    },
    PayGrade {
        code: "G5",
        rank: 5,
        label: LocalizedText::new("Principal Officer", "Cadre"),
    },
    PayGrade {
        code: "G6",
        rank: 6,
        label: LocalizedText::new("Manager", "Gestionnaire"),
    },
    PayGrade {
        code: "G7",
        rank: 7,
        label: LocalizedText::new("Senior Manager", "Gestionnaire principal"),
    },
    PayGrade {
        code: "D1",
        rank: 8,
        label: LocalizedText::new("Director", "Directeur"),
    },
    PayGrade {
        code: "D2",
        rank: 9,
        label: LocalizedText::new("Director General", "Directeur général"),
    },
];

/// Look up a pay grade by code
pub fn pay_grade_by_code(code: &str) -> Option<&'static PayGrade> {
    PAY_GRADES.iter().find(|grade| grade.code == code)
}
