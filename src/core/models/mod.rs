//! Core data models
//!
//! Directory reference data, localized labels and user profiles.

pub mod directory;
pub mod i18n;
pub mod user;

// Re-export commonly used types
pub use directory::{DEPARTMENTS, Department, PAY_GRADES, PayGrade, pay_grade_by_code};
pub use i18n::{Language, LocalizedText};
pub use user::*;
