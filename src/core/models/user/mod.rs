//! User models
//!
//! Profiles as delivered by the persistence layer, and the activity log
//! records produced when administrators edit them.

pub mod activity;
pub mod types;


pub use activity::{ActivityAction, ActivityLogEntry};
pub use types::{AccountStatus, UserProfile};
