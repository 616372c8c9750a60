//! User profile data.

use chrono::NaiveDate;
use mammon_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profile details stored alongside the auth user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier shared with the auth subsystem.
    pub user_id: UserId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Email address.
    pub email: String,
    /// Flat monthly spending cap, distinct from any pay period. Present
    /// in one schema variant only.
    pub budget: Option<Decimal>,
}

/// Profile details collected at sign-up, before a user id exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserProfile {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Email address.
    pub email: String,
}

/// Partial update for a user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfilePatch {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New flat spending cap.
    pub budget: Option<Decimal>,
}
