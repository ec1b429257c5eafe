//! Pure functions that turn fetched payloads into view state.
//!
//! Every projector takes `Option<&T>` and leaves the view untouched on `None`,
//! so a failed fetch keeps whatever was on screen before.

pub mod dashboard;
pub mod profile;

use shared::UserProfile;

/// "Welcome, {name}" or plain "Welcome" when the name is missing or empty
pub fn welcome_text(user: &UserProfile) -> String {
    match user.full_name.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome, {}", name),
        None => "Welcome".to_string(),
    }
}

/// Missing or empty names render as `N/A`
pub(crate) fn name_or_na(name: Option<&str>) -> String {
    name.filter(|name| !name.is_empty()).unwrap_or("N/A").to_string()
}
