//! Page controllers: execute typed commands against the API and describe the
//! resulting view changes as [`Effect`]s, so they run without a live DOM.

pub mod dashboard;
pub mod profile;

#[cfg(test)]
pub(crate) mod fake_api;

use crate::services::api::ApiResult;

/// What the UI layer should do once a command finishes
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<A> {
    /// Feed an action to the page's view reducer
    Apply(A),
    Navigate(String),
    /// Blocking user-facing alert
    Alert(String),
}

/// Log a failed call and collapse it into the `None` sentinel
pub(crate) fn settle<T>(operation: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Error {}: {}", operation, e);
            None
        }
    }
}
