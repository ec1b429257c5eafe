use log::LevelFilter;

use super::api::ApiClient;

/// Image shown whenever the user has no avatar of their own
pub const PLACEHOLDER_PHOTO: &str = "image/userProfile.png";

/// Page the browser is sent to after logging out
pub const LANDING_PAGE: &str = "index.html";

/// Runtime settings for one page session
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base_url: String,
    pub landing_page: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            landing_page: LANDING_PAGE.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    pub fn api_client(&self) -> ApiClient {
        ApiClient::with_base_url(self.api_base_url.clone())
    }
}
