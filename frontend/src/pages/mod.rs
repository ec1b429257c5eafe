pub mod dashboard_page;
pub mod profile_page;

pub use dashboard_page::DashboardPage;
pub use profile_page::ProfilePage;

/// Which page the loaded HTML document hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Profile,
    Dashboard,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.ends_with("profile.html") || path.contains("/profile") {
            Page::Profile
        } else {
            Page::Dashboard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/profile.html"), Page::Profile);
        assert_eq!(Page::from_path("/app/profile"), Page::Profile);
        assert_eq!(Page::from_path("/dashboard.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/"), Page::Dashboard);
    }
}
