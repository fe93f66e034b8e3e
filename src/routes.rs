//! Route table
//!
//! The dashboard's two pages and the paths they live at. Neither route is
//! guarded: `/dashboard` is reachable with or without a token.

use std::fmt;

/// A page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
}

impl Page {
    /// Every page, in registration order
    pub const ALL: [Page; 2] = [Page::Login, Page::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "/",
            Page::Dashboard => "/dashboard",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
        }
    }

    /// Page registered at `path`, ignoring a trailing slash and query string
    pub fn resolve(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {}", self.name(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Page::resolve("/"), Some(Page::Login));
        assert_eq!(Page::resolve(""), Some(Page::Login));
        assert_eq!(Page::resolve("/dashboard"), Some(Page::Dashboard));
        assert_eq!(Page::resolve("/dashboard/"), Some(Page::Dashboard));
        assert_eq!(Page::resolve("/dashboard?tab=sales"), Some(Page::Dashboard));
        assert_eq!(Page::resolve("/settings"), None);
        assert_eq!(Page::resolve("/dashboard/orders"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.path()), Some(page));
        }
    }
}
