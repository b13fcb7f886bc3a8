use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Destinations listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Route {
    Dashboard,
    Applications,
    #[strum(to_string = "Job Offers")]
    JobOffers,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Applications => "/applications",
            Route::JobOffers => "/job-offers",
            Route::Settings => "/settings",
        }
    }

    /// Match a location against the sidebar destinations. A trailing slash
    /// is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::iter().find(|route| route.path() == normalized)
    }

    /// Whether the route table has a page for this destination.
    pub fn has_page(self) -> bool {
        matches!(self, Route::JobOffers)
    }
}
