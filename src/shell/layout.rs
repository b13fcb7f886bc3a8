use askama::Template;
use strum::IntoEnumIterator;

use crate::shell::Route;

pub const APP_TITLE: &str = "Job Tracker";
pub const SECTION_TITLE: &str = "Applications";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: &'static str,
    pub active: bool,
}

/// Sidebar, top bar and the rendered outlet.
#[derive(Debug, Clone, Template)]
#[template(path = "layout.html")]
pub struct AppLayout {
    pub title: &'static str,
    pub section: &'static str,
    pub nav: Vec<NavLink>,
    pub outlet: String,
}

impl AppLayout {
    /// `outlet` is already-rendered HTML and is inserted unescaped.
    pub fn new(current: Option<Route>, outlet: String) -> Self {
        let nav = Route::iter()
            .map(|route| NavLink {
                label: route.to_string(),
                path: route.path(),
                active: Some(route) == current,
            })
            .collect();

        Self {
            title: APP_TITLE,
            section: SECTION_TITLE,
            nav,
            outlet,
        }
    }
}
