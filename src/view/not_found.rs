use askama::Template;

/// Outlet for paths the route table does not map to a page.
#[derive(Debug, Clone, Template)]
#[template(path = "not_found.html")]
pub struct NotFound {
    pub path: String,
}

impl NotFound {
    pub fn to_text(&self) -> String {
        format!("Page not found: nothing is routed at {}", self.path)
    }
}
