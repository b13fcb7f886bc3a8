//! Route table and application layout hosting the job offers page.

mod layout;
mod route;

use std::sync::Arc;

use askama::Template;
use tracing::{debug, instrument};

pub use layout::{AppLayout, NavLink, APP_TITLE, SECTION_TITLE};
pub use route::Route;

use crate::client::OfferSource;
use crate::retrieval::OfferRetrieval;
use crate::view::{NotFound, OfferPage};

/// Hosts pages for an offer source. Each navigation mounts a fresh page.
#[derive(Debug)]
pub struct Shell<S> {
    source: Arc<S>,
}

impl<S> Clone for Shell<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> Shell<S>
where
    S: OfferSource + Send + Sync + 'static,
{
    pub fn new(source: S) -> Self {
        Self::from_arc(Arc::new(source))
    }

    pub fn from_arc(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Mount whatever the route table maps `path` to.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// [`Mounted`] unmounts the page.
    #[instrument(skip(self))]
    pub fn navigate(&self, path: &str) -> Mounted {
        let route = Route::from_path(path);
        let outlet = match route {
            Some(route) if route.has_page() => {
                Outlet::Offers(OfferRetrieval::mount(Arc::clone(&self.source)))
            }
            _ => {
                debug!("no page routed");
                Outlet::NotFound(NotFound {
                    path: path.to_string(),
                })
            }
        };

        Mounted { route, outlet }
    }
}

/// What is mounted in the layout's main area.
#[derive(Debug)]
pub enum Outlet {
    Offers(OfferRetrieval),
    NotFound(NotFound),
}

/// A page mounted by [`Shell::navigate`].
#[derive(Debug)]
pub struct Mounted {
    route: Option<Route>,
    outlet: Outlet,
}

impl Mounted {
    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn outlet(&self) -> &Outlet {
        &self.outlet
    }

    pub fn is_loading(&self) -> bool {
        match &self.outlet {
            Outlet::Offers(retrieval) => retrieval.is_loading(),
            Outlet::NotFound(_) => false,
        }
    }

    /// Wait until the mounted page has nothing left to load.
    pub async fn settled(&mut self) {
        if let Outlet::Offers(retrieval) = &mut self.outlet {
            retrieval.settled().await;
        }
    }

    /// Render the layout around the outlet's current frame.
    pub fn render_html(&self) -> askama::Result<String> {
        let outlet = match &self.outlet {
            Outlet::Offers(retrieval) => OfferPage::from_state(&retrieval.snapshot()).render()?,
            Outlet::NotFound(not_found) => not_found.render()?,
        };
        AppLayout::new(self.route, outlet).render()
    }

    /// Render the outlet's current frame as text, without the layout.
    pub fn render_text(&self) -> String {
        match &self.outlet {
            Outlet::Offers(retrieval) => OfferPage::from_state(&retrieval.snapshot()).to_text(),
            Outlet::NotFound(not_found) => not_found.to_text(),
        }
    }
}
