use askama::Template;

use crate::retrieval::OffersState;
use crate::view::OfferListView;

pub const HEADING: &str = "Job Offers";
pub const LOADING_MESSAGE: &str = "Loading job offers...";

/// The job offers page: a loading indicator until the retrieval settles,
/// then a heading and the offer list.
///
/// A failed fetch and an empty listing render the same way.
#[derive(Debug, Clone, Template)]
#[template(path = "offer_page.html")]
pub struct OfferPage {
    pub heading: &'static str,
    pub loading_message: &'static str,
    pub list: Option<OfferListView>,
}

impl OfferPage {
    pub fn from_state(state: &OffersState) -> Self {
        let list = (!state.loading).then(|| OfferListView::new(&state.offers));
        Self {
            heading: HEADING,
            loading_message: LOADING_MESSAGE,
            list,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_none()
    }

    pub fn to_text(&self) -> String {
        match &self.list {
            Some(list) => format!("{HEADING}\n\n{}", list.to_text()),
            None => LOADING_MESSAGE.to_string(),
        }
    }
}
