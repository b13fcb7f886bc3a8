//! HTML and plain text renderings of the job offer views.
//!
//! Views are plain data built from retrieval snapshots; HTML goes through
//! askama templates (escaped), text goes through `to_text`.

mod not_found;
mod offer_list;
mod offer_page;

pub use not_found::NotFound;
pub use offer_list::{OfferListView, OfferRow, HEADERS};
pub use offer_page::{OfferPage, HEADING, LOADING_MESSAGE};
