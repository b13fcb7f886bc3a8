//! Browse the job offers served by a job-tracker API.
//!
//! [`OfferClient`] lists offers over HTTP, [`OfferRetrieval`] turns one
//! fetch into `{ offers, loading }` snapshots, the [`view`] module renders
//! them and [`Shell`] hosts the page behind a small route table.

pub use client::{OfferClient, OfferSource};
pub use error::{OfferError, Result};
pub use model::*;
pub use retrieval::{OfferRetrieval, OffersState};
pub use shell::{Mounted, Outlet, Route, Shell};

mod api;
mod client;
mod error;
mod model;
pub mod retrieval;
pub mod shell;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
