mod job_offer;

pub use job_offer::*;
