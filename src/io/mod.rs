pub mod arrivals;
pub mod reporting;
