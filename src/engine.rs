//! Route collection and the validation gate

pub mod gate;
pub mod routes;

pub use gate::{ValidationReport, check, run, select_entries};
pub use routes::RouteSet;
