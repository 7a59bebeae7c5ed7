//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::engine::gate::ValidationReport;

/// Receives the report of a validation pass
///
/// Implementations render every finding and a final pass/fail line.
pub trait Reporter {
    fn report(&mut self, report: &ValidationReport) -> std::io::Result<()>;
}
