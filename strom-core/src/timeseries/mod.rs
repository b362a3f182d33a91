//! The request-chunking and series-assembly engine.
//!
//! Modules include:
//! - `planner`: map a caller interval onto provider-compliant windows
//! - `assemble`: validate, deduplicate, and concatenate raw batches
//! - `aggregate`: nett aggregation and wide-format pivoting

/// Nett aggregation and pivoting of assembled series.
pub mod aggregate;
/// Batch validation, boundary dedup, and gap detection.
pub mod assemble;
/// Window planning against per-source pagination contracts.
pub mod planner;
/// Grid alignment helpers shared by planner and assembler.
pub mod util;
