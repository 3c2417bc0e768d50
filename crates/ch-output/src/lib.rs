//! `ch-output`: run reports for the charging tick controller.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `submissions.csv`, `customer_scores.csv`         |
//!
//! Backends implement [`ReportWriter`] and are driven by [`ReportObserver`],
//! which implements `ch_tick::TickObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ch_output::{CsvReportWriter, ReportObserver};
//!
//! let writer = CsvReportWriter::new(Path::new("./report"))?;
//! let mut obs = ReportObserver::new(writer);
//! controller.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     tracing::warn!("report error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::{CustomerScoreRow, SubmissionRow};
pub use writer::ReportWriter;
