//! The `ReportWriter` trait implemented by report backends.

use crate::{CustomerScoreRow, OutputResult, SubmissionRow};

/// Sink for run reports.
///
/// Errors are stored by the observer and retrieved with
/// [`ReportObserver::take_error`][crate::ReportObserver::take_error].
pub trait ReportWriter {
    fn write_submission(&mut self, row: &SubmissionRow) -> OutputResult<()>;

    fn write_customer_scores(&mut self, rows: &[CustomerScoreRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
