//! `ReportObserver<W>`: bridges `TickObserver` to a `ReportWriter`.

use tracing::debug;

use ch_core::Tick;
use ch_tick::{Continuation, RunTotals, SubmissionReport, TickObserver};

use crate::row::{CustomerScoreRow, SubmissionRow};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`TickObserver`] that writes one row per submission and, at the end of
/// the run, the per-customer scores of the last response.
///
/// Errors from the writer are stored internally because `TickObserver`
/// methods have no return value.  After `controller.run()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:          W,
    customer_scores: Vec<CustomerScoreRow>,
    rows_written:    usize,
    last_error:      Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            customer_scores: Vec::new(),
            rows_written:    0,
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Submission rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> TickObserver for ReportObserver<W> {
    fn on_submitted(&mut self, report: &SubmissionReport<'_>) {
        let row = SubmissionRow {
            tick:             report.tick.0,
            attempt:          report.attempt,
            recommendations:  report.recommendations,
            score:            report.result.score,
            kwh_revenue:      report.result.kwh_revenue,
            completion_score: report.result.customer_completion_score,
            elapsed_ms:       report.elapsed.as_secs_f64() * 1000.0,
            advanced:         report.decision == Continuation::Advance,
        };
        let result = self.writer.write_submission(&row);
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);

        self.customer_scores = report
            .result
            .details_customer_scores
            .iter()
            .map(|s| CustomerScoreRow { customer_id: s.customer_id.to_string(), score: s.score })
            .collect();
    }

    fn on_run_end(&mut self, final_tick: Tick, _totals: &RunTotals) {
        debug!(
            tick = %final_tick,
            submissions = self.rows_written,
            customers = self.customer_scores.len(),
            "writing run report"
        );
        let rows = std::mem::take(&mut self.customer_scores);
        let result = self.writer.write_customer_scores(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
