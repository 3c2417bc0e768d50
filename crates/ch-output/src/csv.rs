//! CSV report backend.
//!
//! Creates two files in the configured report directory:
//! - `submissions.csv`
//! - `customer_scores.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{CustomerScoreRow, OutputResult, SubmissionRow};

pub const SUBMISSIONS_FILE:     &str = "submissions.csv";
pub const CUSTOMER_SCORES_FILE: &str = "customer_scores.csv";

/// Writes a run report to two CSV files.
pub struct CsvReportWriter {
    submissions: Writer<File>,
    customers:   Writer<File>,
    finished:    bool,
}

impl CsvReportWriter {
    /// Create `dir` if needed, open both files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut submissions = Writer::from_path(dir.join(SUBMISSIONS_FILE))?;
        submissions.write_record([
            "tick", "attempt", "recommendations", "score", "kwh_revenue",
            "completion_score", "elapsed_ms", "advanced",
        ])?;

        let mut customers = Writer::from_path(dir.join(CUSTOMER_SCORES_FILE))?;
        customers.write_record(["customer_id", "score"])?;

        Ok(Self { submissions, customers, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_submission(&mut self, row: &SubmissionRow) -> OutputResult<()> {
        self.submissions.write_record(&[
            row.tick.to_string(),
            row.attempt.to_string(),
            row.recommendations.to_string(),
            row.score.to_string(),
            row.kwh_revenue.to_string(),
            row.completion_score.to_string(),
            format!("{:.3}", row.elapsed_ms),
            (row.advanced as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_customer_scores(&mut self, rows: &[CustomerScoreRow]) -> OutputResult<()> {
        for row in rows {
            self.customers.write_record([row.customer_id.as_str(), &row.score.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.submissions.flush()?;
        self.customers.flush()?;
        Ok(())
    }
}
