//! Plain data rows written by report backends.

/// One gateway call and what the controller made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRow {
    pub tick:             u64,
    pub attempt:          u32,
    /// Customers in the submitted candidate tick.
    pub recommendations:  usize,
    pub score:            f64,
    pub kwh_revenue:      f64,
    pub completion_score: f64,
    pub elapsed_ms:       f64,
    /// `false` when the tick will be retried.
    pub advanced:         bool,
}

/// A customer's score as reported by the final submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerScoreRow {
    pub customer_id: String,
    pub score:       f64,
}
