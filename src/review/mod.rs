//! Document review core - the evaluation pipeline behind the MCP tool.
//!
//! A document is segmented into sentences, each sentence is checked for
//! issues twice (as written and after translation), and the findings are
//! aggregated into a single report. Detection and translation are
//! capability traits so a real linting or translation backend can be
//! swapped in without touching the pipeline.

pub mod detector;
pub mod evaluator;
pub mod report;
pub mod segment;
pub mod translator;

use thiserror::Error;

pub use detector::{CommonIssueDetector, IssueDetector};
pub use evaluator::{DocumentEvaluator, EvaluationOutcome};
pub use report::{EvaluationError, EvaluationReport, FeedbackItem, Language};
pub use segment::split_sentences;
pub use translator::{MarkerTranslator, Translator};

/// Failure raised by a detector or translator backend.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("issue detection failed: {0}")]
    Detection(String),
    #[error("translation failed: {0}")]
    Translation(String),
}
