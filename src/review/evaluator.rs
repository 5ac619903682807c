//! Pipeline orchestration: summarize, segment, dual-pass detection, aggregate.

use super::detector::{CommonIssueDetector, IssueDetector};
use super::report::{EvaluationError, EvaluationReport, FeedbackItem, Language};
use super::segment::split_sentences;
use super::translator::{MarkerTranslator, Translator};
use super::ReviewError;

const SUMMARY_PREFIX: &str = "This is a summary of the document: ";
const SUMMARY_PREVIEW_CHARS: usize = 50;

/// Result of one evaluation call. Failures never escape the evaluator;
/// they surface as the structured error variant instead.
#[derive(Debug)]
pub enum EvaluationOutcome {
    Report(EvaluationReport),
    Failed(EvaluationError),
}

/// Runs the review pipeline over a document using injected detection and
/// translation backends. Holds no per-request state; one instance may
/// serve any number of concurrent calls.
pub struct DocumentEvaluator {
    detector: Box<dyn IssueDetector>,
    translator: Box<dyn Translator>,
}

impl DocumentEvaluator {
    pub fn new(detector: Box<dyn IssueDetector>, translator: Box<dyn Translator>) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Evaluator wired to the built-in stub backends.
    pub fn with_common_backends() -> Self {
        Self::new(Box::new(CommonIssueDetector), Box::new(MarkerTranslator))
    }

    /// Evaluate a document, converting any backend failure into the
    /// structured error payload. Never returns a partial report.
    pub async fn evaluate(&self, document: &str) -> EvaluationOutcome {
        match self.run_pipeline(document).await {
            Ok(report) => EvaluationOutcome::Report(report),
            Err(err) => EvaluationOutcome::Failed(EvaluationError::failed(err.to_string())),
        }
    }

    async fn run_pipeline(&self, document: &str) -> Result<EvaluationReport, ReviewError> {
        let summary = summarize(document);
        let mut feedback = Vec::new();

        for sentence in split_sentences(document) {
            // Pass 1: the sentence as written.
            let issues = self.detector.detect(sentence).await?;
            if let Some(item) = FeedbackItem::from_issues(sentence, Language::Source, issues) {
                feedback.push(item);
            }

            // Pass 2: the translated sentence, re-checked independently.
            let translated = self.translator.translate(sentence).await?;
            let issues = self.detector.detect(&translated).await?;
            if let Some(item) = FeedbackItem::from_issues(translated, Language::Target, issues) {
                feedback.push(item);
            }
        }

        Ok(EvaluationReport { summary, feedback })
    }
}

/// Fixed-shape preview of the document: a literal prefix, the first 50
/// characters, and an ellipsis marker. Not a real summary.
fn summarize(document: &str) -> String {
    let preview: String = document.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    format!("{SUMMARY_PREFIX}{preview}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_truncates_long_documents() {
        let document = "a".repeat(80);
        let summary = summarize(&document);
        assert_eq!(summary, format!("{}{}...", SUMMARY_PREFIX, "a".repeat(50)));
    }

    #[test]
    fn test_summary_keeps_short_documents_whole() {
        let summary = summarize("short");
        assert_eq!(summary, format!("{SUMMARY_PREFIX}short..."));
    }

    #[test]
    fn test_summary_of_empty_document() {
        assert_eq!(summarize(""), format!("{SUMMARY_PREFIX}..."));
    }
}
