//! Report types produced by the evaluation pipeline.

use serde::{Deserialize, Serialize};

/// Which variant of a sentence a feedback item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// The sentence as it appears in the submitted document.
    #[serde(rename = "source-language")]
    Source,
    /// The sentence after translation.
    #[serde(rename = "target-language")]
    Target,
}

/// One sentence/language pairing together with its non-empty issue list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub sentence: String,
    pub language: Language,
    pub issues: Vec<String>,
}

impl FeedbackItem {
    /// Build a feedback item if the issue list is non-empty.
    ///
    /// Sentences without findings produce no record at all.
    pub fn from_issues(
        sentence: impl Into<String>,
        language: Language,
        issues: Vec<String>,
    ) -> Option<Self> {
        if issues.is_empty() {
            return None;
        }
        Some(Self {
            sentence: sentence.into(),
            language,
            issues,
        })
    }
}

/// Aggregate success payload: summary plus ordered feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub summary: String,
    pub feedback: Vec<FeedbackItem>,
}

/// Failure payload returned instead of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationError {
    pub error: String,
    pub status: String,
}

impl EvaluationError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: "failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_item_skips_empty_issues() {
        assert!(FeedbackItem::from_issues("text", Language::Source, Vec::new()).is_none());
    }

    #[test]
    fn test_feedback_item_keeps_issues() {
        let item =
            FeedbackItem::from_issues("text", Language::Target, vec!["finding".to_string()])
                .unwrap();
        assert_eq!(item.sentence, "text");
        assert_eq!(item.language, Language::Target);
        assert_eq!(item.issues.len(), 1);
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::Source).unwrap();
        assert_eq!(json, "\"source-language\"");
        let json = serde_json::to_string(&Language::Target).unwrap();
        assert_eq!(json, "\"target-language\"");
    }

    #[test]
    fn test_evaluation_error_status() {
        let err = EvaluationError::failed("boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "boom");
        assert_eq!(json["status"], "failed");
    }
}
