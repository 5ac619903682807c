//! Sentence-level issue detection capability.

use async_trait::async_trait;

use super::ReviewError;

/// Pluggable issue detector.
///
/// Implementations may call out to an external linting service; the
/// pipeline only requires that the same text always yields the same
/// issue list within one request.
#[async_trait]
pub trait IssueDetector: Send + Sync {
    /// Return zero or more human-readable findings for one sentence.
    async fn detect(&self, text: &str) -> Result<Vec<String>, ReviewError>;
}

/// Built-in detector with two rules: an ambiguity substring check and a
/// sentence-length check. Stands in for a real rules engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonIssueDetector;

#[async_trait]
impl IssueDetector for CommonIssueDetector {
    async fn detect(&self, text: &str) -> Result<Vec<String>, ReviewError> {
        let mut issues = Vec::new();
        if text.contains("ambiguous") {
            issues.push("Potential ambiguity detected.".to_string());
        }
        if text.chars().count() > 100 {
            issues.push("Sentence may be too long.".to_string());
        }
        Ok(issues)
    }
}
