//! Sentence translation capability.

use async_trait::async_trait;

use super::ReviewError;

/// Pluggable translator from the source language to the target language.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, ReviewError>;
}

/// Built-in placeholder translator: prefixes the sentence with a marker
/// tag instead of producing a real translation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerTranslator;

impl MarkerTranslator {
    pub const MARKER: &'static str = "[EN] ";
}

#[async_trait]
impl Translator for MarkerTranslator {
    async fn translate(&self, text: &str) -> Result<String, ReviewError> {
        Ok(format!("{}{}", Self::MARKER, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_marker_prefix() {
        let out = MarkerTranslator.translate("hello").await.unwrap();
        assert_eq!(out, "[EN] hello");
    }

    #[tokio::test]
    async fn test_leading_whitespace_is_preserved() {
        let out = MarkerTranslator.translate(" padded").await.unwrap();
        assert_eq!(out, "[EN]  padded");
    }
}
