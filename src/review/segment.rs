//! Sentence segmentation.

/// Split a document into sentences on terminal punctuation.
///
/// Segments whose trimmed form is empty are discarded; the content of the
/// surviving segments is returned untrimmed, in document order.
pub fn split_sentences(document: &str) -> Vec<&str> {
    document
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}
