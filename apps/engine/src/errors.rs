use thiserror::Error;

/// Engine-level error type.
///
/// Most operations are total over their input: malformed text or markup
/// produces an empty-but-valid structure, not an error. Variants here cover
/// the genuinely exceptional paths only.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `detect_fields` was invoked without a document to inspect.
    #[error("No document context: {0}")]
    MissingDocument(String),

    /// Résumé parsing hit an unrecoverable fault. Carries the original input
    /// so the caller can retry through a different extraction path or surface
    /// the text for diagnostics.
    #[error("Resume parse failure: {message}")]
    ResumeParse { message: String, raw_text: String },

    /// A heuristic pattern failed to compile. Only reachable when a consumer
    /// extends the engine with malformed custom patterns.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Internal engine error: {0}")]
    Internal(#[from] anyhow::Error),
}
