//! Session context and the engine facade — the only surface the extension
//! shell calls. The engine itself is stateless; all per-page state lives in
//! the `SessionContext` the shell creates on load and replaces on reload.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::PatternCatalog;
use crate::errors::EngineError;
use crate::fields::adapter::{apply_overlay, SiteAdapter};
use crate::fields::classifier::FieldClassifier;
use crate::fields::detect::FieldDetector;
use crate::models::field::DetectedField;
use crate::models::resume::ResumeRecord;
use crate::resume::parser::ResumeParser;

/// Per-page session state, owned by the shell. Replaces the page-scope global
/// state of older designs: nothing in here outlives the page it was created
/// for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    /// User toggle; detection with a disabled session yields no fields.
    pub autofill_enabled: bool,
    /// Hostname of the page, used to pick a site adapter.
    pub host: String,
    /// The résumé currently held by the shell, if one has been parsed.
    pub resume: Option<ResumeRecord>,
}

impl SessionContext {
    pub fn new(host: &str) -> Self {
        Self {
            autofill_enabled: true,
            host: host.trim().to_lowercase(),
            resume: None,
        }
    }

    pub fn with_resume(mut self, resume: ResumeRecord) -> Self {
        self.resume = Some(resume);
        self
    }
}

/// The document-understanding engine. Two entry points: `detect_fields` for
/// form trees, `parse` for résumé text. Everything else in the crate is an
/// internal helper with no external contract.
///
/// Adapters are injected explicitly at construction — the engine never looks
/// anything up ambiently, and repeated calls with identical input return
/// identical output.
pub struct Engine {
    classifier: FieldClassifier,
    detector: FieldDetector,
    parser: ResumeParser,
    adapters: Vec<Box<dyn SiteAdapter>>,
}

impl Engine {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_catalog(PatternCatalog::builtin())
    }

    /// Builds an engine over a (possibly extended) pattern catalog.
    pub fn with_catalog(catalog: PatternCatalog) -> Result<Self, EngineError> {
        Ok(Self {
            classifier: FieldClassifier::new(catalog),
            detector: FieldDetector::new(),
            parser: ResumeParser::new()?,
            adapters: Vec::new(),
        })
    }

    /// Registers a site adapter. Adapters are consulted in registration
    /// order; the first whose host matches the session runs.
    pub fn with_adapter(mut self, adapter: Box<dyn SiteAdapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    /// The generic classifier, exposed so adapters can be constructed with an
    /// explicit reference to it.
    pub fn classifier(&self) -> &FieldClassifier {
        &self.classifier
    }

    /// Detects and classifies every fillable control in `html`, then lets the
    /// matching site adapter (if any) overlay its verdicts. Runs to
    /// completion synchronously; nothing is cached across calls.
    pub fn detect_fields(
        &self,
        session: &SessionContext,
        html: &str,
    ) -> Result<Vec<DetectedField>, EngineError> {
        if !session.autofill_enabled {
            debug!(host = %session.host, "autofill disabled for session");
            return Ok(Vec::new());
        }

        let mut fields = self.detector.detect(&self.classifier, html)?;

        if let Some(adapter) = self.adapters.iter().find(|a| a.matches(&session.host)) {
            debug!(site = adapter.site(), "applying site adapter overlay");
            for field in &mut fields {
                if let Some(overlay) = adapter.overlay(field) {
                    apply_overlay(field, overlay);
                }
            }
        }

        Ok(fields)
    }

    /// Parses free-form résumé text into a structured record.
    pub fn parse(&self, text: &str) -> Result<ResumeRecord, EngineError> {
        self.parser.parse(text)
    }
}
