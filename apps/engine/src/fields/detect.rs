//! Detection pass: walk every form control in a document, snapshot its
//! metadata, classify it. Results are built fresh per call and never cached —
//! the page DOM can mutate between calls, so callers re-detect on demand.

use scraper::{Html, Selector};
use tracing::debug;

use crate::errors::EngineError;
use crate::fields::classifier::FieldClassifier;
use crate::fields::metadata::MetadataExtractor;
use crate::models::field::{DetectedField, FieldHandle};

pub struct FieldDetector {
    extractor: MetadataExtractor,
    control_selector: Selector,
}

impl FieldDetector {
    pub fn new() -> Self {
        Self {
            extractor: MetadataExtractor::new(),
            control_selector: Selector::parse("input, select, textarea")
                .expect("control selector"),
        }
    }

    /// Detects and classifies every fillable control in `html`, in document
    /// order. Handles carry the pre-filter document-order index plus the raw
    /// id/name so the shell can resolve them back to live elements.
    pub fn detect(
        &self,
        classifier: &FieldClassifier,
        html: &str,
    ) -> Result<Vec<DetectedField>, EngineError> {
        if html.trim().is_empty() {
            return Err(EngineError::MissingDocument(
                "detect_fields called with an empty document".to_string(),
            ));
        }

        let document = Html::parse_document(html);
        let mut detected = Vec::new();
        for (dom_index, element) in document.select(&self.control_selector).enumerate() {
            let Some(metadata) = self.extractor.extract(&document, element) else {
                continue;
            };
            let handle = FieldHandle {
                dom_index,
                id: element.value().attr("id").map(str::to_string),
                name: element.value().attr("name").map(str::to_string),
            };
            let classification = classifier.classify(&metadata);
            detected.push(DetectedField {
                handle,
                metadata,
                classification,
            });
        }
        debug!(count = detected.len(), "detection pass complete");
        Ok(detected)
    }
}

impl Default for FieldDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCatalog;
    use crate::models::field::Category;

    fn detect(html: &str) -> Result<Vec<DetectedField>, EngineError> {
        let classifier = FieldClassifier::new(PatternCatalog::builtin());
        FieldDetector::new().detect(&classifier, html)
    }

    #[test]
    fn test_empty_document_is_a_missing_document_failure() {
        assert!(matches!(detect(""), Err(EngineError::MissingDocument(_))));
        assert!(matches!(detect("   \n "), Err(EngineError::MissingDocument(_))));
    }

    #[test]
    fn test_document_without_controls_yields_empty_result() {
        let fields = detect("<html><body><p>Nothing to fill</p></body></html>").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_detects_controls_in_document_order() {
        let fields = detect(
            r#"<form>
                <label for="fn">First Name</label><input id="fn" type="text">
                <label for="em">Email</label><input id="em" type="email">
            </form>"#,
        )
        .unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].classification.subcategory, "firstName");
        assert_eq!(fields[1].classification.subcategory, "email");
        assert!(fields[0].handle.dom_index < fields[1].handle.dom_index);
    }

    #[test]
    fn test_handles_preserve_raw_id_and_name() {
        let fields = detect(r#"<form><input type="text" id="FirstName" name="First_Name"></form>"#)
            .unwrap();
        assert_eq!(fields[0].handle.id.as_deref(), Some("FirstName"));
        assert_eq!(fields[0].handle.name.as_deref(), Some("First_Name"));
        // Metadata is normalized even though the handle is not.
        assert_eq!(fields[0].metadata.id, "firstname");
    }

    #[test]
    fn test_filtered_controls_keep_their_dom_index_gap() {
        // The password control occupies index 1; the following select keeps
        // index 2 so the shell's document-order lookup stays aligned.
        let fields = detect(
            r#"<form>
                <input type="text" name="email">
                <input type="password" name="pw">
                <select name="state"><option>California</option></select>
            </form>"#,
        )
        .unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].handle.dom_index, 0);
        assert_eq!(fields[1].handle.dom_index, 2);
    }

    #[test]
    fn test_hidden_step_controls_are_not_detected() {
        // Only the active step of a multi-step form is fillable; controls
        // under a hidden wrapper must not reach the classifier.
        let fields = detect(
            r#"<form>
                <div style="display:none"><label for="em">Email</label><input id="em" type="email"></div>
                <div><label for="fn">First Name</label><input id="fn" type="text"></div>
            </form>"#,
        )
        .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].classification.subcategory, "firstName");
    }

    #[test]
    fn test_unlabeled_ambiguous_control_is_unknown() {
        let fields = detect(r#"<form><input type="text" name="x1"></form>"#).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].classification.category, Category::Unknown);
        assert_eq!(fields[0].classification.confidence, 0.0);
    }

    #[test]
    fn test_repeated_detection_is_idempotent() {
        let html = r#"<form><label for="p">Phone</label><input id="p" type="tel"></form>"#;
        let first = detect(html).unwrap();
        let second = detect(html).unwrap();
        assert_eq!(first, second);
    }
}
