use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level semantic category a form control can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Education,
    Experience,
    Skills,
    Other,
    Unknown,
}

/// Classifier output: best category/subcategory plus a [0,1] confidence.
///
/// `unknown/unknown` with confidence 0 is the explicit no-decision state,
/// distinct from failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Open string key scoped to its category (e.g. personal → "firstName").
    pub subcategory: String,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn unknown() -> Self {
        Self {
            category: Category::Unknown,
            subcategory: "unknown".to_string(),
            confidence: 0.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category == Category::Unknown
    }
}

/// Opaque reference back to the live DOM control. The engine only ever reads
/// the control; writing values and dispatching change events belongs to the
/// shell, which resolves the handle by document-order index (id/name are
/// carried as a convenience for selector-based lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldHandle {
    /// Index of the control among `input, select, textarea` elements in
    /// document order, counted before filtering.
    pub dom_index: usize,
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Per-control snapshot of every textual signal the classifier scores.
///
/// Invariant: all string fields are lower-cased and trimmed at construction.
/// The classifier relies on this for substring matching and never normalizes
/// again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub id: String,
    pub name: String,
    /// Control kind: the `type` attribute for inputs, else the tag name
    /// (`select`, `textarea`).
    pub control_type: String,
    pub placeholder: String,
    pub class_list: Vec<String>,
    pub value: String,
    pub autocomplete: String,

    pub aria_label: String,
    pub aria_labelledby: String,
    pub aria_describedby: String,
    pub title: String,

    /// Custom `data-*` attributes in document order (attribute name without
    /// the `data-` prefix → value).
    pub data_attrs: Vec<(String, String)>,

    /// Resolved label text (see label precedence in the extractor).
    pub label_text: String,
    /// True only when the label was bound via an explicit `for`/`id`
    /// relationship — a strong signal. Wrapping or proximity labels leave
    /// this false.
    pub label_for_field: bool,

    pub required: bool,
    pub pattern: String,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min: String,
    pub max: String,

    /// Visible option texts for enumerable controls (`<select>`), used for
    /// sanity-checking category guesses.
    pub options: Vec<String>,

    /// Reserved extension slot for adapter-contributed signals. Site adapters
    /// add data here without redefining the schema.
    pub adapter_hints: BTreeMap<String, String>,
}

impl FieldMetadata {
    /// True when no textual channel carries any signal. The classifier maps
    /// such metadata straight to `unknown/unknown`.
    pub fn has_no_signal(&self) -> bool {
        self.id.is_empty()
            && self.name.is_empty()
            && self.placeholder.is_empty()
            && self.autocomplete.is_empty()
            && self.aria_label.is_empty()
            && self.title.is_empty()
            && self.label_text.is_empty()
            && self.data_attrs.is_empty()
            && self.control_type.is_empty()
    }
}

/// Ownership triple tying a live control to its metadata snapshot and
/// classification. Built fresh on every detection pass — never cached, since
/// the page DOM can mutate between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedField {
    pub handle: FieldHandle,
    pub metadata: FieldMetadata,
    pub classification: ClassificationResult,
}
