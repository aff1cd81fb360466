//! Site-adapter overlay contract. Adapters know one site's markup conventions
//! and may replace the generic classification for a detected field with a
//! denser site-specific decision. An overlay always *replaces* the baseline —
//! it never merges ambiguously with it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::field::{Category, ClassificationResult, DetectedField};

/// Flat bonus for a field recognized through site-specific structure.
pub const SITE_STRUCTURE_BONUS: f64 = 0.15;
/// Extra bonus for high-value standard fields.
pub const HIGH_VALUE_BONUS: f64 = 0.2;

/// Subcategories worth the extra bonus: the fields every application form
/// needs filled correctly.
const HIGH_VALUE_SUBCATEGORIES: &[&str] = &[
    "fullName",
    "firstName",
    "lastName",
    "email",
    "phone",
    "resume",
    "coverLetter",
];

pub fn is_high_value(subcategory: &str) -> bool {
    HIGH_VALUE_SUBCATEGORIES.contains(&subcategory)
}

/// A site adapter's verdict for one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterOverlay {
    pub category: Category,
    pub subcategory: String,
    /// Site-specific signals, merged into the metadata's open extension slot.
    pub hints: BTreeMap<String, String>,
    /// Marks the field as a high-value standard field (name/email/phone/
    /// resume/cover-letter) for the extra confidence bonus.
    pub high_value: bool,
}

/// Plug-in contract for per-site rule sets.
///
/// Adapters are handed the generic classifier (or the whole engine) at
/// construction — never looked up ambiently — and consume the baseline
/// `DetectedField` the generic pipeline produced.
pub trait SiteAdapter: Send + Sync {
    /// Hostname this adapter understands, e.g. `boards.example.com`.
    fn site(&self) -> &str;

    /// True when the adapter should run for the session's host.
    fn matches(&self, host: &str) -> bool {
        host == self.site() || host.ends_with(&format!(".{}", self.site()))
    }

    /// Site-specific verdict for one detected field, or `None` to keep the
    /// baseline classification untouched.
    fn overlay(&self, field: &DetectedField) -> Option<AdapterOverlay>;
}

/// Recomputed overlay confidence: baseline confidence plus the flat
/// site-structure bonus, plus the high-value bonus when it applies. Clamped —
/// the bonuses are additive, never multiplicative.
pub fn overlay_confidence(base: f64, high_value: bool) -> f64 {
    let mut confidence = base + SITE_STRUCTURE_BONUS;
    if high_value {
        confidence += HIGH_VALUE_BONUS;
    }
    confidence.clamp(0.0, 1.0)
}

/// Applies one overlay to a field, replacing its classification wholesale and
/// merging the adapter's hints into the metadata extension slot.
pub fn apply_overlay(field: &mut DetectedField, overlay: AdapterOverlay) {
    let confidence = overlay_confidence(field.classification.confidence, overlay.high_value);
    field.metadata.adapter_hints.extend(overlay.hints);
    field.classification = ClassificationResult {
        category: overlay.category,
        subcategory: overlay.subcategory,
        confidence,
    };
}
