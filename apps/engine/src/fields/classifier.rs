//! Field Classifier — scores a `FieldMetadata` snapshot against the Pattern
//! Catalog plus type-driven fallback rules and assigns an independent [0,1]
//! confidence. Never panics; worst case is `unknown/unknown` at confidence 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::PatternCatalog;
use crate::models::field::{Category, ClassificationResult, FieldMetadata};

/// Per-channel match weights. Label text is the richest signal, identifiers
/// and aria-label next, placeholder and title progressively weaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub label: u32,
    /// Added on top of `label` when the label was an explicit for/id binding.
    pub label_explicit_bonus: u32,
    pub identifier: u32,
    pub placeholder: u32,
    pub title: u32,
    pub data_attr: u32,
    /// Best scores below this are treated as inconclusive and handed to the
    /// structural fallback rules.
    pub min_match_score: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            label: 5,
            label_explicit_bonus: 2,
            identifier: 3,
            placeholder: 2,
            title: 1,
            data_attr: 1,
            min_match_score: 3,
        }
    }
}

/// Additive confidence boosts. Independent and cumulative; the final value is
/// clamped to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceBoosts {
    pub baseline: f64,
    pub explicit_label: f64,
    pub type_corroboration: f64,
    pub autocomplete_corroboration: f64,
    pub subcategory_in_identifier: f64,
    pub required_with_label: f64,
    pub option_sentinel: f64,
}

impl Default for ConfidenceBoosts {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            explicit_label: 0.3,
            type_corroboration: 0.3,
            autocomplete_corroboration: 0.3,
            subcategory_in_identifier: 0.2,
            required_with_label: 0.1,
            option_sentinel: 0.2,
        }
    }
}

pub struct FieldClassifier {
    catalog: PatternCatalog,
    weights: ScoreWeights,
    boosts: ConfidenceBoosts,
}

impl FieldClassifier {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            weights: ScoreWeights::default(),
            boosts: ConfidenceBoosts::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights, boosts: ConfidenceBoosts) -> Self {
        self.weights = weights;
        self.boosts = boosts;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Classifies one control. Pattern scoring first; structural fallbacks
    /// only when the pattern match was inconclusive — they never override a
    /// confident match.
    pub fn classify(&self, metadata: &FieldMetadata) -> ClassificationResult {
        let mut best_score = 0u32;
        let mut best: Option<(Category, &str)> = None;

        for entry in self.catalog.entries() {
            let score = self.match_score(metadata, &entry.phrases);
            // Strict comparison keeps the earliest-seen pair on ties; catalog
            // iteration order is the deterministic tie-break.
            if score > best_score {
                best_score = score;
                best = Some((entry.category, entry.subcategory.as_str()));
            }
        }

        // Inconclusive pattern scores (below the threshold) are discarded
        // rather than kept as a weak guess; the structural rules take over.
        let chosen = if best_score >= self.weights.min_match_score {
            best
        } else {
            structural_fallback(metadata)
        };

        let Some((category, subcategory)) = chosen else {
            return ClassificationResult::unknown();
        };

        let confidence = self.confidence(metadata, subcategory);
        debug!(
            ?category,
            subcategory, best_score, confidence, "classified control"
        );
        ClassificationResult {
            category,
            subcategory: subcategory.to_string(),
            confidence,
        }
    }

    /// Accumulated weighted score of every trigger phrase across every
    /// metadata channel. No early exit: all phrases contribute.
    fn match_score(&self, metadata: &FieldMetadata, phrases: &[String]) -> u32 {
        let w = &self.weights;
        let mut score = 0u32;
        for phrase in phrases {
            let phrase = phrase.as_str();
            if !metadata.label_text.is_empty() && metadata.label_text.contains(phrase) {
                score += w.label;
                if metadata.label_for_field {
                    score += w.label_explicit_bonus;
                }
            }
            if !metadata.id.is_empty() && metadata.id.contains(phrase) {
                score += w.identifier;
            }
            if !metadata.name.is_empty() && metadata.name.contains(phrase) {
                score += w.identifier;
            }
            if !metadata.aria_label.is_empty() && metadata.aria_label.contains(phrase) {
                score += w.identifier;
            }
            if !metadata.placeholder.is_empty() && metadata.placeholder.contains(phrase) {
                score += w.placeholder;
            }
            if !metadata.title.is_empty() && metadata.title.contains(phrase) {
                score += w.title;
            }
            for (key, value) in &metadata.data_attrs {
                if key.contains(phrase) {
                    score += w.data_attr;
                }
                if value.contains(phrase) {
                    score += w.data_attr;
                }
            }
        }
        score
    }

    /// Confidence is computed after and independently of the category
    /// decision: a fixed baseline plus independent additive boosts, clamped.
    fn confidence(&self, metadata: &FieldMetadata, subcategory: &str) -> f64 {
        let b = &self.boosts;
        let mut confidence = b.baseline;

        if metadata.label_for_field {
            confidence += b.explicit_label;
        }
        if type_corroborates(&metadata.control_type, subcategory) {
            confidence += b.type_corroboration;
        }
        if autocomplete_subcategory(&metadata.autocomplete)
            .is_some_and(|(_, sub)| sub == subcategory)
        {
            confidence += b.autocomplete_corroboration;
        }
        let sub_lower = subcategory.to_lowercase();
        if metadata.id.contains(&sub_lower) || metadata.name.contains(&sub_lower) {
            confidence += b.subcategory_in_identifier;
        }
        if metadata.required && !metadata.label_text.is_empty() {
            confidence += b.required_with_label;
        }
        if option_sentinel_present(subcategory, &metadata.options) {
            confidence += b.option_sentinel;
        }

        confidence.clamp(0.0, 1.0)
    }
}

/// Type- and autocomplete-driven fallback rules for controls whose textual
/// signals were inconclusive.
fn structural_fallback(metadata: &FieldMetadata) -> Option<(Category, &'static str)> {
    match metadata.control_type.as_str() {
        "email" => return Some((Category::Personal, "email")),
        "tel" => return Some((Category::Personal, "phone")),
        "url" => return Some((Category::Personal, "website")),
        _ => {}
    }
    autocomplete_subcategory(&metadata.autocomplete)
}

/// Maps a browser autocomplete token to its subcategory, when one applies.
fn autocomplete_subcategory(token: &str) -> Option<(Category, &'static str)> {
    let pair = match token {
        "given-name" => (Category::Personal, "firstName"),
        "family-name" => (Category::Personal, "lastName"),
        "name" => (Category::Personal, "fullName"),
        "email" => (Category::Personal, "email"),
        "tel" | "tel-national" => (Category::Personal, "phone"),
        "street-address" | "address-line1" => (Category::Personal, "address"),
        "address-level2" => (Category::Personal, "city"),
        "address-level1" => (Category::Personal, "state"),
        "postal-code" => (Category::Personal, "zipCode"),
        "country" | "country-name" => (Category::Personal, "country"),
        "url" => (Category::Personal, "website"),
        "organization" => (Category::Experience, "company"),
        "organization-title" => (Category::Experience, "jobTitle"),
        _ => return None,
    };
    Some(pair)
}

fn type_corroborates(control_type: &str, subcategory: &str) -> bool {
    matches!(
        (control_type, subcategory),
        ("email", "email") | ("tel", "phone")
    )
}

/// Sanity-check sentinels for enumerable controls: a dropdown claiming to be
/// a state/degree/country picker should actually contain one.
fn option_sentinel_present(subcategory: &str, options: &[String]) -> bool {
    let sentinels: &[&str] = match subcategory {
        "state" => &["california"],
        "degree" => &["bachelor", "master", "phd"],
        "country" => &["united states"],
        _ => return false,
    };
    options
        .iter()
        .any(|opt| sentinels.iter().any(|s| opt.contains(s)))
}
