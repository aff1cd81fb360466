//! Résumé parser entry point: normalizes, splits, and runs every extractor,
//! assembling the structured `ResumeRecord`.

use tracing::debug;

use crate::errors::EngineError;
use crate::models::resume::ResumeRecord;
use crate::resume::entries::EntryPatterns;
use crate::resume::personal::PersonalPatterns;
use crate::resume::sections::{split_sections, SectionKind};
use crate::resume::skills::parse_skills;

/// Owns the compiled extraction patterns. Construct once, reuse across calls;
/// parsing itself is pure and keeps no state between invocations.
pub struct ResumeParser {
    personal: PersonalPatterns,
    entries: EntryPatterns,
}

impl ResumeParser {
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            personal: PersonalPatterns::new()?,
            entries: EntryPatterns::new()?,
        })
    }

    /// Parses free-form résumé text into a structured record.
    ///
    /// Total over any string input: blank or unrecognizable text yields an
    /// empty-but-valid record so downstream code never needs null checks.
    /// The one hard failure is input that is not text at all — NUL bytes mean
    /// the caller handed over raw document bytes (PDF/DOCX) instead of
    /// extracted text, and should retry through a different extraction path.
    pub fn parse(&self, text: &str) -> Result<ResumeRecord, EngineError> {
        if text.contains('\0') {
            return Err(EngineError::ResumeParse {
                message: "input contains binary data, not extracted text".to_string(),
                raw_text: text.to_string(),
            });
        }
        if text.trim().is_empty() {
            return Ok(ResumeRecord {
                raw_text: text.to_string(),
                ..Default::default()
            });
        }

        let split = split_sections(text);
        let personal_info = self.personal.extract(text, &split.header);

        let experience = split
            .section(SectionKind::Experience)
            .map(|s| self.entries.parse_experience(s))
            .unwrap_or_default();
        let education = split
            .section(SectionKind::Education)
            .map(|s| self.entries.parse_education(s))
            .unwrap_or_default();
        let skills = split
            .section(SectionKind::Skills)
            .map(parse_skills)
            .unwrap_or_default();

        debug!(
            sections = split.sections.len(),
            experience = experience.len(),
            education = education.len(),
            skills = skills.len(),
            "resume parsed"
        );

        Ok(ResumeRecord {
            personal_info,
            experience,
            education,
            skills,
            raw_text: text.to_string(),
        })
    }
}
