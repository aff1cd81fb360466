//! Section splitter — locates canonical section headers in résumé text and
//! slices the document between them. A line must match a header synonym
//! exactly (trimmed, case-insensitive, optional trailing colon); substring
//! matches are deliberately not considered, or body text that merely mentions
//! "experience" would split the document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical résumé section kinds all header synonyms resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionKind {
    /// Canonical header spelling, itself a valid synonym.
    pub fn canonical_header(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
        }
    }
}

const HEADER_SYNONYMS: &[(&str, SectionKind)] = &[
    ("summary", SectionKind::Summary),
    ("professional summary", SectionKind::Summary),
    ("objective", SectionKind::Summary),
    ("career objective", SectionKind::Summary),
    ("about", SectionKind::Summary),
    ("about me", SectionKind::Summary),
    ("profile", SectionKind::Summary),
    ("experience", SectionKind::Experience),
    ("work experience", SectionKind::Experience),
    ("work history", SectionKind::Experience),
    ("employment", SectionKind::Experience),
    ("employment history", SectionKind::Experience),
    ("professional experience", SectionKind::Experience),
    ("career history", SectionKind::Experience),
    ("relevant experience", SectionKind::Experience),
    ("education", SectionKind::Education),
    ("academic background", SectionKind::Education),
    ("academics", SectionKind::Education),
    ("education and training", SectionKind::Education),
    ("qualifications", SectionKind::Education),
    ("skills", SectionKind::Skills),
    ("technical skills", SectionKind::Skills),
    ("core competencies", SectionKind::Skills),
    ("key skills", SectionKind::Skills),
    ("skills & abilities", SectionKind::Skills),
    ("technologies", SectionKind::Skills),
    ("projects", SectionKind::Projects),
    ("personal projects", SectionKind::Projects),
    ("selected projects", SectionKind::Projects),
    ("certifications", SectionKind::Certifications),
    ("certificates", SectionKind::Certifications),
    ("licenses and certifications", SectionKind::Certifications),
    ("licenses & certifications", SectionKind::Certifications),
];

/// Split result: the pre-boundary header region (name/contact info) plus each
/// canonical section's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSplit {
    pub header: String,
    pub sections: BTreeMap<SectionKind, String>,
}

impl SectionSplit {
    pub fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections.get(&kind).map(String::as_str)
    }
}

/// Unifies line endings and collapses runs of blank lines down to one blank
/// line. Blank-line runs inside sections still separate entry blocks after
/// this, which is all the entry extractors need.
pub fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(unified.len());
    let mut newlines = 0usize;
    for ch in unified.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push('\n');
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}

/// Splits normalized text at canonical header lines.
///
/// When two header lines resolve to the same canonical section, the later one
/// wins: its slice overwrites the earlier. This is the defined behavior, not
/// an accident of map insertion.
pub fn split_sections(text: &str) -> SectionSplit {
    let normalized = normalize_text(text);
    let lines: Vec<&str> = normalized.lines().collect();

    let mut boundaries: Vec<(usize, SectionKind)> = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(kind) = match_header(line) {
            boundaries.push((index, kind));
        }
    }
    boundaries.sort_by_key(|(index, _)| *index);

    let header_end = boundaries.first().map(|(index, _)| *index).unwrap_or(lines.len());
    let header = lines[..header_end].join("\n").trim().to_string();

    let mut sections = BTreeMap::new();
    for (i, (start, kind)) in boundaries.iter().enumerate() {
        let end = boundaries
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(lines.len());
        let body = lines[start + 1..end].join("\n").trim().to_string();
        sections.insert(*kind, body);
    }

    SectionSplit { header, sections }
}

/// Exact header test: trimmed, case-insensitive, optional single trailing
/// colon. Anything else — including lines that merely contain a synonym — is
/// body text.
fn match_header(line: &str) -> Option<SectionKind> {
    let mut candidate = line.trim();
    candidate = candidate.strip_suffix(':').unwrap_or(candidate).trim_end();
    if candidate.is_empty() {
        return None;
    }
    let lowered = candidate.to_lowercase();
    HEADER_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == lowered)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\njane@example.com\n\nWork Experience\nSoftware Engineer at Acme\nJan 2020 - Present\n\nEducation:\nB.S. Computer Science, State University\n2014 - 2018\n\nSKILLS\nRust, Python, SQL\n";

    #[test]
    fn test_header_region_precedes_first_boundary() {
        let split = split_sections(SAMPLE);
        assert!(split.header.starts_with("Jane Doe"));
        assert!(split.header.contains("jane@example.com"));
        assert!(!split.header.contains("Software Engineer"));
    }

    #[test]
    fn test_synonyms_resolve_to_canonical_sections() {
        let split = split_sections(SAMPLE);
        assert!(split.section(SectionKind::Experience).unwrap().contains("Acme"));
        assert!(split
            .section(SectionKind::Education)
            .unwrap()
            .contains("State University"));
        assert!(split.section(SectionKind::Skills).unwrap().contains("Rust"));
    }

    #[test]
    fn test_trailing_colon_and_case_are_ignored() {
        assert_eq!(match_header("Education:"), Some(SectionKind::Education));
        assert_eq!(match_header("  SKILLS  "), Some(SectionKind::Skills));
        assert_eq!(match_header("Work History:"), Some(SectionKind::Experience));
    }

    #[test]
    fn test_partial_matches_are_not_headers() {
        assert_eq!(match_header("10 years of experience in sales"), None);
        assert_eq!(match_header("experienced"), None);
        assert_eq!(match_header("my skills include rust"), None);
    }

    #[test]
    fn test_section_spans_to_next_header_or_eof() {
        let split = split_sections(SAMPLE);
        let experience = split.section(SectionKind::Experience).unwrap();
        assert!(experience.contains("Jan 2020 - Present"));
        assert!(!experience.contains("B.S."));
        let skills = split.section(SectionKind::Skills).unwrap();
        assert_eq!(skills, "Rust, Python, SQL");
    }

    #[test]
    fn test_duplicate_canonical_header_last_wins() {
        let text = "Jane\n\nSkills\nRust\n\nTechnical Skills\nPython, SQL\n";
        let split = split_sections(text);
        // Both lines resolve to Skills; the later slice overwrites.
        assert_eq!(split.section(SectionKind::Skills).unwrap(), "Python, SQL");
    }

    #[test]
    fn test_no_headers_means_everything_is_header_region() {
        let split = split_sections("Jane Doe\njane@example.com\n555-123-4567");
        assert!(split.sections.is_empty());
        assert!(split.header.contains("555-123-4567"));
    }

    #[test]
    fn test_crlf_and_blank_run_normalization() {
        let normalized = normalize_text("a\r\n\r\n\r\n\r\nb\rc");
        assert_eq!(normalized, "a\n\nb\nc");
    }

    #[test]
    fn test_split_is_idempotent_on_reassembled_text() {
        // Property: reassembling {header}\n{canonical header}\n{section text}
        // and splitting again reproduces the same boundary set and slices.
        let first = split_sections(SAMPLE);
        let mut reassembled = first.header.clone();
        for (kind, body) in &first.sections {
            reassembled.push('\n');
            reassembled.push_str(kind.canonical_header());
            reassembled.push('\n');
            reassembled.push_str(body);
        }
        let second = split_sections(&reassembled);
        assert_eq!(second.header, first.header);
        assert_eq!(second.sections, first.sections);
    }

    #[test]
    fn test_empty_input_yields_empty_split() {
        let split = split_sections("");
        assert_eq!(split.header, "");
        assert!(split.sections.is_empty());
    }
}
