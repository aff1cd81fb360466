//! Experience and education entry extraction. Both split their section text
//! into candidate blocks on blank-line runs, then apply per-line heuristics:
//! first line carries title/organization, a date-range line carries the
//! period, everything left over is free-text description.

use regex::Regex;

use crate::models::resume::{EducationEntry, ExperienceEntry};

/// Lexicon deciding whether an unsplit education first line is a degree or a
/// school name.
const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "ph.d", "doctorate", "mba", "associate", "diploma",
    "b.s", "m.s", "b.a", "m.a", "b.sc", "m.sc", "b.e", "b.tech", "m.tech",
];

pub struct EntryPatterns {
    /// `A (at|,|\|) B` — role/degree on the left, organization on the right.
    title_org: Regex,
    /// `Mon YYYY - Mon YYYY` or `Mon YYYY - Present/Current`.
    date_range: Regex,
    year: Regex,
}

impl EntryPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            title_org: Regex::new(r"(?i)^(.+?)(?:\s+at\s+|\s*,\s*|\s*\|\s*)(.+)$")?,
            date_range: Regex::new(
                r"(?i)\b((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4})\s*(?:-|–|—|to)\s*((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}|present|current)\b",
            )?,
            year: Regex::new(r"\d{4}")?,
        })
    }

    /// One entry per blank-line block. The first line splits into
    /// title/company when it matches the `A at B` pattern; otherwise the
    /// whole line is the title — never guess which side is which. Only the
    /// second line is tested for the date range; matched groups are kept
    /// verbatim.
    pub fn parse_experience(&self, section: &str) -> Vec<ExperienceEntry> {
        split_blocks(section)
            .into_iter()
            .map(|block| self.experience_entry(&block))
            .collect()
    }

    fn experience_entry(&self, lines: &[&str]) -> ExperienceEntry {
        let mut entry = ExperienceEntry::default();
        let mut description_lines: Vec<&str> = Vec::new();

        if let Some(first) = lines.first() {
            match self.title_org.captures(first) {
                Some(caps) => {
                    entry.title = caps[1].trim().to_string();
                    entry.company = caps[2].trim().to_string();
                }
                None => entry.title = first.trim().to_string(),
            }
        }

        for (index, line) in lines.iter().enumerate().skip(1) {
            if index == 1 {
                if let Some(caps) = self.date_range.captures(line) {
                    entry.start_date = caps[1].to_string();
                    entry.end_date = caps[2].to_string();
                    continue;
                }
            }
            description_lines.push(line);
        }

        entry.description = description_lines.join("\n").trim().to_string();
        entry
    }

    /// Education blocks behave like experience blocks, with two differences:
    /// any line may carry the date range, and the matched range is normalized
    /// to bare 4-digit years (an open-ended range keeps its verbatim
    /// present/current token).
    pub fn parse_education(&self, section: &str) -> Vec<EducationEntry> {
        split_blocks(section)
            .into_iter()
            .map(|block| self.education_entry(&block))
            .collect()
    }

    fn education_entry(&self, lines: &[&str]) -> EducationEntry {
        let mut entry = EducationEntry::default();
        let mut description_lines: Vec<&str> = Vec::new();
        let mut dates_taken = false;

        if let Some(first) = lines.first() {
            match self.title_org.captures(first) {
                Some(caps) => {
                    entry.degree = caps[1].trim().to_string();
                    entry.school = caps[2].trim().to_string();
                }
                None => {
                    let line = first.trim();
                    if is_degree_line(line) {
                        entry.degree = line.to_string();
                    } else {
                        entry.school = line.to_string();
                    }
                }
            }
        }

        for line in lines.iter().skip(1) {
            if !dates_taken {
                if let Some(caps) = self.date_range.captures(line) {
                    entry.start_year = self.bare_year(&caps[1]);
                    entry.end_year = self.bare_year(&caps[2]);
                    dates_taken = true;
                    continue;
                }
            }
            description_lines.push(line);
        }

        entry.description = description_lines.join("\n").trim().to_string();
        entry
    }

    fn bare_year(&self, token: &str) -> String {
        self.year
            .find(token)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| token.trim().to_string())
    }
}

fn is_degree_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    DEGREE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Candidate entries: runs of non-blank lines separated by blank lines.
fn split_blocks(section: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in section.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}
