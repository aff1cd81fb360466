//! Contact-info extraction. Patterns run over the FULL document text, not
//! just the header region — people put contact details in footers and
//! sidebars. The full name alone comes from the header region: its first
//! non-empty line, verbatim.

use regex::Regex;

use crate::models::resume::PersonalInfo;

pub struct PersonalPatterns {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    url: Regex,
    address: Regex,
}

impl PersonalPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}")?,
            // NANP digit groups: optional +1, 3-3-4 with ., -, space or
            // parens separators.
            phone: Regex::new(r"(?:\+?1[\s.\-]?)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}")?,
            linkedin: Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[a-z0-9_\-]+/?")?,
            url: Regex::new(r#"(?i)(?:https?://|www\.)[^\s<>",;|]+"#)?,
            address: Regex::new(
                r"(?i)\d{1,5}\s+[a-z0-9.'\- ]+?\s(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|circle|cir|way|place|pl|terrace|ter)\.?\b",
            )?,
        })
    }

    /// Best-effort extraction; every field falls back to the empty string.
    pub fn extract(&self, full_text: &str, header: &str) -> PersonalInfo {
        let full_name = header
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string();

        let linkedin = self
            .linkedin
            .find(full_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        // First URL that is not the LinkedIn profile.
        let website = self
            .url
            .find_iter(full_text)
            .map(|m| m.as_str())
            .find(|candidate| !candidate.to_lowercase().contains("linkedin.com"))
            .unwrap_or("")
            .to_string();

        PersonalInfo {
            full_name,
            email: first_match(&self.email, full_text),
            phone: first_match(&self.phone, full_text),
            linkedin,
            website,
            address: first_match(&self.address, full_text),
        }
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PersonalPatterns {
        PersonalPatterns::new().unwrap()
    }

    #[test]
    fn test_full_name_is_first_nonempty_header_line_verbatim() {
        let info = patterns().extract("", "\n  Jane Q. Doe  \nSomething else");
        assert_eq!(info.full_name, "Jane Q. Doe");
    }

    #[test]
    fn test_empty_header_yields_empty_name() {
        let info = patterns().extract("text without contact info", "");
        assert_eq!(info.full_name, "");
    }

    #[test]
    fn test_email_extraction() {
        let info = patterns().extract("Reach me at jane.doe+jobs@example.co.uk anytime", "");
        assert_eq!(info.email, "jane.doe+jobs@example.co.uk");
    }

    #[test]
    fn test_phone_extraction_common_shapes() {
        for (text, expected) in [
            ("call (555) 123-4567 today", "(555) 123-4567"),
            ("tel: 555.123.4567", "555.123.4567"),
            ("phone +1 555 123 4567", "+1 555 123 4567"),
        ] {
            let info = patterns().extract(text, "");
            assert_eq!(info.phone, expected, "input: {text}");
        }
    }

    #[test]
    fn test_date_ranges_do_not_look_like_phone_numbers() {
        let info = patterns().extract("Jan 2020 - Dec 2023", "");
        assert_eq!(info.phone, "");
    }

    #[test]
    fn test_linkedin_extraction() {
        let info = patterns().extract("profile: https://www.linkedin.com/in/jane-doe", "");
        assert_eq!(info.linkedin, "https://www.linkedin.com/in/jane-doe");
    }

    #[test]
    fn test_website_skips_linkedin_url() {
        let text = "linkedin.com/in/jane-doe and https://janedoe.dev for projects";
        let info = patterns().extract(text, "");
        assert_eq!(info.website, "https://janedoe.dev");
    }

    #[test]
    fn test_street_address_extraction() {
        let info = patterns().extract("Lives at 123 Maple Street, Springfield", "");
        assert_eq!(info.address, "123 Maple Street");
    }

    #[test]
    fn test_contact_info_found_outside_header() {
        // Contact details can appear anywhere in the document.
        let full = "Jane Doe\n\nExperience\n...\n\nContact: jane@example.com | 555-123-4567";
        let info = patterns().extract(full, "Jane Doe");
        assert_eq!(info.email, "jane@example.com");
        assert_eq!(info.phone, "555-123-4567");
    }

    #[test]
    fn test_absent_fields_are_empty_strings() {
        let info = patterns().extract("no contact details here", "");
        assert_eq!(info.email, "");
        assert_eq!(info.phone, "");
        assert_eq!(info.linkedin, "");
        assert_eq!(info.website, "");
        assert_eq!(info.address, "");
    }
}
