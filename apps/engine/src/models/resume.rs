use serde::{Deserialize, Serialize};

/// Flat contact record. Every field is best-effort: empty string when the
/// source text carried nothing, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub website: String,
    pub address: String,
}

/// One work-history entry. Dates are kept verbatim as matched from the text
/// (e.g. "Jan 2020", "Present").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One education entry. Years are normalized to bare 4-digit strings pulled
/// from the matched date range; an open-ended range keeps its verbatim
/// "present"/"current" token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub start_year: String,
    pub end_year: String,
    pub description: String,
}

/// Structured résumé produced by `Engine::parse`.
///
/// `experience` and `education` preserve document order — order carries no
/// ranking, it only keeps the source order for user review. `skills` keeps
/// duplicates in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub raw_text: String,
}

impl ResumeRecord {
    /// True when parsing extracted nothing at all.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        assert!(ResumeRecord::default().is_empty());
    }

    #[test]
    fn test_record_with_skill_is_not_empty() {
        let record = ResumeRecord {
            skills: vec!["rust".to_string()],
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_personal_info_fields_default_to_empty_strings() {
        let info = PersonalInfo::default();
        assert_eq!(info.full_name, "");
        assert_eq!(info.email, "");
        assert_eq!(info.address, "");
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                title: "engineer".to_string(),
                company: "acme".to_string(),
                start_date: "Jan 2020".to_string(),
                end_date: "Present".to_string(),
                description: "Built things.".to_string(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
