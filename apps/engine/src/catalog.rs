//! Pattern Catalog — the shared trigger-phrase table both pipelines score
//! against. Built-in entries are static; consumers may extend the catalog
//! with extra phrases (new locales, new site vocabularies) at construction
//! time. The catalog is never mutated after that.

use crate::models::field::Category;

/// Built-in `(category, subcategory) → trigger phrases` table. Phrase order
/// within an entry is irrelevant (all are tried); entry order is the
/// classifier's tie-break, so more specific subcategories come before the
/// generic ones they could collide with (firstName/lastName before fullName).
const BUILTIN_PATTERNS: &[(Category, &str, &[&str])] = &[
    // Personal
    (Category::Personal, "firstName", &[
        "first name", "firstname", "first_name", "fname", "given name", "given_name", "given-name",
    ]),
    (Category::Personal, "lastName", &[
        "last name", "lastname", "last_name", "lname", "surname", "family name", "family_name", "family-name",
    ]),
    (Category::Personal, "fullName", &[
        "full name", "fullname", "full_name", "your name", "legal name", "complete name",
    ]),
    (Category::Personal, "email", &[
        "email", "e-mail", "email address", "email_address", "emailaddress",
    ]),
    (Category::Personal, "phone", &[
        "phone", "telephone", "mobile", "cell", "phone number", "phone_number", "phonenumber", "contact number",
    ]),
    (Category::Personal, "address", &[
        "address", "street", "street address", "address line", "addr1", "address1", "address_1",
    ]),
    (Category::Personal, "city", &["city", "town", "locality"]),
    (Category::Personal, "state", &["state", "province", "region", "state/province"]),
    (Category::Personal, "zipCode", &[
        "zip", "zipcode", "zip code", "zip_code", "postal", "postal code", "postal_code", "postcode",
    ]),
    (Category::Personal, "country", &["country", "nation", "country/region"]),
    (Category::Personal, "linkedin", &["linkedin", "linked-in", "linkedin url", "linkedin profile"]),
    (Category::Personal, "website", &[
        "website", "portfolio", "personal site", "homepage", "github", "web site", "url",
    ]),
    // Education
    (Category::Education, "school", &[
        "school", "university", "college", "institution", "alma mater", "school name",
    ]),
    (Category::Education, "degree", &["degree", "qualification", "degree type", "education level"]),
    (Category::Education, "fieldOfStudy", &[
        "field of study", "major", "discipline", "concentration", "area of study", "specialization",
    ]),
    (Category::Education, "gpa", &["gpa", "grade point", "grade point average", "grades"]),
    (Category::Education, "graduationDate", &[
        "graduation", "graduation date", "grad date", "graduated", "completion date",
    ]),
    // Experience
    (Category::Experience, "company", &[
        "company", "employer", "organization", "organisation", "company name", "current employer", "workplace",
    ]),
    (Category::Experience, "jobTitle", &[
        "job title", "job_title", "jobtitle", "title", "position", "role", "current title", "occupation", "designation",
    ]),
    (Category::Experience, "startDate", &["start date", "start_date", "startdate", "from date", "date from"]),
    (Category::Experience, "endDate", &["end date", "end_date", "enddate", "to date", "date to"]),
    (Category::Experience, "description", &[
        "description", "responsibilities", "duties", "job description", "accomplishments",
    ]),
    (Category::Experience, "yearsOfExperience", &[
        "years of experience", "years experience", "experience years", "yoe", "total experience",
    ]),
    // Skills
    (Category::Skills, "skills", &["skills", "skill", "competencies", "technologies", "expertise", "proficiencies"]),
    (Category::Skills, "languages", &["languages", "language", "spoken languages"]),
    (Category::Skills, "certifications", &["certifications", "certification", "certificates", "licenses"]),
    // Other (application-form fields outside the résumé vocabulary)
    (Category::Other, "coverLetter", &["cover letter", "cover_letter", "coverletter", "letter of interest"]),
    (Category::Other, "resume", &["resume", "cv", "curriculum vitae", "resume/cv", "attach resume"]),
    (Category::Other, "salary", &[
        "salary", "compensation", "desired salary", "expected salary", "salary expectation", "pay",
    ]),
    (Category::Other, "referral", &[
        "referral", "referred by", "how did you hear", "referral source", "hear about us",
    ]),
    (Category::Other, "startAvailability", &[
        "start date availability", "available to start", "availability", "notice period", "earliest start",
    ]),
    (Category::Other, "workAuthorization", &[
        "work authorization", "authorized to work", "work permit", "legally authorized", "right to work",
    ]),
    (Category::Other, "sponsorship", &["sponsorship", "require sponsorship", "visa sponsorship", "visa"]),
    (Category::Other, "gender", &["gender", "gender identity", "sex"]),
    (Category::Other, "race", &["race", "ethnicity", "race/ethnicity", "ethnic"]),
    (Category::Other, "veteran", &["veteran", "veteran status", "military", "protected veteran"]),
    (Category::Other, "disability", &["disability", "disability status", "impairment"]),
];

/// One catalog entry: a subcategory and its lower-case trigger phrases.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub category: Category,
    pub subcategory: String,
    pub phrases: Vec<String>,
}

/// Immutable phrase table keyed by `(category, subcategory)`.
///
/// Iteration order is built-in order followed by extension order; the
/// classifier uses first-seen-wins tie-breaking, so that order is part of the
/// contract.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    entries: Vec<CatalogEntry>,
}

impl PatternCatalog {
    /// Catalog holding only the built-in patterns.
    pub fn builtin() -> Self {
        let entries = BUILTIN_PATTERNS
            .iter()
            .map(|(category, subcategory, phrases)| CatalogEntry {
                category: *category,
                subcategory: (*subcategory).to_string(),
                phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Extends the catalog with extra phrases for a subcategory. When the
    /// subcategory already exists the phrases are appended to its entry;
    /// otherwise a new entry is added after all existing ones. Phrases are
    /// lower-cased on the way in to preserve the matching invariant.
    pub fn with_phrases(mut self, category: Category, subcategory: &str, phrases: &[&str]) -> Self {
        let lowered: Vec<String> = phrases.iter().map(|p| p.trim().to_lowercase()).collect();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.category == category && e.subcategory == subcategory)
        {
            entry.phrases.extend(lowered);
        } else {
            self.entries.push(CatalogEntry {
                category,
                subcategory: subcategory.to_string(),
                phrases: lowered,
            });
        }
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_phrases_are_lowercase() {
        for entry in PatternCatalog::builtin().entries() {
            for phrase in &entry.phrases {
                assert_eq!(
                    phrase,
                    &phrase.to_lowercase(),
                    "phrase '{phrase}' in {:?}/{} is not lowercase",
                    entry.category,
                    entry.subcategory
                );
            }
        }
    }

    #[test]
    fn test_builtin_subcategories_are_unique() {
        let catalog = PatternCatalog::builtin();
        for (i, a) in catalog.entries().iter().enumerate() {
            for b in catalog.entries().iter().skip(i + 1) {
                assert!(
                    !(a.category == b.category && a.subcategory == b.subcategory),
                    "duplicate entry {:?}/{}",
                    a.category,
                    a.subcategory
                );
            }
        }
    }

    #[test]
    fn test_first_name_precedes_full_name() {
        // firstName must come before fullName so a tie on "name"-ish signals
        // resolves to the more specific subcategory.
        let catalog = PatternCatalog::builtin();
        let first = catalog
            .entries()
            .iter()
            .position(|e| e.subcategory == "firstName")
            .unwrap();
        let full = catalog
            .entries()
            .iter()
            .position(|e| e.subcategory == "fullName")
            .unwrap();
        assert!(first < full);
    }

    #[test]
    fn test_with_phrases_extends_existing_entry() {
        let catalog = PatternCatalog::builtin()
            .with_phrases(Category::Personal, "firstName", &["Vorname"]);
        let entry = catalog
            .entries()
            .iter()
            .find(|e| e.subcategory == "firstName")
            .unwrap();
        assert!(entry.phrases.contains(&"vorname".to_string()));
    }

    #[test]
    fn test_with_phrases_adds_new_subcategory_at_end() {
        let catalog =
            PatternCatalog::builtin().with_phrases(Category::Other, "pronouns", &["pronouns"]);
        let last = catalog.entries().last().unwrap();
        assert_eq!(last.subcategory, "pronouns");
        assert_eq!(last.category, Category::Other);
    }
}
