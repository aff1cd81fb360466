//! Skills extraction. Delimiter splitting first; when that produces almost
//! nothing and the section reads like prose, fall back to whitespace
//! tokenization. Duplicates are preserved in source order.

/// Characters that separate items in a skills list.
const DELIMITERS: &[char] = &[',', ';', '|', '*', '+', '\n', '•', '·', '▪', '●'];

/// Delimiter-split tokens below this count suggest the section is not a list.
const MIN_LIST_TOKENS: usize = 3;
/// Word count above which a non-list section is treated as prose.
const PROSE_WORD_THRESHOLD: usize = 10;
/// Whitespace tokens this short carry no signal (articles, prepositions).
const MIN_TOKEN_LEN: usize = 3;

/// Splits a skills section into trimmed tokens.
///
/// The prose fallback exists because some résumés describe skills in sentence
/// form ("strong skills in problem solving and communication") rather than as
/// a delimited list.
pub fn parse_skills(section: &str) -> Vec<String> {
    let tokens: Vec<String> = section
        .split(DELIMITERS)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let word_count = section.split_whitespace().count();
    if tokens.len() >= MIN_LIST_TOKENS || word_count <= PROSE_WORD_THRESHOLD {
        return tokens;
    }

    section
        .split_whitespace()
        .map(|token| token.trim_end_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_list_splits_cleanly() {
        assert_eq!(parse_skills("Python, Go, Rust"), vec!["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_bullet_and_newline_lists() {
        assert_eq!(
            parse_skills("• Rust\n• Kubernetes\n• PostgreSQL"),
            vec!["Rust", "Kubernetes", "PostgreSQL"]
        );
    }

    #[test]
    fn test_pipe_separated_list() {
        assert_eq!(parse_skills("SQL | NoSQL | GraphQL"), vec!["SQL", "NoSQL", "GraphQL"]);
    }

    #[test]
    fn test_prose_section_falls_back_to_whitespace_tokens() {
        // >10 words, no delimiter hits beyond the sentence itself.
        let tokens = parse_skills(
            "I have strong skills in problem solving and communication across many teams",
        );
        assert!(tokens.contains(&"skills".to_string()));
        assert!(tokens.contains(&"communication".to_string()));
        // Short stopword-length tokens are dropped.
        assert!(!tokens.iter().any(|t| t == "I" || t == "in"));
        assert!(tokens.len() >= 5);
    }

    #[test]
    fn test_fallback_strips_trailing_punctuation() {
        let tokens = parse_skills(
            "Experienced with databases caching queues and many other kinds of distributed things.",
        );
        assert!(tokens.contains(&"things".to_string()));
        assert!(!tokens.iter().any(|t| t.ends_with('.')));
    }

    #[test]
    fn test_short_non_list_section_does_not_fall_back() {
        // Two tokens but only four words: too short to be prose, kept as-is.
        assert_eq!(parse_skills("Rust and Go, Python"), vec!["Rust and Go", "Python"]);
    }

    #[test]
    fn test_duplicates_are_preserved_in_source_order() {
        assert_eq!(
            parse_skills("Rust, SQL, Rust"),
            vec!["Rust", "SQL", "Rust"]
        );
    }

    #[test]
    fn test_empty_section_yields_no_tokens() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills("  \n ").is_empty());
    }
}
