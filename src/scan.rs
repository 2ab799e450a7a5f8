use crate::error::Result;
use crate::extract::extract_text;

/// Splits a caller-supplied comma-separated keyword string into the
/// normalized keyword set: each piece trimmed and lower-cased.
/// Duplicates and empty pieces are kept as-is.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .collect()
}

/// Returns the first keyword that is a substring of the text,
/// case-insensitively, or None if no keyword matches. The text is
/// lower-cased once; keywords are expected to be lower-cased already
/// (see `parse_keywords`). Short-circuits on the first match.
pub fn first_match(text: &str, keywords: &[String]) -> Option<String> {
    let lower_case_text = text.to_lowercase();
    keywords
        .iter()
        .find(|keyword| lower_case_text.contains(keyword.as_str()))
        .cloned()
}

/// Scans one PDF document for the keyword set: extract text, then match.
/// Reports the matched keyword for logging; callers surface presence only,
/// no positions or counts. Extraction failures propagate.
pub fn scan_bytes(bytes: &[u8], keywords: &[String]) -> Result<Option<String>> {
    let text = extract_text(bytes)?;
    Ok(first_match(&text, keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords_trims_and_lowercases() {
        let keywords = parse_keywords("Foo, BAR , foo");
        assert_eq!(keywords, vec!["foo", "bar", "foo"]);
    }

    #[test]
    fn parse_keywords_keeps_duplicates_and_empty_pieces() {
        let keywords = parse_keywords("a,,a");
        assert_eq!(keywords, vec!["a", "", "a"]);
    }

    #[test]
    fn parse_keywords_single_keyword() {
        assert_eq!(parse_keywords("Invoice"), vec!["invoice"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let keywords = parse_keywords("INVOICE");
        assert!(first_match("Please find the invoice attached.", &keywords).is_some());
        assert!(first_match("INVOICE #42", &keywords).is_some());
    }

    #[test]
    fn match_reports_the_keyword_that_hit() {
        let keywords = parse_keywords("receipt,invoice");
        let matched = first_match("monthly invoice summary", &keywords);
        assert_eq!(matched.as_deref(), Some("invoice"));
    }

    #[test]
    fn no_match_when_no_keyword_present() {
        let keywords = parse_keywords("xyz123");
        assert_eq!(first_match("nothing relevant here", &keywords), None);
    }

    #[test]
    fn substring_match_does_not_require_word_boundary() {
        let keywords = parse_keywords("voice");
        assert!(first_match("see the invoices", &keywords).is_some());
    }

    #[test]
    fn empty_keyword_matches_any_text() {
        let keywords = parse_keywords("");
        assert!(first_match("anything at all", &keywords).is_some());
    }

    #[test]
    fn match_is_deterministic() {
        let keywords = parse_keywords("Alpha,Beta");
        let text = "some beta content";
        let first = first_match(text, &keywords);
        for _ in 0..10 {
            assert_eq!(first_match(text, &keywords), first);
        }
    }

    #[test]
    fn scan_bytes_finds_keyword_in_valid_pdf() {
        let bytes = include_bytes!("../tests/fixtures/invoice.pdf");
        let keywords = parse_keywords("Invoice,Receipt");
        let matched = scan_bytes(bytes, &keywords).unwrap();
        assert_eq!(matched.as_deref(), Some("invoice"));
    }

    #[test]
    fn scan_bytes_reports_no_match_in_valid_pdf() {
        let bytes = include_bytes!("../tests/fixtures/invoice.pdf");
        let keywords = parse_keywords("xyz123");
        assert_eq!(scan_bytes(bytes, &keywords).unwrap(), None);
    }

    #[test]
    fn scan_bytes_fails_on_garbage_input() {
        let keywords = parse_keywords("invoice");
        assert!(scan_bytes(b"definitely not a pdf", &keywords).is_err());
    }
}
