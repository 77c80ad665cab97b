//! Non-revenue trip detection.
//!
//! Runs on the raw headsign before any other processing; excluded trips are
//! dropped from the import entirely, not relabeled.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OUT_OF_SERVICE_RE: Regex = Regex::new(r"(?i)\bout\s+of\s+service\b").unwrap();
}

/// Returns true iff the raw headsign marks the trip as not in revenue
/// service.
pub fn is_excluded(raw_headsign: &str) -> bool {
    OUT_OF_SERVICE_RE.is_match(raw_headsign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_phrase_matches_case_insensitively() {
        assert!(is_excluded("12 Downtown - Out of Service"));
        assert!(is_excluded("OUT OF SERVICE"));
        assert!(is_excluded("out  of  service (returning to garage)"));
    }

    #[test]
    fn partial_words_do_not_match() {
        assert!(!is_excluded("12 Downtown"));
        assert!(!is_excluded("Scout Of Serviceberry"));
        assert!(!is_excluded("Serviceberry Out"));
    }
}
