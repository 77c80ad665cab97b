//! Generic display-label primitives: casing, bounds and number cleanup.
//!
//! Policy:
//! - Title-case every word, keeping a fixed list of acronyms and compass
//!   codes verbatim in upper case.
//! - Respell the handful of proper nouns that word-wise casing mangles.
//! - Keep this logic single-sourced so stop names, headsigns and route names
//!   cannot drift apart.

use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

lazy_static! {
    /// Words kept verbatim in upper case by the title-casing pass.
    static ref CASED_VERBATIM: FxHashSet<&'static str> = [
        "AM", "PM", "EB", "WB", "NB", "SB", "NE", "NW", "SE", "SW", "LRT", "BRT", "MRU", "SAIT",
    ]
    .into_iter()
    .collect();

    /// Proper nouns whose canonical spelling is not first-letter-upper.
    static ref PROPER_NOUNS: FxHashMap<&'static str, &'static str> = [
        ("MCKNIGHT", "McKnight"),
        ("MCCALL", "McCall"),
        ("MCKENZIE", "McKenzie"),
    ]
    .into_iter()
    .collect();

    static ref NUMBER_SUFFIX_RE: Regex = Regex::new(r"\b(\d+)\s?(?i:(st|nd|rd|th))\b").unwrap();
    static ref LEADING_SLASH_RE: Regex = Regex::new(r"^\s*/\s*").unwrap();
    static ref WHITESPACE_RUN_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Title-cases a label word by word. Acronyms and compass codes from the
/// exception list stay upper case; everything else gets first-letter-upper.
pub fn title_case_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut word = String::new();
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
        } else {
            push_cased_word(&mut out, &word);
            word.clear();
            out.push(ch);
        }
    }
    push_cased_word(&mut out, &word);
    out
}

fn push_cased_word(out: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    let upper = word.to_uppercase();
    if CASED_VERBATIM.contains(upper.as_str()) {
        out.push_str(&upper);
        return;
    }
    if let Some(proper) = PROPER_NOUNS.get(upper.as_str()) {
        out.push_str(proper);
        return;
    }
    let mut seen_letter = false;
    for ch in word.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
        } else if seen_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
            seen_letter = true;
        }
    }
}

/// Trims stray punctuation and whitespace from both ends of a label.
pub fn clean_bounds(label: &str) -> String {
    label
        .trim_matches(|c: char| {
            c.is_whitespace() || matches!(c, '-' | ',' | '.' | ';' | ':' | '/' | '#' | '*')
        })
        .to_string()
}

/// Re-asserts catalog casing on full street-type words that arrived already
/// expanded in the feed.
pub fn clean_street_types(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut word = String::new();
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
        } else {
            push_street_word(&mut out, &word);
            word.clear();
            out.push(ch);
        }
    }
    push_street_word(&mut out, &word);
    out
}

fn push_street_word(out: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    let upper = word.to_uppercase();
    for &(_, expansion) in crate::abbreviations::STREET_TYPES {
        if upper == expansion.to_uppercase() {
            out.push_str(expansion);
            return;
        }
    }
    out.push_str(word);
}

/// Normalizes ordinal suffixes onto their number: "4 Th" becomes "4th",
/// "3Rd" becomes "3rd".
pub fn clean_numbers(label: &str) -> String {
    NUMBER_SUFFIX_RE
        .replace_all(label, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], caps[2].to_lowercase())
        })
        .into_owned()
}

/// Removes a bare leading "/" conjunction remnant.
pub fn strip_leading_slash(label: &str) -> String {
    LEADING_SLASH_RE.replace(label, "").into_owned()
}

/// Final pass: collapses internal whitespace runs and trims.
pub fn clean_label(label: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(label.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_keeps_acronyms() {
        assert_eq!(title_case_label("16 AVENUE NE"), "16 Avenue NE");
        assert_eq!(title_case_label("SAIT LRT station"), "SAIT LRT Station");
        assert_eq!(title_case_label("mru south gate"), "MRU South Gate");
    }

    #[test]
    fn title_case_respells_proper_nouns() {
        assert_eq!(
            title_case_label("MCKNIGHT-WESTWINDS"),
            "McKnight-Westwinds"
        );
        assert_eq!(title_case_label("mckenzie towne"), "McKenzie Towne");
    }

    #[test]
    fn title_case_handles_numbered_words() {
        assert_eq!(title_case_label("HIGHWAY 1A"), "Highway 1A");
        // Ordinal suffixes are finished off by the number cleanup pass
        assert_eq!(clean_numbers(&title_case_label("68TH street")), "68th Street");
    }

    #[test]
    fn number_cleanup_joins_ordinal_suffixes() {
        assert_eq!(clean_numbers("4 Th Street"), "4th Street");
        assert_eq!(clean_numbers("3Rd Avenue"), "3rd Avenue");
        assert_eq!(clean_numbers("Highway 1A"), "Highway 1A");
    }

    #[test]
    fn bounds_cleanup_trims_stray_punctuation() {
        assert_eq!(clean_bounds(" - Downtown, "), "Downtown");
        assert_eq!(clean_bounds("Downtown - North"), "Downtown - North");
    }

    #[test]
    fn label_cleanup_collapses_whitespace() {
        assert_eq!(clean_label("  Centre   Street  "), "Centre Street");
    }
}
