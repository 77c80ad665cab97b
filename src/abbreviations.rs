//! Street-type and place-type abbreviation catalog.
//!
//! The feed abbreviates street types to two or three letters ("16 AV NW",
//! "ERIN WOODS DR SE"). Each entry expands a whole token only; the pattern
//! column may alternate several spellings of the same abbreviation.

use crate::rewrite::{RewriteRule, RuleTable};
use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

pub const STREET_TYPES: &[(&str, &str)] = &[
    ("AV|AVE", "Avenue"),
    ("PA", "Park"),
    ("HT", "Heights"),
    ("GV", "Grove"),
    ("PT", "Point"),
    ("TC", "Terrace"),
    ("RI", "Rise"),
    ("MR", "Manor"),
    ("DR", "Drive"),
    ("ST", "Street"),
    ("VI", "Villas"),
    ("PZ", "Plaza"),
    ("WY", "Way"),
    ("GR", "Green"),
    ("BV", "Boulevard"),
    ("GA|GT", "Gate"),
    ("RD", "Road"),
    ("LI|LINK", "Link"),
    ("PL", "Place"),
    ("SQ", "Square"),
    ("CL", "Close"),
    ("CR", "Crescent"),
    ("GD", "Garden"),
    ("GDN", "Gardens"),
    ("LN", "Lane"),
    ("CO", "Ct"),
    ("ME", "Mews"),
    ("TR", "Trail"),
    ("LD", "Landing"),
    ("HL", "Hill"),
    ("PK", "Park"),
    ("CM", "Common"),
    ("CV", "Cove"),
    ("VW", "View"),
    ("BY|BA|BAY", "Bay"),
    ("CE|CTR", "Center"),
    ("PY", "Parkway"),
    ("PR", "Parade"),
    ("PS", "Passage"),
    ("RO", "Row"),
    ("MT", "Mount"),
    ("TERR", "Terrace"),
];

lazy_static! {
    /// Compiled expansion table, built once and shared by every pipeline.
    pub static ref STREET_TYPE_RULES: RuleTable = RuleTable::new(
        STREET_TYPES
            .iter()
            .map(|&(pattern, replacement)| RewriteRule::token(pattern, replacement))
            .collect(),
    );

    static ref STREET_TYPE_TOKENS: FxHashSet<String> = {
        let mut tokens = FxHashSet::default();
        for &(pattern, expansion) in STREET_TYPES {
            for spelling in pattern.split('|') {
                tokens.insert(spelling.to_string());
            }
            tokens.insert(expansion.to_uppercase());
        }
        tokens
    };
}

/// True when `word` is a street-type abbreviation or one of the expansions.
pub fn is_street_type_word(word: &str) -> bool {
    STREET_TYPE_TOKENS.contains(&word.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_whole_tokens_only() {
        assert_eq!(STREET_TYPE_RULES.apply("16 AV"), "16 Avenue");
        assert_eq!(STREET_TYPE_RULES.apply("SADDLETOWNE CIR"), "SADDLETOWNE CIR");
        // "DR" must not fire inside "DRIVE"
        assert_eq!(STREET_TYPE_RULES.apply("ELBOW DRIVE"), "ELBOW DRIVE");
    }

    #[test]
    fn alternate_spellings_share_an_expansion() {
        assert_eq!(STREET_TYPE_RULES.apply("8 AVE"), "8 Avenue");
        assert_eq!(STREET_TYPE_RULES.apply("CASTLERIDGE BA"), "CASTLERIDGE Bay");
        assert_eq!(STREET_TYPE_RULES.apply("VILLAGE TERR"), "VILLAGE Terrace");
    }

    #[test]
    fn expansions_are_stable_under_reapplication() {
        for &(_, replacement) in STREET_TYPES {
            assert_eq!(STREET_TYPE_RULES.apply(replacement), replacement);
        }
    }
}
