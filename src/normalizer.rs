//! Context-keyed canonicalization pipelines for raw feed strings.
//!
//! Each pipeline is a fixed sequence of total rewrite passes over one string.
//! The sequence is the contract: abbreviation expansion must run before
//! generic casing, marker stripping before number stripping, and so on.
//! Every pipeline is idempotent, so partially cleaned upstream input is safe
//! to feed back through.

use crate::abbreviations::{is_street_type_word, STREET_TYPE_RULES};
use crate::labels;
use crate::rewrite::{RewriteRule, RuleTable};
use lazy_static::lazy_static;
use regex::Regex;

/// Which kind of feed string is being canonicalized. The station/stn
/// directionality and the headsign-only passes hang off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeContext {
    StopName,
    TripHeadsign,
    RouteLongName,
}

lazy_static! {
    // Calgary quadrant codes standing alone at either edge of a label.
    // The groups repeat so stacked codes come off in one pass.
    static ref LEADING_QUADRANT_RE: Regex =
        Regex::new(r"(?i)^\s*(?:(?:NE|NW|SE|SW)[\s,]+)+").unwrap();
    static ref TRAILING_QUADRANT_RE: Regex =
        Regex::new(r"(?i)(?:[\s,]+(?:NE|NW|SE|SW))+\s*$").unwrap();

    static ref AT_CONJUNCTION_RE: Regex = Regex::new(r"\s*@\s*").unwrap();

    static ref TRAILING_PAREN_RE: Regex = Regex::new(r"\s*\([^()]*\)\s*$").unwrap();
    static ref LEADING_LINE_MARKER_RE: Regex =
        Regex::new(r"(?i)^\s*(?:(?:BRT|MAX\s+(?:orange|yellow|teal|purple))\b\s*)+").unwrap();
    static ref LEADING_ROUTE_NUMBER_RE: Regex = Regex::new(r"(?i)^\s*(?:route\s+)?\d+\s+").unwrap();
    static ref VIA_CLAUSE_RE: Regex = Regex::new(r"(?i)\s+via\s+.*$").unwrap();
    static ref TRAILING_EXPRESS_RE: Regex = Regex::new(r"(?i)(?:\s+express)+\s*$").unwrap();

    // Stop names and route names spell the station out; headsigns abbreviate
    static ref STOP_ALIASES: RuleTable = RuleTable::new(vec![
        RewriteRule::token("MRU|MOUNT ROYAL UNIVERSITY", "MRU"),
        RewriteRule::token("STN|STATION", "Station"),
        RewriteRule::anywhere(r"\bMOUNT\s*$", "Mt"),
    ]);
    static ref HEADSIGN_ALIASES: RuleTable = RuleTable::new(vec![
        RewriteRule::token("MRU|MOUNT ROYAL UNIVERSITY", "MRU"),
        RewriteRule::token("STN|STATION", "Stn"),
        RewriteRule::anywhere(r"\bMOUNT\s*$", "Mt"),
    ]);
}

/// Canonicalizes one raw feed string. Deterministic and total: malformed
/// text degrades to whatever the passes leave behind, it is never rejected.
pub fn normalize(raw: &str, context: NormalizeContext) -> String {
    match context {
        NormalizeContext::StopName => normalize_stop_name(raw),
        NormalizeContext::TripHeadsign => normalize_trip_headsign(raw),
        NormalizeContext::RouteLongName => normalize_route_long_name(raw),
    }
}

fn normalize_stop_name(raw: &str) -> String {
    let text = strip_edge_quadrants(raw);
    let text = AT_CONJUNCTION_RE.replace_all(&text, " / ");
    let text = STREET_TYPE_RULES.apply(&text);
    let text = STOP_ALIASES.apply(&text);
    let text = labels::title_case_label(&text);
    let text = labels::strip_leading_slash(&text);
    let text = labels::clean_bounds(&text);
    let text = labels::clean_street_types(&text);
    let text = labels::clean_numbers(&text);
    labels::clean_label(&text)
}

fn normalize_trip_headsign(raw: &str) -> String {
    let text = strip_trailing_parens(raw);
    let text = strip_edge_quadrants(&text);
    let text = AT_CONJUNCTION_RE.replace_all(&text, " @ ");
    let text = strip_leading_line_marker(&text);
    let text = strip_leading_route_number(&text);
    let text = VIA_CLAUSE_RE.replace(&text, "");
    let text = TRAILING_EXPRESS_RE.replace(&text, "");
    let text = STREET_TYPE_RULES.apply(&text);
    let text = HEADSIGN_ALIASES.apply(&text);
    let text = labels::title_case_label(&text);
    let text = labels::clean_bounds(&text);
    let text = labels::clean_street_types(&text);
    let text = labels::clean_numbers(&text);
    labels::clean_label(&text)
}

fn normalize_route_long_name(raw: &str) -> String {
    let text = STREET_TYPE_RULES.apply(raw);
    let text = STOP_ALIASES.apply(&text);
    let text = labels::title_case_label(&text);
    let text = labels::clean_bounds(&text);
    let text = labels::clean_street_types(&text);
    let text = labels::clean_numbers(&text);
    labels::clean_label(&text)
}

fn strip_edge_quadrants(text: &str) -> String {
    let text = LEADING_QUADRANT_RE.replace(text, "");
    TRAILING_QUADRANT_RE.replace(&text, "").into_owned()
}

/// Drops trailing parenthetical qualifiers, however many are stacked. A
/// headsign that is nothing but a parenthetical is left alone.
fn strip_trailing_parens(text: &str) -> String {
    let mut out = text.trim_end().to_string();
    while let Some(start) = TRAILING_PAREN_RE.find(&out).map(|m| m.start()) {
        if start == 0 {
            break;
        }
        out.truncate(start);
    }
    out
}

/// Drops a leading "BRT" or "MAX <line>" brand marker, keeping the headsign
/// intact when the marker is all there is.
fn strip_leading_line_marker(text: &str) -> String {
    let stripped = LEADING_LINE_MARKER_RE.replace(text, "");
    if stripped.trim().is_empty() {
        text.to_string()
    } else {
        stripped.into_owned()
    }
}

/// Drops a leading bare route-number token ("Route 12 Downtown",
/// "12 Downtown"). Numbers that start a street name ("16 AV", "14 Avenue")
/// and headsigns that are nothing but the number are left alone.
fn strip_leading_route_number(text: &str) -> String {
    let Some(found) = LEADING_ROUTE_NUMBER_RE.find(text) else {
        return text.to_string();
    };
    let remainder = &text[found.end()..];
    let next_word = remainder
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    if remainder.trim().is_empty() || is_street_type_word(next_word) {
        text.to_string()
    } else {
        remainder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_names_expand_and_strip_quadrants() {
        assert_eq!(normalize("16 AV NW", NormalizeContext::StopName), "16 Avenue");
        assert_eq!(
            normalize("ERIN WOODS DR SE", NormalizeContext::StopName),
            "Erin Woods Drive"
        );
        // Stacked codes come off in a single pass
        assert_eq!(
            normalize("16 AV NW NE", NormalizeContext::StopName),
            "16 Avenue"
        );
    }

    #[test]
    fn stop_names_convert_at_separators() {
        assert_eq!(
            normalize("CENTRE ST @ 16 AV NW", NormalizeContext::StopName),
            "Centre Street / 16 Avenue"
        );
        assert_eq!(
            normalize("@ 4 ST SW", NormalizeContext::StopName),
            "4 Street"
        );
    }

    #[test]
    fn station_directionality_depends_on_context() {
        assert_eq!(
            normalize("Chinook Stn", NormalizeContext::StopName),
            "Chinook Station"
        );
        assert_eq!(
            normalize("Chinook Stn", NormalizeContext::TripHeadsign),
            "Chinook Stn"
        );
        assert_eq!(
            normalize("Chinook Station", NormalizeContext::TripHeadsign),
            "Chinook Stn"
        );
    }

    #[test]
    fn institution_aliases_collapse_to_mru() {
        assert_eq!(
            normalize("MOUNT ROYAL UNIVERSITY", NormalizeContext::StopName),
            "MRU"
        );
        assert_eq!(
            normalize("mru west gate", NormalizeContext::StopName),
            "MRU West Gate"
        );
    }

    #[test]
    fn trailing_mount_abbreviates() {
        assert_eq!(
            normalize("SADDLETOWNE MOUNT", NormalizeContext::StopName),
            "Saddletowne Mt"
        );
        // An interior "Mount" stays spelled out
        assert_eq!(
            normalize("MOUNT PLEASANT", NormalizeContext::StopName),
            "Mount Pleasant"
        );
    }

    #[test]
    fn headsigns_drop_markers_and_qualifiers() {
        assert_eq!(
            normalize("MAX Orange Saddletowne", NormalizeContext::TripHeadsign),
            "Saddletowne"
        );
        assert_eq!(
            normalize("BRT Airport via 96 AV", NormalizeContext::TripHeadsign),
            "Airport"
        );
        assert_eq!(
            normalize("Route 12 Somerset Stn (AM only)", NormalizeContext::TripHeadsign),
            "Somerset Stn"
        );
        assert_eq!(
            normalize("12 Downtown Express", NormalizeContext::TripHeadsign),
            "Downtown"
        );
    }

    #[test]
    fn leading_numbers_that_start_street_names_survive() {
        assert_eq!(
            normalize("16 AV", NormalizeContext::TripHeadsign),
            "16 Avenue"
        );
        assert_eq!(
            normalize("12 14 AV", NormalizeContext::TripHeadsign),
            "14 Avenue"
        );
    }

    #[test]
    fn numeric_only_headsigns_survive() {
        assert_eq!(normalize("12", NormalizeContext::TripHeadsign), "12");
        assert_eq!(normalize("Route 12", NormalizeContext::TripHeadsign), "Route 12");
        assert_eq!(normalize("BRT", NormalizeContext::TripHeadsign), "BRT");
    }

    #[test]
    fn stacked_parentheticals_come_off_together() {
        assert_eq!(
            normalize("Downtown (peak) (AM only)", NormalizeContext::TripHeadsign),
            "Downtown"
        );
    }

    #[test]
    fn route_long_names_keep_their_shape() {
        assert_eq!(
            normalize("17 AVENUE SE BRT", NormalizeContext::RouteLongName),
            "17 Avenue SE BRT"
        );
        assert_eq!(
            normalize("MCKNIGHT-WESTWINDS LRT STATION", NormalizeContext::RouteLongName),
            "McKnight-Westwinds LRT Station"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("", NormalizeContext::StopName), "");
        assert_eq!(normalize("   ", NormalizeContext::TripHeadsign), "");
    }
}
