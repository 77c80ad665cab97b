//! Display colors per route, derived from the route numbering scheme.
//!
//! The agency encodes service tiers in route numbers (school specials in
//! 600-899, community shuttles in 400-599) and in naming conventions
//! ("... Express", "BRT ..."). A numeric short name that matches none of the
//! ranges means the numbering scheme drifted and every curated table in this
//! crate is suspect, so it fails the batch instead of guessing.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// School specials
pub const SCHOOL_COLOR: &str = "1A5336";
/// Limited-stop express overlays
pub const EXPRESS_COLOR: &str = "E31837";
/// Bus rapid transit trunk routes
pub const BRT_COLOR: &str = "0060A9";

/// The four branded rapid-transit lines, each with its own published color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxLine {
    Orange,
    Yellow,
    Teal,
    Purple,
}

impl MaxLine {
    pub fn from_route_number(n: u32) -> Option<MaxLine> {
        match n {
            303 => Some(MaxLine::Orange),
            304 => Some(MaxLine::Yellow),
            306 => Some(MaxLine::Teal),
            307 => Some(MaxLine::Purple),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MaxLine::Orange => "F78F1E",
            MaxLine::Yellow => "FFCB05",
            MaxLine::Teal => "0093B2",
            MaxLine::Purple => "80379B",
        }
    }
}

/// The service tier a route's number and naming place it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorCategory {
    /// Regular service; the agency default color applies
    Default,
    Express,
    BusRapidTransit,
    School,
    /// One of the branded rapid-transit lines
    Line(MaxLine),
}

impl ColorCategory {
    /// The display color for the tier, or `None` for the agency default.
    pub fn color(self) -> Option<&'static str> {
        match self {
            ColorCategory::Default => None,
            ColorCategory::Express => Some(EXPRESS_COLOR),
            ColorCategory::BusRapidTransit => Some(BRT_COLOR),
            ColorCategory::School => Some(SCHOOL_COLOR),
            ColorCategory::Line(line) => Some(line.color()),
        }
    }
}

/// Non-numeric short names that are known and colorless: the on-demand zone
/// and the CTrain shuttle placeholder.
const NO_COLOR_SHORT_NAMES: &[&str] = &["OD", "CT"];

/// Classifies one route. The rules cascade top to bottom and are mutually
/// exclusive; range bounds are inclusive.
pub fn categorize(short_name: &str, long_name: &str) -> Result<ColorCategory, Error> {
    let trimmed = short_name.trim();
    if NO_COLOR_SHORT_NAMES
        .iter()
        .any(|token| token.eq_ignore_ascii_case(trimmed))
    {
        return Ok(ColorCategory::Default);
    }
    let number: u32 = trimmed.parse().map_err(|_| Error::UnknownRouteNumber {
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
    })?;

    if (600..=899).contains(&number) {
        return Ok(ColorCategory::School);
    }
    if ends_with_word(long_name, "express") {
        return Ok(ColorCategory::Express);
    }
    if starts_with_word(long_name, "brt") {
        return Ok(ColorCategory::BusRapidTransit);
    }
    if (1..=299).contains(&number) {
        return Ok(ColorCategory::Default);
    }
    if let Some(line) = MaxLine::from_route_number(number) {
        return Ok(ColorCategory::Line(line));
    }
    if (400..=599).contains(&number) {
        return Ok(ColorCategory::Default);
    }
    Err(Error::UnknownRouteNumber {
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
    })
}

/// Resolves the display color hex for one route, `None` meaning the agency
/// default.
pub fn resolve(short_name: &str, long_name: &str) -> Result<Option<&'static str>, Error> {
    categorize(short_name, long_name).map(ColorCategory::color)
}

fn ends_with_word(text: &str, word: &str) -> bool {
    let lowered = text.trim_end().to_lowercase();
    if !lowered.ends_with(word) {
        return false;
    }
    lowered[..lowered.len() - word.len()]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn starts_with_word(text: &str, word: &str) -> bool {
    let lowered = text.trim_start().to_lowercase();
    if !lowered.starts_with(word) {
        return false;
    }
    lowered[word.len()..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}
