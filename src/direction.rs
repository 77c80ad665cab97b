//! Cardinal direction vocabulary and the trailing-qualifier classifier.

use serde::{Deserialize, Serialize};

/// One of the four fixed cardinal directions used as a rider-facing
/// destination label on crosstown routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    /// The display form of the direction.
    pub fn label(self) -> &'static str {
        match self {
            Cardinal::North => "North",
            Cardinal::South => "South",
            Cardinal::East => "East",
            Cardinal::West => "West",
        }
    }
}

/// Suffix phrases the feed embeds in directional headsigns, e.g.
/// "Downtown - North".
const DIRECTION_SUFFIXES: &[(&str, Cardinal)] = &[
    (" - north", Cardinal::North),
    (" - south", Cardinal::South),
    (" - east", Cardinal::East),
    (" - west", Cardinal::West),
];

/// Infers a cardinal direction from a headsign's trailing qualifier.
///
/// Returns `None` when no suffix matches; that is "no classification
/// available", not an error.
pub fn classify(headsign: &str) -> Option<Cardinal> {
    let lowered = headsign.trim_end().to_lowercase();
    DIRECTION_SUFFIXES
        .iter()
        .find(|(suffix, _)| lowered.ends_with(suffix))
        .map(|&(_, cardinal)| cardinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_trailing_qualifiers() {
        assert_eq!(classify("Downtown - North"), Some(Cardinal::North));
        assert_eq!(classify("downtown - SOUTH  "), Some(Cardinal::South));
        assert_eq!(classify("City Centre - east"), Some(Cardinal::East));
        assert_eq!(classify("Bowness - West"), Some(Cardinal::West));
    }

    #[test]
    fn non_directional_headsigns_are_unclassified() {
        assert_eq!(classify("Downtown"), None);
        assert_eq!(classify("Northmount"), None);
        assert_eq!(classify(""), None);
    }
}
