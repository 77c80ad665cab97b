//! Rider-facing destination labels per (route, direction).
//!
//! Most routes in the feed are fine with generic headsign normalization; the
//! ones riders actually look for get a curated entry here. The table follows
//! the current route network; direction 0/1 matches the feed's
//! `direction_id`.

use crate::direction::Cardinal;
use crate::model::DirectionId;
use crate::normalizer::{normalize, NormalizeContext};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// A curated override value: either the literal label to show, or a cardinal
/// direction rendered through the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Literal(&'static str),
    Direction(Cardinal),
}

/// Destination names shared by more than one route.
mod places {
    pub const AIRPORT: &str = "Airport";
    pub const ANDERSON: &str = "Anderson";
    pub const APPLEWOOD: &str = "Applewood";
    pub const AUBURN_BAY: &str = "Auburn Bay";
    pub const BOWNESS: &str = "Bowness";
    pub const BRENTWOOD: &str = "Brentwood";
    pub const BRIDGELAND: &str = "Bridgeland";
    pub const CHINOOK: &str = "Chinook";
    pub const CITY_CENTRE: &str = "City Centre";
    pub const COVENTRY_HILLS: &str = "Coventry Hills";
    pub const CRANSTON: &str = "Cranston";
    pub const DALHOUSIE: &str = "Dalhousie";
    pub const DOUGLASDALE: &str = "Douglasdale";
    pub const DOWNTOWN: &str = "Downtown";
    pub const EAST_HILLS: &str = "East Hills";
    pub const ERIN_WOODS: &str = "Erin Woods";
    pub const FOOTHILLS: &str = "Foothills Medical Centre";
    pub const HERITAGE: &str = "Heritage";
    pub const HUNTINGTON: &str = "Huntington";
    pub const MARLBOROUGH: &str = "Marlborough";
    pub const MCKENZIE_TOWNE: &str = "McKenzie Towne";
    pub const MCKNIGHT: &str = "McKnight-Westwinds";
    pub const MRU: &str = "MRU";
    pub const NORTH_HAVEN: &str = "North Haven";
    pub const NORTH_POINTE: &str = "North Pointe";
    pub const OAKRIDGE: &str = "Oakridge";
    pub const SADDLETOWNE: &str = "Saddletowne";
    pub const SAIT: &str = "SAIT";
    pub const SANDSTONE: &str = "Sandstone";
    pub const SETON: &str = "Seton";
    pub const SIXTY_NINTH_STREET: &str = "69 Street";
    pub const SOMERSET: &str = "Somerset-Bridlewood";
    pub const SOUTH_CALGARY: &str = "South Calgary";
    pub const TUSCANY: &str = "Tuscany";
    pub const VISTA_HEIGHTS: &str = "Vista Heights";
    pub const WESTBROOK: &str = "Westbrook";
    pub const WOODBINE: &str = "Woodbine";
}

use self::places::*;

use self::Destination::{Direction, Literal};
use crate::direction::Cardinal::{East, North, South, West};

/// (route id, direction id, destination). Kept sorted by route for review
/// against the published network map.
const OVERRIDES: &[(u32, u8, Destination)] = &[
    (1, 0, Literal("Forest Lawn")),
    (1, 1, Literal(BOWNESS)),
    (2, 0, Direction(North)),
    (2, 1, Direction(South)),
    (3, 0, Literal(SANDSTONE)),
    (3, 1, Literal("Elbow Drive")),
    (4, 0, Literal(HUNTINGTON)),
    (4, 1, Literal(CITY_CENTRE)),
    (5, 0, Literal(NORTH_HAVEN)),
    (5, 1, Literal(DOWNTOWN)),
    (6, 0, Literal("Killarney 17 Avenue")),
    (6, 1, Literal(DOWNTOWN)),
    (7, 0, Literal(SOUTH_CALGARY)),
    (7, 1, Literal(DOWNTOWN)),
    (8, 0, Literal(NORTH_POINTE)),
    (8, 1, Literal(FOOTHILLS)),
    (9, 0, Literal("Varsity Acres")),
    (9, 1, Literal(BRIDGELAND)),
    (10, 0, Literal(DALHOUSIE)),
    (10, 1, Literal("Southcentre")),
    (11, 0, Literal(DOUGLASDALE)),
    (11, 1, Literal(DOWNTOWN)),
    (13, 0, Literal("Mount Royal")),
    (13, 1, Literal(DOWNTOWN)),
    (14, 0, Literal("Crescent Heights")),
    (14, 1, Literal(DOWNTOWN)),
    (16, 0, Literal(COVENTRY_HILLS)),
    (16, 1, Literal(HUNTINGTON)),
    (17, 0, Literal("Renfrew")),
    (17, 1, Literal("Ramsay")),
    (18, 0, Literal(MRU)),
    (18, 1, Literal("Lakeview")),
    (19, 0, Direction(East)),
    (19, 1, Direction(West)),
    (20, 0, Literal(HERITAGE)),
    (20, 1, Literal("Northmount")),
    (21, 0, Literal("Foothills Industrial")),
    (21, 1, Literal(MARLBOROUGH)),
    (22, 0, Literal(DALHOUSIE)),
    (22, 1, Literal(MRU)),
    (23, 0, Literal(SADDLETOWNE)),
    (23, 1, Literal(FOOTHILLS)),
    (24, 0, Literal("Ogden")),
    (24, 1, Literal(CITY_CENTRE)),
    (25, 0, Literal(APPLEWOOD)),
    (25, 1, Literal(DOWNTOWN)),
    (26, 0, Literal("Franklin")),
    (26, 1, Literal(MARLBOROUGH)),
    (28, 0, Literal("Lynnwood")),
    (28, 1, Literal(DOWNTOWN)),
    (29, 0, Literal("Rundlehorn")),
    (29, 1, Literal(MARLBOROUGH)),
    (30, 0, Literal(VISTA_HEIGHTS)),
    (30, 1, Literal(DOWNTOWN)),
    (32, 0, Literal(FOOTHILLS)),
    (32, 1, Literal("Sunridge")),
    (33, 0, Literal("Barlow Stn")),
    (33, 1, Literal(VISTA_HEIGHTS)),
    (37, 0, Literal("Canyon Meadows")),
    (37, 1, Literal(ANDERSON)),
    (38, 0, Literal("Temple")),
    (38, 1, Literal("Rundle Stn")),
    (40, 0, Literal(CHINOOK)),
    (40, 1, Literal(DOWNTOWN)),
    (41, 0, Literal("Lynnview")),
    (41, 1, Literal(CHINOOK)),
    (43, 0, Literal(MCKENZIE_TOWNE)),
    (43, 1, Literal(CHINOOK)),
    (45, 0, Literal(APPLEWOOD)),
    (45, 1, Literal(MARLBOROUGH)),
    (49, 0, Literal("Forest Heights")),
    (49, 1, Literal(DOWNTOWN)),
    (52, 0, Literal("Evergreen")),
    (52, 1, Literal(SOMERSET)),
    (55, 0, Literal("Falconridge")),
    (55, 1, Literal(MCKNIGHT)),
    (56, 0, Literal("Silverado")),
    (56, 1, Literal(ANDERSON)),
    (57, 0, Literal(ERIN_WOODS)),
    (57, 1, Literal("McCall Way")),
    (62, 0, Literal("Hidden Valley")),
    (62, 1, Literal(DOWNTOWN)),
    (69, 0, Literal("Deerfoot Centre")),
    (69, 1, Literal(CITY_CENTRE)),
    (72, 0, Literal("Circle Route")),
    (73, 0, Literal("Circle Route")),
    (74, 0, Literal(TUSCANY)),
    (74, 1, Literal(BRENTWOOD)),
    (79, 0, Literal(HERITAGE)),
    (79, 1, Literal(WOODBINE)),
    (80, 0, Literal(HERITAGE)),
    (80, 1, Literal(OAKRIDGE)),
    (81, 0, Literal(OAKRIDGE)),
    (81, 1, Literal(CHINOOK)),
    (85, 0, Literal(SADDLETOWNE)),
    (85, 1, Literal(MCKNIGHT)),
    (90, 0, Literal(BRIDGELAND)),
    (90, 1, Literal(CITY_CENTRE)),
    (92, 0, Literal(MCKENZIE_TOWNE)),
    (92, 1, Literal(ANDERSON)),
    (93, 0, Literal("Coach Hill")),
    (93, 1, Literal(WESTBROOK)),
    (94, 0, Direction(East)),
    (94, 1, Direction(West)),
    (100, 0, Literal(AIRPORT)),
    (100, 1, Literal(MCKNIGHT)),
    (102, 0, Literal(DOUGLASDALE)),
    (102, 1, Literal(DOWNTOWN)),
    (103, 0, Literal(MCKENZIE_TOWNE)),
    (103, 1, Literal(DOWNTOWN)),
    (107, 0, Literal(SOUTH_CALGARY)),
    (107, 1, Literal(CITY_CENTRE)),
    (109, 0, Literal("Harvest Hills")),
    (109, 1, Literal(DOWNTOWN)),
    (112, 0, Literal("Westhills")),
    (112, 1, Literal(DOWNTOWN)),
    (114, 0, Literal("Citadel")),
    (114, 1, Literal(BRENTWOOD)),
    (116, 0, Literal(COVENTRY_HILLS)),
    (116, 1, Literal(DOWNTOWN)),
    (125, 0, Literal(ERIN_WOODS)),
    (125, 1, Literal(CITY_CENTRE)),
    (126, 0, Literal(APPLEWOOD)),
    (126, 1, Literal(CITY_CENTRE)),
    (133, 0, Literal(CRANSTON)),
    (133, 1, Literal(SOMERSET)),
    (142, 0, Literal("Panorama Hills")),
    (142, 1, Literal(NORTH_POINTE)),
    (145, 0, Literal("Legacy")),
    (145, 1, Literal(SOMERSET)),
    (151, 0, Literal("New Brighton")),
    (151, 1, Literal(SOMERSET)),
    (158, 0, Literal("Royal Oak")),
    (158, 1, Literal(TUSCANY)),
    (174, 0, Literal(TUSCANY)),
    (174, 1, Literal("Tuscany Stn")),
    (201, 0, Literal(SOMERSET)),
    (201, 1, Literal(TUSCANY)),
    (202, 0, Literal(SADDLETOWNE)),
    (202, 1, Literal(SIXTY_NINTH_STREET)),
    (300, 0, Literal(AIRPORT)),
    (300, 1, Literal(DOWNTOWN)),
    (301, 0, Literal("Country Hills")),
    (301, 1, Literal(DOWNTOWN)),
    (302, 0, Literal(SETON)),
    (302, 1, Literal(DOWNTOWN)),
    (303, 0, Literal(SADDLETOWNE)),
    (303, 1, Literal(BRENTWOOD)),
    (304, 0, Literal("Woodpark")),
    (304, 1, Literal(CITY_CENTRE)),
    (306, 0, Literal(SETON)),
    (306, 1, Literal(WESTBROOK)),
    (307, 0, Literal(EAST_HILLS)),
    (307, 1, Literal(CITY_CENTRE)),
    (404, 0, Literal(HUNTINGTON)),
    (404, 1, Literal(SAIT)),
    (405, 0, Literal("Thorncliffe")),
    (405, 1, Literal(CITY_CENTRE)),
    (406, 0, Literal(AUBURN_BAY)),
    (406, 1, Literal(HERITAGE)),
    (408, 0, Literal("Valleyridge")),
    (408, 1, Literal(BOWNESS)),
    (414, 0, Literal(BRIDGELAND)),
    (414, 1, Literal(SAIT)),
    (420, 0, Direction(North)),
    (420, 1, Direction(South)),
    (425, 0, Literal("Sage Hill")),
    (425, 1, Literal(NORTH_POINTE)),
    (430, 0, Literal(SANDSTONE)),
    (430, 1, Literal(NORTH_POINTE)),
    (433, 0, Literal("Martindale")),
    (433, 1, Literal(SADDLETOWNE)),
    (439, 0, Literal("Discovery Ridge")),
    (439, 1, Literal(WESTBROOK)),
    (440, 0, Direction(East)),
    (440, 1, Direction(West)),
    (445, 0, Literal("Skyview Ranch")),
    (445, 1, Literal(SADDLETOWNE)),
    (448, 0, Literal("Cityscape")),
    (448, 1, Literal(SADDLETOWNE)),
    (453, 0, Literal(AUBURN_BAY)),
    (453, 1, Literal(SETON)),
    (456, 0, Literal("Cougar Ridge")),
    (456, 1, Literal(WESTBROOK)),
    (468, 0, Literal(CRANSTON)),
    (468, 1, Literal(SETON)),
    (502, 0, Literal("Sherwood")),
    (502, 1, Literal(NORTH_POINTE)),
    (627, 0, Literal("Columbia College")),
    (627, 1, Literal(ANDERSON)),
];

lazy_static! {
    /// The override table, keyed by (route id, direction), built once at
    /// startup and read-only afterwards.
    pub static ref HEADSIGN_OVERRIDES: FxHashMap<(u32, DirectionId), Destination> = OVERRIDES
        .iter()
        .map(|&(route_id, direction, destination)| {
            ((route_id, DirectionId::from(direction)), destination)
        })
        .collect();
}

/// Resolves the rider-facing destination label for one trip.
///
/// First match wins: explicit literal override, then cardinal-direction
/// override, then generic normalization of the raw headsign. A route with no
/// entry for this direction silently falls through to normalization.
pub fn resolve(route_id: u32, direction_id: DirectionId, raw_headsign: &str) -> String {
    match HEADSIGN_OVERRIDES.get(&(route_id, direction_id)) {
        Some(Destination::Literal(label)) => (*label).to_string(),
        Some(Destination::Direction(cardinal)) => cardinal.label().to_string(),
        None => normalize(raw_headsign, NormalizeContext::TripHeadsign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_keys_are_unique() {
        assert_eq!(HEADSIGN_OVERRIDES.len(), OVERRIDES.len());
    }

    #[test]
    fn override_labels_are_already_canonical() {
        // Curated labels are returned verbatim, so they must not be texts the
        // normalizer would still want to change
        for &(_, _, destination) in OVERRIDES {
            if let Destination::Literal(label) = destination {
                assert_eq!(
                    normalize(label, NormalizeContext::TripHeadsign),
                    label,
                    "override label {label:?} is not canonical"
                );
            }
        }
    }
}
