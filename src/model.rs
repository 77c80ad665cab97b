use serde::{Deserialize, Serialize};

/// Indicates the direction of travel for a trip. Matches the 0/1
/// `direction_id` field of the feed; not used for routing, only to key the
/// curated destination tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DirectionId {
    /// Travel in one direction (e.g. outbound travel). Feed value 0.
    #[default]
    Outbound,
    /// Travel in the opposite direction (e.g. inbound travel). Feed value 1.
    Inbound,
}

impl DirectionId {
    pub fn as_u8(self) -> u8 {
        match self {
            DirectionId::Outbound => 0,
            DirectionId::Inbound => 1,
        }
    }
}

impl From<u8> for DirectionId {
    fn from(value: u8) -> Self {
        match value {
            1 => DirectionId::Inbound,
            _ => DirectionId::Outbound,
        }
    }
}

/// A route row as handed over by the ingestion framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRow {
    /// Unique technical identifier (not for the traveller) of the route
    pub id: u32,
    /// Short name riders use to identify the route, e.g. "1" or "303"
    pub short_name: String,
    /// Full name of the route, often including its destination
    pub long_name: String,
}

/// A trip row as handed over by the ingestion framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRow {
    /// References along which route this trip runs
    pub route_id: u32,
    pub direction_id: DirectionId,
    /// Raw text that appears on signage identifying the trip's destination
    pub headsign: String,
}

/// A stop row as handed over by the ingestion framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopRow {
    /// Raw name of the location, as published in the feed
    pub name: String,
}

/// A trip after the exclusion gate and headsign resolution, ready for the
/// transit model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTrip {
    pub route_id: u32,
    pub direction_id: DirectionId,
    /// Rider-facing destination label
    pub headsign: String,
}
