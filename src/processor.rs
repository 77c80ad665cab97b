//! Per-row canonicalization entry points for the import driver.
//!
//! The ingestion framework feeds rows in, the transit model takes labels and
//! colors out. Everything here is a pure function over the process-wide
//! tables; rows can be handed out to workers in any order.

use crate::error::Error;
use crate::headsign;
use crate::model::{CanonicalTrip, RouteRow, StopRow, TripRow};
use crate::normalizer::{normalize, NormalizeContext};
use log::{debug, info};

pub fn canonical_route_long_name(route: &RouteRow) -> String {
    normalize(&route.long_name, NormalizeContext::RouteLongName)
}

pub fn canonical_stop_name(stop: &StopRow) -> String {
    normalize(&stop.name, NormalizeContext::StopName)
}

pub fn canonical_trip_headsign(trip: &TripRow) -> String {
    headsign::resolve(trip.route_id, trip.direction_id, &trip.headsign)
}

pub fn route_color(route: &RouteRow) -> Result<Option<&'static str>, Error> {
    crate::route_color::resolve(&route.short_name, &route.long_name)
}

pub fn is_trip_excluded(trip: &TripRow) -> bool {
    crate::exclusion::is_excluded(&trip.headsign)
}

/// Gates and canonicalizes a batch of trip rows: out-of-service trips are
/// dropped entirely, everything else gets its resolved destination label.
pub fn process_trips(trips: &[TripRow]) -> Vec<CanonicalTrip> {
    let mut kept = Vec::with_capacity(trips.len());
    let mut excluded = 0usize;

    for trip in trips {
        if is_trip_excluded(trip) {
            debug!(
                "dropping out-of-service trip on route {} ({:?})",
                trip.route_id, trip.headsign
            );
            excluded += 1;
            continue;
        }
        kept.push(CanonicalTrip {
            route_id: trip.route_id,
            direction_id: trip.direction_id,
            headsign: canonical_trip_headsign(trip),
        });
    }

    info!(
        "canonicalized {} trips, dropped {} out-of-service",
        kept.len(),
        excluded
    );
    kept
}

/// Resolves colors for a batch of route rows, aborting on the first route
/// whose number the tables do not recognize.
pub fn process_route_colors(
    routes: &[RouteRow],
) -> Result<Vec<(u32, Option<&'static str>)>, Error> {
    let mut colors = Vec::with_capacity(routes.len());
    for route in routes {
        colors.push((route.id, route_color(route)?));
    }
    info!("resolved colors for {} routes", colors.len());
    Ok(colors)
}
