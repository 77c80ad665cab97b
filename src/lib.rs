/*! Import-time canonicalization rules for the Calgary Transit GTFS feed.

The feed publishes abbreviation-laden, inconsistently cased strings
("16 AV NW", "MAX Orange Saddletowne (AM only)"). This crate turns them into
consistent display labels and resolves the rider-facing destination and
display color for every (route, direction) the feed exposes.

## Design decisions

### Tables, not branches

The curated knowledge lives in data: an ordered [rewrite::RuleTable] per
concern, a `(route, direction)` to [headsign::Destination] map, and a
cascading color classifier. All tables are built once at process start and
never mutated, so per-row processing is a pure function and safe to fan out.

### Silent fallthrough, one fatal case

A route with no curated entry falls through to generic normalization; that is
by design, most routes are not worth hand-curating. The one batch-aborting
error is a route number outside every known range ([error::Error]), because
it means the numbering scheme drifted and the rest of the tables are stale.

This crate is configuration for one agency's import job. Feed parsing,
calendar filtering and persistence belong to the surrounding framework.
*/

mod abbreviations;
pub mod direction;
pub mod error;
pub mod exclusion;
pub mod headsign;
mod labels;
pub mod model;
pub mod normalizer;
pub mod processor;
pub mod rewrite;
pub mod route_color;


pub use error::Error;
pub use model::{CanonicalTrip, DirectionId, RouteRow, StopRow, TripRow};
pub use normalizer::{normalize, NormalizeContext};
