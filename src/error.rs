//! Module for the error management
use thiserror::Error;

/// An error that can occur while canonicalizing a feed.
///
/// The only fatal condition in this crate: everything else degrades to
/// generic normalization instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A route's short name falls outside every curated numbering range.
    /// This means the agency's route numbering scheme has drifted from the
    /// tables in this crate and they all need to be re-checked against the
    /// live feed.
    #[error("route '{short_name}' ({long_name}) does not match any known route numbering range")]
    UnknownRouteNumber {
        /// Short name of the route that fell through the color cascade
        short_name: String,
        /// Long name of the same route, for the batch log
        long_name: String,
    },
}
