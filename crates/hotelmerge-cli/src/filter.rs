//! Key filter applied to the merged catalog before it is printed.
//!
//! Both CLI arguments are comma-separated lists; the literal `none` means
//! "do not filter on this key part".

use std::collections::HashSet;
use std::hash::Hash;

use hotelmerge_core::Hotel;
use thiserror::Error;

pub const NO_FILTER: &str = "none";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("destination id \"{token}\" is not an integer")]
    InvalidDestinationId { token: String },
}

/// Either every value passes, or only the listed ones do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFilter<T: Eq + Hash> {
    Any,
    Only(HashSet<T>),
}

impl<T: Eq + Hash> IdFilter<T> {
    /// An empty list filters nothing, same as `none`.
    fn from_set(values: HashSet<T>) -> Self {
        if values.is_empty() {
            IdFilter::Any
        } else {
            IdFilter::Only(values)
        }
    }

    #[must_use]
    pub fn allows(&self, value: &T) -> bool {
        match self {
            IdFilter::Any => true,
            IdFilter::Only(values) => values.contains(value),
        }
    }
}

/// Parses the hotel id list. Blank entries are skipped.
///
/// # Errors
///
/// Never fails; the `Result` lets clap use it as a value parser.
pub fn parse_hotel_ids(raw: &str) -> Result<IdFilter<String>, FilterError> {
    if raw.trim() == NO_FILTER {
        return Ok(IdFilter::Any);
    }
    Ok(IdFilter::from_set(tokens(raw).map(str::to_owned).collect()))
}

/// Parses the destination id list. Blank entries and `0` are skipped.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDestinationId`] for the first token that is
/// not an integer.
pub fn parse_destination_ids(raw: &str) -> Result<IdFilter<i32>, FilterError> {
    if raw.trim() == NO_FILTER {
        return Ok(IdFilter::Any);
    }
    let ids = tokens(raw)
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| FilterError::InvalidDestinationId {
                    token: token.to_owned(),
                })
        })
        .collect::<Result<HashSet<_>, _>>()?;
    Ok(IdFilter::from_set(
        ids.into_iter().filter(|id| *id != 0).collect(),
    ))
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Keeps hotels whose id and destination both pass their filter.
#[derive(Debug, Clone)]
pub struct HotelFilter {
    pub hotel_ids: IdFilter<String>,
    pub destination_ids: IdFilter<i32>,
}

impl HotelFilter {
    #[must_use]
    pub fn matches(&self, hotel: &Hotel) -> bool {
        self.hotel_ids.allows(&hotel.id) && self.destination_ids.allows(&hotel.destination_id)
    }

    #[must_use]
    pub fn apply(&self, hotels: Vec<Hotel>) -> Vec<Hotel> {
        hotels.into_iter().filter(|h| self.matches(h)).collect()
    }
}
