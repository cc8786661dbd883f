//! Choose which pending parcels travel together on the next trip.
//!
//! A [`BatchSelector`] looks at the parcels still waiting at the depot and
//! picks a subset whose combined weight fits the fleet capacity. Two
//! strategies are provided and they are not interchangeable:
//!
//! - [`ExhaustiveSelector`] scores every subset and returns the heaviest one,
//!   preferring the smallest farthest-distance on ties. This is exact but
//!   exponential in the number of pending parcels, so it is guarded by a
//!   pending-set limit.
//! - [`GreedySelector`] fills the vehicle heaviest-first. It is linear after
//!   sorting and usually agrees with the exhaustive search, but can leave
//!   capacity unused where a different combination would pack tighter.

mod exhaustive;
mod greedy;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Consignment;

pub use exhaustive::{DEFAULT_EXHAUSTIVE_LIMIT, ExhaustiveSelector, MAX_EXHAUSTIVE_LIMIT};
pub use greedy::GreedySelector;

/// The parcels chosen for one trip.
///
/// Indices refer to the pending slice passed to [`BatchSelector::select`] and
/// are strictly ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    indices: Vec<usize>,
    weight_kg: u64,
    max_distance_km: u32,
}

impl Batch {
    /// Build a batch from ascending `indices` into `pending`.
    ///
    /// Out-of-range indices are ignored.
    #[must_use]
    pub fn from_indices(indices: Vec<usize>, pending: &[Consignment]) -> Self {
        let (weight_kg, max_distance_km) = indices
            .iter()
            .filter_map(|&idx| pending.get(idx))
            .fold((0_u64, 0_u32), |(weight, distance), item| {
                (
                    weight.saturating_add(u64::from(item.weight_kg())),
                    distance.max(item.distance_km()),
                )
            });
        Self {
            indices,
            weight_kg,
            max_distance_km,
        }
    }

    /// Positions of the chosen parcels in the pending slice.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Combined weight of the chosen parcels.
    #[must_use]
    pub const fn weight_kg(&self) -> u64 {
        self.weight_kg
    }

    /// Distance of the farthest chosen parcel.
    #[must_use]
    pub const fn max_distance_km(&self) -> u32 {
        self.max_distance_km
    }

    /// Number of parcels chosen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing could be chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Pick the next trip's parcels from the pending set.
///
/// Implementations must be pure: the same pending slice and capacity always
/// produce the same batch, and the batch weight never exceeds `capacity_kg`.
/// An empty batch means no pending parcel fits.
pub trait BatchSelector: Send + Sync {
    /// Choose parcels from `pending` whose combined weight fits `capacity_kg`.
    fn select(&self, pending: &[Consignment], capacity_kg: u32) -> Batch;

    /// Largest pending set this selector will accept, if bounded.
    fn pending_limit(&self) -> Option<usize> {
        None
    }
}

impl<T> BatchSelector for Box<T>
where
    T: BatchSelector + ?Sized,
{
    fn select(&self, pending: &[Consignment], capacity_kg: u32) -> Batch {
        (**self).select(pending, capacity_kg)
    }

    fn pending_limit(&self) -> Option<usize> {
        (**self).pending_limit()
    }
}

/// Named selection strategies for configuration surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SelectorKind {
    /// [`ExhaustiveSelector`].
    #[default]
    Exhaustive,
    /// [`GreedySelector`].
    Greedy,
}

impl SelectorKind {
    /// Instantiate the strategy. `exhaustive_limit` only affects
    /// [`SelectorKind::Exhaustive`].
    #[must_use]
    pub fn build(self, exhaustive_limit: usize) -> Box<dyn BatchSelector> {
        match self {
            Self::Exhaustive => Box::new(ExhaustiveSelector::with_limit(exhaustive_limit)),
            Self::Greedy => Box::new(GreedySelector),
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exhaustive => "exhaustive",
            Self::Greedy => "greedy",
        })
    }
}

/// Error returned when parsing an unknown [`SelectorKind`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown selector {0:?}, expected \"exhaustive\" or \"greedy\"")]
pub struct ParseSelectorKindError(String);

impl FromStr for SelectorKind {
    type Err = ParseSelectorKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Self::Exhaustive),
            "greedy" => Ok(Self::Greedy),
            _ => Err(ParseSelectorKindError(value.to_owned())),
        }
    }
}
