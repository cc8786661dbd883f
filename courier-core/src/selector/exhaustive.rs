//! Exact subset search over the pending parcels.

use super::{Batch, BatchSelector};
use crate::Consignment;

/// Pending-set size accepted by [`ExhaustiveSelector::default`].
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 20;

/// Hard ceiling on the pending-set size; subsets are encoded as `u64` masks.
pub const MAX_EXHAUSTIVE_LIMIT: usize = 32;

/// Enumerates every non-empty subset of the pending parcels.
///
/// The heaviest subset that fits wins. Among equally heavy subsets the one
/// whose farthest parcel is closest wins, and remaining ties go to the first
/// subset in mask order, where bit `i` stands for pending parcel `i`. The
/// search is `O(n * 2^n)`, so only the first [`limit`](Self::limit) pending
/// parcels are considered; the scheduler refuses larger inputs up front.
///
/// # Examples
///
/// ```
/// use courier_core::{BatchSelector, Consignment, ExhaustiveSelector, Package, Tariff};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tariff = Tariff::new(Vec::new(), 10, 5)?;
/// let pending: Vec<Consignment> = [("PKG1", 50, 30), ("PKG2", 75, 125), ("PKG3", 175, 100)]
///     .into_iter()
///     .map(|(id, weight, distance)| {
///         Package::new(id, weight, distance, "").map(|p| Consignment::new(p, 100, &tariff))
///     })
///     .collect::<Result<_, _>>()?;
/// let batch = ExhaustiveSelector::default().select(&pending, 200);
/// assert_eq!(batch.indices(), &[2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveSelector {
    limit: usize,
}

impl Default for ExhaustiveSelector {
    fn default() -> Self {
        Self {
            limit: DEFAULT_EXHAUSTIVE_LIMIT,
        }
    }
}

impl ExhaustiveSelector {
    /// Construct a selector bounded to `limit` pending parcels.
    ///
    /// The limit is clamped to `1..=MAX_EXHAUSTIVE_LIMIT`.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let clamped = limit.clamp(1, MAX_EXHAUSTIVE_LIMIT);
        if clamped != limit {
            log::warn!("exhaustive limit {limit} is out of range, using {clamped}");
        }
        Self { limit: clamped }
    }

    /// Largest pending set searched.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    mask: u64,
    weight_kg: u64,
    max_distance_km: u32,
}

impl Candidate {
    const fn beats(&self, incumbent: &Self) -> bool {
        self.weight_kg > incumbent.weight_kg
            || (self.weight_kg == incumbent.weight_kg
                && self.max_distance_km < incumbent.max_distance_km)
    }
}

impl BatchSelector for ExhaustiveSelector {
    fn select(&self, pending: &[Consignment], capacity_kg: u32) -> Batch {
        let window = pending.get(..self.limit).unwrap_or(pending);
        let capacity = u64::from(capacity_kg);
        let subsets = 1_u64 << window.len();

        let mut best: Option<Candidate> = None;
        for mask in 1..subsets {
            let Some(candidate) = score(window, mask, capacity) else {
                continue;
            };
            if best.as_ref().is_none_or(|incumbent| candidate.beats(incumbent)) {
                best = Some(candidate);
            }
        }

        let Some(winner) = best else {
            log::debug!(
                "no subset of {} pending parcels fits {capacity_kg} kg",
                window.len()
            );
            return Batch::default();
        };
        let indices = (0..window.len())
            .filter(|&bit| (winner.mask >> bit) & 1 == 1)
            .collect();
        Batch::from_indices(indices, pending)
    }

    fn pending_limit(&self) -> Option<usize> {
        Some(self.limit)
    }
}

/// Weight and farthest distance of the subset `mask`, or `None` once the
/// running weight passes `capacity`.
fn score(window: &[Consignment], mask: u64, capacity: u64) -> Option<Candidate> {
    let mut weight_kg = 0_u64;
    let mut max_distance_km = 0_u32;
    for (bit, item) in window.iter().enumerate() {
        if (mask >> bit) & 1 == 0 {
            continue;
        }
        weight_kg = weight_kg.saturating_add(u64::from(item.weight_kg()));
        if weight_kg > capacity {
            return None;
        }
        max_distance_km = max_distance_km.max(item.distance_km());
    }
    Some(Candidate {
        mask,
        weight_kg,
        max_distance_km,
    })
}
