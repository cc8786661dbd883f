//! Heaviest-first packing.

use std::cmp::Reverse;

use super::{Batch, BatchSelector};
use crate::Consignment;

/// Fills the vehicle with the heaviest parcels that still fit.
///
/// Parcels are ranked by weight descending, then distance ascending, then
/// input position. Each is taken if it fits the remaining capacity; packing
/// continues past parcels that do not fit. This matches the exhaustive search
/// on most inputs but can miss tighter combinations: with 200 kg capacity and
/// parcels of 150, 100 and 100 kg it carries only the 150.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySelector;

impl BatchSelector for GreedySelector {
    fn select(&self, pending: &[Consignment], capacity_kg: u32) -> Batch {
        let mut ranked: Vec<(usize, &Consignment)> = pending.iter().enumerate().collect();
        ranked.sort_by_key(|&(idx, item)| (Reverse(item.weight_kg()), item.distance_km(), idx));

        let mut remaining = u64::from(capacity_kg);
        let mut chosen = Vec::new();
        for (idx, item) in ranked {
            let weight = u64::from(item.weight_kg());
            if let Some(left) = remaining.checked_sub(weight) {
                remaining = left;
                chosen.push(idx);
            }
        }
        chosen.sort_unstable();
        Batch::from_indices(chosen, pending)
    }
}
