//! Nearest-first ordering.

use std::cmp::Ordering;

use crate::SpotDistance;

/// Sorts measured spots nearest first.
///
/// Equal distances fall back to the spot id so identical inputs always give
/// the same order. Spots with an unknown distance go after every measured
/// spot and keep their relative input order.
pub fn rank_by_proximity(mut measured: Vec<SpotDistance<'_>>) -> Vec<SpotDistance<'_>> {
    // `sort_by` is stable, which keeps unknown-distance spots in input order.
    measured.sort_by(compare_by_proximity);
    measured
}

/// Ordering used by [`rank_by_proximity`].
pub fn compare_by_proximity(a: &SpotDistance<'_>, b: &SpotDistance<'_>) -> Ordering {
    match (a.distance, b.distance) {
        (Some(da), Some(db)) => da.total_cmp(&db).then_with(|| a.spot.id.cmp(&b.spot.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
