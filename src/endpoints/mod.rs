//! Distinct endpoint extraction
//!
//! Merges the left-sorted and right-sorted interval orderings into a single
//! ascending sequence of endpoint values with duplicates removed. Left
//! endpoints arrive pre-sorted and seed the sequence directly; each right
//! endpoint not already present is placed by binary search, so the sequence
//! stays ordered while the two streams merge.

use crate::interval::{Interval, IntervalId};

/// Ascending, duplicate-free sequence of every endpoint value appearing in
/// `intervals`.
///
/// `by_left` and `by_right` are the two orderings produced by
/// [`ids_by_left`](crate::interval::ids_by_left) and
/// [`ids_by_right`](crate::interval::ids_by_right) over the same slice.
/// Empty input yields an empty sequence.
pub fn distinct_endpoints<P>(
    intervals: &[Interval<P>],
    by_left: &[IntervalId],
    by_right: &[IntervalId],
) -> Vec<f64> {
    let mut points: Vec<f64> = Vec::with_capacity(intervals.len() * 2);

    for &id in by_left {
        let left = intervals[id.index()].left();
        if points.last() != Some(&left) {
            points.push(left);
        }
    }

    for &id in by_right {
        let right = intervals[id.index()].right();
        if let Err(slot) = points.binary_search_by(|probe| probe.total_cmp(&right)) {
            points.insert(slot, right);
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{ids_by_left, ids_by_right};

    fn endpoints_of(specs: &[(f64, f64)]) -> Vec<f64> {
        let intervals: Vec<Interval<()>> = specs
            .iter()
            .map(|&(left, right)| Interval::new(left, right, ()).expect("valid interval"))
            .collect();
        distinct_endpoints(&intervals, &ids_by_left(&intervals), &ids_by_right(&intervals))
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(endpoints_of(&[]).is_empty());
    }

    #[test]
    fn merges_both_endpoint_streams() {
        let points = endpoints_of(&[(1.0, 5.0), (3.0, 7.0), (10.0, 12.0)]);
        assert_eq!(points, vec![1.0, 3.0, 5.0, 7.0, 10.0, 12.0]);
    }

    #[test]
    fn shared_and_repeated_endpoints_appear_once() {
        // 4 is a left endpoint twice and a right endpoint once.
        let points = endpoints_of(&[(4.0, 4.0), (4.0, 9.0), (2.0, 4.0)]);
        assert_eq!(points, vec![2.0, 4.0, 9.0]);
    }

    #[test]
    fn right_endpoints_interleave_in_order() {
        // Rights (2.5, 3.5) land between lefts already in the sequence.
        let points = endpoints_of(&[(1.0, 2.5), (2.0, 3.5), (3.0, 6.0)]);
        assert_eq!(points, vec![1.0, 2.0, 2.5, 3.0, 3.5, 6.0]);
    }

    #[test]
    fn output_is_strictly_ascending() {
        let points = endpoints_of(&[(5.0, 6.0), (1.0, 9.0), (2.0, 2.0), (6.0, 8.0)]);
        for pair in points.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
