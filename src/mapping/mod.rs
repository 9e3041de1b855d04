//! Interval-to-node routing
//!
//! Streams the two pre-sorted interval orderings through the skeleton.
//! Each interval lands at the shallowest node whose split value it
//! straddles; appending in stream order leaves both buckets sorted, so no
//! per-node sort is ever needed. Every interval is stored at exactly one
//! node, once in each of that node's buckets.

use crate::interval::{Interval, IntervalId};
use crate::tree::TreeNode;

/// Route every interval to its target node, filling `left_bucket` from the
/// left-sorted ordering and `right_bucket` from the right-sorted ordering.
pub(crate) fn map_intervals<P>(
    root: &mut TreeNode,
    intervals: &[Interval<P>],
    by_left: &[IntervalId],
    by_right: &[IntervalId],
) {
    for &id in by_left {
        target_node(root, &intervals[id.index()])
            .left_bucket
            .push(id);
    }
    for &id in by_right {
        target_node(root, &intervals[id.index()])
            .right_bucket
            .push(id);
    }
}

/// Descend from `node` to the one node whose split value the interval
/// straddles.
///
/// The straddle check short-circuits descent; otherwise the interval lies
/// entirely on one side of the split and the walk follows its midpoint.
/// A leaf for one of the interval's own endpoints always straddles, so a
/// failed descent means the skeleton was built from the wrong endpoint
/// set.
fn target_node<'tree, P>(
    node: &'tree mut TreeNode,
    interval: &Interval<P>,
) -> &'tree mut TreeNode {
    if interval.left() <= node.split && node.split <= interval.right() {
        return node;
    }
    let child = if interval.midpoint() < node.split {
        node.left.as_deref_mut()
    } else {
        node.right.as_deref_mut()
    };
    match child {
        Some(child) => target_node(child, interval),
        None => unreachable!(
            "no node straddles [{}, {}]; skeleton is missing an endpoint",
            interval.left(),
            interval.right()
        ),
    }
}
