//! Recursive overlap query
//!
//! Descends from the root, comparing the query against each node's split
//! value. A straddled node surrenders its whole left bucket (the right
//! bucket holds the same set re-ordered and is skipped to avoid
//! duplicates) and both subtrees stay live. A one-sided node scans a
//! single bucket with the closed-interval overlap test and prunes the far
//! subtree, so query cost stays bounded by tree depth plus matches
//! visited.

use crate::interval::{Interval, IntervalId, Span};
use crate::tree::TreeNode;

/// Append the ids of every stored interval intersecting `query` to
/// `matches`.
pub(crate) fn collect_intersecting<P>(
    node: &TreeNode,
    intervals: &[Interval<P>],
    query: Span,
    matches: &mut Vec<IntervalId>,
) {
    if query.min <= node.split && node.split <= query.max {
        // The split value lies inside the query and inside every bucket
        // interval, so the whole bucket intersects.
        matches.extend_from_slice(&node.left_bucket);
        for child in [node.left.as_deref(), node.right.as_deref()]
            .into_iter()
            .flatten()
        {
            collect_intersecting(child, intervals, query, matches);
        }
    } else if query.max < node.split {
        // Query lies entirely left of the split. Walk right endpoints
        // downwards; once one drops below the query minimum, no earlier
        // bucket entry can reach the query either.
        for &id in node.right_bucket.iter().rev() {
            let interval = &intervals[id.index()];
            if interval.right() < query.min {
                break;
            }
            if interval.overlaps(query) {
                matches.push(id);
            }
        }
        if let Some(left) = node.left.as_deref() {
            collect_intersecting(left, intervals, query, matches);
        }
    } else {
        // Mirror case: query entirely right of the split. Walk left
        // endpoints upwards until one clears the query maximum.
        for &id in &node.left_bucket {
            let interval = &intervals[id.index()];
            if interval.left() > query.max {
                break;
            }
            if interval.overlaps(query) {
                matches.push(id);
            }
        }
        if let Some(right) = node.right.as_deref() {
            collect_intersecting(right, intervals, query, matches);
        }
    }
}
