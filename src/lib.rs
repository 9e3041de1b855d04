//! # Static interval overlap index
//!
//! This library builds a read-only spatial index over a fixed set of
//! one-dimensional closed intervals and answers "which stored intervals
//! overlap this query interval" in logarithmic descent time.
//!
//! ## Core pipeline
//!
//! 1. **Endpoint extraction**: merge the left- and right-sorted interval
//!    orderings into one ascending, duplicate-free endpoint sequence
//! 2. **Skeleton construction**: merge leaves pairwise in rounds into a
//!    balanced tree of split values, depth O(log n)
//! 3. **Interval mapping**: route each interval to the one node whose
//!    split value it straddles, keeping both per-node buckets sorted by
//!    streaming the pre-sorted orderings
//! 4. **Querying**: recursive three-way descent, collecting whole buckets
//!    at straddled nodes and scanning single buckets elsewhere
//!
//! The tree is immutable once built; queries take `&self` only, so shared
//! references can serve any number of threads concurrently.
//!
//! ## Usage example
//!
//! ```
//! use stabix::{Interval, IntervalTree, Span};
//!
//! # fn main() -> Result<(), stabix::IntervalError> {
//! let tree = IntervalTree::new(vec![
//!     Interval::new(1.0, 5.0, "alpha")?,
//!     Interval::new(3.0, 7.0, "beta")?,
//!     Interval::new(10.0, 12.0, "gamma")?,
//! ]);
//!
//! let hits = tree.find_intersecting(Span::new(4.0, 4.0));
//! assert_eq!(hits.len(), 2);
//! assert!(tree.find_intersecting(Span::point(8.0)).is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one stage of the pipeline
pub mod endpoints; // distinct endpoint extraction
pub mod interval; // interval values, spans, orderings
pub mod tree; // balanced skeleton over endpoints
mod mapping; // interval-to-node routing
mod query; // recursive overlap query

// Re-exports for convenience
pub use interval::{Interval, IntervalError, IntervalId, Span};
pub use tree::TreeNode;

use tracing::debug;

/// Static overlap index over a fixed set of closed intervals.
///
/// Built once from the full interval set and never mutated afterwards;
/// queries only read. Bucket ids observed through [`root`](Self::root)
/// resolve back to intervals via [`interval`](Self::interval).
#[derive(Debug, Clone)]
pub struct IntervalTree<P> {
    intervals: Vec<Interval<P>>,
    root: Option<Box<TreeNode>>,
}

impl<P> IntervalTree<P> {
    /// Build the index over `intervals`.
    ///
    /// Runs the full construction pipeline: order the set by each
    /// endpoint, extract the distinct endpoint values, build the balanced
    /// skeleton, then route every interval to the node whose split value
    /// it straddles. An empty set yields a tree with no root.
    pub fn new(intervals: Vec<Interval<P>>) -> Self {
        let by_left = interval::ids_by_left(&intervals);
        let by_right = interval::ids_by_right(&intervals);
        let points = endpoints::distinct_endpoints(&intervals, &by_left, &by_right);
        debug!(
            intervals = intervals.len(),
            endpoints = points.len(),
            "building overlap index"
        );

        let mut root = tree::build_skeleton(&points);
        if let Some(root) = root.as_deref_mut() {
            mapping::map_intervals(root, &intervals, &by_left, &by_right);
            debug!(depth = root.depth(), leaves = root.leaf_count(), "index ready");
        }

        Self { intervals, root }
    }

    /// Root node, absent when the tree was built from an empty set.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the tree stores no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Resolve a bucket id back to its interval.
    ///
    /// Ids are only meaningful for the tree whose buckets produced them.
    pub fn interval(&self, id: IntervalId) -> &Interval<P> {
        &self.intervals[id.index()]
    }

    /// All stored intervals intersecting `query`, each reported exactly
    /// once, in unspecified order.
    ///
    /// `None` means "no query" and yields an empty result, as does a span
    /// whose bounds are inverted or NaN. Duplicate stored intervals are
    /// reported independently.
    pub fn find_intersecting(&self, query: impl Into<Option<Span>>) -> Vec<&Interval<P>> {
        let Some(span) = query.into() else {
            return Vec::new();
        };
        if !(span.min <= span.max) {
            return Vec::new();
        }
        let Some(root) = self.root.as_deref() else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        query::collect_intersecting(root, &self.intervals, span, &mut matches);
        matches.iter().map(|&id| &self.intervals[id.index()]).collect()
    }
}
