//! Balanced tree construction over distinct endpoints
//!
//! Leaves are created in ascending endpoint order and merged pairwise in
//! rounds. An unpaired node at the end of a round is carried into the next
//! round unchanged, after that round's parents, so the shape is fully
//! determined by the endpoint count. Each round halves the node count,
//! giving O(log n) depth without any rebalancing.

mod node;

pub use node::TreeNode;

/// Build the tree skeleton over an ascending sequence of distinct
/// endpoints.
///
/// Returns `None` for an empty sequence; a single endpoint yields a
/// one-leaf tree that is its own root. Buckets start empty and are filled
/// by the mapping pass.
pub fn build_skeleton(endpoints: &[f64]) -> Option<Box<TreeNode>> {
    let mut round: Vec<Box<TreeNode>> = endpoints
        .iter()
        .map(|&point| Box::new(TreeNode::leaf(point)))
        .collect();

    while round.len() > 1 {
        let mut next = Vec::with_capacity(round.len() / 2 + 1);
        let mut nodes = round.into_iter();
        loop {
            match (nodes.next(), nodes.next()) {
                (Some(first), Some(second)) => {
                    next.push(Box::new(TreeNode::join(first, second)));
                }
                (Some(odd), None) => {
                    next.push(odd);
                    break;
                }
                _ => break,
            }
        }
        round = next;
    }

    round.pop()
}
