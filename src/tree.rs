use std::{cmp::Ordering, collections::BinaryHeap};

use crate::frequency::FrequencyTable;

#[derive(Debug, PartialEq, Eq)]
pub enum TreeNode {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub fn weight(&self) -> usize {
        match self {
            TreeNode::Leaf { weight, .. } => *weight,
            TreeNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            TreeNode::Leaf { symbol, .. } => Some(*symbol),
            TreeNode::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(&TreeNode, &TreeNode)> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }
}

/// Node waiting in the merge heap.
///
/// Ordered by weight, then by creation sequence, and reversed so that `BinaryHeap`
/// pops the lightest, oldest node first.
struct Pending {
    weight: usize,
    sequence: usize,
    node: TreeNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.sequence).cmp(&(self.weight, self.sequence))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frequency-weighted binary tree. Empty when built from an empty table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<TreeNode>,
}

impl HuffmanTree {
    /// Merges the two lightest nodes until one is left.
    ///
    /// Leaves enter the heap in ascending symbol order and every node carries the
    /// sequence number it was created with, so equal weights always pop in the same
    /// order. The first node popped becomes the left child. Merged weights never
    /// exceed the table total, which `FrequencyTable` keeps within `usize`.
    pub fn build(frequencies: &FrequencyTable) -> HuffmanTree {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0;
        for (symbol, weight) in frequencies.iter() {
            heap.push(Pending {
                weight,
                sequence,
                node: TreeNode::Leaf { symbol, weight },
            });
            sequence += 1;
        }

        loop {
            let (left, right) = match (heap.pop(), heap.pop()) {
                (Some(left), Some(right)) => (left, right),
                (last, _) => {
                    return HuffmanTree {
                        root: last.map(|pending| pending.node),
                    }
                }
            };
            let weight = left.weight + right.weight;
            heap.push(Pending {
                weight,
                sequence,
                node: TreeNode::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            });
            sequence += 1;
        }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total weight, the number of symbols in the corpus.
    pub fn weight(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::weight)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path, 0 for a lone leaf or an empty tree.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    fn nodes(&self) -> impl Iterator<Item = (&TreeNode, usize)> + '_ {
        let mut stack: Vec<(&TreeNode, usize)> = self.root.iter().map(|n| (n, 0)).collect();
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Some((left, right)) = node.children() {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

impl Drop for HuffmanTree {
    // Unlinks nodes one at a time so that skewed trees don't recurse once per level
    fn drop(&mut self) {
        let mut stack: Vec<TreeNode> = self.root.take().into_iter().collect();
        while let Some(node) = stack.pop() {
            if let TreeNode::Internal { left, right, .. } = node {
                stack.push(*left);
                stack.push(*right);
            }
        }
    }
}
