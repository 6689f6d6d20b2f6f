use std::collections::{BTreeMap, VecDeque};

use itertools::Itertools;

use crate::{code::Code, tree::HuffmanTree, tree::TreeNode};

/// Codeword of every leaf symbol, in ascending symbol order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Walks the tree breadth-first, appending 0 when going left and 1 when going right.
    ///
    /// A tree made of a single leaf gives that symbol the code `0`, so every symbol
    /// always costs at least one bit.
    pub fn generate(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut queue: VecDeque<(&TreeNode, Code)> = VecDeque::new();

        match tree.root() {
            None => {}
            Some(TreeNode::Leaf { symbol, .. }) => {
                let mut code = Code::new();
                code.append(false);
                codes.insert(*symbol, code);
            }
            Some(root) => queue.push_back((root, Code::new())),
        }

        while let Some((node, code)) = queue.pop_front() {
            match node {
                TreeNode::Leaf { symbol, .. } => {
                    codes.insert(*symbol, code);
                }
                TreeNode::Internal { left, right, .. } => {
                    let mut left_code = code.clone();
                    left_code.append(false);
                    queue.push_back((left.as_ref(), left_code));

                    let mut right_code = code;
                    right_code.append(true);
                    queue.push_back((right.as_ref(), right_code));
                }
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// True when no codeword is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        self.codes
            .values()
            .tuple_combinations()
            .all(|(a, b)| !a.is_prefix_of(b) && !b.is_prefix_of(a))
    }
}
