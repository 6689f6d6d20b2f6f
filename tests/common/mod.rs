use rhuffman::{Code, HuffmanTree, TreeNode};

/// Walks the tree bit by bit, restarting at the root after every leaf.
pub fn decode(tree: &HuffmanTree, code: &Code) -> String {
    let mut decoded = String::new();
    let Some(root) = tree.root() else {
        return decoded;
    };
    let mut current = root;

    for bit in code.iter() {
        current = match current.children() {
            Some((left, right)) => {
                if bit {
                    right
                } else {
                    left
                }
            }
            // A lone leaf root takes one bit per symbol
            None => current,
        };
        if let TreeNode::Leaf { symbol, .. } = current {
            decoded.push(*symbol);
            current = root;
        }
    }
    assert!(std::ptr::eq(current, root), "code ends inside a codeword");
    decoded
}

/// Cost of an optimal prefix code, by merging the two smallest weights until one is left.
pub fn optimal_cost(weights: &[usize]) -> u128 {
    let mut weights: Vec<u128> = weights.iter().map(|w| *w as u128).collect();
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let merged = weights.pop().unwrap() + weights.pop().unwrap();
        cost += merged;
        weights.push(merged);
    }
    cost
}
