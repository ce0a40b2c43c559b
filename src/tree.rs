//! Huffman tree construction.
//!
//! The tree shape is a pure function of the frequency table: pending
//! subtrees are ordered by `(weight, symbol)` ascending, and on every merge
//! the child with the smaller representative symbol becomes the left child.
//! Representative symbols of live subtrees never collide (subtrees partition
//! the alphabet), so the ordering key is a strict total order and two
//! independent builds of the same table produce structurally equal trees.

use std::cmp::Ordering;

use crate::freq::Frequencies;
use crate::ordered::OrderedSeq;

/// A node in a Huffman tree.
///
/// Leaves carry a symbol and its frequency; internal nodes carry the
/// smallest symbol in their subtree and the summed weight of both children.
/// Internal nodes always own exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Smallest symbol in this subtree.
    pub symbol: u8,
    /// Sum of the frequencies of all leaves beneath this node.
    pub weight: u64,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    /// Create a leaf for `symbol` with the given frequency.
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Self {
            symbol,
            weight,
            children: None,
        }
    }

    /// Merge two subtrees under a new internal node.
    ///
    /// The merged node's symbol is the smaller of the two representative
    /// symbols and that child becomes the left child, regardless of which
    /// argument it arrived as.
    pub fn merge(a: Node, b: Node) -> Self {
        let symbol = a.symbol.min(b.symbol);
        let weight = a.weight + b.weight;
        let children = if a.symbol < b.symbol { (a, b) } else { (b, a) };
        Self {
            symbol,
            weight,
            children: Some(Box::new(children)),
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Left child, if this node is internal.
    pub fn left(&self) -> Option<&Node> {
        self.children.as_deref().map(|kids| &kids.0)
    }

    /// Right child, if this node is internal.
    pub fn right(&self) -> Option<&Node> {
        self.children.as_deref().map(|kids| &kids.1)
    }
}

impl Ord for Node {
    /// Order by weight ascending, then representative symbol ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.symbol).cmp(&(other.weight, other.symbol))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// Returns `None` when every count is zero (an empty input stream). A table
/// with exactly one non-zero symbol yields a single childless leaf, which
/// callers must treat as both root and terminal.
pub fn build_tree(frequencies: &Frequencies) -> Option<Node> {
    let mut pending = OrderedSeq::new();
    for (symbol, &freq) in frequencies.iter().enumerate() {
        if freq > 0 {
            pending.insert(Node::leaf(symbol as u8, freq));
        }
    }

    if pending.is_empty() {
        return None;
    }

    while pending.len() > 1 {
        let a = pending.pop(0);
        let b = pending.pop(0);
        pending.insert(Node::merge(a, b));
    }

    Some(pending.pop(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count;

    fn freqs_of(pairs: &[(u8, u64)]) -> Frequencies {
        let mut freqs = [0u64; 256];
        for &(symbol, count) in pairs {
            freqs[symbol as usize] = count;
        }
        freqs
    }

    #[test]
    fn test_node_ordering_by_weight_then_symbol() {
        assert!(Node::leaf(97, 10) < Node::leaf(65, 20));
        assert!(Node::leaf(65, 20) > Node::leaf(97, 10));
        assert!(Node::leaf(65, 10) < Node::leaf(97, 10));
    }

    #[test]
    fn test_build_two_symbols() {
        let tree = build_tree(&freqs_of(&[(97, 5), (98, 10)])).unwrap();

        assert_eq!(
            tree,
            Node::merge(Node::leaf(97, 5), Node::leaf(98, 10))
        );
        assert_eq!(tree.symbol, 97);
        assert_eq!(tree.weight, 15);
        assert_eq!(tree.left(), Some(&Node::leaf(97, 5)));
        assert_eq!(tree.right(), Some(&Node::leaf(98, 10)));
    }

    #[test]
    fn test_build_all_zero_returns_none() {
        assert_eq!(build_tree(&[0u64; 256]), None);
    }

    #[test]
    fn test_build_single_symbol_is_childless_leaf() {
        let tree = build_tree(&freqs_of(&[(97, 2)])).unwrap();
        assert_eq!(tree, Node::leaf(97, 2));
        assert!(tree.is_leaf());
    }

    #[test]
    fn test_build_tie_broken_shape() {
        // Weights: d=1 c=2 SP=3 b=3 a=4. Merge order is forced by the
        // (weight, symbol) key; the smaller representative symbol leans
        // left at every merge.
        let freqs = freqs_of(&[(100, 1), (99, 2), (32, 3), (98, 3), (97, 4)]);
        let tree = build_tree(&freqs).unwrap();

        assert_eq!(tree.symbol, 32);
        assert_eq!(tree.weight, 13);

        // Left: space + 'b', both weight 3; 32 < 98 so space leans left.
        let left = tree.left().unwrap();
        assert_eq!((left.symbol, left.weight), (32, 6));
        assert_eq!(left.left(), Some(&Node::leaf(32, 3)));
        assert_eq!(left.right(), Some(&Node::leaf(98, 3)));

        // Right: 'a' (weight 4) against the d+c merge (weight 3, repr 99).
        // 97 < 99 so the 'a' leaf leans left of its parent.
        let right = tree.right().unwrap();
        assert_eq!((right.symbol, right.weight), (97, 7));
        assert_eq!(right.left(), Some(&Node::leaf(97, 4)));

        let dc = right.right().unwrap();
        assert_eq!((dc.symbol, dc.weight), (99, 3));
        assert_eq!(dc.left(), Some(&Node::leaf(99, 2)));
        assert_eq!(dc.right(), Some(&Node::leaf(100, 1)));
    }

    #[test]
    fn test_weight_equals_sum_of_children() {
        let tree = build_tree(&count(b"the quick brown fox")).unwrap();

        fn check(node: &Node) {
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                assert_eq!(node.weight, left.weight + right.weight);
                assert_eq!(node.symbol, left.symbol.min(right.symbol));
                assert!(left.symbol < right.symbol);
                check(left);
                check(right);
            }
        }
        check(&tree);
    }

    #[test]
    fn test_build_is_deterministic() {
        let freqs = count(b"deterministic tree shapes, please");
        assert_eq!(build_tree(&freqs), build_tree(&freqs));
    }
}
