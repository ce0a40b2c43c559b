//! Code-table generation by depth-first tree traversal.

use crate::tree::Node;

/// Depth-first iterator over the `(code, symbol)` pairs of a tree.
///
/// Descending left appends `'0'`, descending right appends `'1'`; a leaf
/// yields its accumulated path. The traversal uses an explicit stack, so it
/// is lazy, restartable, and needs no recursion. A childless root yields a
/// single pair with the empty-string code.
pub struct CodePaths<'a> {
    stack: Vec<(&'a Node, String)>,
}

impl<'a> CodePaths<'a> {
    /// Start a traversal at `root`.
    pub fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(root, String::new())],
        }
    }
}

impl Iterator for CodePaths<'_> {
    type Item = (String, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            match (node.left(), node.right()) {
                (Some(left), Some(right)) => {
                    // Right first so the left branch pops first.
                    let mut right_path = path.clone();
                    right_path.push('1');
                    self.stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push('0');
                    self.stack.push((left, left_path));
                }
                _ => return Some((path, node.symbol)),
            }
        }
        None
    }
}

/// Build the 256-entry code table for a tree.
///
/// Entries for symbols not present in the tree stay empty; `None` (the
/// empty-stream sentinel) yields an all-empty table. The single-symbol tree
/// maps its one symbol to the empty string, which encoders and decoders
/// must special-case.
pub fn create_codes(tree: Option<&Node>) -> Vec<String> {
    let mut codes = vec![String::new(); 256];
    if let Some(root) = tree {
        for (code, symbol) in CodePaths::new(root) {
            codes[symbol as usize] = code;
        }
    }
    codes
}
