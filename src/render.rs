use std::fmt;

use crate::tree::{HuffmanTree, Node};


const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";


/// Draws a tree one node per line, depth-first, left before right.
///
/// ```text
/// └── * (freq: 4)
///     ├── 'c' (freq: 2)
///     └── * (freq: 2)
///         ├── 'a' (freq: 1)
///         └── 'b' (freq: 1)
/// ```
pub struct TreeRenderer<'a> {

    tree: &'a HuffmanTree

}

impl<'a> TreeRenderer<'a> {

    pub const fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }


    pub fn lines(&self) -> Vec<String> {

        let mut lines = Vec::new();
        let mut stack = vec![(self.tree.root(), String::new(), true)];

        while let Some((node, prefix, is_last)) = stack.pop() {

            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{prefix}{connector}{}", label(node)));

            if let Node::Internal { left, right, .. } = node {

                let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });

                stack.push((right.as_ref(), child_prefix.clone(), true));
                stack.push((left.as_ref(), child_prefix, false));
            }
        }

        lines
    }

}

impl fmt::Display for TreeRenderer<'_> {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }

}


fn label(node: &Node) -> String {
    match node {
        Node::Leaf { frequency, character } => format!("{:?} (freq: {})", character, frequency),
        Node::Internal { frequency, .. } => format!("* (freq: {})", frequency),
    }
}


pub fn render_tree(tree: &HuffmanTree) -> Vec<String> {
    TreeRenderer::new(tree).lines()
}
