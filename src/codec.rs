use tracing::debug;

use crate::code_table::CodeTable;
use crate::error::{Error, MalformedReason};
use crate::tree::{HuffmanTree, Node};


/// Concatenates the code of every character of `text`.
///
/// Fails with [`Error::InconsistentTable`] if `table` was not built for this text.
pub fn encode(text: &str, table: &CodeTable) -> Result<String, Error> {

    let mut encoded = String::new();

    for character in text.chars() {

        let code = table.get(character)
            .ok_or(Error::InconsistentTable { character })?;

        encoded.push_str(code.as_str());
    }

    debug!(chars = text.chars().count(), bits = encoded.len(), "encoded text");

    Ok(encoded)
}


/// Walks `tree` bit by bit, emitting a character at every leaf.
///
/// A '0' goes left and any other symbol goes right. The walk must end exactly on a
/// leaf boundary, otherwise the bitstring is reported as malformed.
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<String, Error> {

    let root = tree.root();
    let mut decoded = String::new();

    // With a lone leaf every '0' stands for the whole code
    if let Node::Leaf { character, .. } = root {

        for (position, bit) in bits.chars().enumerate() {
            if bit != '0' {
                return Err(Error::MalformedBitstring { position, reason: MalformedReason::MissingChild });
            }
            decoded.push(*character);
        }

        return Ok(decoded);
    }

    let mut node = root;
    let mut consumed = 0;

    for bit in bits.chars() {

        if let Node::Internal { left, right, .. } = node {

            let next_node: &Node = if bit == '0' { left } else { right };
            match next_node {

                Node::Internal { .. } => {
                    node = next_node;
                },

                Node::Leaf { character, .. } => {
                    decoded.push(*character);
                    node = root;
                },
            }
        }

        consumed += 1;
    }

    if !std::ptr::eq(node, root) {
        return Err(Error::MalformedBitstring { position: consumed, reason: MalformedReason::UnexpectedEnd });
    }

    Ok(decoded)
}


/// A tree together with the code table derived from it
#[derive(Debug, Clone)]
pub struct Codec {

    tree: HuffmanTree,
    table: CodeTable

}

impl Codec {

    pub fn new(tree: HuffmanTree) -> Self {
        let table = CodeTable::from_tree(&tree);
        Self { tree, table }
    }


    pub fn encode(&self, text: &str) -> Result<String, Error> {
        encode(text, &self.table)
    }


    pub fn decode(&self, bits: &str) -> Result<String, Error> {
        decode(bits, &self.tree)
    }


    pub const fn tree(&self) -> &HuffmanTree {
        &self.tree
    }


    pub const fn table(&self) -> &CodeTable {
        &self.table
    }


    pub fn into_parts(self) -> (HuffmanTree, CodeTable) {
        (self.tree, self.table)
    }

}
