use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::Error;
use crate::frequency::FrequencyTable;


/// A node of the Huffman tree.
///
/// Internal nodes own exactly two children, leaves own none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {

    Internal { frequency: usize, left: Box<Node>, right: Box<Node> },
    Leaf { frequency: usize, character: char },

}

impl Node {

    pub const fn frequency(&self) -> usize {
        match self {
            Node::Internal { frequency, .. } |
            Node::Leaf { frequency, .. }
                => *frequency
        }
    }


    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }


    pub const fn character(&self) -> Option<char> {
        match self {
            Node::Leaf { character, .. } => Some(*character),
            Node::Internal { .. } => None,
        }
    }


    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Internal { left, right, .. } => Some((left, right)),
            Node::Leaf { .. } => None,
        }
    }


    /// `a` becomes the left child, `b` the right one
    fn merge(a: Node, b: Node) -> Node {
        Node::Internal {
            frequency: a.frequency() + b.frequency(),
            left: Box::new(a),
            right: Box::new(b),
        }
    }

}


/// Which node leaves the queue first when two frequencies are equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {

    /// The node created first wins
    #[default]
    Oldest,
    /// The node created last wins
    Newest

}

impl TieBreak {

    const fn rank(self, sequence: usize) -> usize {
        match self {
            TieBreak::Oldest => sequence,
            TieBreak::Newest => usize::MAX - sequence,
        }
    }

}


/// Priority queue entry. `BinaryHeap` is a max-heap, so the ordering is reversed.
#[derive(Debug)]
struct QueueEntry {

    rank: usize,
    node: Node

}

impl PartialEq for QueueEntry {

    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

}

impl Ord for QueueEntry {

    fn cmp(&self, other: &Self) -> Ordering {
        (other.node.frequency(), other.rank).cmp(&(self.node.frequency(), self.rank))
    }

}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {

    root: Node

}

impl HuffmanTree {

    pub fn from_frequencies(frequencies: &FrequencyTable, tie_break: TieBreak) -> Result<Self, Error> {

        debug!(distinct = frequencies.len(), total = frequencies.total(), ?tie_break, "building huffman tree");

        let mut sequence = 0;
        let mut queue = BinaryHeap::with_capacity(frequencies.len());

        for &(character, frequency) in frequencies.sorted().iter() {
            queue.push(QueueEntry {
                rank: tie_break.rank(sequence),
                node: Node::Leaf { frequency, character },
            });
            sequence += 1;
        }

        let mut next = queue.pop();

        while let Some(QueueEntry { node: a, .. }) = next {

            let Some(QueueEntry { node: b, .. }) = queue.pop() else {
                return Ok(Self { root: a });
            };

            trace!(left = a.frequency(), right = b.frequency(), "merging nodes");

            queue.push(QueueEntry {
                rank: tie_break.rank(sequence),
                node: Node::merge(a, b),
            });
            sequence += 1;

            next = queue.pop();
        }

        // Only reached when there was nothing to pop in the first place
        Err(Error::EmptyInput)
    }


    pub fn from_text(text: &str, tie_break: TieBreak) -> Result<Self, Error> {
        Self::from_frequencies(&FrequencyTable::from_text(text), tie_break)
    }


    pub const fn root(&self) -> &Node {
        &self.root
    }


    /// Frequency of the root, equal to the length of the source text in characters
    pub const fn frequency(&self) -> usize {
        self.root.frequency()
    }


    /// Leaves in depth-first, left-to-right order
    pub fn leaves(&self) -> Box<[(char, usize)]> {

        let mut leaves = Vec::new();
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {

            match node {
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                },
                Node::Leaf { frequency, character } => {
                    leaves.push((*character, *frequency));
                },
            }
        }

        leaves.into_boxed_slice()
    }


    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

}
