use std::collections::HashMap;
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};


/// Path from the root to a leaf, one '0' or '1' per step
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {

    bits: String

}

impl Code {

    pub const fn new() -> Self {
        Self {
            bits: String::new()
        }
    }


    pub fn step_left(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.push('0');
        Self { bits }
    }


    pub fn step_right(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.push('1');
        Self { bits }
    }


    /// How many bits the code has
    pub fn len(&self) -> usize {
        self.bits.len()
    }


    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }


    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.bytes().map(|b| b == b'1')
    }


    pub fn as_str(&self) -> &str {
        &self.bits
    }


    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

}

impl fmt::Display for Code {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.bits)
    }

}


/// Character to code mapping derived from a Huffman tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {

    codes: HashMap<char, Code>

}

impl CodeTable {

    pub fn from_tree(tree: &HuffmanTree) -> Self {

        let mut codes = HashMap::new();

        // A lone leaf still needs one bit per character
        if let Node::Leaf { character, .. } = tree.root() {
            codes.insert(*character, Code::new().step_left());
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), Code::new())];

        while let Some((node, code)) = stack.pop() {

            match node {
                Node::Internal { left, right, .. } => {
                    stack.push((right, code.step_right()));
                    stack.push((left, code.step_left()));
                },
                Node::Leaf { character, .. } => {
                    codes.insert(*character, code);
                },
            }
        }

        Self { codes }
    }


    pub fn get(&self, ch: char) -> Option<&Code> {
        self.codes.get(&ch)
    }


    pub fn len(&self) -> usize {
        self.codes.len()
    }


    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }


    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code))
    }


    /// Entries ordered by character
    pub fn sorted(&self) -> Box<[(char, &Code)]> {

        let mut entries: Box<[(char, &Code)]> = self.iter().collect();

        entries.sort_unstable_by_key(|&(ch, _)| ch);

        entries
    }


    /// Number of bits needed to encode the text `frequencies` was counted from.
    ///
    /// Returns `None` if a character of `frequencies` has no code.
    pub fn encoded_len(&self, frequencies: &FrequencyTable) -> Option<usize> {
        frequencies.iter()
            .map(|(ch, count)| self.get(ch).map(|code| code.len() * count))
            .sum()
    }

}


#[cfg(test)]
mod tests {

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::tree::TieBreak;

    use super::*;


    fn table_for(text: &str) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_text(text, TieBreak::Oldest).unwrap())
    }


    #[test]
    fn check_code_steps() {

        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {

            let mut code = Code::new();
            let mut expected = Vec::new();

            for _ in 0..8 {
                if rng.gen_bool(0.5) {
                    code = code.step_left();
                    expected.push(false);
                } else {
                    code = code.step_right();
                    expected.push(true);
                }
            }

            assert_eq!(code.iter_bits().collect::<Vec<bool>>(), expected);
            assert_eq!(code.len(), 8);
        }
    }


    #[test]
    fn single_character_gets_one_bit() {

        let table = table_for("aaaa");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get('a').unwrap().as_str(), "0");
    }


    #[test]
    fn two_characters_get_one_bit_each() {

        let table = table_for("ab");

        assert_eq!(table.get('a').unwrap().as_str(), "0");
        assert_eq!(table.get('b').unwrap().as_str(), "1");
    }


    #[test]
    fn one_entry_per_leaf() {

        let text = "mississippi river";
        let tree = HuffmanTree::from_text(text, TieBreak::Oldest).unwrap();
        let table = CodeTable::from_tree(&tree);

        assert_eq!(table.len(), tree.leaf_count());

        for (ch, _) in tree.leaves().iter() {
            assert!(table.get(*ch).is_some());
        }
    }


    #[test]
    fn prefix_free() {

        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {

            let len = rng.gen_range(2..300);
            let text: String = (0..len)
                .map(|_| rng.gen_range('a'..='z'))
                .collect();

            let table = table_for(&text);
            let codes: Vec<&Code> = table.iter().map(|(_, code)| code).collect();

            for (i, a) in codes.iter().enumerate() {
                for (j, b) in codes.iter().enumerate() {
                    if i != j {
                        assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                    }
                }
            }
        }
    }


    #[test]
    fn textbook_distribution_is_optimal() {

        let text: String = [('a', 45), ('b', 13), ('c', 12), ('d', 16), ('e', 9), ('f', 5)]
            .iter()
            .flat_map(|&(ch, n)| std::iter::repeat(ch).take(n))
            .collect();

        let freq = FrequencyTable::from_text(&text);
        let table = table_for(&text);

        assert_eq!(table.encoded_len(&freq), Some(224));
        assert_eq!(table.get('a').unwrap().len(), 1);
    }


    #[test]
    fn never_worse_than_fixed_length() {

        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..50 {

            let len = rng.gen_range(2..500);
            let text: String = (0..len)
                .map(|_| rng.gen_range('0'..='Z'))
                .collect();

            let freq = FrequencyTable::from_text(&text);
            let table = table_for(&text);

            let fixed_width = (usize::BITS - (freq.len() - 1).leading_zeros()).max(1) as usize;

            assert!(table.encoded_len(&freq).unwrap() <= fixed_width * freq.total());
        }
    }


    #[test]
    fn sorted_by_character() {

        let table = table_for("cabbage");

        let chars: Vec<char> = table.sorted().iter().map(|&(ch, _)| ch).collect();

        assert_eq!(chars, ['a', 'b', 'c', 'e', 'g']);
    }

}
