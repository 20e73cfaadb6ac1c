use std::collections::HashMap;


/// Occurrence count of every distinct character of a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {

    counts: HashMap<char, usize>

}

impl FrequencyTable {

    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }


    pub fn get(&self, ch: char) -> Option<usize> {
        self.counts.get(&ch).copied()
    }


    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Sum of all counts, i.e. the length of the text in characters
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }


    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }


    /// Entries by ascending count, then ascending character.
    pub fn sorted(&self) -> Box<[(char, usize)]> {

        let mut entries: Box<[(char, usize)]> = self.iter().collect();

        entries.sort_unstable_by_key(|&(ch, count)| (count, ch));

        entries
    }

}

impl FromIterator<char> for FrequencyTable {

    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {

        let mut counts: HashMap<char, usize> = HashMap::new();

        for ch in iter {

            counts.entry(ch)
                .and_modify(|counter| *counter += 1)
                .or_insert(1);
        }

        Self { counts }
    }

}


pub fn count_frequencies(text: &str) -> FrequencyTable {
    FrequencyTable::from_text(text)
}
