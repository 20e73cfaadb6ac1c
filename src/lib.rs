//! Huffman coding of short texts.
//!
//! The pipeline counts character frequencies, builds a Huffman tree, derives a
//! prefix-free code table from it and uses both to encode a text into a string of
//! '0'/'1' symbols and decode it back.
//!
//! ```
//! use huffman_text::{run, Config};
//!
//! let report = run("abracadabra", &Config::default()).unwrap();
//!
//! assert_eq!(report.decoded, "abracadabra");
//! assert_eq!(report.stats.encoded_bits, 23);
//! ```

mod code_table;
mod codec;
mod error;
mod frequency;
mod render;
mod tree;

use tracing::debug;

pub use code_table::{Code, CodeTable};
pub use codec::{decode, encode, Codec};
pub use error::{Error, MalformedReason};
pub use frequency::{count_frequencies, FrequencyTable};
pub use render::{render_tree, TreeRenderer};
pub use tree::{HuffmanTree, Node, TieBreak};


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {

    pub tie_break: TieBreak

}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {

    /// Length of the text in characters
    pub symbols: usize,
    pub distinct: usize,
    pub encoded_bits: usize,
    /// Size of the UTF-8 text in bits
    pub original_bits: usize

}

impl Stats {

    /// Encoded size relative to the UTF-8 size, 0 for empty text
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.original_bits as f64
        }
    }

}


/// Everything one pipeline run produced
#[derive(Debug, Clone)]
pub struct Report {

    pub original: String,
    pub encoded: String,
    pub decoded: String,
    /// `None` for empty input
    pub tree: Option<HuffmanTree>,
    pub codes: CodeTable,
    pub stats: Stats

}

impl Report {

    pub fn tree_lines(&self) -> Vec<String> {
        self.tree.as_ref()
            .map(render_tree)
            .unwrap_or_default()
    }

}


/// Runs the whole pipeline on `text` and checks that it decodes back to itself.
///
/// Empty text is not an error: it encodes to an empty bitstring and has no tree.
pub fn run(text: &str, config: &Config) -> Result<Report, Error> {

    let frequencies = count_frequencies(text);

    let stats = Stats {
        symbols: frequencies.total(),
        distinct: frequencies.len(),
        encoded_bits: 0,
        original_bits: text.len() * 8,
    };

    if frequencies.is_empty() {
        return Ok(Report {
            original: String::new(),
            encoded: String::new(),
            decoded: String::new(),
            tree: None,
            codes: CodeTable::default(),
            stats,
        });
    }

    let codec = Codec::new(HuffmanTree::from_frequencies(&frequencies, config.tie_break)?);

    let encoded = codec.encode(text)?;
    let decoded = codec.decode(&encoded)?;

    if decoded != text {
        return Err(Error::RoundTripMismatch);
    }

    debug!(symbols = stats.symbols, bits = encoded.len(), "pipeline finished");

    let (tree, codes) = codec.into_parts();

    Ok(Report {
        original: text.to_owned(),
        stats: Stats { encoded_bits: encoded.len(), ..stats },
        encoded,
        decoded,
        tree: Some(tree),
        codes,
    })
}
