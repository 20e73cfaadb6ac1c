use std::fmt;


/// Why a bitstring could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {

    /// The bit points at a child the current node does not have
    MissingChild,
    /// The bitstring ran out in the middle of a code
    UnexpectedEnd

}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {

    /// A tree was requested for a text with no characters
    EmptyInput,
    /// The text contains a character the code table knows nothing about
    InconsistentTable { character: char },
    MalformedBitstring { position: usize, reason: MalformedReason },
    /// Decoding the freshly encoded text did not give the text back
    RoundTripMismatch

}

impl fmt::Display for Error {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Cannot build a Huffman tree from empty input"),
            Error::InconsistentTable { character } => {
                write!(f, "Character {:?} has no entry in the code table", character)
            },
            Error::MalformedBitstring { position, reason: MalformedReason::MissingChild } => {
                write!(f, "Malformed bitstring: bit {} leads to a missing child", position)
            },
            Error::MalformedBitstring { position, reason: MalformedReason::UnexpectedEnd } => {
                write!(f, "Malformed bitstring: input ends in the middle of a code after {} bits", position)
            },
            Error::RoundTripMismatch => write!(f, "Decoded text differs from the original"),
        }
    }

}

impl std::error::Error for Error {}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn display_names_the_position() {

        let err = Error::MalformedBitstring { position: 7, reason: MalformedReason::UnexpectedEnd };

        assert!(err.to_string().contains("after 7 bits"));
    }


    #[test]
    fn display_escapes_the_character() {

        let err = Error::InconsistentTable { character: '\n' };

        assert!(err.to_string().contains("'\\n'"));
    }

}
