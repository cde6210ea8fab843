//! Creating and consuming data in wire format.
//!
//! Both parsing and composing happen on buffers holding a complete DNS
//! message. This is a reasonable choice given the limited size of DNS
//! messages and the complexities introduced by compressing domain names in
//! messages by referencing other parts of the message: the [`Parser`] can be
//! repositioned anywhere within the message to chase such references.

use thiserror::Error;
use crate::base::iana::Rtype;

//------------ Parser --------------------------------------------------------

/// A cursor for extracting data from the octets of a DNS message.
///
/// The parser wraps a reference to the complete message and a position into
/// it. Parsing methods advance the position; [`seek`][Self::seek] allows
/// repositioning, which name decompression uses to follow backward pointers.
/// Each decode operation owns its own parser, so the underlying octets are
/// never mutated.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    /// The underlying octets of the message.
    octets: &'a [u8],

    /// The current position of the parser from the beginning of `octets`.
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser atop a message's octets.
    pub fn from_octets(octets: &'a [u8]) -> Self {
        Parser { octets, pos: 0 }
    }

    /// Returns the underlying octets of the parser.
    pub fn octets(&self) -> &'a [u8] {
        self.octets
    }

    /// Returns the current parse position as an index into the octets.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the underlying octet sequence.
    ///
    /// This is _not_ the number of octets left for parsing. Use
    /// [`remaining`][Self::remaining] for that.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the underlying octets sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns the number of remaining octets to parse.
    pub fn remaining(&self) -> usize {
        self.octets.len() - self.pos
    }

    /// Repositions the parser to the given index.
    ///
    /// If `pos` is larger than the length of the parser, an error is
    /// returned.
    pub fn seek(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos > self.octets.len() {
            Err(ParseError::TruncatedInput)
        } else {
            self.pos = pos;
            Ok(())
        }
    }

    /// Advances the parser's position by `len` octets.
    ///
    /// If this would take the parser beyond its end, an error is returned.
    pub fn advance(&mut self, len: usize) -> Result<(), ParseError> {
        if len > self.remaining() {
            Err(ParseError::TruncatedInput)
        } else {
            self.pos += len;
            Ok(())
        }
    }

    /// Checks that there are `len` octets left to parse.
    ///
    /// If there aren't, returns an error.
    pub fn check_len(&self, len: usize) -> Result<(), ParseError> {
        if self.remaining() < len {
            Err(ParseError::TruncatedInput)
        } else {
            Ok(())
        }
    }

    /// Takes the next `len` octets and advances the parser past them.
    pub fn parse_octets(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        self.check_len(len)?;
        let res = &self.octets[self.pos..self.pos + len];
        self.pos += len;
        Ok(res)
    }

    /// Takes a single octet from the beginning of the parser.
    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        self.check_len(1)?;
        let res = self.octets[self.pos];
        self.pos += 1;
        Ok(res)
    }

    /// Takes a big-endian `u16` from the beginning of the parser.
    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        let octets = self.parse_octets(2)?;
        Ok(u16::from_be_bytes([octets[0], octets[1]]))
    }

    /// Takes a big-endian `u32` from the beginning of the parser.
    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        let octets = self.parse_octets(4)?;
        Ok(u32::from_be_bytes([octets[0], octets[1], octets[2], octets[3]]))
    }
}

//------------ ParseInt ------------------------------------------------------

/// An integer that can be taken straight off the wire.
pub trait ParseInt: Sized {
    /// Extracts a big-endian value from the beginning of `parser`.
    fn parse_int(parser: &mut Parser<'_>) -> Result<Self, ParseError>;
}

impl ParseInt for u8 {
    fn parse_int(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        parser.parse_u8()
    }
}

impl ParseInt for u16 {
    fn parse_int(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        parser.parse_u16()
    }
}

impl ParseInt for u32 {
    fn parse_int(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        parser.parse_u32()
    }
}

//------------ compose functions ---------------------------------------------

/// Composes some data prefixed by its 16 bit length.
///
/// Appends a two octet placeholder, runs `op` to append the actual data,
/// then patches the placeholder with the length of whatever `op` appended.
/// Used for the RDLENGTH/RDATA pair of resource records so that encoder and
/// decoder can never disagree on the declared length.
pub fn compose_len_prefixed<F>(
    target: &mut Vec<u8>,
    op: F,
) -> Result<(), ComposeError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), ComposeError>,
{
    target.extend_from_slice(&[0; 2]);
    let pos = target.len();
    op(target)?;
    let len = u16::try_from(target.len() - pos)
        .map_err(|_| ComposeError::LongData)?;
    target[pos - 2..pos].copy_from_slice(&len.to_be_bytes());
    Ok(())
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing wire-format data.
///
/// Any of these aborts decoding of the entire message: a message either
/// decodes fully or not at all.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// The buffer ended before a required field.
    #[error("unexpected end of input")]
    TruncatedInput,

    /// A compression pointer pointed outside the buffer or forward.
    #[error("invalid compression pointer to offset {0}")]
    InvalidPointer(u16),

    /// A compression pointer chain revisited an offset.
    #[error("compression pointer loop")]
    CompressionLoop,

    /// A record carried a type code without a known data representation.
    #[error("unsupported record type {0}")]
    UnsupportedRecordType(Rtype),

    /// The declared record data length did not match the actual content.
    #[error("declared record data length does not match content")]
    RdataLengthMismatch,

    /// An address record carried data that is not an address.
    #[error("malformed address record data")]
    InvalidAddress,
}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing wire-format data.
///
/// Composing fails as a whole; nothing is ever silently truncated.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ComposeError {
    /// A domain name label was longer than the wire format allows.
    #[error("domain name label exceeds 63 octets")]
    LabelTooLong,

    /// Length-prefixed data exceeded 65535 octets.
    #[error("length-prefixed data exceeds 65535 octets")]
    LongData,
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pos_seek_remaining() {
        let mut parser = Parser::from_octets(b"0123456789");
        assert_eq!(parser.pos(), 0);
        assert_eq!(parser.len(), 10);
        assert_eq!(parser.remaining(), 10);
        assert_eq!(parser.parse_u8(), Ok(b'0'));
        assert_eq!(parser.pos(), 1);
        assert_eq!(parser.remaining(), 9);
        assert_eq!(parser.seek(4), Ok(()));
        assert_eq!(parser.parse_u8(), Ok(b'4'));
        assert_eq!(parser.seek(10), Ok(()));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parser.parse_u8(), Err(ParseError::TruncatedInput));
        assert_eq!(parser.seek(11), Err(ParseError::TruncatedInput));
    }

    #[test]
    fn parse_integers() {
        let mut parser = Parser::from_octets(b"\x12\x34\x56\x78\x9a\xbc\xde");
        assert_eq!(parser.parse_u16(), Ok(0x1234));
        assert_eq!(parser.parse_u32(), Ok(0x56789abc));
        assert_eq!(parser.parse_u8(), Ok(0xde));
        assert_eq!(parser.parse_u16(), Err(ParseError::TruncatedInput));
    }

    #[test]
    fn parse_octets_truncated() {
        let mut parser = Parser::from_octets(b"abc");
        assert_eq!(parser.parse_octets(4), Err(ParseError::TruncatedInput));
        assert_eq!(parser.parse_octets(3), Ok(b"abc".as_ref()));
    }

    #[test]
    fn len_prefixed() {
        let mut target = vec![0xde, 0xad];
        compose_len_prefixed(&mut target, |t| {
            t.extend_from_slice(b"\x01\x02\x03");
            Ok(())
        })
        .unwrap();
        assert_eq!(target, b"\xde\xad\x00\x03\x01\x02\x03");
    }

    #[test]
    fn len_prefixed_empty() {
        let mut target = Vec::new();
        compose_len_prefixed(&mut target, |_| Ok(())).unwrap();
        assert_eq!(target, b"\x00\x00");
    }
}
