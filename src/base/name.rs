//! Domain names.
//!
//! A domain name is a sequence of labels. In its wire format each label is
//! preceded by a length octet and the whole sequence is terminated by an
//! octet of zero, the root label. To keep messages short, a name or a name's
//! tail can instead be represented by a compression pointer: two octets with
//! the top two bits set whose remaining fourteen bits are the offset of an
//! earlier occurrence of the remainder of the name within the same message.
//!
//! In memory a name is kept as a string of its labels joined by dots. This
//! representation is lossy if a label itself contains a literal dot octet;
//! such labels do not appear in practice and the limitation is accepted.

use std::fmt;
use std::hash;
use std::str::FromStr;
use super::wire::{ComposeError, ParseError, Parser};

//------------ Name ----------------------------------------------------------

/// A domain name.
///
/// Names compare equal regardless of a single trailing dot, so a name
/// decoded from the wire matches the trailing-dot form conventionally used
/// when composing record owner names. See [`compose`][Self::compose] for why
/// that convention exists.
#[derive(Clone, Debug, Default)]
pub struct Name {
    /// The labels of the name joined by dots.
    inner: String,
}

/// # Creation and Conversion
///
impl Name {
    /// Creates the root name.
    pub fn root() -> Self {
        Name { inner: String::new() }
    }

    /// Returns the name as a string slice in its dot-joined form.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the name with at most one trailing dot removed.
    fn normalized(&self) -> &str {
        self.inner.strip_suffix('.').unwrap_or(&self.inner)
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Extracts a name from the beginning of `parser`.
    ///
    /// Reads the label chain, following compression pointers through the
    /// message. After the first pointer the parser is left positioned just
    /// past the two pointer octets, no matter how far back the chain led.
    ///
    /// A pointer whose target lies at or beyond the pointer's own offset
    /// fails with [`ParseError::InvalidPointer`]; a target that was already
    /// followed while extracting this name fails with
    /// [`ParseError::CompressionLoop`]. Together the two guards bound the
    /// chase on any input.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let mut labels = Vec::new();
        let mut resume = None;
        let mut visited = Vec::new();
        loop {
            let here = parser.pos();
            let len = parser.parse_u8()?;
            if len == 0 {
                break;
            }
            if len & 0xC0 == 0xC0 {
                let target = usize::from(len & 0x3F) << 8
                    | usize::from(parser.parse_u8()?);
                if resume.is_none() {
                    resume = Some(parser.pos());
                }
                if target >= here {
                    return Err(ParseError::InvalidPointer(target as u16));
                }
                if visited.contains(&target) {
                    return Err(ParseError::CompressionLoop);
                }
                visited.push(target);
                parser.seek(target)?;
                continue;
            }
            let octets = parser.parse_octets(usize::from(len))?;
            labels.push(String::from_utf8_lossy(octets).into_owned());
        }
        if let Some(pos) = resume {
            parser.seek(pos)?;
        }
        Ok(Name { inner: labels.join(".") })
    }

    /// Appends the wire format of the name to `target`.
    ///
    /// Writes the plain label chain without a trailing root label. This is
    /// the form used for record owner names and names inside record data,
    /// where the original encoder omits the forced terminator; callers that
    /// need the terminating octet there use a trailing-dot name, whose
    /// empty final label encodes as exactly that zero octet.
    ///
    /// Compression is never produced, only consumed.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        for label in self.inner.split('.') {
            if label.len() > 63 {
                return Err(ComposeError::LabelTooLong);
            }
            target.push(label.len() as u8);
            target.extend_from_slice(label.as_bytes());
        }
        Ok(())
    }

    /// Appends the wire format plus the terminating root label.
    ///
    /// This is the form used in the question section.
    pub fn compose_terminated(
        &self,
        target: &mut Vec<u8>,
    ) -> Result<(), ComposeError> {
        self.compose(target)?;
        target.push(0);
        Ok(())
    }
}

//--- From and FromStr

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name { inner: s.into() }
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name { inner: s }
    }
}

impl FromStr for Name {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Name::from(s))
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.normalized() == other.strip_suffix('.').unwrap_or(other)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl Eq for Name {}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.normalized().hash(state)
    }
}

//--- Display

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

//============ Testing =======================================================
