//! Resource records.
//!
//! This module defines the type [`Record`], an entry of the answer,
//! authority, or additional section of a DNS message. All records share a
//! common prefix in their wire format:
//!
//! ```text
//! 0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                                               |
//! /                      NAME                     /
//! |                                               |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TYPE                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                     CLASS                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TTL                      |
//! |                                               |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                   RDLENGTH                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--|
//! /                     RDATA                     /
//! /                                               /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! The type code selects the record data implementation; the declared
//! RDLENGTH is enforced against what that implementation actually consumes
//! or produces, so encoder and decoder can never disagree on it.

use std::fmt;
use crate::base::iana::{Class, Rtype};
use crate::rdata::RecordData;
use super::name::Name;
use super::opt::OptRecord;
use super::wire::{compose_len_prefixed, ComposeError, ParseError, Parser};

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// A record combines the owner name, class, and time-to-live with record
/// data of one of the supported types. The record type itself is not stored
/// separately; it is implied by the data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    /// The owner of the record.
    name: Name,

    /// The class of the record.
    class: Class,

    /// The number of seconds the record may be cached.
    ttl: u32,

    /// The record data.
    data: RecordData,
}

/// # Creation and Conversion
///
impl Record {
    /// Creates a new record from its components.
    pub fn new(
        name: impl Into<Name>,
        class: Class,
        ttl: u32,
        data: impl Into<RecordData>,
    ) -> Self {
        Record { name: name.into(), class, ttl, data: data.into() }
    }

    /// Creates an OPT pseudo record from its record data.
    ///
    /// The owner name is the root and class and TTL carry the record
    /// data's reappropriated values, keeping the record self-consistent.
    pub fn opt(data: OptRecord) -> Self {
        Record {
            name: Name::root(),
            class: data.class(),
            ttl: data.ttl(),
            data: RecordData::Opt(data),
        }
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }
}

/// # Field Access
///
impl Record {
    /// Returns a reference to the owner name of the record.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the time-to-live of the record in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the time-to-live of the record.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Extracts a record from the beginning of `parser`.
    ///
    /// Parses the common prefix, dispatches on the type code, and then
    /// checks that the record data consumed exactly the declared RDLENGTH,
    /// failing with [`ParseError::RdataLengthMismatch`] otherwise.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let name = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = parser.parse_u32()?;
        let rdlen = usize::from(parser.parse_u16()?);
        parser.check_len(rdlen)?;
        let end = parser.pos() + rdlen;
        let data = RecordData::parse(rtype, parser, rdlen, class, ttl)?;
        if parser.pos() != end {
            return Err(ParseError::RdataLengthMismatch);
        }
        Ok(Record { name, class, ttl, data })
    }

    /// Appends the wire format of the record to `target`.
    ///
    /// The owner name is written without a forced terminator; see
    /// [`Name::compose`]. The RDLENGTH is patched in after the record data
    /// has been written, so it always equals the data's actual length. For
    /// OPT records the class and TTL fields are taken from the record data,
    /// which owns their reinterpreted values.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        self.name.compose(target)?;
        self.rtype().compose(target);
        match self.data {
            RecordData::Opt(ref data) => {
                data.class().compose(target);
                target.extend_from_slice(&data.ttl().to_be_bytes());
            }
            _ => {
                self.class.compose(target);
                target.extend_from_slice(&self.ttl.to_be_bytes());
            }
        }
        compose_len_prefixed(target, |t| self.data.compose(t))
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::{Cname, Txt, A};

    #[test]
    fn a_record_wire_format() {
        let record = Record::new(
            "example.com.",
            Class::IN,
            3600,
            A::from_octets(127, 0, 0, 1),
        );
        let mut target = Vec::new();
        record.compose(&mut target).unwrap();
        assert_eq!(
            target,
            b"\x07example\x03com\x00\
              \x00\x01\x00\x01\x00\x00\x0e\x10\
              \x00\x04\x7f\x00\x00\x01"
        );
        assert_eq!(
            Record::parse(&mut Parser::from_octets(&target)),
            Ok(record)
        );
    }

    #[test]
    fn rdata_length_enforced() {
        // A CNAME whose name ends before the declared RDLENGTH.
        let octets = b"\x00\x00\x05\x00\x01\x00\x00\x00\x00\
                       \x00\x07\x03www\x00\xff\xff";
        assert_eq!(
            Record::parse(&mut Parser::from_octets(octets)),
            Err(ParseError::RdataLengthMismatch)
        );
    }

    #[test]
    fn rdlen_beyond_buffer() {
        let octets = b"\x00\x00\x10\x00\x01\x00\x00\x00\x00\x00\x10abc";
        assert_eq!(
            Record::parse(&mut Parser::from_octets(octets)),
            Err(ParseError::TruncatedInput)
        );
    }

    #[test]
    fn unsupported_rtype_fails() {
        let octets = b"\x00\x00\x0f\x00\x01\x00\x00\x00\x00\x00\x00";
        assert_eq!(
            Record::parse(&mut Parser::from_octets(octets)),
            Err(ParseError::UnsupportedRecordType(Rtype::MX))
        );
    }

    #[test]
    fn txt_record_round_trip() {
        let record =
            Record::new("example.com.", Class::IN, 60, Txt::from("v=spf1"));
        let mut target = Vec::new();
        record.compose(&mut target).unwrap();
        assert_eq!(
            Record::parse(&mut Parser::from_octets(&target)),
            Ok(record)
        );
    }

    #[test]
    fn compressed_owner_name() {
        // Buffer with "example.com" at offset 0 and a CNAME record whose
        // owner is a pointer to it.
        let mut octets = Vec::from(&b"\x07example\x03com\x00"[..]);
        let start = octets.len();
        octets.extend_from_slice(
            b"\xc0\x00\x00\x05\x00\x01\x00\x00\x00\x3c\
              \x00\x06\x03www\xc0\x00",
        );
        let mut parser = Parser::from_octets(&octets);
        parser.seek(start).unwrap();
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(*record.name(), "example.com");
        assert_eq!(record.rtype(), Rtype::CNAME);
        assert_eq!(
            *record.data(),
            RecordData::Cname(Cname::new("www.example.com"))
        );
        assert_eq!(parser.remaining(), 0);
    }
}
