//! Record data.
//!
//! Each resource record type has its own record data layout. This module
//! contains the implementations for the types this codec supports, arranged
//! in sub-modules by the RFC that defined them, as well as [`RecordData`],
//! the closed sum over all of them. New record types are added by extending
//! that enum and its dispatch, never by open-ended means: a message
//! containing a record of any other type fails to decode as a whole.
//!
//! The OPT pseudo record type lives in [`crate::base::opt`] since it
//! reappropriates parts of the record header itself.

#[macro_use]
mod macros;

pub mod rfc1035;
pub mod rfc2782;
pub mod rfc3596;

pub use self::rfc1035::{Cname, Ns, Soa, Txt, A};
pub use self::rfc2782::Srv;
pub use self::rfc3596::Aaaa;

use std::fmt;
use crate::base::iana::{Class, Rtype};
use crate::base::opt::OptRecord;
use crate::base::wire::{ComposeError, ParseError, Parser};

//------------ RecordData ----------------------------------------------------

/// The record data of any supported record type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RecordData {
    /// A host address.
    A(A),

    /// An IPv6 host address.
    Aaaa(Aaaa),

    /// The canonical name for an alias.
    Cname(Cname),

    /// An authoritative name server.
    Ns(Ns),

    /// The start of a zone of authority.
    Soa(Soa),

    /// The location of a service.
    Srv(Srv),

    /// Text strings.
    Txt(Txt),

    /// The EDNS OPT pseudo record.
    Opt(OptRecord),
}

impl RecordData {
    /// Returns the record type of the record data.
    pub fn rtype(&self) -> Rtype {
        match self {
            RecordData::A(_) => Rtype::A,
            RecordData::Aaaa(_) => Rtype::AAAA,
            RecordData::Cname(_) => Rtype::CNAME,
            RecordData::Ns(_) => Rtype::NS,
            RecordData::Soa(_) => Rtype::SOA,
            RecordData::Srv(_) => Rtype::SRV,
            RecordData::Txt(_) => Rtype::TXT,
            RecordData::Opt(_) => Rtype::OPT,
        }
    }

    /// Extracts the record data for the given record type from `parser`.
    ///
    /// The `rdlen` argument is the declared record data length; `class`
    /// and `ttl` are the already parsed header fields, which the OPT
    /// pseudo record reinterprets. Fails with
    /// [`ParseError::UnsupportedRecordType`] for a type code without a
    /// data implementation.
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser<'_>,
        rdlen: usize,
        class: Class,
        ttl: u32,
    ) -> Result<Self, ParseError> {
        match rtype {
            Rtype::A => A::parse(parser, rdlen).map(RecordData::A),
            Rtype::AAAA => Aaaa::parse(parser, rdlen).map(RecordData::Aaaa),
            Rtype::CNAME => Cname::parse(parser).map(RecordData::Cname),
            Rtype::NS => Ns::parse(parser).map(RecordData::Ns),
            Rtype::SOA => Soa::parse(parser).map(RecordData::Soa),
            Rtype::SRV => Srv::parse(parser).map(RecordData::Srv),
            Rtype::TXT => Txt::parse(parser, rdlen).map(RecordData::Txt),
            Rtype::OPT => {
                OptRecord::parse(parser, rdlen, class, ttl)
                    .map(RecordData::Opt)
            }
            _ => Err(ParseError::UnsupportedRecordType(rtype)),
        }
    }

    /// Appends the wire format of the record data to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        match self {
            RecordData::A(data) => data.compose(target),
            RecordData::Aaaa(data) => data.compose(target),
            RecordData::Cname(data) => data.compose(target),
            RecordData::Ns(data) => data.compose(target),
            RecordData::Soa(data) => data.compose(target),
            RecordData::Srv(data) => data.compose(target),
            RecordData::Txt(data) => data.compose(target),
            RecordData::Opt(data) => data.compose(target),
        }
    }
}

//--- From

impl From<A> for RecordData {
    fn from(data: A) -> Self {
        RecordData::A(data)
    }
}

impl From<Aaaa> for RecordData {
    fn from(data: Aaaa) -> Self {
        RecordData::Aaaa(data)
    }
}

impl From<Cname> for RecordData {
    fn from(data: Cname) -> Self {
        RecordData::Cname(data)
    }
}

impl From<Ns> for RecordData {
    fn from(data: Ns) -> Self {
        RecordData::Ns(data)
    }
}

impl From<Soa> for RecordData {
    fn from(data: Soa) -> Self {
        RecordData::Soa(data)
    }
}

impl From<Srv> for RecordData {
    fn from(data: Srv) -> Self {
        RecordData::Srv(data)
    }
}

impl From<Txt> for RecordData {
    fn from(data: Txt) -> Self {
        RecordData::Txt(data)
    }
}

impl From<OptRecord> for RecordData {
    fn from(data: OptRecord) -> Self {
        RecordData::Opt(data)
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordData::A(data) => data.fmt(f),
            RecordData::Aaaa(data) => data.fmt(f),
            RecordData::Cname(data) => data.fmt(f),
            RecordData::Ns(data) => data.fmt(f),
            RecordData::Soa(data) => data.fmt(f),
            RecordData::Srv(data) => data.fmt(f),
            RecordData::Txt(data) => data.fmt(f),
            RecordData::Opt(data) => data.fmt(f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unsupported_rtype() {
        let mut parser = Parser::from_octets(b"\x00\x0f");
        assert_eq!(
            RecordData::parse(
                Rtype::MX, &mut parser, 2, Class::IN, 0
            ),
            Err(ParseError::UnsupportedRecordType(Rtype::MX))
        );
    }

    #[test]
    fn dispatch_by_rtype() {
        let mut parser = Parser::from_octets(b"\x7f\x00\x00\x01");
        let data =
            RecordData::parse(Rtype::A, &mut parser, 4, Class::IN, 0)
                .unwrap();
        assert_eq!(data.rtype(), Rtype::A);
        assert_eq!(data, RecordData::A(A::from_octets(127, 0, 0, 1)));
    }
}
