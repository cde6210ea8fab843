//! Record data for OPT records.
//!
//! Since DNS message headers are relatively short, the amount of
//! information that can be conveyed through them is very limited. In order
//! to provide an extensible means to transmit additional information,
//! [RFC 6891] introduces a pseudo resource record called OPT that can be
//! added to the additional section of a message.
//!
//! The OPT record reappropriates the fixed fields of the record header:
//!
//! ```text
//! +------------+--------------+------------------------------+
//! | Field Name | Field Type   | Description                  |
//! +------------+--------------+------------------------------+
//! | NAME       | domain name  | MUST be 0 (root domain)      |
//! | TYPE       | u_int16_t    | OPT (41)                     |
//! | CLASS      | u_int16_t    | requestor's UDP payload size |
//! | TTL        | u_int32_t    | extended RCODE and flags     |
//! | RDLEN      | u_int16_t    | length of all RDATA          |
//! | RDATA      | octet stream | {attribute,value} pairs      |
//! +------------+--------------+------------------------------+
//! ```
//!
//! The record data itself is a sequence of options, each a 16 bit code, a
//! 16 bit length, and that many octets of data.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use std::fmt;
use crate::base::iana::Class;
use super::wire::{ComposeError, ParseError, Parser};

//------------ OptRecord -----------------------------------------------------

/// The data of an OPT record, including the reappropriated header fields.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct OptRecord {
    /// The largest UDP datagram the requestor can accept, in octets.
    udp_payload_size: u16,

    /// The upper eight bits of the extended twelve bit response code.
    ext_rcode: u8,

    /// The EDNS version. Only version 0 is currently defined.
    version: u8,

    /// The EDNS flags. Bit 15 is the DO ("DNSSEC OK") bit.
    flags: u16,

    /// The options carried in the record data.
    options: Vec<OptOption>,
}

/// # Creation and Conversion
///
impl OptRecord {
    /// Creates new OPT record data from its components.
    pub fn new(
        udp_payload_size: u16,
        ext_rcode: u8,
        version: u8,
        flags: u16,
        options: Vec<OptOption>,
    ) -> Self {
        OptRecord { udp_payload_size, ext_rcode, version, flags, options }
    }

    /// Returns the class field value carrying the UDP payload size.
    pub fn class(&self) -> Class {
        Class::from_int(self.udp_payload_size)
    }

    /// Returns the TTL field value carrying extended RCODE, version, and
    /// flags.
    pub fn ttl(&self) -> u32 {
        u32::from(self.ext_rcode) << 24
            | u32::from(self.version) << 16
            | u32::from(self.flags)
    }
}

/// # Field Access
///
impl OptRecord {
    /// Returns the UDP payload size.
    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// Returns the upper bits of the extended response code.
    pub fn ext_rcode(&self) -> u8 {
        self.ext_rcode
    }

    /// Returns the EDNS version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the EDNS flags.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// Returns whether the DO ("DNSSEC OK") bit is set.
    pub fn dnssec_ok(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    /// Returns the options of the record data.
    pub fn options(&self) -> &[OptOption] {
        &self.options
    }

    /// Appends an option to the record data.
    pub fn push_option(&mut self, option: OptOption) {
        self.options.push(option)
    }
}

/// # Parsing and Composing
///
impl OptRecord {
    /// Extracts the record data from the beginning of `parser`.
    ///
    /// The `class` and `ttl` values are the reappropriated fields taken
    /// from the record header by the caller. Options are read until the
    /// declared record data length is exhausted, never beyond it.
    pub fn parse(
        parser: &mut Parser<'_>,
        rdlen: usize,
        class: Class,
        ttl: u32,
    ) -> Result<Self, ParseError> {
        let end = parser.pos() + rdlen;
        let mut options = Vec::new();
        while parser.pos() < end {
            options.push(OptOption::parse(parser)?);
        }
        Ok(OptRecord {
            udp_payload_size: class.to_int(),
            ext_rcode: (ttl >> 24) as u8,
            version: (ttl >> 16) as u8,
            flags: ttl as u16,
            options,
        })
    }

    /// Appends the wire format of the record data to `target`.
    ///
    /// This is the option sequence only; the reappropriated header fields
    /// are written by the record framework via [`class`][Self::class] and
    /// [`ttl`][Self::ttl].
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        for option in &self.options {
            option.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for OptRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "udp: {}, version: {}, flags: {:#06x}, {} option(s)",
            self.udp_payload_size,
            self.version,
            self.flags,
            self.options.len()
        )
    }
}

//------------ OptOption -----------------------------------------------------

/// A single option of an OPT record.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct OptOption {
    /// The assigned option code.
    code: u16,

    /// The option data.
    data: Vec<u8>,
}

impl OptOption {
    /// Creates a new option from its code and data.
    pub fn new(code: u16, data: impl Into<Vec<u8>>) -> Self {
        OptOption { code, data: data.into() }
    }

    /// Returns the option code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Returns the option data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Extracts an option from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let code = parser.parse_u16()?;
        let len = parser.parse_u16()?;
        Ok(OptOption {
            code,
            data: parser.parse_octets(usize::from(len))?.to_vec(),
        })
    }

    /// Appends the wire format of the option to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        let len = u16::try_from(self.data.len())
            .map_err(|_| ComposeError::LongData)?;
        target.extend_from_slice(&self.code.to_be_bytes());
        target.extend_from_slice(&len.to_be_bytes());
        target.extend_from_slice(&self.data);
        Ok(())
    }
}

//============ Testing =======================================================
