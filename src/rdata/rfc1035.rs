//! Record data from [RFC 1035].
//!
//! This RFC defines the initial set of record types.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use std::fmt;
use std::net::Ipv4Addr;
use crate::base::name::Name;
use crate::base::wire::{ComposeError, ParseError, Parser};

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order; in memory the address is kept in
/// its usual dotted form.
///
/// The A record type is defined in RFC 1035, section 3.4.1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates new A record data from an IPv4 address.
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr }
    }

    /// Creates new A record data from the address components.
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> Self {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    /// Returns the address of the record data.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Sets the address of the record data.
    pub fn set_addr(&mut self, addr: Ipv4Addr) {
        self.addr = addr
    }

    /// Extracts the record data from the beginning of `parser`.
    ///
    /// Fails unless the declared record data length is exactly the four
    /// octets of an IPv4 address.
    pub fn parse(
        parser: &mut Parser<'_>,
        rdlen: usize,
    ) -> Result<Self, ParseError> {
        if rdlen != 4 {
            return Err(ParseError::InvalidAddress);
        }
        let octets = parser.parse_octets(4)?;
        Ok(A::from_octets(octets[0], octets[1], octets[2], octets[3]))
    }

    /// Appends the wire format of the record data to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        target.extend_from_slice(&self.addr.octets());
        Ok(())
    }
}

//--- From

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        A::new(addr)
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Cname --------------------------------------------------------

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for a
    /// domain name alias.
    ///
    /// The CNAME type is defined in RFC 1035, section 3.3.1.
    (Cname, cname)
}

//------------ Ns -----------------------------------------------------------

name_type! {
    /// NS record data.
    ///
    /// NS records specify a host which should be authoritative for the
    /// specified class and domain.
    ///
    /// The NS record type is defined in RFC 1035, section 3.3.11.
    (Ns, nsdname)
}

//------------ Soa ----------------------------------------------------------

/// SOA record data.
///
/// SOA records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The SOA record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    /// The name of the primary name server for the zone.
    mname: Name,

    /// The mailbox of the person responsible for the zone.
    rname: Name,

    /// The serial number of the zone's original copy.
    serial: u32,

    /// The number of seconds before the zone should be refreshed.
    refresh: u32,

    /// The number of seconds before a failed refresh should be retried.
    retry: u32,

    /// The number of seconds after which the zone is no longer
    /// authoritative.
    expire: u32,

    /// The minimum TTL for records in this zone.
    minimum: u32,
}

impl Soa {
    /// Creates new SOA record data from its components.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: impl Into<Name>,
        rname: impl Into<Name>,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname: mname.into(),
            rname: rname.into(),
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// Returns the primary name server's name.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// Returns the responsible mailbox name.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// Returns the zone serial number.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Returns the refresh interval in seconds.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// Returns the retry interval in seconds.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// Returns the expire interval in seconds.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// Returns the minimum TTL.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Extracts the record data from the beginning of `parser`.
    ///
    /// Both names may use compression.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Soa {
            mname: Name::parse(parser)?,
            rname: Name::parse(parser)?,
            serial: parser.parse_u32()?,
            refresh: parser.parse_u32()?,
            retry: parser.parse_u32()?,
            expire: parser.parse_u32()?,
            minimum: parser.parse_u32()?,
        })
    }

    /// Appends the wire format of the record data to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        self.mname.compose(target)?;
        self.rname.compose(target)?;
        target.extend_from_slice(&self.serial.to_be_bytes());
        target.extend_from_slice(&self.refresh.to_be_bytes());
        target.extend_from_slice(&self.retry.to_be_bytes());
        target.extend_from_slice(&self.expire.to_be_bytes());
        target.extend_from_slice(&self.minimum.to_be_bytes());
        Ok(())
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. The wire format is the raw text
/// octets; exactly as many as the record's declared data length.
///
/// The TXT record type is defined in RFC 1035, section 3.3.14.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Txt {
    text: Vec<u8>,
}

impl Txt {
    /// Creates new TXT record data from the text content.
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Txt { text: text.into() }
    }

    /// Returns the raw text octets.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Extracts the record data from the beginning of `parser`.
    ///
    /// Takes exactly the declared record data length.
    pub fn parse(
        parser: &mut Parser<'_>,
        rdlen: usize,
    ) -> Result<Self, ParseError> {
        Ok(Txt { text: parser.parse_octets(rdlen)?.to_vec() })
    }

    /// Appends the wire format of the record data to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        target.extend_from_slice(&self.text);
        Ok(())
    }
}

//--- From

impl From<&str> for Txt {
    fn from(text: &str) -> Self {
        Txt::new(text.as_bytes())
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        String::from_utf8_lossy(&self.text).fmt(f)
    }
}

//============ Testing =======================================================
