//! Record data from [RFC 3596]: AAAA.
//!
//! This RFC defines the AAAA record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use std::fmt;
use std::net::Ipv6Addr;
use crate::base::wire::{ComposeError, ParseError, Parser};

//------------ Aaaa ---------------------------------------------------------

/// AAAA record data.
///
/// AAAA records convey the IPv6 address of a host. The wire format is the
/// 128 bit address in network byte order; in memory the address is kept in
/// its usual colon form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// Creates new AAAA record data from an IPv6 address.
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr }
    }

    /// Returns the address of the record data.
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Sets the address of the record data.
    pub fn set_addr(&mut self, addr: Ipv6Addr) {
        self.addr = addr
    }

    /// Extracts the record data from the beginning of `parser`.
    ///
    /// Fails unless the declared record data length is exactly the sixteen
    /// octets of an IPv6 address.
    pub fn parse(
        parser: &mut Parser<'_>,
        rdlen: usize,
    ) -> Result<Self, ParseError> {
        if rdlen != 16 {
            return Err(ParseError::InvalidAddress);
        }
        let mut octets = [0; 16];
        octets.copy_from_slice(parser.parse_octets(16)?);
        Ok(Aaaa::new(octets.into()))
    }

    /// Appends the wire format of the record data to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        target.extend_from_slice(&self.addr.octets());
        Ok(())
    }
}

//--- From

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Aaaa::new(addr)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let aaaa = Aaaa::new("2001:db8::1".parse().unwrap());
        let mut target = Vec::new();
        aaaa.compose(&mut target).unwrap();
        assert_eq!(target.len(), 16);
        assert_eq!(
            Aaaa::parse(&mut Parser::from_octets(&target), 16),
            Ok(aaaa)
        );
    }

    #[test]
    fn bad_length() {
        let mut parser = Parser::from_octets(&[0; 16]);
        assert_eq!(
            Aaaa::parse(&mut parser, 4),
            Err(ParseError::InvalidAddress)
        );
    }
}
