//! Record data from [RFC 2782]: SRV.
//!
//! This RFC defines the SRV record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use std::fmt;
use crate::base::name::Name;
use crate::base::wire::{ComposeError, ParseError, Parser};

//------------ Srv ----------------------------------------------------------

/// SRV record data.
///
/// SRV records specify the location of the server for a specific protocol
/// and domain: a target host name plus priority, weight, and port.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Srv {
    /// The priority of this target host.
    ///
    /// Clients must contact the target with the lowest priority first.
    priority: u16,

    /// The server selection weight among targets of equal priority.
    weight: u16,

    /// The port on this target host of the service.
    port: u16,

    /// The domain name of the target host.
    target: Name,
}

impl Srv {
    /// Creates new SRV record data from its components.
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: impl Into<Name>,
    ) -> Self {
        Srv { priority, weight, port, target: target.into() }
    }

    /// Returns the priority of the target host.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns the weight of the target host.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns the port of the service on the target host.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the domain name of the target host.
    pub fn target(&self) -> &Name {
        &self.target
    }

    /// Extracts the record data from the beginning of `parser`.
    ///
    /// The target name may use compression.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Srv {
            priority: parser.parse_u16()?,
            weight: parser.parse_u16()?,
            port: parser.parse_u16()?,
            target: Name::parse(parser)?,
        })
    }

    /// Appends the wire format of the record data to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        target.extend_from_slice(&self.priority.to_be_bytes());
        target.extend_from_slice(&self.weight.to_be_bytes());
        target.extend_from_slice(&self.port.to_be_bytes());
        self.target.compose(target)
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let srv = Srv::new(10, 60, 5060, "sip.example.com.");
        let mut target = Vec::new();
        srv.compose(&mut target).unwrap();
        assert_eq!(
            target,
            b"\x00\x0a\x00\x3c\x13\xc4\x03sip\x07example\x03com\x00"
        );
        assert_eq!(Srv::parse(&mut Parser::from_octets(&target)), Ok(srv));
    }

    #[test]
    fn parse_truncated() {
        let mut parser = Parser::from_octets(b"\x00\x0a\x00");
        assert_eq!(
            Srv::parse(&mut parser),
            Err(ParseError::TruncatedInput)
        );
    }
}
