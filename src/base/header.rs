//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the
//! header. Its content and format are defined in section 4.1.1 of
//! [RFC 1035].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use rand::Rng;
use crate::base::iana::{Opcode, Rcode};
use super::wire::{ParseError, Parser};

//------------ Header --------------------------------------------------------

/// The header of a DNS message.
///
/// The type's data contains the header in its wire format, which is laid
/// out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    QDCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ANCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    NSCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ARCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// All integer fields are big-endian. Methods are available for accessing
/// each field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    /// The actual header in its wire format representation.
    inner: [u8; 12],
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a new header.
    ///
    /// The new header has all fields as either zero or false. Thus, the
    /// opcode will be [`Opcode::Query`] and the response code will be
    /// [`Rcode::NoError`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying octets.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }
}

/// # Parsing and Composing
///
impl Header {
    /// Extracts a header from the beginning of `parser`.
    ///
    /// Fails if fewer than twelve octets remain.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let octets = parser.parse_octets(12)?;
        let mut inner = [0; 12];
        inner.copy_from_slice(octets);
        Ok(Header { inner })
    }

    /// Appends the wire format of the header to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.inner)
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    pub fn id(self) -> u16 {
        u16::from_be_bytes([self.inner[0], self.inner[1]])
    }

    /// Sets the value of the ID field.
    pub fn set_id(&mut self, value: u16) {
        self.inner[..2].copy_from_slice(&value.to_be_bytes())
    }

    /// Sets the ID field to a number chosen from the given source.
    ///
    /// Randomness is injected rather than taken from ambient process state
    /// so that tests can supply a deterministic source.
    pub fn set_random_id(&mut self, rng: &mut impl Rng) {
        self.set_id(rng.gen())
    }

    /// Returns whether the QR bit is set.
    ///
    /// The QR bit specifies whether this message is a query (`false`) or
    /// a response (`true`).
    pub fn qr(self) -> bool {
        self.get_bit(2, 7)
    }

    /// Sets the value of the QR bit.
    pub fn set_qr(&mut self, set: bool) {
        self.set_bit(2, 7, set)
    }

    /// Returns the value of the Opcode field.
    ///
    /// This field specifies the kind of query this message contains. Normal
    /// queries have the variant [`Opcode::Query`], which is also the value
    /// set when creating a new header.
    pub fn opcode(self) -> Opcode {
        Opcode::from_int((self.inner[2] >> 3) & 0x0F)
    }

    /// Sets the value of the opcode field.
    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.inner[2] = self.inner[2] & 0x87 | (opcode.to_int() << 3);
    }

    /// Returns whether the AA bit is set.
    ///
    /// Using this bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name. The bit has no
    /// meaning in a query.
    pub fn aa(self) -> bool {
        self.get_bit(2, 2)
    }

    /// Sets the value of the AA bit.
    pub fn set_aa(&mut self, set: bool) {
        self.set_bit(2, 2, set)
    }

    /// Returns whether the TC bit is set.
    ///
    /// The *truncation* bit is set if there was more data available than
    /// fit into the message, typically to signal that a datagram transport
    /// response was cut short.
    pub fn tc(self) -> bool {
        self.get_bit(2, 1)
    }

    /// Sets the value of the TC bit.
    pub fn set_tc(&mut self, set: bool) {
        self.set_bit(2, 1, set)
    }

    /// Returns whether the RD bit is set.
    ///
    /// The *recursion desired* bit may be set in a query to ask the name
    /// server to try and recursively gather a response. The bit's value is
    /// copied into the response.
    pub fn rd(self) -> bool {
        self.get_bit(2, 0)
    }

    /// Sets the value of the RD bit.
    pub fn set_rd(&mut self, set: bool) {
        self.set_bit(2, 0, set)
    }

    /// Returns whether the RA bit is set.
    ///
    /// In a response, the *recursion available* bit denotes whether the
    /// responding name server supports recursion. It has no meaning in a
    /// query.
    pub fn ra(self) -> bool {
        self.get_bit(3, 7)
    }

    /// Sets the value of the RA bit.
    pub fn set_ra(&mut self, set: bool) {
        self.set_bit(3, 7, set)
    }

    /// Returns the value of the reserved Z field.
    ///
    /// These three bits must be zero in all queries and responses.
    pub fn z(self) -> u8 {
        (self.inner[3] >> 4) & 0x07
    }

    /// Sets the value of the reserved Z field.
    pub fn set_z(&mut self, value: u8) {
        self.inner[3] = self.inner[3] & 0x8F | ((value & 0x07) << 4)
    }

    /// Returns the value of the RCODE field.
    ///
    /// The *response code* is used in a response to indicate what happened
    /// when processing the query.
    pub fn rcode(self) -> Rcode {
        Rcode::from_int(self.inner[3] & 0x0F)
    }

    /// Sets the value of the RCODE field.
    pub fn set_rcode(&mut self, rcode: Rcode) {
        self.inner[3] = self.inner[3] & 0xF0 | (rcode.to_int() & 0x0F);
    }

    //--- Internal helpers

    /// Returns the value of the bit at the given position.
    ///
    /// The argument `offset` gives the octet index into the wire
    /// representation and `bit` gives the number of the bit with the most
    /// significant bit being 7.
    fn get_bit(self, offset: usize, bit: usize) -> bool {
        self.inner[offset] & (1 << bit) != 0
    }

    /// Sets or resets the given bit.
    fn set_bit(&mut self, offset: usize, bit: usize, set: bool) {
        if set {
            self.inner[offset] |= 1 << bit
        } else {
            self.inner[offset] &= !(1 << bit)
        }
    }
}

/// # Section Counts
///
/// The four counts state the number of entries in the corresponding
/// sections of the message. When decoding, they are authoritative for how
/// many entries are read; when encoding, [`Message`][super::message::Message]
/// recomputes them from the actual section lengths.
impl Header {
    /// Returns the number of entries in the question section.
    pub fn qdcount(self) -> u16 {
        self.get_count(4)
    }

    /// Sets the number of entries in the question section.
    pub fn set_qdcount(&mut self, value: u16) {
        self.set_count(4, value)
    }

    /// Returns the number of entries in the answer section.
    pub fn ancount(self) -> u16 {
        self.get_count(6)
    }

    /// Sets the number of entries in the answer section.
    pub fn set_ancount(&mut self, value: u16) {
        self.set_count(6, value)
    }

    /// Returns the number of entries in the authority section.
    pub fn nscount(self) -> u16 {
        self.get_count(8)
    }

    /// Sets the number of entries in the authority section.
    pub fn set_nscount(&mut self, value: u16) {
        self.set_count(8, value)
    }

    /// Returns the number of entries in the additional section.
    pub fn arcount(self) -> u16 {
        self.get_count(10)
    }

    /// Sets the number of entries in the additional section.
    pub fn set_arcount(&mut self, value: u16) {
        self.set_count(10, value)
    }

    //--- Internal helpers

    fn get_count(self, offset: usize) -> u16 {
        u16::from_be_bytes([self.inner[offset], self.inner[offset + 1]])
    }

    fn set_count(&mut self, offset: usize, value: u16) {
        self.inner[offset..offset + 2].copy_from_slice(&value.to_be_bytes())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! test_field {
        ($get:ident, $set:ident, $default:expr, $($value:expr),*) => {
            $({
                let mut h = Header::new();
                assert_eq!(h.$get(), $default);
                h.$set($value);
                assert_eq!(h.$get(), $value);
            })*
        }
    }

    #[test]
    fn fields() {
        test_field!(id, set_id, 0, 0x1234);
        test_field!(qr, set_qr, false, true, false);
        test_field!(opcode, set_opcode, Opcode::Query, Opcode::Notify);
        test_field!(aa, set_aa, false, true, false);
        test_field!(tc, set_tc, false, true, false);
        test_field!(rd, set_rd, false, true, false);
        test_field!(ra, set_ra, false, true, false);
        test_field!(z, set_z, 0, 0x07);
        test_field!(rcode, set_rcode, Rcode::NoError, Rcode::Refused);
        test_field!(qdcount, set_qdcount, 0, 0x1234);
        test_field!(ancount, set_ancount, 0, 0x1234);
        test_field!(nscount, set_nscount, 0, 0x1234);
        test_field!(arcount, set_arcount, 0, 0x1234);
    }

    #[test]
    fn parse_query_header() {
        let mut parser = Parser::from_octets(
            b"\x00\x7b\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00",
        );
        let header = Header::parse(&mut parser).unwrap();
        assert_eq!(header.id(), 123);
        assert!(!header.qr());
        assert_eq!(header.opcode(), Opcode::Query);
        assert!(!header.aa());
        assert!(!header.tc());
        assert!(header.rd());
        assert!(!header.ra());
        assert_eq!(header.z(), 0);
        assert_eq!(header.rcode(), Rcode::NoError);
        assert_eq!(header.qdcount(), 1);
        assert_eq!(header.ancount(), 0);
        assert_eq!(header.nscount(), 0);
        assert_eq!(header.arcount(), 0);
    }

    #[test]
    fn parse_truncated() {
        let mut parser = Parser::from_octets(b"\x00\x7b\x01\x00");
        assert_eq!(
            Header::parse(&mut parser),
            Err(ParseError::TruncatedInput)
        );
    }

    #[test]
    fn round_trip() {
        let mut header = Header::new();
        header.set_id(0xbeef);
        header.set_qr(true);
        header.set_opcode(Opcode::Status);
        header.set_aa(true);
        header.set_rd(true);
        header.set_ra(true);
        header.set_rcode(Rcode::NXDomain);
        header.set_qdcount(1);
        header.set_ancount(2);
        header.set_nscount(3);
        header.set_arcount(4);

        let mut target = Vec::new();
        header.compose(&mut target);
        assert_eq!(target.len(), 12);
        assert_eq!(
            Header::parse(&mut Parser::from_octets(&target)),
            Ok(header)
        );
    }

    #[test]
    fn random_id() {
        // A constant source makes the drawn IDs reproducible.
        let mut rng = rand::rngs::mock::StepRng::new(0x1234_5678, 0);
        let mut first = Header::new();
        first.set_random_id(&mut rng);
        let mut second = Header::new();
        second.set_random_id(&mut rng);
        assert_ne!(first.id(), 0);
        assert_eq!(first.id(), second.id());
    }
}
