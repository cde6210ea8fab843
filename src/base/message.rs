//! DNS messages.
//!
//! A message is the unit of exchange of the DNS: the payload of one UDP
//! datagram or one DNS-over-HTTPS request or response. It consists of a
//! twelve octet header followed by four sections:
//!
//! ```text
//! +---------------------+
//! |        Header       |
//! +---------------------+
//! |       Question      | the question for the name server
//! +---------------------+
//! |        Answer       | RRs answering the question
//! +---------------------+
//! |      Authority      | RRs pointing toward an authority
//! +---------------------+
//! |      Additional     | RRs holding additional information
//! +---------------------+
//! ```
//!
//! The header's four counts state how many entries each section has. When
//! decoding they are authoritative and drive how many entries are read;
//! when encoding they are recomputed from the actual section lengths, so an
//! encoded message is always self-consistent.

use rand::Rng;
use std::fmt;
use thiserror::Error;
use super::header::Header;
use super::question::Question;
use super::record::Record;
use super::wire::{ComposeError, ParseError, Parser};

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// Decoding and encoding are pure functions over the input buffer and the
/// message value; the codec keeps no state between calls, so any number of
/// them may run concurrently on independent inputs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    /// The header of the message.
    header: Header,

    /// The entries of the question section.
    questions: Vec<Question>,

    /// The entries of the answer section.
    answers: Vec<Record>,

    /// The entries of the authority section.
    authorities: Vec<Record>,

    /// The entries of the additional section.
    additionals: Vec<Record>,
}

/// # Creation and Conversion
///
impl Message {
    /// Creates a new, empty message.
    ///
    /// All four counts are zero and all sections empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new query message.
    ///
    /// The message gets its ID from the given source of randomness and has
    /// the QR bit unset. Append questions via
    /// [`push_question`][Self::push_question].
    pub fn query(rng: &mut impl Rng) -> Self {
        let mut res = Self::new();
        res.header.set_random_id(rng);
        res
    }

    /// Starts a response to this message.
    ///
    /// The new message carries the request's ID, opcode, and RD flag, has
    /// the QR bit set, and echoes the request's questions. Records are
    /// appended by the caller.
    pub fn start_response(&self) -> Self {
        let mut res = Self::new();
        res.header.set_id(self.header.id());
        res.header.set_qr(true);
        res.header.set_opcode(self.header.opcode());
        res.header.set_rd(self.header.rd());
        for question in &self.questions {
            res.push_question(question.clone());
        }
        res
    }
}

/// # Field Access
///
impl Message {
    /// Returns a reference to the message header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the entries of the question section.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the entries of the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the entries of the authority section.
    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    /// Returns the entries of the additional section.
    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }
}

/// # Building
///
/// Each push also updates the corresponding count in the header, keeping
/// the message self-consistent while it is being built.
impl Message {
    /// Appends a question to the question section.
    pub fn push_question(&mut self, question: impl Into<Question>) {
        self.questions.push(question.into());
        self.header.set_qdcount(self.questions.len() as u16);
    }

    /// Appends a record to the answer section.
    pub fn push_answer(&mut self, record: Record) {
        self.answers.push(record);
        self.header.set_ancount(self.answers.len() as u16);
    }

    /// Appends a record to the authority section.
    pub fn push_authority(&mut self, record: Record) {
        self.authorities.push(record);
        self.header.set_nscount(self.authorities.len() as u16);
    }

    /// Appends a record to the additional section.
    pub fn push_additional(&mut self, record: Record) {
        self.additionals.push(record);
        self.header.set_arcount(self.additionals.len() as u16);
    }
}

/// # Decoding and Encoding
///
impl Message {
    /// Decodes a message from the octets of its wire format.
    ///
    /// Reads the header first, then exactly as many entries per section as
    /// the header counts state, in the fixed section order. The first
    /// error encountered aborts decoding of the entire message and names
    /// the section and index where it happened; there is no
    /// partial-message recovery.
    pub fn from_octets(octets: &[u8]) -> Result<Self, MessageError> {
        let mut parser = Parser::from_octets(octets);
        let header =
            Header::parse(&mut parser).map_err(MessageError::Header)?;
        let mut res = Message { header, ..Default::default() };
        for index in 0..header.qdcount() {
            res.questions.push(
                Question::parse(&mut parser).map_err(|err| {
                    MessageError::in_section(Section::Question, index, err)
                })?,
            );
        }
        Self::parse_records(
            &mut parser,
            header.ancount(),
            Section::Answer,
            &mut res.answers,
        )?;
        Self::parse_records(
            &mut parser,
            header.nscount(),
            Section::Authority,
            &mut res.authorities,
        )?;
        Self::parse_records(
            &mut parser,
            header.arcount(),
            Section::Additional,
            &mut res.additionals,
        )?;
        Ok(res)
    }

    /// Parses `count` records into `target` for the given section.
    fn parse_records(
        parser: &mut Parser<'_>,
        count: u16,
        section: Section,
        target: &mut Vec<Record>,
    ) -> Result<(), MessageError> {
        for index in 0..count {
            target.push(Record::parse(parser).map_err(|err| {
                MessageError::in_section(section, index, err)
            })?);
        }
        Ok(())
    }

    /// Encodes the message into the octets of its wire format.
    ///
    /// The header is written with all four counts recomputed from the
    /// actual section lengths, followed by the sections in their fixed
    /// order. An error aborts the whole encode; nothing is silently
    /// truncated.
    ///
    /// The caller is responsible for checking the result against any
    /// transport size limit such as the conventional 512 octets of
    /// plain UDP.
    pub fn to_octets(&self) -> Result<Vec<u8>, ComposeError> {
        let mut header = self.header;
        header.set_qdcount(self.section_count(self.questions.len())?);
        header.set_ancount(self.section_count(self.answers.len())?);
        header.set_nscount(self.section_count(self.authorities.len())?);
        header.set_arcount(self.section_count(self.additionals.len())?);

        let mut target = Vec::with_capacity(512);
        header.compose(&mut target);
        for question in &self.questions {
            question.compose(&mut target)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.compose(&mut target)?;
        }
        Ok(target)
    }

    fn section_count(&self, len: usize) -> Result<u16, ComposeError> {
        u16::try_from(len).map_err(|_| ComposeError::LongData)
    }
}

//------------ Section -------------------------------------------------------

/// One of the four sections of a DNS message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    /// The question section.
    Question,

    /// The answer section.
    Answer,

    /// The authority section.
    Authority,

    /// The additional section.
    Additional,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        })
    }
}

//------------ MessageError --------------------------------------------------

/// An error happened while decoding a message.
///
/// The error carries enough context to diagnose where in the message the
/// underlying parse error occurred.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MessageError {
    /// The header could not be decoded.
    #[error("malformed header: {0}")]
    Header(ParseError),

    /// An entry of one of the four sections could not be decoded.
    #[error("malformed {section} entry {index}: {err}")]
    Section {
        /// The section the malformed entry is in.
        section: Section,

        /// The index of the malformed entry within its section.
        index: u16,

        /// The underlying parse error.
        err: ParseError,
    },
}

impl MessageError {
    fn in_section(section: Section, index: u16, err: ParseError) -> Self {
        MessageError::Section { section, index, err }
    }

    /// Returns the underlying parse error.
    pub fn parse_error(&self) -> ParseError {
        match *self {
            MessageError::Header(err) => err,
            MessageError::Section { err, .. } => err,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::opt::{OptOption, OptRecord};
    use crate::rdata::{Aaaa, Cname, Ns, RecordData, Soa, Srv, Txt, A};

    fn sample_message() -> Message {
        let mut rng = rand::rngs::mock::StepRng::new(0x4711, 0);
        let mut msg = Message::query(&mut rng);
        msg.header_mut().set_rd(true);
        msg.push_question(("example.com", Rtype::A));
        msg.push_answer(Record::new(
            "example.com.",
            Class::IN,
            3600,
            A::from_octets(127, 0, 0, 1),
        ));
        msg.push_answer(Record::new(
            "example.com.",
            Class::IN,
            3600,
            Aaaa::new("2001:db8::1".parse().unwrap()),
        ));
        msg.push_answer(Record::new(
            "www.example.com.",
            Class::IN,
            300,
            Cname::new("example.com."),
        ));
        msg.push_answer(Record::new(
            "example.com.",
            Class::IN,
            600,
            Txt::from("hello"),
        ));
        msg.push_answer(Record::new(
            "_sip._udp.example.com.",
            Class::IN,
            600,
            Srv::new(10, 60, 5060, "sip.example.com."),
        ));
        msg.push_authority(Record::new(
            "example.com.",
            Class::IN,
            86400,
            Ns::new("ns1.example.com."),
        ));
        msg.push_authority(Record::new(
            "example.com.",
            Class::IN,
            86400,
            Soa::new(
                "ns1.example.com.",
                "hostmaster.example.com.",
                2024010101,
                7200,
                3600,
                1209600,
                300,
            ),
        ));
        msg.push_additional(Record::opt(OptRecord::new(
            4096,
            0,
            0,
            0,
            vec![OptOption::new(10, b"\x01\x02\x03\x04\x05\x06\x07\x08".as_ref())],
        )));
        msg
    }

    #[test]
    fn round_trip() {
        let msg = sample_message();
        let octets = msg.to_octets().unwrap();
        assert_eq!(Message::from_octets(&octets), Ok(msg));
    }

    #[test]
    fn counts_follow_sections() {
        let msg = sample_message();
        assert_eq!(msg.header().qdcount(), 1);
        assert_eq!(msg.header().ancount(), 5);
        assert_eq!(msg.header().nscount(), 2);
        assert_eq!(msg.header().arcount(), 1);

        let octets = msg.to_octets().unwrap();
        let decoded = Message::from_octets(&octets).unwrap();
        assert_eq!(decoded.questions().len(), 1);
        assert_eq!(decoded.answers().len(), 5);
        assert_eq!(decoded.authorities().len(), 2);
        assert_eq!(decoded.additionals().len(), 1);
    }

    #[test]
    fn edns_udp_payload_size() {
        let octets = sample_message().to_octets().unwrap();
        let msg = Message::from_octets(&octets).unwrap();
        let RecordData::Opt(ref opt) = *msg.additionals()[0].data() else {
            panic!("additional record is not an OPT record");
        };
        assert_eq!(opt.udp_payload_size(), 4096);
        assert_eq!(opt.ext_rcode(), 0);
        assert_eq!(opt.version(), 0);
        assert_eq!(opt.flags(), 0);
        assert_eq!(opt.options().len(), 1);
    }

    #[test]
    fn truncation_always_fails_cleanly() {
        let octets = sample_message().to_octets().unwrap();
        for len in 0..octets.len() {
            let err = Message::from_octets(&octets[..len])
                .expect_err("truncated message decoded");
            assert_eq!(err.parse_error(), ParseError::TruncatedInput);
        }
    }

    #[test]
    fn error_names_section_and_index() {
        // Header declares two answers; the second is an A record with a
        // five octet address.
        let mut octets = Vec::new();
        octets.extend_from_slice(
            b"\x00\x00\x00\x00\x00\x00\x00\x02\x00\x00\x00\x00",
        );
        octets.extend_from_slice(
            b"\x00\x00\x01\x00\x01\x00\x00\x00\x00\x00\x04\x7f\x00\x00\x01",
        );
        octets.extend_from_slice(
            b"\x00\x00\x01\x00\x01\x00\x00\x00\x00\x00\x05\x01\x02\x03\x04\x05",
        );
        assert_eq!(
            Message::from_octets(&octets),
            Err(MessageError::Section {
                section: Section::Answer,
                index: 1,
                err: ParseError::InvalidAddress,
            })
        );
    }

    #[test]
    fn start_response_echoes_request() {
        let mut rng = rand::rngs::mock::StepRng::new(0xfeed, 0);
        let mut request = Message::query(&mut rng);
        request.header_mut().set_rd(true);
        request.push_question(("example.org", Rtype::AAAA));

        let response = request.start_response();
        assert_eq!(response.header().id(), request.header().id());
        assert!(response.header().qr());
        assert!(response.header().rd());
        assert_eq!(response.questions(), request.questions());
        assert_eq!(response.header().qdcount(), 1);
        assert!(response.answers().is_empty());
    }

    #[test]
    fn fresh_message_is_empty() {
        let msg = Message::new();
        assert_eq!(msg.header().qdcount(), 0);
        assert_eq!(msg.header().ancount(), 0);
        assert_eq!(msg.header().nscount(), 0);
        assert_eq!(msg.header().arcount(), 0);
        assert!(msg.questions().is_empty());
        let octets = msg.to_octets().unwrap();
        assert_eq!(octets.len(), 12);
    }
}
