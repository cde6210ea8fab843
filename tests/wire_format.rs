//! Wire-format compatibility checks against hand-assembled messages.

use dnswire::base::iana::{Class, Rtype};
use dnswire::base::{Message, MessageError, ParseError, Record, Section};
use dnswire::rdata::{RecordData, A};

/// A realistic response buffer using name compression throughout: one
/// question for `example.com` A/IN and two A answers whose owner names
/// are pointers to the question name.
fn compressed_response() -> Vec<u8> {
    let mut octets = Vec::new();
    // Header: ID 0x1234, QR+RD+RA, one question, two answers.
    octets.extend_from_slice(
        b"\x12\x34\x81\x80\x00\x01\x00\x02\x00\x00\x00\x00",
    );
    // Question at offset 12.
    octets.extend_from_slice(b"\x07example\x03com\x00\x00\x01\x00\x01");
    // Two answers, each owner name a pointer to offset 12.
    octets.extend_from_slice(
        b"\xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\x5d\xb8\xd8\x22",
    );
    octets.extend_from_slice(
        b"\xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\x5d\xb8\xd8\x23",
    );
    octets
}

#[test]
fn decode_compressed_response() {
    let msg = Message::from_octets(&compressed_response()).unwrap();
    assert_eq!(msg.header().id(), 0x1234);
    assert!(msg.header().qr());
    assert!(msg.header().rd());
    assert!(msg.header().ra());
    assert_eq!(msg.questions().len(), 1);
    assert_eq!(*msg.questions()[0].qname(), "example.com");
    assert_eq!(msg.questions()[0].qtype(), Rtype::A);
    assert_eq!(msg.answers().len(), 2);
    for answer in msg.answers() {
        assert_eq!(*answer.name(), "example.com");
        assert_eq!(answer.class(), Class::IN);
        assert_eq!(answer.ttl(), 3600);
    }
    assert_eq!(
        *msg.answers()[0].data(),
        RecordData::A(A::from_octets(93, 184, 216, 34))
    );
}

#[test]
fn reencode_decoded_response() {
    // Compression is consumed but never produced: re-encoding writes the
    // names in full, and the result decodes to the same message.
    let msg = Message::from_octets(&compressed_response()).unwrap();
    let octets = msg.to_octets().unwrap();
    assert!(octets.len() > compressed_response().len());
    assert_eq!(Message::from_octets(&octets).unwrap(), msg);
}

#[test]
fn query_wire_format_is_fixed() {
    let mut msg = Message::new();
    msg.header_mut().set_id(123);
    msg.header_mut().set_rd(true);
    msg.push_question(("example.com", Rtype::A));
    assert_eq!(
        msg.to_octets().unwrap(),
        b"\x00\x7b\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
          \x07example\x03com\x00\x00\x01\x00\x01"
    );
}

#[test]
fn pointer_loop_fails_the_message() {
    // One answer whose owner name points at itself via a two-step loop.
    let mut octets = Vec::new();
    octets.extend_from_slice(
        b"\x00\x00\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00",
    );
    // Offset 12: label "a", then a pointer back to offset 12.
    octets.extend_from_slice(b"\x01a\xc0\x0c");
    octets.extend_from_slice(b"\x00\x01\x00\x01\x00\x00\x00\x00\x00\x04");
    octets.extend_from_slice(b"\x7f\x00\x00\x01");
    assert_eq!(
        Message::from_octets(&octets),
        Err(MessageError::Section {
            section: Section::Answer,
            index: 0,
            err: ParseError::CompressionLoop,
        })
    );
}

#[test]
fn trailing_garbage_is_ignored() {
    // Decoding is driven by the header counts; octets beyond the counted
    // entries are not an error.
    let mut octets = compressed_response();
    octets.extend_from_slice(b"junk");
    let msg = Message::from_octets(&octets).unwrap();
    assert_eq!(msg.answers().len(), 2);
}

#[test]
fn record_equality_survives_the_round_trip() {
    let record = Record::new(
        "example.com.",
        Class::IN,
        3600,
        A::from_octets(127, 0, 0, 1),
    );
    let mut msg = Message::new();
    msg.push_answer(record.clone());
    let octets = msg.to_octets().unwrap();
    let decoded = Message::from_octets(&octets).unwrap();
    assert_eq!(decoded.answers()[0], record);
}
