//! The basics of the DNS wire format.
//!
//! This module provides the types that make up a DNS message and the means
//! to extract them from and assemble them into their wire format as defined
//! in [RFC 1035].
//!
//! In order to easily distinguish the two directions of conversion, we use
//! the term *parsing* for extracting data from a wire-format representation
//! and *composing* for producing such a representation. Both happen on
//! buffers holding a complete DNS message. This is a reasonable choice
//! given the limited size of DNS messages and the complexities introduced
//! by compressing domain names in messages by referencing other parts of
//! the message.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod opt;
pub mod question;
pub mod record;
pub mod wire;

pub use self::header::Header;
pub use self::message::{Message, MessageError, Section};
pub use self::name::Name;
pub use self::opt::{OptOption, OptRecord};
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::{ComposeError, ParseError, Parser};
