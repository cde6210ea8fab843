//! IANA definitions for DNS.
//!
//! This module contains enums for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes wrapping the raw integer value with associated constants for
//! all well-defined values. This way, arbitrary values that appear on the
//! wire – such as the UDP payload size an OPT record smuggles into the
//! class field – can still be represented.

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;
