//! A single question in a DNS message.
//!
//! This module defines the type [`Question`] which represents an entry in
//! the question section of a DNS message.

use std::fmt;
use crate::base::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{ComposeError, ParseError, Parser};

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class.
///
/// In order to allow questions on the fly, the `From` trait is implemented
/// for tuples of all three elements of a question as well as for only name
/// and record type assuming `Class::IN`, which is likely what you want,
/// anyway.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three components.
    pub fn new(qname: impl Into<Name>, qtype: Rtype, qclass: Class) -> Self {
        Question { qname: qname.into(), qtype, qclass }
    }

    /// Creates a new question from a name and record type, assuming
    /// class IN.
    pub fn new_in(qname: impl Into<Name>, qtype: Rtype) -> Self {
        Question { qname: qname.into(), qtype, qclass: Class::IN }
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name in the question.
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Extracts a question from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Question {
            qname: Name::parse(parser)?,
            qtype: Rtype::parse(parser)?,
            qclass: Class::parse(parser)?,
        })
    }

    /// Appends the wire format of the question to `target`.
    ///
    /// The name is always written with its terminating root label here,
    /// unlike at the record name sites.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), ComposeError> {
        self.qname.compose_terminated(target)?;
        self.qtype.compose(target);
        self.qclass.compose(target);
        Ok(())
    }
}

//--- From

impl<N: Into<Name>> From<(N, Rtype, Class)> for Question {
    fn from((qname, qtype, qclass): (N, Rtype, Class)) -> Self {
        Question::new(qname, qtype, qclass)
    }
}

impl<N: Into<Name>> From<(N, Rtype)> for Question {
    fn from((qname, qtype): (N, Rtype)) -> Self {
        Question::new_in(qname, qtype)
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

//============ Testing =======================================================
