//! Sending and receiving DNS messages.
//!
//! This module contains the transport collaborators around the codec: a
//! simple UDP query client, a DNS-over-HTTPS client, and a UDP serve loop.
//! They all consume exactly the two codec entry points –
//! [`Message::from_octets`][crate::base::message::Message::from_octets] and
//! [`Message::to_octets`][crate::base::message::Message::to_octets] – and
//! add nothing to the wire format itself.
//!
//! Cancellation, timeouts, and retry policy live here, not in the codec.

pub mod client;
pub mod doh;
pub mod server;

pub use self::client::UdpClient;
pub use self::doh::DohClient;
pub use self::server::{serve_socket, serve_udp, Handler};

use std::io;
use thiserror::Error;
use crate::base::message::MessageError;
use crate::base::wire::ComposeError;

//------------ Error ---------------------------------------------------------

/// An error happened while exchanging DNS messages.
#[derive(Debug, Error)]
pub enum Error {
    /// The network operation failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// No response arrived in time.
    #[error("request timed out")]
    Timeout,

    /// The request could not be encoded.
    #[error("could not encode request: {0}")]
    Compose(#[from] ComposeError),

    /// The response could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(#[from] MessageError),

    /// The HTTP exchange failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A base64url-encoded message could not be decoded.
    #[error("invalid base64url message encoding")]
    Base64,
}
