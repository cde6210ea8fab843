//! A simple DNS-over-UDP client.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time;
use tracing::debug;
use crate::base::message::Message;
use super::Error;

/// The conventional maximum size of a plain UDP DNS response.
const MAX_DATAGRAM: usize = 512;

/// The default time to wait for a response.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

//------------ UdpClient -----------------------------------------------------

/// A client sending queries to one server over plain UDP.
///
/// The client is stateless apart from its configuration: every query binds
/// an ephemeral socket, sends a single datagram, and awaits a single
/// response datagram.
#[derive(Clone, Debug)]
pub struct UdpClient {
    /// The address of the server to query.
    server: SocketAddr,

    /// How long to wait for a response.
    timeout: Duration,
}

impl UdpClient {
    /// Creates a new client for the given server address.
    pub fn new(server: SocketAddr) -> Self {
        UdpClient { server, timeout: DEFAULT_TIMEOUT }
    }

    /// Sets the time to wait for a response.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends the request and awaits the response.
    ///
    /// Fails with [`Error::Timeout`] if no response datagram arrives in
    /// time. No retransmission is attempted; retry policy belongs to the
    /// caller.
    pub async fn query(&self, request: &Message) -> Result<Message, Error> {
        let local: SocketAddr = if self.server.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(local).await?;
        socket.connect(self.server).await?;
        socket.send(&request.to_octets()?).await?;

        let mut buf = [0u8; MAX_DATAGRAM];
        let len = time::timeout(self.timeout, socket.recv(&mut buf))
            .await
            .map_err(|_| Error::Timeout)??;
        debug!(server = %self.server, len, "received response datagram");
        Ok(Message::from_octets(&buf[..len])?)
    }
}

//============ Testing =======================================================
