//! Serving DNS queries over UDP.

use std::io;
use tokio::net::{ToSocketAddrs, UdpSocket};
use tracing::{info, warn};
use crate::base::message::Message;

/// The conventional maximum size of a plain UDP DNS datagram.
const MAX_DATAGRAM: usize = 512;

//------------ Handler -------------------------------------------------------

/// A type that produces responses to DNS queries.
///
/// Returning `None` drops the query without a response.
pub trait Handler: Send + Sync {
    /// Produces the response for a single request message.
    fn handle(&self, request: &Message) -> Option<Message>;
}

impl<F> Handler for F
where
    F: Fn(&Message) -> Option<Message> + Send + Sync,
{
    fn handle(&self, request: &Message) -> Option<Message> {
        self(request)
    }
}

//------------ serve_udp -----------------------------------------------------

/// Binds a socket on the given address and serves DNS queries on it.
pub async fn serve_udp(
    addr: impl ToSocketAddrs,
    handler: impl Handler,
) -> io::Result<()> {
    let socket = UdpSocket::bind(addr).await?;
    serve_socket(socket, handler).await
}

/// Serves DNS queries on an already bound socket.
///
/// Each datagram is decoded, handed to the handler, and the handler's
/// response – with the request's ID copied in and the QR bit set – is sent
/// back to the peer. One malformed datagram must not affect subsequent
/// ones: all per-datagram failures are logged and the loop continues.
pub async fn serve_socket(
    socket: UdpSocket,
    handler: impl Handler,
) -> io::Result<()> {
    info!(addr = %socket.local_addr()?, "listening for DNS queries on UDP");
    let mut buf = [0u8; MAX_DATAGRAM];
    loop {
        let (len, peer) = match socket.recv_from(&mut buf).await {
            Ok(some) => some,
            Err(err) => {
                warn!(%err, "failed to receive datagram");
                continue;
            }
        };
        let request = match Message::from_octets(&buf[..len]) {
            Ok(request) => request,
            Err(err) => {
                warn!(%peer, %err, "dropping malformed query datagram");
                continue;
            }
        };
        let Some(mut response) = handler.handle(&request) else {
            continue;
        };
        response.header_mut().set_id(request.header().id());
        response.header_mut().set_qr(true);
        let octets = match response.to_octets() {
            Ok(octets) => octets,
            Err(err) => {
                warn!(%peer, %err, "could not encode response");
                continue;
            }
        };
        if let Err(err) = socket.send_to(&octets, peer).await {
            warn!(%peer, %err, "failed to send response");
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::record::Record;
    use crate::net::UdpClient;
    use crate::rdata::A;

    #[tokio::test]
    async fn serves_queries_and_survives_garbage() {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        tokio::spawn(serve_socket(socket, |request: &Message| {
            let mut response = request.start_response();
            response.push_answer(Record::new(
                "example.com.",
                Class::IN,
                3600,
                A::from_octets(127, 0, 0, 1),
            ));
            Some(response)
        }));

        // A malformed datagram first; the server must keep running.
        let prober = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        prober.send_to(b"\xde\xad\xbe\xef", addr).await.unwrap();

        let mut rng = rand::rngs::mock::StepRng::new(0x5353, 0);
        let mut request = Message::query(&mut rng);
        request.push_question(("example.com", Rtype::A));
        let response = UdpClient::new(addr).query(&request).await.unwrap();
        assert_eq!(response.header().id(), request.header().id());
        assert!(response.header().qr());
        assert_eq!(response.answers().len(), 1);
    }
}
