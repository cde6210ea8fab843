//! A DNS-over-HTTPS client.
//!
//! [RFC 8484] transports DNS messages over HTTP: a GET request carries the
//! encoded query message base64url-encoded without padding in the `dns`
//! query parameter, and the response body is the raw encoded response
//! message. The framing helpers are public so that any HTTP server wiring
//! can reuse them.
//!
//! [RFC 8484]: https://tools.ietf.org/html/rfc8484

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::header;
use crate::base::message::Message;
use crate::base::wire::ComposeError;
use super::Error;

/// The media type of a DNS message in an HTTP exchange.
pub const MEDIA_TYPE: &str = "application/dns-message";

//------------ Query parameter framing ---------------------------------------

/// Encodes a message for use as the `dns` query parameter.
pub fn encode_query_param(message: &Message) -> Result<String, ComposeError> {
    Ok(URL_SAFE_NO_PAD.encode(message.to_octets()?))
}

/// Decodes a message from the value of a `dns` query parameter.
pub fn decode_query_param(param: &str) -> Result<Message, Error> {
    let octets = URL_SAFE_NO_PAD.decode(param).map_err(|_| Error::Base64)?;
    Ok(Message::from_octets(&octets)?)
}

//------------ DohClient -----------------------------------------------------

/// A client sending queries to one DNS-over-HTTPS server.
#[derive(Clone, Debug)]
pub struct DohClient {
    /// The URL of the server's DoH endpoint.
    server: String,

    /// The HTTP client used for all queries.
    client: reqwest::Client,
}

impl DohClient {
    /// Creates a new client for the given endpoint URL.
    ///
    /// The URL is used as-is apart from appending the `dns` query
    /// parameter, e.g. `https://cloudflare-dns.com/dns-query`.
    pub fn new(server: impl Into<String>) -> Self {
        DohClient { server: server.into(), client: reqwest::Client::new() }
    }

    /// Sends the request and awaits the response.
    pub async fn query(&self, request: &Message) -> Result<Message, Error> {
        let url = format!(
            "{}?dns={}",
            self.server,
            encode_query_param(request)?
        );
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, MEDIA_TYPE)
            .header(header::CONTENT_TYPE, MEDIA_TYPE)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(Message::from_octets(&body)?)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;

    #[test]
    fn query_param_round_trip() {
        let mut rng = rand::rngs::mock::StepRng::new(0x2323, 0);
        let mut request = Message::query(&mut rng);
        request.push_question(("example.com", Rtype::AAAA));

        let param = encode_query_param(&request).unwrap();
        // base64url without padding never contains '=', '+', or '/'.
        assert!(!param.contains(['=', '+', '/']));
        assert_eq!(decode_query_param(&param).unwrap(), request);
    }

    #[test]
    fn rejects_bad_base64() {
        assert!(matches!(
            decode_query_param("not base64url!"),
            Err(Error::Base64)
        ));
    }
}
