//! A DNS wire-format codec for Rust.
//!
//! This crate turns a byte buffer received from the network into a
//! structured DNS [`Message`] and a [`Message`] back into bytes suitable
//! for transmission over UDP or inside an HTTP exchange. It covers the
//! message header, domain names including compression-pointer resolution,
//! the question section, and the resource record types A, AAAA, CNAME, NS,
//! SOA, SRV, TXT, and the EDNS OPT pseudo record.
//!
//! Recursive resolution, caching, zone storage, and DNSSEC validation are
//! out of scope: the crate round-trips the wire representation and leaves
//! everything else to its users.
//!
//! # Modules
//!
//! Two modules providing the codec itself are always enabled:
//!
//! * [base] contains the message format: header, names, questions, the
//!   record framework, and the message aggregate, and
//! * [rdata] contains the record data implementations.
//!
//! The `net` feature, enabled by default, adds:
//!
//! * [net] with a UDP query client, a DNS-over-HTTPS client, and a UDP
//!   serve loop, all thin consumers of the codec's decode and encode
//!   entry points.
//!
//! # Example
//!
//! Building a query and reading it back:
//!
//! ```
//! use dnswire::base::iana::Rtype;
//! use dnswire::base::Message;
//!
//! let mut request = Message::query(&mut rand::thread_rng());
//! request.header_mut().set_rd(true);
//! request.push_question(("example.com", Rtype::A));
//!
//! let octets = request.to_octets().unwrap();
//! assert_eq!(Message::from_octets(&octets).unwrap(), request);
//! ```

pub mod base;
pub mod rdata;

#[cfg(feature = "net")]
pub mod net;
