//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It lives in
    /// the four bits following the QR bit of a message header.
    ///
    /// The opcode and its initial set of values are defined in [RFC 1035];
    /// additional values have been assigned over time.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Opcode, u8, "OPCODE";

    /// A standard query (0).
    (Query => 0, "QUERY")

    /// An inverse query (1, obsolete).
    (IQuery => 1, "IQUERY")

    /// A server status request (2).
    (Status => 2, "STATUS")

    /// A NOTIFY query (4).
    ///
    /// See RFC 1996.
    (Notify => 4, "NOTIFY")

    /// An UPDATE query (5).
    ///
    /// See RFC 2136.
    (Update => 5, "UPDATE")
}
