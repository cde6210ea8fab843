//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a message states whether processing a query was
    /// successful and, if not, what went wrong. It lives in the bottom four
    /// bits of the second flags octet of the header; EDNS additionally
    /// carries four more upper bits in the OPT record's TTL field.
    ///
    /// The initial set of values is defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Rcode, u8, "RCODE";

    /// No error condition (0).
    (NoError => 0, "NOERROR")

    /// The name server was unable to interpret the query (1).
    (FormErr => 1, "FORMERR")

    /// The name server had an internal problem (2).
    (ServFail => 2, "SERVFAIL")

    /// The queried domain name does not exist (3).
    ///
    /// Only meaningful in responses from an authoritative server.
    (NXDomain => 3, "NXDOMAIN")

    /// The name server does not support the requested kind of query (4).
    (NotImp => 4, "NOTIMP")

    /// The name server refused to perform the operation (5).
    (Refused => 5, "REFUSED")
}
