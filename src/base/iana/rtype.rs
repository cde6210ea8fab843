//! Resource Record (RR) TYPEs.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. A normal query includes the
    /// type of record information is requested for. A few additional types,
    /// called query types, are defined as well and can only be used in
    /// questions.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// This type carries the values the codec knows about; everything else
    /// is still representable through [`from_int`][Rtype::from_int] but has
    /// no record data implementation.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16, "TYPE";

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination.
    ///
    /// (Obsolete – use MX.)
    (MD => 3, "MD")

    /// A mail forwarder.
    ///
    /// (Obsolete – use MX.)
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    ///
    /// (Experimental.)
    (MB => 7, "MB")

    /// A mail group member.
    ///
    /// (Experimental.)
    (MG => 8, "MG")

    /// A mail rename domain name.
    ///
    /// (Experimental.)
    (MR => 9, "MR")

    /// A null resource record.
    ///
    /// (Experimental.)
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// The OPT pseudo record type for EDNS.
    ///
    /// See RFC 6891.
    (OPT => 41, "OPT")

    /// Sender Policy Framework.
    ///
    /// (Obsolete – use a TXT record instead.)
    (SPF => 99, "SPF")

    /// Transfer of an entire zone.
    (AXFR => 252, "AXFR")

    /// Mailbox-related records (MB, MG, or MR).
    (MAILB => 253, "MAILB")

    /// Mail agent RRs.
    ///
    /// (Obsolete – see MX.)
    (MAILA => 254, "MAILA")

    /// A request for all records.
    (ANY => 255, "ANY")
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Rtype;

    #[test]
    fn from_and_to_int() {
        assert_eq!(Rtype::from_int(5), Rtype::CNAME);
        assert_eq!(Rtype::OPT.to_int(), 41);
        assert_eq!(Rtype::from_int(4711).to_int(), 4711);
    }

    #[test]
    fn mnemonics() {
        assert_eq!(Rtype::from_mnemonic("aaaa"), Some(Rtype::AAAA));
        assert_eq!(Rtype::from_mnemonic("TYPE4711"), None);
        assert_eq!(Rtype::SRV.to_mnemonic(), Some("SRV"));
        assert_eq!(Rtype::from_int(4711).to_mnemonic(), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rtype::A), "A");
        assert_eq!(format!("{}", Rtype::from_int(4711)), "TYPE4711");
    }
}
