//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class is its own tree of
    /// domain names. Note, though, that in practice only the IN class is in
    /// actual use.
    ///
    /// The OPT pseudo record reappropriates the class field of its record
    /// header to carry the requestor's UDP payload size, so arbitrary
    /// integer values do occur on the wire and are representable here.
    =>
    Class, u16, "CLASS";

    /// Internet (1).
    (IN => 1, "IN")

    /// CSNET (2, obsolete).
    (CS => 2, "CS")

    /// CHAOS (3).
    (CH => 3, "CH")

    /// Hesiod (4).
    (HS => 4, "HS")

    /// Query class None (254).
    ///
    /// See RFC 2136.
    (NONE => 254, "NONE")

    /// Query class Any (255).
    (ANY => 255, "ANY")
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Class;

    #[test]
    fn udp_payload_size_values() {
        // The OPT record stores the UDP payload size in the class field.
        assert_eq!(Class::from_int(4096).to_int(), 4096);
        assert_eq!(format!("{}", Class::from_int(4096)), "CLASS4096");
        assert_eq!(format!("{}", Class::IN), "IN");
    }
}
