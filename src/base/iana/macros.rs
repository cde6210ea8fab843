//! Macros making implementing IANA types easier.

/// Creates a standard IANA type wrapping an integer.
///
/// The resulting type gets associated constants for all well-defined
/// values, conversions from and to the raw integer, mnemonic round trips,
/// and wire-format parse and compose methods. `Display` falls back to the
/// given prefix followed by the decimal value for values without a
/// mnemonic, as in RFC 3597.
macro_rules! int_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:ty, $prefix:expr;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $ianatype($inttype);

        impl $ianatype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $ianatype = $ianatype($value);
            )*
        }

        impl $ianatype {
            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Returns a value from a well-defined mnemonic.
            #[must_use]
            pub fn from_mnemonic(m: &str) -> Option<Self> {
                $(
                    if m.eq_ignore_ascii_case($mnemonic) {
                        return Some($ianatype::$variant)
                    }
                )*
                None
            }

            /// Returns the mnemonic for this value if there is one.
            #[must_use]
            pub const fn to_mnemonic(self) -> Option<&'static str> {
                match self {
                    $(
                        $ianatype::$variant => Some($mnemonic),
                    )*
                    _ => None
                }
            }

            /// Extracts a value from the beginning of `parser`.
            pub fn parse(
                parser: &mut $crate::base::wire::Parser<'_>
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$inttype as $crate::base::wire::ParseInt>::parse_int(
                    parser
                ).map(Self::from_int)
            }

            /// Appends the big-endian wire representation to `target`.
            pub fn compose(self, target: &mut std::vec::Vec<u8>) {
                target.extend_from_slice(&self.to_int().to_be_bytes())
            }
        }

        //--- From

        impl From<$inttype> for $ianatype {
            fn from(value: $inttype) -> Self {
                $ianatype::from_int(value)
            }
        }

        impl From<$ianatype> for $inttype {
            fn from(value: $ianatype) -> Self {
                value.to_int()
            }
        }

        //--- Debug

        impl core::fmt::Debug for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => {
                        write!(
                            f, concat!(stringify!($ianatype), "::{}"),
                            mnemonic
                        )
                    }
                    None => {
                        f.debug_tuple(stringify!($ianatype))
                            .field(&self.0).finish()
                    }
                }
            }
        }

        //--- Display

        impl core::fmt::Display for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => f.write_str(mnemonic),
                    None => write!(f, "{}{}", $prefix, self.0),
                }
            }
        }
    }
}
