//! Macros for implementing record data types.

/// Creates a record data type consisting of a single domain name.
///
/// Several record types share this shape; the macro keeps their
/// implementations identical.
macro_rules! name_type {
    ( $(#[$attr:meta])* ( $target:ident, $field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            $field: Name,
        }

        impl $target {
            /// Creates new record data from a domain name.
            pub fn new($field: impl Into<Name>) -> Self {
                $target { $field: $field.into() }
            }

            /// Returns a reference to the domain name.
            pub fn $field(&self) -> &Name {
                &self.$field
            }

            /// Extracts the record data from the beginning of `parser`.
            ///
            /// The name may use compression.
            pub fn parse(
                parser: &mut Parser<'_>
            ) -> Result<Self, ParseError> {
                Name::parse(parser).map(Self::new)
            }

            /// Appends the wire format of the record data to `target`.
            pub fn compose(
                &self,
                target: &mut Vec<u8>,
            ) -> Result<(), ComposeError> {
                self.$field.compose(target)
            }
        }

        //--- From

        impl From<Name> for $target {
            fn from($field: Name) -> Self {
                Self::new($field)
            }
        }

        //--- Display

        impl std::fmt::Display for $target {
            fn fmt(
                &self, f: &mut std::fmt::Formatter
            ) -> std::fmt::Result {
                self.$field.fmt(f)
            }
        }
    }
}
