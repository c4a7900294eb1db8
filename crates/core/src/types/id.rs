//! Newtype IDs for type-safe entity references.
//!
//! The `define_id!` macro creates thin wrappers around `i32` (the serial
//! primary key type) so a `PlantId` can never be handed to an operation
//! expecting an `OrderId`. Orders hold their `PlantId` as a plain value,
//! not a database-enforced foreign key; the wrapper is what keeps the join
//! key honest in code.

/// Define a type-safe ID wrapper around `i32`.
///
/// The generated type carries transparent serde, `Display`/`FromStr` as
/// bare digits, `From<i32>` conversions, and (behind the `postgres`
/// feature) sqlx implementations delegating to `i32`.
///
/// # Example
///
/// ```rust
/// use plantnet_core::PlantId;
///
/// let plant = PlantId::new(7);
/// assert_eq!(plant.as_i32(), 7);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw serial key.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The raw serial key.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                self.0.fmt(f)
            }
        }

        // Route paths and CLI arguments carry ids as bare digits.
        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        // Binds and decodes as a plain INT, delegating everything to i32.
        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <i32 as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                <i32 as ::sqlx::Decode<'r, ::sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::core::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError>
            {
                <i32 as ::sqlx::Encode<'_, ::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

define_id!(UserId);
define_id!(PlantId);
define_id!(OrderId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_i32() {
        let id = PlantId::new(42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(PlantId::from(42), id);
    }

    #[test]
    fn serde_is_transparent() {
        let id: OrderId = serde_json::from_str("17").unwrap();
        assert_eq!(id, OrderId::new(17));
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
    }

    #[test]
    fn displays_and_parses_as_bare_digits() {
        assert_eq!(UserId::new(3).to_string(), "3");
        assert_eq!("3".parse::<UserId>().unwrap(), UserId::new(3));
        assert!("not-a-number".parse::<PlantId>().is_err());
    }
}
