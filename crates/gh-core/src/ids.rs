//! Typed ID wrappers providing compile-time safety for entity identifiers.
//!
//! Each ID type is a newtype over the `i64` rowid, preventing accidental
//! misuse (e.g., passing a `WeaponId` where an `ArmorId` is expected).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Generate a newtype ID wrapper over `i64`.
///
/// The macro produces a struct with:
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Serialize`, `Deserialize`
/// - `Display` and `FromStr` delegating to the inner integer
/// - `From<i64>` and `as_i64` conversions
macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                /// Return the inner integer value.
                #[must_use]
                pub fn as_i64(&self) -> i64 {
                    self.0
                }
            }

            impl From<i64> for $name {
                fn from(v: i64) -> Self {
                    Self(v)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = ParseIntError;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    s.parse::<i64>().map(Self)
                }
            }
        )+
    };
}

typed_id!(
    /// Identifier for a player row.
    PlayerId,
    /// Identifier for a monster row.
    MonsterId,
    /// Identifier for a weapon row.
    WeaponId,
    /// Identifier for an armor row.
    ArmorId,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let id = WeaponId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<WeaponId>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("axe".parse::<PlayerId>().is_err());
    }

    #[test]
    fn serde_transparent() {
        let id = ArmorId::from(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: ArmorId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}
