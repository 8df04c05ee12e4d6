//! Enumerations exchanged with the API as fixed string tokens.
//!
//! Each enum owns a static variant table. `as_wire` is a total mapping and
//! `from_wire` consults a reverse index built once per process, so an
//! unrecognised token is always an error rather than a fallback.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::params::WireValue;

/// A token that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token '{token}'")]
pub struct UnknownWireToken {
    pub kind: &'static str,
    pub token: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire tokens, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// The exact token sent to and received from the API.
            pub fn as_wire(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }

            /// Looks up the variant for a wire token.
            pub fn from_wire(token: &str) -> Option<Self> {
                static LOOKUP: Lazy<HashMap<&'static str, $name>> = Lazy::new(|| {
                    $name::ALL.iter().map(|v| (v.as_wire(), *v)).collect()
                });
                LOOKUP.get(token).copied()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_wire())
            }
        }

        impl FromStr for $name {
            type Err = UnknownWireToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_wire(s).ok_or_else(|| UnknownWireToken {
                    kind: stringify!($name),
                    token: s.to_string(),
                })
            }
        }

        impl WireValue for $name {
            fn to_wire(&self) -> String {
                self.as_wire().to_string()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_wire())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                $name::from_wire(&token)
                    .ok_or_else(|| de::Error::unknown_variant(&token, $name::TOKENS))
            }
        }
    };
}

wire_enum! {
    /// Character encoding of a relayed message.
    pub enum MessageEncoding {
        Utf8 => "utf-8",
        Iso8859X => "iso-8859-x",
    }
}

wire_enum! {
    /// Status of a mailing list.
    pub enum ListStatus {
        Active => "active",
        Archived => "archived",
    }
}

wire_enum! {
    /// Sort key for list queries.
    pub enum ListsSortBy {
        Name => "name",
        CreatedOn => "created_on",
        ActiveMembersCount => "active_members_count",
    }
}

wire_enum! {
    pub enum SortDirection {
        Ascending => "asc",
        Descending => "desc",
    }
}
