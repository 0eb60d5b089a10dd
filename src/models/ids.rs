//! Strongly-typed record ids
//!
//! Expense and sale ids are distinct types so one can never be used to look
//! up the other collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form shown in listings, e.g. `exp-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }

            /// Does a user-typed identifier refer to this id?
            ///
            /// Accepts the full UUID (hyphenated or not), or any prefix of at
            /// least four hex characters, with or without the display prefix.
            /// Case is ignored.
            pub fn matches(&self, identifier: &str) -> bool {
                let lowered = identifier.trim().to_ascii_lowercase();
                let hex: String = lowered
                    .strip_prefix($display_prefix)
                    .unwrap_or(lowered.as_str())
                    .chars()
                    .filter(|c| *c != '-')
                    .collect();
                hex.len() >= 4 && self.0.simple().to_string().starts_with(&hex)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(SaleId, "sal-");
