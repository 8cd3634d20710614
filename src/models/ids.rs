//! Typed record identifiers.
//!
//! Identifiers are random UUID-v4 values stored as their lowercase
//! hyphenated text. Each collection has its own newtype so an experience id can
//! never be handed to a company lookup.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behaviour shared by every identifier newtype.
pub trait RecordKey:
    Clone + Ord + fmt::Debug + fmt::Display + AsRef<str> + From<String> + Send + Sync
{
    /// Draws a fresh random identifier.
    fn generate() -> Self;
}

macro_rules! record_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            bincode::Encode,
            bincode::Decode,
            derive_more::From,
            derive_more::Into,
            derive_more::Display,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl RecordKey for $name {
            fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

record_key!(
    /// Identifier of an [`Experience`](super::Experience).
    ExperienceId
);
record_key!(
    /// Identifier of a [`Company`](super::Company).
    CompanyId
);
record_key!(
    /// Identifier of a [`Job`](super::Job).
    JobId
);
record_key!(
    /// Identifier of a [`Template`](super::Template).
    TemplateId
);
