//! Collection names and transaction scopes.
//!
//! Each record kind lives in its own collection (one redb table per
//! collection, named after the collection). A transaction is opened over a
//! [`CollectionSet`] and may only touch the collections in that set.

use std::collections::BTreeSet;
use std::fmt;

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Table definition shared by every record collection: identifier text to
/// bincode-encoded record.
pub type RecordTableDefinition = redb::TableDefinition<'static, &'static str, &'static [u8]>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Experiences,
    Companies,
    Jobs,
    Templates,
}

impl Collection {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub(crate) fn table_definition(self) -> RecordTableDefinition {
        redb::TableDefinition::new(self.name())
    }
}

/// The set of collections a single transaction spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSet(BTreeSet<Collection>);

impl CollectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Collection::iter().collect()
    }

    pub fn insert(&mut self, collection: Collection) -> bool {
        self.0.insert(collection)
    }

    pub fn with(mut self, collection: Collection) -> Self {
        self.0.insert(collection);
        self
    }

    pub fn contains(&self, collection: Collection) -> bool {
        self.0.contains(&collection)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Collection> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Collection> for CollectionSet {
    fn from_iter<I: IntoIterator<Item = Collection>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Collection> for CollectionSet {
    fn extend<I: IntoIterator<Item = Collection>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::Display for CollectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, collection) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(collection.name())?;
        }
        f.write_str("]")
    }
}
