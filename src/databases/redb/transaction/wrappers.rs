use super::tables::{CollectionReader, CollectionWriter};
use crate::collection::CollectionSet;
use crate::errors::{StoreError, StoreResult};
use crate::models::Record;

/// Wrapper around redb::ReadTransaction limited to a scope of collections
pub struct StoreReadTransaction {
    pub(crate) inner: redb::ReadTransaction,
    scope: CollectionSet,
}

impl StoreReadTransaction {
    pub fn new(inner: redb::ReadTransaction, scope: CollectionSet) -> Self {
        Self { inner, scope }
    }

    pub fn scope(&self) -> &CollectionSet {
        &self.scope
    }

    pub fn open<R: Record>(&self) -> StoreResult<CollectionReader<R>> {
        if !self.scope.contains(R::COLLECTION) {
            return Err(StoreError::OutOfScope(R::COLLECTION));
        }
        self.inner
            .open_table(R::COLLECTION.table_definition())
            .map(CollectionReader::new)
            .map_err(StoreError::RedbTableError)
    }
}

/// Wrapper around redb::WriteTransaction limited to a scope of collections
pub struct StoreWriteTransaction {
    pub(crate) inner: redb::WriteTransaction,
    scope: CollectionSet,
}

impl StoreWriteTransaction {
    pub fn new(inner: redb::WriteTransaction, scope: CollectionSet) -> Self {
        Self { inner, scope }
    }

    pub fn scope(&self) -> &CollectionSet {
        &self.scope
    }

    /// Opens a collection for writing. Only one writer per collection may
    /// be open at a time within a transaction.
    pub fn open<R: Record>(&self) -> StoreResult<CollectionWriter<'_, R>> {
        if !self.scope.contains(R::COLLECTION) {
            return Err(StoreError::OutOfScope(R::COLLECTION));
        }
        self.inner
            .open_table(R::COLLECTION.table_definition())
            .map(CollectionWriter::new)
            .map_err(StoreError::RedbTableError)
    }

    pub fn commit(self) -> StoreResult<()> {
        Ok(self.inner.commit()?)
    }

    /// Discards every change made in this transaction.
    pub fn abort(self) -> StoreResult<()> {
        Ok(self.inner.abort()?)
    }
}
