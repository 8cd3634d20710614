//! Typed handles over a single collection table.
//!
//! [`CollectionReader`] wraps a read-only table, [`CollectionWriter`] a
//! table opened inside a write transaction. Both decode records through
//! [`codec`](crate::databases::redb::codec) and share the lookup and scan
//! helpers below, which work over anything implementing
//! [`redb::ReadableTable`].

use std::marker::PhantomData;

use redb::ReadableTable;

use crate::databases::redb::codec;
use crate::errors::{StoreError, StoreResult};
use crate::models::Record;

type RecordKeyType = &'static str;
type RecordValueType = &'static [u8];

fn get_record<T, R>(table: &T, id: &R::Id) -> StoreResult<Option<R>>
where
    T: ReadableTable<RecordKeyType, RecordValueType>,
    R: Record,
{
    match table.get(id.as_ref())? {
        Some(guard) => Ok(Some(codec::decode(guard.value())?)),
        None => Ok(None),
    }
}

fn scan_records<T, R, F>(table: &T, mut keep: F) -> StoreResult<Vec<R>>
where
    T: ReadableTable<RecordKeyType, RecordValueType>,
    R: Record,
    F: FnMut(&R) -> bool,
{
    let mut records = Vec::new();
    for entry in table.iter()? {
        let (_key, value) = entry?;
        let record: R = codec::decode(value.value())?;
        if keep(&record) {
            records.push(record);
        }
    }
    Ok(records)
}

fn record_ids<T, R>(table: &T) -> StoreResult<Vec<R::Id>>
where
    T: ReadableTable<RecordKeyType, RecordValueType>,
    R: Record,
{
    let mut ids = Vec::new();
    for entry in table.iter()? {
        let (key, _value) = entry?;
        ids.push(R::Id::from(key.value().to_owned()));
    }
    Ok(ids)
}

/// Read-only view of one collection.
pub struct CollectionReader<R: Record> {
    table: redb::ReadOnlyTable<RecordKeyType, RecordValueType>,
    _record: PhantomData<R>,
}

impl<R: Record> CollectionReader<R> {
    pub(crate) fn new(table: redb::ReadOnlyTable<RecordKeyType, RecordValueType>) -> Self {
        Self {
            table,
            _record: PhantomData,
        }
    }

    pub fn get(&self, id: &R::Id) -> StoreResult<Option<R>> {
        get_record(&self.table, id)
    }

    /// Every record, in ascending identifier order.
    pub fn all(&self) -> StoreResult<Vec<R>> {
        scan_records(&self.table, |_| true)
    }

    /// Full linear scan keeping the records that match `keep`.
    pub fn scan<F: FnMut(&R) -> bool>(&self, keep: F) -> StoreResult<Vec<R>> {
        scan_records(&self.table, keep)
    }
}

/// Writable view of one collection inside a write transaction.
pub struct CollectionWriter<'txn, R: Record> {
    table: redb::Table<'txn, RecordKeyType, RecordValueType>,
    _record: PhantomData<R>,
}

impl<'txn, R: Record> CollectionWriter<'txn, R> {
    pub(crate) fn new(table: redb::Table<'txn, RecordKeyType, RecordValueType>) -> Self {
        Self {
            table,
            _record: PhantomData,
        }
    }

    /// Inserts a record whose identifier must not exist yet.
    pub fn add(&mut self, record: &R) -> StoreResult<()> {
        let key = record.id().as_ref();
        if self.table.get(key)?.is_some() {
            return Err(StoreError::DuplicateId {
                collection: R::COLLECTION,
                id: key.to_owned(),
            });
        }
        let bytes = codec::encode(record)?;
        self.table.insert(key, bytes.as_slice())?;
        Ok(())
    }

    /// Inserts or replaces the record stored under the same identifier.
    pub fn put(&mut self, record: &R) -> StoreResult<()> {
        let bytes = codec::encode(record)?;
        self.table.insert(record.id().as_ref(), bytes.as_slice())?;
        Ok(())
    }

    /// Removes a record. Returns whether it was present.
    pub fn remove(&mut self, id: &R::Id) -> StoreResult<bool> {
        let existed = self.table.remove(id.as_ref())?.is_some();
        Ok(existed)
    }

    pub fn get(&self, id: &R::Id) -> StoreResult<Option<R>> {
        get_record(&self.table, id)
    }

    pub fn scan<F: FnMut(&R) -> bool>(&self, keep: F) -> StoreResult<Vec<R>> {
        scan_records(&self.table, keep)
    }

    pub fn ids(&self) -> StoreResult<Vec<R::Id>> {
        record_ids::<_, R>(&self.table)
    }
}
