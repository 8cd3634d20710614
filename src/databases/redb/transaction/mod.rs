//! Transaction layer for redb database operations.
//!
//! # Transaction Types
//!
//! - **Read transactions** ([`StoreReadTransaction`]) - a consistent snapshot
//!   of the collections in scope
//! - **Write transactions** ([`StoreWriteTransaction`]) - read/write access with
//!   explicit commit or abort
//!
//! Both carry a [`CollectionSet`](crate::collection::CollectionSet) scope.
//! Opening a collection outside the scope fails with
//! [`StoreError::OutOfScope`](crate::errors::StoreError::OutOfScope).
//!
//! # Rules and Limitations
//!
//! 1. **Transaction Scope**: Write transactions must be committed explicitly. An uncommitted write transaction is rolled back on drop.
//! 2. **Concurrency**: Multiple read transactions can run concurrently. Write transactions are exclusive.
//! 3. **Lifetime Management**: Collection writers borrow their transaction and must be dropped before commit.
//! 4. **Tables**: Only one writer per collection may be open at a time inside a write transaction.

pub mod tables;
pub mod wrappers;

pub use self::tables::{CollectionReader, CollectionWriter};
pub use self::wrappers::{StoreReadTransaction, StoreWriteTransaction};
