pub mod codec;
pub mod transaction;

use crate::collection::{Collection, CollectionSet};
use crate::config::StoreConfig;
use crate::errors::{StoreError, StoreResult};
use log::{debug, info};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;
use strum::IntoEnumIterator;

use self::transaction::{StoreReadTransaction, StoreWriteTransaction};

/// Metadata table storing the store name and schema version.
const SCHEMA_META_TABLE: redb::TableDefinition<&str, &[u8]> =
    redb::TableDefinition::new("__coverletter_schema_meta__");

const SCHEMA_META_KEY: &str = "schema";

/// Name and schema version recorded inside a store.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct SchemaMeta {
    pub name: String,
    pub version: u32,
}

/// A redb database holding the four record collections.
///
/// Cloning is cheap; clones share the same database handle.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<redb::Database>,
    schema: SchemaMeta,
}

impl RedbStore {
    /// Open the store described by `config`, creating the file and the
    /// collections if they are missing.
    ///
    /// Opening at the stored version changes nothing. Opening at a higher
    /// version creates any missing collection and records the new version.
    /// Opening at a lower version, or under a different store name, fails
    /// without touching the data.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        if config.version == 0 {
            return Err(StoreError::SchemaConflict(
                "schema version must be at least 1".to_string(),
            ));
        }
        if !config.create_if_missing && !config.path.exists() {
            return Err(StoreError::StoreNotFound(config.path.clone()));
        }

        let db = redb::Database::create(&config.path)?;
        let schema = Self::initialize(&db, config)?;

        Ok(Self {
            db: Arc::new(db),
            schema,
        })
    }

    fn initialize(db: &redb::Database, config: &StoreConfig) -> StoreResult<SchemaMeta> {
        let txn = db.begin_write()?;
        let stored = Self::stored_schema(&txn)?;

        match stored {
            Some(meta) if meta.name != config.database_name => {
                txn.abort()?;
                Err(StoreError::SchemaConflict(format!(
                    "store is named {:?}, expected {:?}",
                    meta.name, config.database_name
                )))
            }
            Some(meta) if meta.version > config.version => {
                txn.abort()?;
                Err(StoreError::SchemaVersionMismatch {
                    requested: config.version,
                    stored: meta.version,
                })
            }
            Some(meta) if meta.version == config.version => {
                txn.abort()?;
                debug!("Opened store {:?} at version {}", meta.name, meta.version);
                Ok(meta)
            }
            previous => {
                for collection in Collection::iter() {
                    txn.open_table(collection.table_definition())?;
                }
                let meta = SchemaMeta {
                    name: config.database_name.clone(),
                    version: config.version,
                };
                {
                    let mut table = txn.open_table(SCHEMA_META_TABLE)?;
                    let bytes = codec::encode(&meta)?;
                    table.insert(SCHEMA_META_KEY, bytes.as_slice())?;
                }
                txn.commit()?;

                match previous {
                    Some(old) => info!(
                        "Upgraded store {:?} from version {} to {}",
                        meta.name, old.version, meta.version
                    ),
                    None => info!(
                        "Created store {:?} at version {} in {}",
                        meta.name,
                        meta.version,
                        config.path.display()
                    ),
                }
                Ok(meta)
            }
        }
    }

    fn stored_schema(txn: &redb::WriteTransaction) -> StoreResult<Option<SchemaMeta>> {
        let table = txn.open_table(SCHEMA_META_TABLE)?;
        let guard = table.get(SCHEMA_META_KEY)?;
        guard.map(|guard| codec::decode(guard.value())).transpose()
    }

    /// Begin a read-only transaction over `scope`.
    pub fn begin_read(&self, scope: CollectionSet) -> StoreResult<StoreReadTransaction> {
        let txn = self.db.begin_read()?;
        Ok(StoreReadTransaction::new(txn, scope))
    }

    /// Begin a read-write transaction over `scope`.
    pub fn begin_write(&self, scope: CollectionSet) -> StoreResult<StoreWriteTransaction> {
        let txn = self.db.begin_write()?;
        Ok(StoreWriteTransaction::new(txn, scope))
    }

    /// The name and version recorded in the store.
    pub fn schema(&self) -> &SchemaMeta {
        &self.schema
    }
}
