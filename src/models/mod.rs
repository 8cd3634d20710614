//! Record kinds stored by the connector.
//!
//! Four collections, one per record kind: [`Experience`], [`Company`],
//! [`Job`] and [`Template`]. Callers hand the connector creation payloads
//! (`New*`), which carry every field except the identifier; the connector
//! assigns identifiers when it inserts them.

pub mod ids;
pub mod records;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::collection::Collection;

pub use ids::{CompanyId, ExperienceId, JobId, RecordKey, TemplateId};
pub use records::{
    Company, Experience, Job, NewCompany, NewExperience, NewJob, NewTemplate, Template,
};

/// A full record as persisted in its collection.
pub trait Record:
    Clone
    + std::fmt::Debug
    + Serialize
    + DeserializeOwned
    + bincode::Encode
    + bincode::Decode<()>
    + Send
    + Sync
    + 'static
{
    type Id: RecordKey;

    const COLLECTION: Collection;

    fn id(&self) -> &Self::Id;
}

/// A creation payload: a record minus its identifier.
pub trait NewRecord {
    type Record: Record;

    fn into_record(self, id: <Self::Record as Record>::Id) -> Self::Record;
}
