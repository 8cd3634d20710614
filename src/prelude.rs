//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use coverletter_store::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - [`Connector`]: the store handle and its operations
//! - [`StoreConfig`]: where and under which name/version to open the store
//! - Bulk request types ([`BulkCreate`], [`BulkIds`], [`BulkUpdate`]) and
//!   the [`Snapshot`] they return
//! - Record kinds, creation payloads and typed identifiers
//! - [`StoreError`], [`StoreResult`] and [`ErrorKind`]
//! - [`Prompt`] for composing cover-letter prompts

pub use crate::bulk::{Bulk, BulkCreate, BulkIds, BulkUpdate, Snapshot};
pub use crate::collection::{Collection, CollectionSet};
pub use crate::config::StoreConfig;
pub use crate::connector::Connector;
pub use crate::errors::{ErrorKind, StoreError, StoreResult};
pub use crate::models::{
    Company, CompanyId, Experience, ExperienceId, Job, JobId, NewCompany, NewExperience, NewJob,
    NewRecord, NewTemplate, Record, RecordKey, Template, TemplateId,
};
pub use crate::prompt::Prompt;
