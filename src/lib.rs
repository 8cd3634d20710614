//! # Cover Letter Store
//!
//! An embedded, transactional record store for a cover-letter drafting tool.
//! It keeps four collections in a single redb file:
//!
//! - **experiences** - things the writer has done
//! - **companies** - employers
//! - **jobs** - postings at a company, optionally with a drafted cover letter
//! - **templates** - letter templates
//!
//! ## Features
//!
//! - **Atomic bulk operations**: every create/read/update/delete call runs in one transaction
//! - **Referential integrity**: a job can only be created for an existing company
//! - **Cascade delete**: deleting a company deletes its jobs
//! - **Versioned schema**: the store records its name and schema version
//! - **JSON export**: a full snapshot as a human-readable document
//! - **Cover-letter prompts**: compose a prompt from a job, its company, experiences and a template
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coverletter_store::prelude::*;
//! use chrono::Utc;
//!
//! let connector = Connector::open(StoreConfig::new("letters.redb"))?;
//!
//! connector.create(BulkCreate::new().with_companies([NewCompany {
//!     name: "Acme".into(),
//!     description: "Anvils and more".into(),
//! }]))?;
//!
//! let acme = connector.list_all([Collection::Companies])?.companies.remove(0);
//! connector.create(BulkCreate::new().with_jobs([NewJob {
//!     company_id: acme.id.clone(),
//!     title: "Engineer".into(),
//!     date: Utc::now(),
//!     description: "Build anvils".into(),
//! }]))?;
//!
//! // Deleting the company takes its jobs with it.
//! connector.delete(BulkIds::new().with_companies([acme.id.clone()]))?;
//! assert!(connector.list_jobs_by_company(&acme.id)?.is_empty());
//! ```

pub mod bulk;
pub mod collection;
pub mod config;
pub mod connector;
pub mod databases;
pub mod errors;
pub mod export;
pub mod models;
pub mod prelude;
pub mod prompt;
