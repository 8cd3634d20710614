//! The connector: the single point of access to persisted records.
//!
//! Every operation runs inside exactly one transaction. Mutating operations
//! either commit everything they were asked to do or abort and leave the
//! store as it was. The connector enforces two cross-collection rules:
//!
//! - a job can only be created for a company that already exists;
//! - deleting a company deletes every job that references it.
//!
//! A [`Connector`] is created once with [`Connector::open`] and handed to
//! whoever needs it; clones share the same database.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::bulk::{BulkCreate, BulkIds, BulkUpdate, Snapshot};
use crate::collection::{Collection, CollectionSet};
use crate::config::StoreConfig;
use crate::databases::redb::RedbStore;
use crate::databases::redb::transaction::{
    CollectionWriter, StoreReadTransaction, StoreWriteTransaction,
};
use crate::errors::{StoreError, StoreResult};
use crate::models::{
    Company, CompanyId, Experience, ExperienceId, Job, JobId, NewJob, NewRecord, Record,
    RecordKey, Template, TemplateId,
};
use crate::prompt::Prompt;

#[derive(Clone)]
pub struct Connector {
    store: RedbStore,
}

impl Connector {
    /// Open (creating if absent) the store described by `config`.
    ///
    /// Repeated opens at the same version leave existing data untouched.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let store = RedbStore::open(&config)?;
        Ok(Self { store })
    }

    pub fn store(&self) -> &RedbStore {
        &self.store
    }

    /// Every record of each requested collection, read from one snapshot.
    /// Collections that were not requested come back empty.
    pub fn list_all<I>(&self, collections: I) -> StoreResult<Snapshot>
    where
        I: IntoIterator<Item = Collection>,
    {
        let scope: CollectionSet = collections.into_iter().collect();
        self.read_in(scope, "list_all", |txn| {
            let mut snapshot = Snapshot::default();
            for collection in txn.scope().iter() {
                match collection {
                    Collection::Experiences => {
                        snapshot.experiences = txn.open::<Experience>()?.all()?
                    }
                    Collection::Companies => snapshot.companies = txn.open::<Company>()?.all()?,
                    Collection::Jobs => snapshot.jobs = txn.open::<Job>()?.all()?,
                    Collection::Templates => snapshot.templates = txn.open::<Template>()?.all()?,
                }
            }
            Ok(snapshot)
        })
    }

    /// Insert new records, assigning each a fresh identifier.
    ///
    /// Job payloads are checked against the companies present when job
    /// validation starts. The first job naming an unknown company aborts the
    /// whole call with [`StoreError::UnknownCompany`]; nothing from the batch
    /// is persisted.
    pub fn create(&self, bulk: BulkCreate) -> StoreResult<()> {
        let mut scope = bulk.collections();
        if scope.contains(Collection::Jobs) {
            scope.insert(Collection::Companies);
        }
        let count = bulk.len();

        self.write_in(scope, "create", |txn| {
            if let Some(items) = bulk.experiences {
                insert_new(&mut txn.open::<Experience>()?, items)?;
            }
            if let Some(items) = bulk.templates {
                insert_new(&mut txn.open::<Template>()?, items)?;
            }
            if bulk.companies.is_some() || bulk.jobs.is_some() {
                let mut companies = txn.open::<Company>()?;
                if let Some(items) = bulk.companies {
                    insert_new(&mut companies, items)?;
                }
                if let Some(items) = bulk.jobs {
                    create_jobs(txn, &companies, items)?;
                }
            }
            Ok(())
        })?;

        debug!("Created {count} records");
        Ok(())
    }

    /// Look records up by identifier. Unknown identifiers are skipped.
    pub fn read(&self, bulk: BulkIds) -> StoreResult<Snapshot> {
        let scope = bulk.collections();
        self.read_in(scope, "read", |txn| {
            let mut snapshot = Snapshot::default();
            if let Some(ids) = &bulk.experiences {
                snapshot.experiences = lookup::<Experience>(txn, ids)?;
            }
            if let Some(ids) = &bulk.companies {
                snapshot.companies = lookup::<Company>(txn, ids)?;
            }
            if let Some(ids) = &bulk.jobs {
                snapshot.jobs = lookup::<Job>(txn, ids)?;
            }
            if let Some(ids) = &bulk.templates {
                snapshot.templates = lookup::<Template>(txn, ids)?;
            }
            Ok(snapshot)
        })
    }

    /// Write full records, replacing or inserting by identifier.
    ///
    /// Job company references are not re-checked.
    pub fn update(&self, bulk: BulkUpdate) -> StoreResult<()> {
        let scope = bulk.collections();
        self.write_in(scope, "update", |txn| {
            if let Some(records) = &bulk.experiences {
                put_all(&mut txn.open::<Experience>()?, records)?;
            }
            if let Some(records) = &bulk.companies {
                put_all(&mut txn.open::<Company>()?, records)?;
            }
            if let Some(records) = &bulk.jobs {
                put_all(&mut txn.open::<Job>()?, records)?;
            }
            if let Some(records) = &bulk.templates {
                put_all(&mut txn.open::<Template>()?, records)?;
            }
            Ok(())
        })
    }

    /// Delete records by identifier. Deleting a company also deletes its
    /// jobs, in the same transaction. Absent identifiers are ignored.
    pub fn delete(&self, bulk: BulkIds) -> StoreResult<()> {
        let mut scope = bulk.collections();
        if scope.contains(Collection::Companies) {
            scope.insert(Collection::Jobs);
        }

        self.write_in(scope, "delete", |txn| {
            if let Some(ids) = &bulk.experiences {
                remove_all(&mut txn.open::<Experience>()?, ids)?;
            }
            if let Some(ids) = &bulk.templates {
                remove_all(&mut txn.open::<Template>()?, ids)?;
            }
            if bulk.jobs.is_some() || bulk.companies.is_some() {
                let mut jobs = txn.open::<Job>()?;
                if let Some(ids) = &bulk.jobs {
                    remove_all(&mut jobs, ids)?;
                }
                if let Some(company_ids) = &bulk.companies {
                    delete_companies(txn, &mut jobs, company_ids)?;
                }
            }
            Ok(())
        })
    }

    /// Jobs whose `company_id` equals `company_id`, by full scan.
    pub fn list_jobs_by_company(&self, company_id: &CompanyId) -> StoreResult<Vec<Job>> {
        let scope = CollectionSet::new().with(Collection::Jobs);
        self.read_in(scope, "list_jobs_by_company", |txn| {
            txn.open::<Job>()?.scan(|job| &job.company_id == company_id)
        })
    }

    /// Compose the cover-letter prompt for a stored job.
    ///
    /// Reads the job, its company, the chosen experiences and the template
    /// from one snapshot. Experiences appear in stored order; unknown
    /// experience or template ids are skipped. Returns `None` when the job
    /// does not exist.
    pub fn cover_letter_prompt(
        &self,
        job_id: &JobId,
        experience_ids: &[ExperienceId],
        template_id: Option<&TemplateId>,
    ) -> StoreResult<Option<String>> {
        let scope = CollectionSet::all();
        self.read_in(scope, "cover_letter_prompt", |txn| {
            let Some(job) = txn.open::<Job>()?.get(job_id)? else {
                return Ok(None);
            };
            let company = txn.open::<Company>()?.get(&job.company_id)?.ok_or_else(|| {
                StoreError::UnknownCompany {
                    company_id: job.company_id.clone(),
                }
            })?;
            let experiences = txn
                .open::<Experience>()?
                .scan(|experience| experience_ids.contains(&experience.id))?;
            let template = match template_id {
                Some(id) => txn.open::<Template>()?.get(id)?,
                None => None,
            };

            Ok(Some(Prompt::build(
                &company,
                &job,
                &experiences,
                template.as_ref(),
            )))
        })
    }

    /// Store `cover_letter` on the job with `job_id`, replacing any previous
    /// letter. Returns the updated job, or `None` when it does not exist.
    pub fn save_cover_letter(
        &self,
        job_id: &JobId,
        cover_letter: impl Into<String>,
    ) -> StoreResult<Option<Job>> {
        let cover_letter = cover_letter.into();
        let scope = CollectionSet::new().with(Collection::Jobs);
        self.write_in(scope, "save_cover_letter", |txn| {
            let mut jobs = txn.open::<Job>()?;
            let Some(job) = jobs.get(job_id)? else {
                return Ok(None);
            };
            let job = job.with_cover_letter(cover_letter);
            jobs.put(&job)?;
            Ok(Some(job))
        })
    }

    /// All four collections from one snapshot.
    pub fn export(&self) -> StoreResult<Snapshot> {
        self.list_all(Collection::iter())
    }

    /// Export and write the pretty-printed JSON document to `writer`.
    pub fn export_to_writer<W: Write>(&self, writer: W) -> StoreResult<()> {
        self.export()?.write_json(writer)
    }

    /// Export and write the pretty-printed JSON document to a file at `path`,
    /// replacing any existing file.
    pub fn export_to_path<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.export_to_writer(&mut writer)?;
        writer.flush()?;
        debug!("Exported store to {}", path.as_ref().display());
        Ok(())
    }

    fn read_in<T, F>(&self, scope: CollectionSet, operation: &str, f: F) -> StoreResult<T>
    where
        F: FnOnce(&StoreReadTransaction) -> StoreResult<T>,
    {
        debug!("{operation}: read transaction over {scope}");
        let txn = self.store.begin_read(scope)?;
        f(&txn)
    }

    /// Run `f` in one write transaction: commit if it succeeds, abort if it
    /// fails.
    fn write_in<T, F>(&self, scope: CollectionSet, operation: &str, f: F) -> StoreResult<T>
    where
        F: FnOnce(&StoreWriteTransaction) -> StoreResult<T>,
    {
        debug!("{operation}: write transaction over {scope}");
        let txn = self.store.begin_write(scope)?;
        let outcome = f(&txn);
        match outcome {
            Ok(value) => {
                txn.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(abort_err) = txn.abort() {
                    warn!("{operation}: abort failed after {err}: {abort_err}");
                }
                Err(err)
            }
        }
    }
}

fn insert_new<N: NewRecord>(
    table: &mut CollectionWriter<'_, N::Record>,
    items: Vec<N>,
) -> StoreResult<()> {
    for item in items {
        let id = <N::Record as Record>::Id::generate();
        table.add(&item.into_record(id))?;
    }
    Ok(())
}

fn create_jobs(
    txn: &StoreWriteTransaction,
    companies: &CollectionWriter<'_, Company>,
    new_jobs: Vec<NewJob>,
) -> StoreResult<()> {
    let known: BTreeSet<CompanyId> = companies.ids()?.into_iter().collect();
    let mut jobs = txn.open::<Job>()?;

    for new_job in new_jobs {
        if !known.contains(&new_job.company_id) {
            warn!(
                "Aborting create: job {:?} references unknown company {}",
                new_job.title, new_job.company_id
            );
            return Err(StoreError::UnknownCompany {
                company_id: new_job.company_id,
            });
        }
        let id = JobId::generate();
        jobs.add(&new_job.into_record(id))?;
    }
    Ok(())
}

fn delete_companies(
    txn: &StoreWriteTransaction,
    jobs: &mut CollectionWriter<'_, Job>,
    company_ids: &[CompanyId],
) -> StoreResult<()> {
    let mut companies = txn.open::<Company>()?;
    let mut dependents = Vec::new();

    for company_id in company_ids {
        companies.remove(company_id)?;
        dependents.extend(
            jobs.scan(|job| &job.company_id == company_id)?
                .into_iter()
                .map(|job| job.id),
        );
    }

    for job_id in &dependents {
        jobs.remove(job_id)?;
    }
    debug!(
        "Deleted {} companies with {} dependent jobs",
        company_ids.len(),
        dependents.len()
    );
    Ok(())
}

fn lookup<R: Record>(txn: &StoreReadTransaction, ids: &[R::Id]) -> StoreResult<Vec<R>> {
    let table = txn.open::<R>()?;
    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(record) = table.get(id)? {
            found.push(record);
        }
    }
    Ok(found)
}

fn put_all<R: Record>(table: &mut CollectionWriter<'_, R>, records: &[R]) -> StoreResult<()> {
    for record in records {
        table.put(record)?;
    }
    Ok(())
}

fn remove_all<R: Record>(table: &mut CollectionWriter<'_, R>, ids: &[R::Id]) -> StoreResult<()> {
    for id in ids {
        table.remove(id)?;
    }
    Ok(())
}
