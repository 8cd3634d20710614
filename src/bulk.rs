//! Per-collection bulk requests and the snapshot document they produce.
//!
//! A [`Bulk`] carries zero or more items for each of the four collections.
//! A collection is *requested* when its slot is `Some`, even if the list is
//! empty; the requested collections decide the transaction scope.

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, CollectionSet};
use crate::models::{
    Company, CompanyId, Experience, ExperienceId, Job, JobId, NewCompany, NewExperience, NewJob,
    NewTemplate, Template, TemplateId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulk<E, C, J, T> {
    pub experiences: Option<Vec<E>>,
    pub companies: Option<Vec<C>>,
    pub jobs: Option<Vec<J>>,
    pub templates: Option<Vec<T>>,
}

/// New-record payloads for [`Connector::create`](crate::connector::Connector::create).
pub type BulkCreate = Bulk<NewExperience, NewCompany, NewJob, NewTemplate>;

/// Full records for [`Connector::update`](crate::connector::Connector::update).
pub type BulkUpdate = Bulk<Experience, Company, Job, Template>;

/// Identifiers for [`Connector::read`](crate::connector::Connector::read) and
/// [`Connector::delete`](crate::connector::Connector::delete).
pub type BulkIds = Bulk<ExperienceId, CompanyId, JobId, TemplateId>;

impl<E, C, J, T> Default for Bulk<E, C, J, T> {
    fn default() -> Self {
        Self {
            experiences: None,
            companies: None,
            jobs: None,
            templates: None,
        }
    }
}

impl<E, C, J, T> Bulk<E, C, J, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_experiences(mut self, items: impl IntoIterator<Item = E>) -> Self {
        self.experiences.get_or_insert_with(Vec::new).extend(items);
        self
    }

    pub fn with_companies(mut self, items: impl IntoIterator<Item = C>) -> Self {
        self.companies.get_or_insert_with(Vec::new).extend(items);
        self
    }

    pub fn with_jobs(mut self, items: impl IntoIterator<Item = J>) -> Self {
        self.jobs.get_or_insert_with(Vec::new).extend(items);
        self
    }

    pub fn with_templates(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.templates.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// Collections whose slot is present.
    pub fn collections(&self) -> CollectionSet {
        let mut set = CollectionSet::new();
        if self.experiences.is_some() {
            set.insert(Collection::Experiences);
        }
        if self.companies.is_some() {
            set.insert(Collection::Companies);
        }
        if self.jobs.is_some() {
            set.insert(Collection::Jobs);
        }
        if self.templates.is_some() {
            set.insert(Collection::Templates);
        }
        set
    }

    /// Total number of items across all collections.
    pub fn len(&self) -> usize {
        self.experiences.as_ref().map_or(0, Vec::len)
            + self.companies.as_ref().map_or(0, Vec::len)
            + self.jobs.as_ref().map_or(0, Vec::len)
            + self.templates.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full records from the four collections.
///
/// Returned by `list_all`, `read` and `export`. Collections that were not
/// part of the request are left empty. This is also the export document:
/// four named arrays, serialised as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub experiences: Vec<Experience>,
    pub companies: Vec<Company>,
    pub jobs: Vec<Job>,
    pub templates: Vec<Template>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.experiences.len() + self.companies.len() + self.jobs.len() + self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Experiences => self.experiences.len(),
            Collection::Companies => self.companies.len(),
            Collection::Jobs => self.jobs.len(),
            Collection::Templates => self.templates.len(),
        }
    }
}
