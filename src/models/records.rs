use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CompanyId, ExperienceId, JobId, TemplateId};
use super::{NewRecord, Record};
use crate::collection::Collection;

/// A personal experience the letter writer can draw on.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Experience {
    pub id: ExperienceId,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExperience {
    pub name: String,
    pub content: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
}

/// A job posting at a [`Company`].
///
/// `company_id` must name an existing company when the job is created.
/// `cover_letter` stays `None` until a caller sets it; `Some("")` is a
/// distinct, explicitly empty letter.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Job {
    pub id: JobId,
    pub company_id: CompanyId,
    pub title: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[bincode(with_serde)]
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

impl Job {
    pub fn with_cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }

    pub fn clear_cover_letter(mut self) -> Self {
        self.cover_letter = None;
        self
    }
}

/// Creation payload for a [`Job`]. Has no cover letter field: new jobs
/// always start without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub company_id: CompanyId,
    pub title: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub description: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    pub content: String,
}

impl Record for Experience {
    type Id = ExperienceId;
    const COLLECTION: Collection = Collection::Experiences;

    fn id(&self) -> &ExperienceId {
        &self.id
    }
}

impl Record for Company {
    type Id = CompanyId;
    const COLLECTION: Collection = Collection::Companies;

    fn id(&self) -> &CompanyId {
        &self.id
    }
}

impl Record for Job {
    type Id = JobId;
    const COLLECTION: Collection = Collection::Jobs;

    fn id(&self) -> &JobId {
        &self.id
    }
}

impl Record for Template {
    type Id = TemplateId;
    const COLLECTION: Collection = Collection::Templates;

    fn id(&self) -> &TemplateId {
        &self.id
    }
}

impl NewRecord for NewExperience {
    type Record = Experience;

    fn into_record(self, id: ExperienceId) -> Experience {
        Experience {
            id,
            name: self.name,
            content: self.content,
        }
    }
}

impl NewRecord for NewCompany {
    type Record = Company;

    fn into_record(self, id: CompanyId) -> Company {
        Company {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl NewRecord for NewJob {
    type Record = Job;

    fn into_record(self, id: JobId) -> Job {
        Job {
            id,
            company_id: self.company_id,
            title: self.title,
            date: self.date,
            description: self.description,
            cover_letter: None,
        }
    }
}

impl NewRecord for NewTemplate {
    type Record = Template;

    fn into_record(self, id: TemplateId) -> Template {
        Template {
            id,
            name: self.name,
            content: self.content,
        }
    }
}
