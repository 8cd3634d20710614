// Common test utilities and helpers

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use coverletter_store::prelude::*;
use tempfile::TempDir;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Open a connector on a fresh database inside a temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the connector is used.
pub fn create_test_connector() -> StoreResult<(Connector, TempDir)> {
    init_logging();
    let dir = TempDir::new()?;
    let connector = Connector::open(StoreConfig::new(dir.path().join("letters.redb")))?;
    Ok((connector, dir))
}

pub fn new_experience(name: &str) -> NewExperience {
    NewExperience {
        name: name.to_string(),
        content: format!("What happened at {name}"),
    }
}

pub fn new_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        description: format!("{name} makes things"),
    }
}

pub fn new_job(company_id: &CompanyId, title: &str) -> NewJob {
    NewJob {
        company_id: company_id.clone(),
        title: title.to_string(),
        date: Utc.timestamp_millis_opt(1_717_171_717_000).unwrap(),
        description: format!("{title} role"),
    }
}

pub fn new_template(name: &str) -> NewTemplate {
    NewTemplate {
        name: name.to_string(),
        content: format!("Dear hiring manager, ({name})"),
    }
}

/// Create one company and return it as stored.
pub fn create_company(connector: &Connector, name: &str) -> StoreResult<Company> {
    connector.create(BulkCreate::new().with_companies([new_company(name)]))?;
    let companies = connector.list_all([Collection::Companies])?.companies;
    let Some(company) = companies.into_iter().find(|c| c.name == name) else {
        panic!("company {name:?} was not stored");
    };
    Ok(company)
}

/// Create jobs under `company` and return them as stored.
pub fn create_jobs(connector: &Connector, company: &CompanyId, titles: &[&str]) -> StoreResult<Vec<Job>> {
    connector.create(
        BulkCreate::new().with_jobs(titles.iter().map(|title| new_job(company, title))),
    )?;
    connector.list_jobs_by_company(company)
}
