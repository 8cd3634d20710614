// Integration tests for bulk create / read / update / delete / list

pub mod common;

use common::{
    create_company, create_jobs, create_test_connector, new_company, new_experience, new_job,
    new_template,
};
use coverletter_store::prelude::*;

#[test]
fn test_create_then_read_round_trips_every_field() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;

    let experience = new_experience("Hackathon");
    let template = new_template("Formal");
    connector.create(
        BulkCreate::new()
            .with_experiences([experience.clone()])
            .with_templates([template.clone()]),
    )?;

    let listed = connector.list_all([Collection::Experiences, Collection::Templates])?;
    assert_eq!(listed.experiences.len(), 1);
    assert_eq!(listed.templates.len(), 1);

    let read = connector.read(
        BulkIds::new()
            .with_experiences([listed.experiences[0].id.clone()])
            .with_templates([listed.templates[0].id.clone()]),
    )?;

    let stored_experience = &read.experiences[0];
    assert_eq!(stored_experience.name, experience.name);
    assert_eq!(stored_experience.content, experience.content);

    let stored_template = &read.templates[0];
    assert_eq!(stored_template.name, template.name);
    assert_eq!(stored_template.content, template.content);

    Ok(())
}

#[test]
fn test_job_round_trip_starts_without_cover_letter() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    let acme = create_company(&connector, "Acme")?;

    let payload = new_job(&acme.id, "Engineer");
    connector.create(BulkCreate::new().with_jobs([payload.clone()]))?;

    let jobs = connector.list_all([Collection::Jobs])?.jobs;
    assert_eq!(jobs.len(), 1);

    let read = connector.read(BulkIds::new().with_jobs([jobs[0].id.clone()]))?;
    let job = &read.jobs[0];
    assert_eq!(job.company_id, payload.company_id);
    assert_eq!(job.title, payload.title);
    assert_eq!(job.date, payload.date);
    assert_eq!(job.description, payload.description);
    assert_eq!(job.cover_letter, None);

    Ok(())
}

#[test]
fn test_identifiers_are_assigned_and_unique() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;

    connector.create(
        BulkCreate::new().with_experiences((0..25).map(|i| new_experience(&format!("e{i}")))),
    )?;

    let experiences = connector.list_all([Collection::Experiences])?.experiences;
    assert_eq!(experiences.len(), 25);

    let mut ids: Vec<&str> = experiences.iter().map(|e| e.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 25);
    assert!(ids.iter().all(|id| id.len() == 36));

    Ok(())
}

#[test]
fn test_read_unknown_id_returns_empty_not_error() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;

    let result = connector.read(BulkIds::new().with_experiences([ExperienceId::from("nope")]))?;
    assert!(result.experiences.is_empty());
    assert!(result.is_empty());

    Ok(())
}

#[test]
fn test_read_skips_missing_ids_and_keeps_request_order() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    connector.create(BulkCreate::new().with_companies([new_company("A"), new_company("B")]))?;

    let companies = connector.list_all([Collection::Companies])?.companies;
    let (first, second) = (companies[0].id.clone(), companies[1].id.clone());

    let result = connector.read(BulkIds::new().with_companies([
        second.clone(),
        CompanyId::from("missing"),
        first.clone(),
    ]))?;

    let ids: Vec<CompanyId> = result.companies.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second, first]);

    Ok(())
}

#[test]
fn test_list_all_only_fills_requested_collections() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    connector.create(
        BulkCreate::new()
            .with_experiences([new_experience("x")])
            .with_companies([new_company("y")])
            .with_templates([new_template("z")]),
    )?;

    let snapshot = connector.list_all([Collection::Templates])?;
    assert_eq!(snapshot.templates.len(), 1);
    assert!(snapshot.experiences.is_empty());
    assert!(snapshot.companies.is_empty());
    assert!(snapshot.jobs.is_empty());

    let nothing = connector.list_all(std::iter::empty())?;
    assert!(nothing.is_empty());

    Ok(())
}

#[test]
fn test_update_replaces_full_record() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    let acme = create_company(&connector, "Acme")?;
    let job = create_jobs(&connector, &acme.id, &["Engineer"])?.remove(0);

    let edited = Job {
        title: "Senior Engineer".to_string(),
        ..job.clone()
    }
    .with_cover_letter("Dear Acme,");
    connector.update(BulkUpdate::new().with_jobs([edited.clone()]))?;

    let stored = connector.read(BulkIds::new().with_jobs([job.id.clone()]))?.jobs;
    assert_eq!(stored, vec![edited.clone()]);

    // Clearing the letter is a full-record write too.
    connector.update(BulkUpdate::new().with_jobs([edited.clear_cover_letter()]))?;
    let stored = connector.read(BulkIds::new().with_jobs([job.id.clone()]))?.jobs;
    assert_eq!(stored[0].cover_letter, None);
    assert_eq!(stored[0].title, "Senior Engineer");

    Ok(())
}

#[test]
fn test_update_upserts_absent_records() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;

    let template = Template {
        id: TemplateId::from("caller-chosen"),
        name: "Imported".to_string(),
        content: "Hello".to_string(),
    };
    connector.update(BulkUpdate::new().with_templates([template.clone()]))?;

    let templates = connector.list_all([Collection::Templates])?.templates;
    assert_eq!(templates, vec![template]);

    Ok(())
}

#[test]
fn test_update_twice_equals_update_once() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    let acme = create_company(&connector, "Acme")?;

    let renamed = Company {
        name: "Acme Corp".to_string(),
        ..acme.clone()
    };
    connector.update(BulkUpdate::new().with_companies([renamed.clone()]))?;
    let once = connector.export()?;

    connector.update(BulkUpdate::new().with_companies([renamed.clone()]))?;
    let twice = connector.export()?;

    assert_eq!(once, twice);
    assert_eq!(twice.companies, vec![renamed]);

    Ok(())
}

#[test]
fn test_update_does_not_revalidate_company() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    let acme = create_company(&connector, "Acme")?;
    let job = create_jobs(&connector, &acme.id, &["Engineer"])?.remove(0);

    let dangling = Job {
        company_id: CompanyId::from("no-such-company"),
        ..job
    };
    connector.update(BulkUpdate::new().with_jobs([dangling.clone()]))?;

    let jobs = connector.list_all([Collection::Jobs])?.jobs;
    assert_eq!(jobs, vec![dangling]);

    Ok(())
}

#[test]
fn test_delete_removes_only_named_records() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    connector.create(
        BulkCreate::new()
            .with_experiences([new_experience("keep"), new_experience("drop")])
            .with_templates([new_template("t")]),
    )?;

    let snapshot = connector.list_all([Collection::Experiences, Collection::Templates])?;
    let drop = snapshot
        .experiences
        .iter()
        .find(|e| e.name == "drop")
        .map(|e| e.id.clone())
        .expect("created above");

    connector.delete(
        BulkIds::new()
            .with_experiences([drop, ExperienceId::from("never-existed")])
            .with_templates([snapshot.templates[0].id.clone()]),
    )?;

    let after = connector.list_all([Collection::Experiences, Collection::Templates])?;
    assert_eq!(after.experiences.len(), 1);
    assert_eq!(after.experiences[0].name, "keep");
    assert!(after.templates.is_empty());

    Ok(())
}

#[test]
fn test_empty_bulk_calls_are_noops() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;

    connector.create(BulkCreate::new())?;
    connector.create(BulkCreate::new().with_jobs(Vec::new()))?;
    connector.update(BulkUpdate::new())?;
    connector.delete(BulkIds::new().with_companies(Vec::new()))?;
    assert!(connector.read(BulkIds::new())?.is_empty());
    assert!(connector.export()?.is_empty());

    Ok(())
}

#[test]
fn test_clones_share_the_same_store() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    let other = connector.clone();

    other.create(BulkCreate::new().with_templates([new_template("shared")]))?;
    assert_eq!(connector.list_all([Collection::Templates])?.templates.len(), 1);

    Ok(())
}
