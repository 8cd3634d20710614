// Full-store export as a JSON document

pub mod common;

use common::{create_company, create_jobs, create_test_connector, new_experience, new_template};
use coverletter_store::prelude::*;

#[test]
fn test_export_matches_list_all_over_every_collection() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;
    let acme = create_company(&connector, "Acme")?;
    create_jobs(&connector, &acme.id, &["Engineer", "Manager"])?;
    connector.create(
        BulkCreate::new()
            .with_experiences([new_experience("Launch")])
            .with_templates([new_template("Casual")]),
    )?;

    let exported = connector.export()?;
    let listed = connector.list_all([
        Collection::Experiences,
        Collection::Companies,
        Collection::Jobs,
        Collection::Templates,
    ])?;
    assert_eq!(exported, listed);
    assert_eq!(exported.count(Collection::Jobs), 2);
    assert_eq!(exported.len(), 5);

    Ok(())
}

#[test]
fn test_export_to_path_writes_readable_json() -> StoreResult<()> {
    let (connector, dir) = create_test_connector()?;
    let acme = create_company(&connector, "Acme")?;
    let mut jobs = create_jobs(&connector, &acme.id, &["Engineer"])?;
    let with_letter = jobs.remove(0).with_cover_letter("Dear Acme,");
    connector.update(BulkUpdate::new().with_jobs([with_letter.clone()]))?;

    let path = dir.path().join("export.json");
    connector.export_to_path(&path)?;

    let text = std::fs::read_to_string(&path)?;
    let document: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(document["companies"][0]["name"], "Acme");
    assert_eq!(document["jobs"][0]["cover_letter"], "Dear Acme,");
    assert_eq!(document["jobs"][0]["company_id"], acme.id.as_str());
    assert_eq!(
        document["jobs"][0]["date"],
        with_letter.date.timestamp_millis()
    );
    assert_eq!(document["experiences"], serde_json::json!([]));

    let parsed: Snapshot = serde_json::from_str(&text)?;
    assert_eq!(parsed, connector.export()?);

    Ok(())
}

#[test]
fn test_export_to_writer_on_empty_store() -> StoreResult<()> {
    let (connector, _dir) = create_test_connector()?;

    let mut buffer = Vec::new();
    connector.export_to_writer(&mut buffer)?;

    let parsed: Snapshot = serde_json::from_slice(&buffer)?;
    assert!(parsed.is_empty());

    Ok(())
}
