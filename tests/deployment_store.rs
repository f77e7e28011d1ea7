#![allow(non_snake_case)]

use color_eyre::eyre::Result;
use open_raffles::deployment::{DeploymentEnv, DeploymentRecord, DeploymentStore};
use tempdir::TempDir;

fn sample_record(note: Option<&str>) -> DeploymentRecord {
    DeploymentRecord {
        deployed_at: "2024-06-01T12:00:00Z".to_string(),
        registry_contract_id: "0x".to_string() + &"ab".repeat(32),
        network_url: "http://localhost:4000/".to_string(),
        note: note.map(str::to_string),
    }
}

#[test]
fn new_in__initializes_an_empty_store() -> Result<()> {
    // given
    let root = TempDir::new("raffle-deployments")?;

    // when
    let store = DeploymentStore::new_in(root.path(), DeploymentEnv::Local)?;

    // then
    assert!(store.path().exists());
    assert!(store.load()?.is_empty());
    assert!(store.latest()?.is_none());
    Ok(())
}

#[test]
fn append__latest_returns_the_newest_record() -> Result<()> {
    // given
    let root = TempDir::new("raffle-deployments")?;
    let store = DeploymentStore::new_in(root.path(), DeploymentEnv::Dev)?;

    // when
    let mut first = sample_record(None);
    first.registry_contract_id = "0x".to_string() + &"01".repeat(32);
    store.append(first)?;
    let second = sample_record(Some("redeploy after registry fix"));
    store.append(second)?;

    // then
    let latest = store.latest()?.unwrap();
    assert_eq!(latest.registry_contract_id, "0x".to_string() + &"ab".repeat(32));
    assert_eq!(latest.note.as_deref(), Some("redeploy after registry fix"));
    assert_eq!(store.load()?.len(), 2);
    Ok(())
}

#[test]
fn load__accepts_records_without_a_note() -> Result<()> {
    // given: a file written before notes existed
    let root = TempDir::new("raffle-deployments")?;
    let store = DeploymentStore::new_in(root.path(), DeploymentEnv::Test)?;
    let json = r#"[{
        "deployed_at": "2024-05-20T08:30:00Z",
        "registry_contract_id": "0xffff",
        "network_url": "https://testnet.fuel.network"
    }]"#;
    std::fs::write(store.path(), json)?;

    // when
    let records = store.load()?;

    // then
    assert_eq!(records.len(), 1);
    assert!(records[0].note.is_none());
    Ok(())
}

#[test]
fn envs__use_separate_record_files() -> Result<()> {
    // given
    let root = TempDir::new("raffle-deployments")?;

    // when
    let dev = DeploymentStore::new_in(root.path(), DeploymentEnv::Dev)?;
    let local = DeploymentStore::new_in(root.path(), DeploymentEnv::Local)?;
    dev.append(sample_record(None))?;

    // then
    assert_ne!(dev.path(), local.path());
    assert!(local.load()?.is_empty());
    Ok(())
}
