//! End-to-end inventory tests against an on-disk store

use std::fs;
use std::path::{Path, PathBuf};

use bookstock_app::app::InventoryService;
use bookstock_app::config::Config;
use bookstock_app::repository::{open_catalog_repo_at, open_inventory};
use bookstock_domain::model::{BorrowOutcome, ReturnOutcome};
use bookstock_domain::repository::CatalogRepository;
use bookstock_infra::persistence::FileCatalogRepository;
use bookstock_types::Error;
use tempfile::{tempdir, TempDir};

const KINDRED: &str = "9781472258229";
const NEUROMANCER: &str = "9780441569595";

const CATALOG: &str = "\
9780143111597,The Penguin Classics Book,Henry Eliot,2018
9781472258229,Kindred,Octavia E. Butler,1979
9780441569595,Neuromancer,William Gibson,1984
9781857231380,Consider Phlebas,Iain M. Banks,1987
9780553283686,Hyperion,Dan Simmons,1989
";

fn write_seed(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.csv");
    fs::write(&path, CATALOG).expect("Failed to write seed catalog");
    path
}

fn seeded_service() -> (TempDir, InventoryService<FileCatalogRepository>) {
    let dir = tempdir().expect("Failed to create temp dir");
    let seed = write_seed(dir.path());
    let service = InventoryService::new(open_catalog_repo_at(dir.path().join("bookStock.json")));
    assert!(service.ensure_initialized(&seed).unwrap());
    (dir, service)
}

fn store_bytes(service: &InventoryService<FileCatalogRepository>) -> String {
    fs::read_to_string(service.repository().store_path()).unwrap()
}

#[test]
fn test_demo_scenario_persists_final_state() {
    let (dir, service) = seeded_service();

    assert_eq!(
        service.lookup(KINDRED).unwrap().to_string(),
        "Kindred, by Octavia E. Butler (1979)"
    );
    service.add_stock(KINDRED, 1).unwrap();
    assert_eq!(
        service.lookup(NEUROMANCER).unwrap().to_string(),
        "Neuromancer, by William Gibson (1984)"
    );
    service.add_stock(NEUROMANCER, 3).unwrap();
    service.borrow(KINDRED).unwrap();
    service.borrow(NEUROMANCER).unwrap();
    service.borrow(NEUROMANCER).unwrap();
    service.return_copy(NEUROMANCER).unwrap();

    // A fresh repository over the same file sees the same state
    let reopened = open_catalog_repo_at(dir.path().join("bookStock.json"));
    let records = reopened.load().unwrap();
    let counts: Vec<_> = records
        .iter()
        .map(|r| (r.id.as_str(), r.copies, r.available))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("9780143111597", 0, 0),
            (KINDRED, 1, 0),
            (NEUROMANCER, 3, 2),
            ("9781857231380", 0, 0),
            ("9780553283686", 0, 0),
        ]
    );
    assert!(records.iter().all(|r| r.available <= r.copies));
}

#[test]
fn test_reads_leave_file_untouched() {
    let (_dir, service) = seeded_service();
    service.add_stock(KINDRED, 2).unwrap();
    let before = store_bytes(&service);

    service.lookup(KINDRED).unwrap();
    service.list_stock().unwrap();
    assert!(service.lookup("0000000000000").unwrap_err().is_not_found());

    assert_eq!(store_bytes(&service), before);
}

#[test]
fn test_refused_borrow_and_return_leave_file_untouched() {
    let (_dir, service) = seeded_service();
    let before = store_bytes(&service);

    assert!(matches!(
        service.borrow(KINDRED).unwrap(),
        BorrowOutcome::Unavailable { .. }
    ));
    assert!(matches!(
        service.return_copy(KINDRED).unwrap(),
        ReturnOutcome::OverReturn { .. }
    ));
    assert_eq!(store_bytes(&service), before);
}

#[test]
fn test_second_bootstrap_keeps_existing_store() {
    let (dir, service) = seeded_service();
    service.add_stock(NEUROMANCER, 4).unwrap();

    // Seed file changes after first run are ignored
    fs::write(dir.path().join("catalog.csv"), "1111111111111,Other,Someone,2000\n").unwrap();
    assert!(!service.ensure_initialized(&dir.path().join("catalog.csv")).unwrap());

    let lines = service.list_stock().unwrap();
    assert_eq!(lines.len(), 5);
    assert_eq!(service.lookup(NEUROMANCER).unwrap().title, "Neuromancer");
}

#[test]
fn test_missing_store_without_bootstrap() {
    let dir = tempdir().expect("Failed to create temp dir");
    let service = InventoryService::new(open_catalog_repo_at(dir.path().join("bookStock.json")));
    assert!(matches!(service.borrow(KINDRED), Err(Error::Storage(_))));
}

#[test]
fn test_bootstrap_with_missing_seed_reports_seed_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let service = InventoryService::new(open_catalog_repo_at(dir.path().join("bookStock.json")));
    let err = service
        .ensure_initialized(&dir.path().join("catalog.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::Seed(_)));
    assert!(!service.repository().exists());
}

#[test]
fn test_open_inventory_uses_configured_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config {
        store_path: Some(dir.path().join("data").join("stock.json")),
        seed_path: Some(write_seed(dir.path())),
        ..Config::default()
    };
    let service = open_inventory(&config).unwrap();
    service.ensure_initialized(&config.seed_path()).unwrap();
    assert!(dir.path().join("data").join("stock.json").is_file());
}
