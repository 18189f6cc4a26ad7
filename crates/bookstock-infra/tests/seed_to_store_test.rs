//! Seed catalog -> JSON store integration tests

use std::fs;

use bookstock_domain::repository::CatalogRepository;
use bookstock_infra::persistence::FileCatalogRepository;
use bookstock_infra::seed_csv::{load_seed_catalog, SeedLoaderError};
use tempfile::tempdir;

const CATALOG: &str = "\
9780143111597,The Penguin Classics Book,Henry Eliot,2018
9781472258229,Kindred,Octavia E. Butler,1979
9780441569595,Neuromancer,William Gibson,1984
9781857231380,Consider Phlebas,Iain M. Banks,1987
9780553283686,Hyperion,Dan Simmons,1989
";

#[test]
fn test_seed_file_initializes_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let seed_path = dir.path().join("catalog.csv");
    fs::write(&seed_path, CATALOG).unwrap();

    let rows = load_seed_catalog(&seed_path).unwrap();
    let repo = FileCatalogRepository::in_dir(dir.path());
    let records = repo.initialize_from_seed(rows).unwrap();

    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.copies == 0 && r.available == 0));
    assert_eq!(repo.load().unwrap(), records);
}

#[test]
fn test_existing_store_is_not_reseeded() {
    let dir = tempdir().expect("Failed to create temp dir");
    let seed_path = dir.path().join("catalog.csv");
    fs::write(&seed_path, CATALOG).unwrap();
    let repo = FileCatalogRepository::in_dir(dir.path());

    let mut records = repo
        .initialize_from_seed(load_seed_catalog(&seed_path).unwrap())
        .unwrap();
    records[1].copies = 2;
    records[1].available = 1;
    repo.save(&records).unwrap();

    let again = repo
        .initialize_from_seed(load_seed_catalog(&seed_path).unwrap())
        .unwrap();
    assert_eq!(again[1].copies, 2);
    assert_eq!(again[1].available, 1);
}

#[test]
fn test_save_of_load_keeps_file_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let seed_path = dir.path().join("catalog.csv");
    fs::write(&seed_path, CATALOG).unwrap();
    let repo = FileCatalogRepository::in_dir(dir.path());
    repo.initialize_from_seed(load_seed_catalog(&seed_path).unwrap())
        .unwrap();

    let before = fs::read_to_string(repo.store_path()).unwrap();
    repo.save(&repo.load().unwrap()).unwrap();
    let after = fs::read_to_string(repo.store_path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_missing_seed_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = load_seed_catalog(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, SeedLoaderError::Read { .. }));
}

#[test]
fn test_seed_with_bom_and_header() {
    let dir = tempdir().expect("Failed to create temp dir");
    let seed_path = dir.path().join("catalog.csv");
    fs::write(&seed_path, format!("\u{feff}ISBN,Title,Author,Year\n{CATALOG}")).unwrap();
    let rows = load_seed_catalog(&seed_path).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].id, "9780143111597");
}
