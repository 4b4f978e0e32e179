//! Integration tests for maltcat-core.
//!
//! These tests read real archives from disk and inspect real directories.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use maltcat_core::CatalogConfig;
use maltcat_core::CatalogError;
use maltcat_core::HelperConfig;
use maltcat_core::InspectionResult;
use maltcat_core::Inspector;
use maltcat_core::inspect_graph;
use maltcat_core::read_catalog;
use maltcat_core::test_utils::EntityXml;
use maltcat_core::test_utils::create_test_zip;
use maltcat_core::test_utils::entity_xml;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_archive(dir: &TempDir, entries: Vec<(&str, &[u8])>) -> PathBuf {
    let path = dir.path().join("Maltego.mtgl");
    fs::write(&path, create_test_zip(entries)).unwrap();
    path
}

#[test]
fn test_catalog_from_graph_archive() {
    let temp = TempDir::new().unwrap();
    let person = EntityXml::new("maltego.Person", "Person")
        .field_with("person.fullname", "string", Some("Full name"), Some("Full Name"))
        .field("person.age", "int")
        .build();
    let ip = entity_xml("maltego.IPv4Address", "IPv4 Address", &[("ipv4-address", "string")]);

    let archive = write_archive(
        &temp,
        vec![
            ("Graphs/Graph1/Version.properties", &b"version=1"[..]),
            ("Entities/maltego.Person.entity", person.as_bytes()),
            ("Entities/maltego.IPv4Address.entity", ip.as_bytes()),
            ("EntityCategories/personal.category", &b"<Category/>"[..]),
        ],
    );

    let report = read_catalog(&archive, &CatalogConfig::default()).unwrap();

    assert_eq!(report.entries_total, 4);
    assert_eq!(report.entries_matched, 2);
    assert!(!report.has_skipped());
    assert_eq!(report.catalog.len(), 2);
    assert_eq!(report.catalog.field_count(), 3);

    let person = report.catalog.get("maltego.Person").unwrap();
    assert_eq!(person.display_name(), "Person");
    let fullname = person.field("person.fullname").unwrap();
    assert_eq!(fullname.description, "Full name");
    assert_eq!(fullname.display_name, "Full Name");
    let age = person.field("person.age").unwrap();
    assert_eq!(age.field_type, "int");
    assert_eq!(age.description, "");
    assert_eq!(age.display_name, "person.age");
}

#[test]
fn test_zero_matching_entries() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        &temp,
        vec![
            ("Graphs/Graph1/Version.properties", &b"version=1"[..]),
            ("Icons/Person.png", &b"\x89PNG"[..]),
        ],
    );

    let report = read_catalog(&archive, &CatalogConfig::default()).unwrap();
    assert!(report.catalog.is_empty());
    assert_eq!(report.entries_matched, 0);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_empty_archive() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(&temp, vec![]);

    let report = read_catalog(&archive, &CatalogConfig::default()).unwrap();
    assert!(report.catalog.is_empty());
    assert_eq!(report.entries_total, 0);
}

#[test]
fn test_malformed_entry_is_skipped() {
    let temp = TempDir::new().unwrap();
    let good = entity_xml("maltego.Good", "Good", &[("a", "string")]);
    let archive = write_archive(
        &temp,
        vec![
            ("Entities/Bad.entity", &b"<MaltegoEntity id=\"x\""[..]),
            ("Entities/Good.entity", good.as_bytes()),
        ],
    );

    let report = read_catalog(&archive, &CatalogConfig::default()).unwrap();
    assert_eq!(report.catalog.len(), 1);
    assert!(report.catalog.get("maltego.Good").is_some());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].entry, "Entities/Bad.entity");
}

#[test]
fn test_entry_missing_required_attribute_is_skipped() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        &temp,
        vec![("Entities/NoName.entity", &b"<MaltegoEntity id=\"x\"/>"[..])],
    );

    let report = read_catalog(&archive, &CatalogConfig::default()).unwrap();
    assert!(report.catalog.is_empty());
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_duplicate_identifier_last_wins() {
    let temp = TempDir::new().unwrap();
    let first = entity_xml("maltego.Dup", "First", &[]);
    let second = entity_xml("maltego.Dup", "Second", &[("x", "string")]);
    let archive = write_archive(
        &temp,
        vec![
            ("A.entity", first.as_bytes()),
            ("B.entity", second.as_bytes()),
        ],
    );

    let report = read_catalog(&archive, &CatalogConfig::default()).unwrap();
    assert_eq!(report.catalog.len(), 1);
    let dup = report.catalog.get("maltego.Dup").unwrap();
    assert_eq!(dup.display_name(), "Second");
    assert_eq!(dup.fields().len(), 1);
}

#[test]
fn test_corrupt_archive_is_fatal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Maltego.mtgl");
    fs::write(&path, b"PK\x03\x04 truncated").unwrap();

    let err = read_catalog(&path, &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArchive(_)));
}

#[test]
fn test_missing_archive_is_fatal() {
    let temp = TempDir::new().unwrap();
    let err = read_catalog(temp.path().join("nope.mtgl"), &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_graph_listing_without_helper() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("DataEntities");
    let structure = temp.path().join("StructureEntities");
    fs::create_dir(&data).unwrap();
    fs::create_dir(&structure).unwrap();
    for name in ["segments_3", "_1.cfs", "write.lock"] {
        fs::write(data.join(name), b"").unwrap();
    }

    let results = inspect_graph(temp.path(), &Inspector::new(None));

    assert_eq!(
        results[0].1,
        InspectionResult::Listed {
            names: vec![
                "_1.cfs".to_string(),
                "segments_3".to_string(),
                "write.lock".to_string()
            ],
            reason: "helper not configured".to_string(),
        }
    );
    assert!(matches!(
        &results[1].1,
        InspectionResult::Listed { names, .. } if names.is_empty()
    ));
}

#[test]
fn test_graph_listing_with_missing_helper_artifact() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("DataEntities")).unwrap();
    fs::write(temp.path().join("DataEntities").join("segments_1"), b"").unwrap();

    let helper = HelperConfig::new(std::env::current_exe().unwrap())
        .classpath(temp.path().join("lib").join("lucene-core.jar"));
    let results = inspect_graph(temp.path(), &Inspector::new(Some(helper)));

    match &results[0].1 {
        InspectionResult::Listed { names, reason } => {
            assert_eq!(names, &["segments_1".to_string()]);
            assert!(reason.contains("lucene-core.jar"));
        }
        other => panic!("expected listing, got {other:?}"),
    }
    assert_eq!(results[1].1, InspectionResult::Absent);
}

#[test]
fn test_absent_graph_root() {
    let temp = TempDir::new().unwrap();
    let results = inspect_graph(temp.path().join("Graphs").join("Graph9"), &Inspector::new(None));

    assert!(results.iter().all(|(_, r)| *r == InspectionResult::Absent));
}
