//! Integration tests for loading timetable exports from disk
//!
//! These tests write per-level exports into a temporary data root and drive
//! the public library API end to end: configuration, concurrent loading,
//! aggregation, persisted selection and the visible event set.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use valdi_timetable::app::services::event_progress::classify;
use valdi_timetable::app::services::selection::{JsonFileStore, KeyValueStore, SelectionState};
use valdi_timetable::app::services::session;
use valdi_timetable::app::services::timetable_service::TimetableService;
use valdi_timetable::{Config, EventStatus, Error};

const HEADER: &str = r#""Description","Module code","Start date","Start time","End date","End time","Room(s)","Type","Staff member(s)""#;

fn write_export(dir: &Path, name: &str, rows: &[&str]) {
    let mut lines = vec!["Timetable export", "Semester 1", HEADER];
    lines.extend_from_slice(rows);
    fs::write(dir.join(name), lines.join("\n")).unwrap();
}

fn setup_data_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    let specific = dir.path().join("data").join("specific");
    fs::create_dir_all(&specific).unwrap();

    write_export(
        &specific,
        "CompSci-Level4_timetable_2526.csv",
        &[
            r#""Programming (Lecture)","CI4100","2025-09-22","09:00","2025-09-22","11:00","PR.JG.1003","Lecture","SMITH, JOHN""#,
            r#""Programming (Practical)","CI4100","2025-09-22","13:00","2025-09-22","15:00","SB2025","Practical","SMITH, JOHN, DOE, JANE""#,
        ],
    );
    write_export(
        &specific,
        "CompSci-Level5_timetable_2526.csv",
        &[
            r#""Databases (Lecture)","CI5100","2025-09-23","10:00","2025-09-23","12:00","MB1001","Lecture","PATEL, PRIYA""#,
            r#""Databases (Seminar)","CI5100","2025-09-24","10:00","2025-09-24","11:00","MB1002","Seminar","""#,
        ],
    );
    // Level 6 export is deliberately missing: it must not affect the others

    dir
}

fn config_for(data_root: &Path) -> Config {
    let mut config = Config::default();
    config.sources.data_root = data_root.to_path_buf();
    config.storage.state_file = data_root.join("state").join("state.json");
    config
}

/// Load the default document set from a data root with one export missing
///
/// Purpose: Validate the fan-out load, document ordering and aggregation
/// Benefit: A broken level export never hides the modules of the other levels
#[tokio::test]
async fn test_load_modules_from_default_documents() {
    let data_root = setup_data_root();
    let config = config_for(data_root.path());

    let service = TimetableService::from_config(&config).unwrap();
    assert_eq!(service.documents().len(), 3);

    let modules = service.load_modules().await;
    let codes: Vec<&str> = modules.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["CI4100", "CI5100"]);

    let programming = &modules[0];
    assert_eq!(programming.name, "Programming");
    assert_eq!(programming.schedule.len(), 2);
    assert_eq!(programming.schedule[0].id, "CI4100-3");
    assert_eq!(
        programming.schedule[1].lecturer.as_deref(),
        Some("John Smith, Jane Doe")
    );
}

/// Sign in, narrow the selection, and reopen the state file
///
/// Purpose: Validate session gating and write-through selection persistence
/// Benefit: Selections survive between CLI runs exactly as toggled
#[tokio::test]
async fn test_selection_persists_across_runs() {
    let data_root = setup_data_root();
    let config = config_for(data_root.path());
    let catalog = TimetableService::from_config(&config)
        .unwrap()
        .load_catalog()
        .await;

    let mut store = JsonFileStore::open(config.storage.state_file.clone()).unwrap();
    assert!(matches!(
        session::require_user(&store),
        Err(Error::NotAuthenticated)
    ));
    session::login(&mut store, "k1234567").unwrap();

    let mut selection = SelectionState::load(&store, &catalog).unwrap();
    assert_eq!(selection.visible_events(catalog.modules()).len(), 4);

    selection.toggle_module("CI5100", &mut store).unwrap();
    selection.toggle_event_type("Practical", &mut store).unwrap();

    let reopened = JsonFileStore::open(config.storage.state_file.clone()).unwrap();
    assert_eq!(
        session::require_user(&reopened).unwrap().username,
        "k1234567"
    );
    assert_eq!(
        reopened.get("selected_modules").unwrap().as_deref(),
        Some(r#"["CI4100"]"#)
    );

    let restored = SelectionState::load(&reopened, &catalog).unwrap();
    let visible = restored.visible_events(catalog.modules());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Programming (Lecture)");
}

/// Classify a loaded event against fixed points in time
///
/// Purpose: Validate that parsed timestamps feed the progress classifier
/// Benefit: Status badges reflect the timetable's local wall-clock times
#[tokio::test]
async fn test_progress_of_loaded_event() {
    let data_root = setup_data_root();
    let config = config_for(data_root.path());
    let modules = TimetableService::from_config(&config)
        .unwrap()
        .load_modules()
        .await;

    let lecture = &modules[0].schedule[0];
    let day = NaiveDate::from_ymd_opt(2025, 9, 22).unwrap();
    let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();

    assert_eq!(classify(at(9, 5), lecture.start, lecture.end), EventStatus::Starting);
    assert_eq!(classify(at(10, 0), lecture.start, lecture.end), EventStatus::Ongoing);
    assert_eq!(classify(at(10, 55), lecture.start, lecture.end), EventStatus::Finished);
    assert_eq!(classify(at(11, 1), lecture.start, lecture.end), EventStatus::None);
}

/// Glob patterns in the document list expand to sorted matches
#[tokio::test]
async fn test_glob_document_pattern() {
    let data_root = setup_data_root();
    let mut config = config_for(data_root.path());
    config.sources.documents = vec!["data/specific/*.csv".to_string()];

    let service = TimetableService::from_config(&config).unwrap();
    assert_eq!(service.documents().len(), 2);
    assert!(service.documents()[0].ends_with("CompSci-Level4_timetable_2526.csv"));

    let catalog = service.load_catalog().await;
    assert_eq!(catalog.item_count(), 4);
    assert_eq!(
        catalog.event_types(),
        vec!["Lecture", "Practical", "Seminar"]
    );
}
