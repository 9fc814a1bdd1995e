use kool_preset::{AppError, PresetSelection, apply_preset_at, preset_at, preset_ids, select_preset_at};
use tempfile::TempDir;

#[test]
fn bundled_presets_apply_into_empty_directories() {
    for id in preset_ids().expect("bundled presets load") {
        let dir = TempDir::new().unwrap();

        let outcome = preset_at(dir.path(), Some(id.as_str()), false)
            .unwrap_or_else(|err| panic!("{id} failed: {err}"));

        assert!(!outcome.written.is_empty(), "{id} wrote nothing");
        assert!(!outcome.composed);
        for name in &outcome.written {
            assert!(dir.path().join(name).is_file(), "{id}: {name} missing");
        }
    }
}

#[test]
fn select_validates_preset_argument() {
    let dir = TempDir::new().unwrap();

    let selection = select_preset_at(dir.path(), Some("php")).unwrap();
    assert_eq!(selection, PresetSelection::from_argument("php"));

    let err = select_preset_at(dir.path(), Some("rails")).unwrap_err();
    assert!(matches!(err, AppError::UnknownPreset(ref id) if id == "rails"));
}

#[test]
fn applying_twice_conflicts_unless_overridden() {
    let dir = TempDir::new().unwrap();
    let selection = PresetSelection::from_argument("php");

    apply_preset_at(dir.path(), &selection, false).unwrap();

    let err = apply_preset_at(dir.path(), &selection, false).unwrap_err();
    match err {
        AppError::ConflictExists(files) => {
            assert_eq!(files, vec!["kool.yml", "docker-compose.yml"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(apply_preset_at(dir.path(), &selection, true).is_ok());
}
