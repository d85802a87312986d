use std::fs;

use serde_json::json;
use tempfile::tempdir;

use srd_monsters::contract::Monster;
use srd_monsters::output::{prepare_output_dir, read_monsters, write_monsters};
use srd_monsters::preprocess::map_monster;

fn kobold() -> Monster {
    map_monster(&json!({
        "index": "kobold",
        "name": "Kobold",
        "size": "Small",
        "type": "humanoid",
        "subtype": "kobold",
        "alignment": "lawful evil",
        "armor_class": [{ "type": "dex", "value": 12 }],
        "hit_points": 5,
        "hit_dice": "2d6",
        "speed": { "walk": "30 ft." },
        "strength": 7,
        "dexterity": 15,
        "constitution": 9,
        "intelligence": 8,
        "wisdom": 7,
        "charisma": 8,
        "challenge_rating": 0.125
    }))
    .expect("kobold record should map")
}

#[cfg(unix)]
fn mode_of(path: &std::path::Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[cfg(unix)]
#[test]
fn overwriting_keeps_the_existing_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "{}").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    write_monsters(&path, &[kobold()]).unwrap();

    assert_eq!(mode_of(&path), 0o644);
    assert_eq!(read_monsters(&path).unwrap().monsters.len(), 1);
}

#[cfg(unix)]
#[test]
fn overwriting_keeps_a_restricted_mode_too() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "{}").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    write_monsters(&path, &[kobold()]).unwrap();

    assert_eq!(mode_of(&path), 0o640);
}

#[cfg(unix)]
#[test]
fn new_files_are_world_readable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.json");

    write_monsters(&path, &[kobold()]).unwrap();

    assert_eq!(mode_of(&path), 0o644);
}

#[test]
fn writing_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assets").join("data").join("monsters_srd.json");

    assert_eq!(write_monsters(&path, &[kobold(), kobold()]).unwrap(), 2);
    assert_eq!(read_monsters(&path).unwrap().monsters[1].slug, "kobold");
}

#[test]
fn unusable_output_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    // A file where the output directory should be.
    let blocker = dir.path().join("assets");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("data").join("monsters_srd.json");

    let err = prepare_output_dir(&path).unwrap_err();
    assert!(err.is_io(), "got {err:?}");

    let err = write_monsters(&path, &[kobold()]).unwrap_err();
    assert!(err.is_io(), "got {err:?}");
}

#[test]
fn reading_a_corrupt_document_is_a_schema_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "{\"monsters\": [").unwrap();

    let err = read_monsters(&path).unwrap_err();
    assert!(err.is_schema(), "got {err:?}");
}

#[test]
fn reading_a_missing_document_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = read_monsters(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.is_io(), "got {err:?}");
}
