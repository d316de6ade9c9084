//! End-to-end runs of the `midi-librarian` binary

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_midi-librarian"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn midi-librarian")
}

fn create_midis(root: &Path, names: &[&str]) {
    let midis = root.join("midi-player/midis");
    std::fs::create_dir_all(&midis).unwrap();
    for name in names {
        std::fs::write(midis.join(name), "MThd").unwrap();
    }
}

#[test]
fn builds_both_indexes() {
    let dir = tempdir().unwrap();
    create_midis(dir.path(), &["b.mid", "A.MID", "c.txt"]);
    let root = dir.path().to_str().unwrap();

    let output = run(&[root]);
    assert!(output.status.success());

    let music =
        std::fs::read_to_string(dir.path().join("midi-player/midis/file_list.json")).unwrap();
    assert_eq!(music, "[\n    \"A.MID\",\n    \"b.mid\"\n]");
    let banks = std::fs::read_to_string(
        dir.path()
            .join("midi-player/soundfonts/sf2/soundfont_list.json"),
    )
    .unwrap();
    assert_eq!(banks, "[]");
}

#[test]
fn missing_music_directory_fails_without_writing() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap();

    let output = run(&[root]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Required directory not found"));
    assert!(!dir.path().join("midi-player").exists());
}

#[test]
fn check_mode_reports_stale_index() {
    let dir = tempdir().unwrap();
    create_midis(dir.path(), &["theme.mid"]);
    let root = dir.path().to_str().unwrap();

    assert!(run(&[root]).status.success());
    assert!(run(&[root, "--check"]).status.success());

    create_midis(dir.path(), &["battle.mid"]);
    let output = run(&[root, "--check", "--json"]);
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcomes"][0]["collection"], "music");
    assert_eq!(report["outcomes"][0]["status"]["state"], "stale");
    assert_eq!(report["outcomes"][1]["status"]["state"], "upToDate");
}

#[test]
fn blocked_sound_bank_directory_fails_but_writes_music_index() {
    let dir = tempdir().unwrap();
    create_midis(dir.path(), &["theme.mid"]);
    std::fs::write(dir.path().join("midi-player/soundfonts"), "not a directory").unwrap();
    let root = dir.path().to_str().unwrap();

    let output = run(&[root, "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let music =
        std::fs::read_to_string(dir.path().join("midi-player/midis/file_list.json")).unwrap();
    assert_eq!(music, "[\n    \"theme.mid\"\n]");

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcomes"][0]["status"]["state"], "indexed");
    assert_eq!(report["outcomes"][1]["status"]["state"], "failed");
}

#[test]
fn config_flag_overrides_layout() {
    let dir = tempdir().unwrap();
    let songs = dir.path().join("songs");
    std::fs::create_dir_all(&songs).unwrap();
    std::fs::write(songs.join("intro.MIDI"), "MThd").unwrap();
    let config = dir.path().join("layout.json");
    std::fs::write(
        &config,
        r#"{ "music": { "directory": "songs", "indexFile": "songs.json" },
             "soundBanks": { "directory": "banks" } }"#,
    )
    .unwrap();
    let root = dir.path().to_str().unwrap();

    let output = run(&[root, "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(songs.join("songs.json")).unwrap(),
        "[\n    \"intro.MIDI\"\n]"
    );
    assert!(dir.path().join("banks/soundfont_list.json").is_file());
    assert!(!dir.path().join("midi-player").exists());
}

#[test]
fn config_escaping_root_is_rejected() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    create_midis(&project, &["theme.mid"]);
    let config = dir.path().join("layout.json");
    std::fs::write(&config, r#"{ "soundBanks": { "directory": "../outside" } }"#).unwrap();

    let output = run(&[project.to_str().unwrap(), "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!dir.path().join("outside").exists());
    assert!(!project.join("midi-player/midis/file_list.json").exists());
}
