//! Asset Directory Scanner
//!
//! Lists the direct entries of an asset directory whose names end with one
//! of the collection's extensions.

use std::path::Path;

use walkdir::WalkDir;

use crate::{CoreError, CoreResult};

/// Case-insensitive suffix match against a list of lowercase extensions
/// (each with its leading dot).
pub fn matches_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
}

/// Non-recursive scan of `directory`
///
/// Returns matching entry names sorted in ascending lexicographic order
/// (case-sensitive, by code point). Subdirectories are not descended into.
pub fn scan_collection(directory: &Path, extensions: &[String]) -> CoreResult<Vec<String>> {
    if !directory.is_dir() {
        return Err(CoreError::DirectoryScanFailed {
            path: directory.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // Failing to read the directory itself is fatal for this collection;
                // a single unreadable entry is not.
                if e.depth() == 0 {
                    return Err(CoreError::DirectoryScanFailed {
                        path: directory.to_path_buf(),
                        message: e.to_string(),
                    });
                }
                tracing::debug!(error = %e, "Skipping unreadable entry during scan");
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(
                path = %entry.path().display(),
                "Skipping entry with a non UTF-8 name"
            );
            continue;
        };

        if matches_extension(name, extensions) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_matches_extension_ignores_case() {
        let midi = exts(&[".mid", ".midi"]);
        assert!(matches_extension("song.mid", &midi));
        assert!(matches_extension("SONG.MID", &midi));
        assert!(matches_extension("Song.Midi", &midi));
        assert!(!matches_extension("song.mid.txt", &midi));
        assert!(!matches_extension("mid", &midi));
        assert!(!matches_extension("file_list.json", &midi));
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.mid"), "").unwrap();
        std::fs::write(dir.path().join("A.MID"), "").unwrap();
        std::fs::write(dir.path().join("c.txt"), "").unwrap();

        let names = scan_collection(dir.path(), &exts(&[".mid", ".midi"])).unwrap();
        assert_eq!(names, vec!["A.MID", "b.mid"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/deep.sf2"), "").unwrap();
        std::fs::write(dir.path().join("top.sf2"), "").unwrap();

        let names = scan_collection(dir.path(), &exts(&[".sf2"])).unwrap();
        assert_eq!(names, vec!["top.sf2"]);
    }

    #[test]
    fn test_scan_keeps_directory_entries_with_matching_names() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bundle.sf2")).unwrap();

        let names = scan_collection(dir.path(), &exts(&[".sf2"])).unwrap();
        assert_eq!(names, vec!["bundle.sf2"]);
    }

    #[test]
    fn test_scan_sort_is_case_sensitive() {
        let dir = tempdir().unwrap();
        for name in ["zelda.mid", "Zelda.mid", "airship.MIDI", "Airship.mid"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let names = scan_collection(dir.path(), &exts(&[".mid", ".midi"])).unwrap();
        assert_eq!(
            names,
            vec!["Airship.mid", "Zelda.mid", "airship.MIDI", "zelda.mid"]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.mid")), "").unwrap();
        std::fs::write(dir.path().join("good.mid"), "").unwrap();
        std::fs::write(dir.path().join("été.mid"), "").unwrap();

        let names = scan_collection(dir.path(), &exts(&[".mid"])).unwrap();
        assert_eq!(names, vec!["good.mid", "été.mid"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let names = scan_collection(dir.path(), &exts(&[".sf2"])).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempdir().unwrap();
        let result = scan_collection(&dir.path().join("missing"), &exts(&[".sf2"]));
        assert!(matches!(result, Err(CoreError::DirectoryScanFailed { .. })));
    }
}
