//! Library Layout Settings
//!
//! Describes where the asset directories live beneath the project root,
//! what their index files are called, and which extensions they collect.
//!
//! Every field has a default, so a layout file only needs the values it
//! overrides. Storage location: {root}/midi-librarian.json (optional)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::library::AssetCollection;
use crate::{CoreError, CoreResult};

/// Layout schema version
pub const LAYOUT_VERSION: u32 = 1;

/// Layout override file name, looked up in the project root
pub const LAYOUT_FILE: &str = "midi-librarian.json";

/// Location and filter for one asset directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLayout {
    /// Directory relative to the project root (forward slashes)
    #[serde(default)]
    pub directory: String,

    /// Index file name written inside `directory`
    #[serde(default)]
    pub index_file: String,

    /// Recognized extensions, lowercase with a leading dot
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl CollectionLayout {
    /// Default layout for a collection
    pub fn default_for(collection: AssetCollection) -> Self {
        match collection {
            AssetCollection::Music => Self {
                directory: "midi-player/midis".to_string(),
                index_file: "file_list.json".to_string(),
                extensions: vec![".mid".to_string(), ".midi".to_string()],
            },
            AssetCollection::SoundBank => Self {
                directory: "midi-player/soundfonts/sf2".to_string(),
                index_file: "soundfont_list.json".to_string(),
                extensions: vec![".sf2".to_string()],
            },
        }
    }

    /// Clean up user-provided values, falling back to `defaults` where empty.
    /// Fields missing from a layout file deserialize empty and land here.
    fn normalize(&mut self, defaults: &CollectionLayout) {
        let directory = self.directory.trim().trim_end_matches(['/', '\\']);
        self.directory = if directory.is_empty() {
            defaults.directory.clone()
        } else {
            directory.to_string()
        };

        let index_file = self.index_file.trim();
        self.index_file = if index_file.is_empty() {
            defaults.index_file.clone()
        } else {
            index_file.to_string()
        };

        let mut extensions: Vec<String> = Vec::new();
        for ext in &self.extensions {
            let ext = ext.trim().to_lowercase();
            if ext.is_empty() || ext == "." {
                continue;
            }
            let ext = if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            };
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        if extensions.is_empty() {
            extensions = defaults.extensions.clone();
        }
        self.extensions = extensions;
    }

    fn validate(&self, collection: AssetCollection) -> CoreResult<()> {
        let index_path = Path::new(&self.index_file);
        if index_path.components().count() != 1 || index_path.file_name().is_none() {
            return Err(CoreError::InvalidLayout(format!(
                "{collection} index file must be a plain file name: {}",
                self.index_file
            )));
        }

        if self.directory.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(CoreError::InvalidLayout(format!(
                "{collection} directory must stay inside the project root: {}",
                self.directory
            )));
        }

        if Path::new(&self.directory).is_absolute() {
            return Err(CoreError::InvalidLayout(format!(
                "{collection} directory must be relative to the project root: {}",
                self.directory
            )));
        }

        let index_lower = self.index_file.to_lowercase();
        if self.extensions.iter().any(|ext| index_lower.ends_with(ext)) {
            return Err(CoreError::InvalidLayout(format!(
                "{collection} index file {} would match its own extension filter",
                self.index_file
            )));
        }
        Ok(())
    }
}

/// Layout of both asset directories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryLayout {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// MIDI file directory
    #[serde(default = "default_music")]
    pub music: CollectionLayout,

    /// SoundFont directory
    #[serde(default = "default_sound_banks")]
    pub sound_banks: CollectionLayout,
}

fn default_version() -> u32 {
    LAYOUT_VERSION
}

fn default_music() -> CollectionLayout {
    CollectionLayout::default_for(AssetCollection::Music)
}

fn default_sound_banks() -> CollectionLayout {
    CollectionLayout::default_for(AssetCollection::SoundBank)
}

impl Default for LibraryLayout {
    fn default() -> Self {
        Self {
            version: LAYOUT_VERSION,
            music: default_music(),
            sound_banks: default_sound_banks(),
        }
    }
}

impl LibraryLayout {
    /// Load a layout file, normalizing and validating its contents
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::LayoutLoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut layout =
            serde_json::from_str::<LibraryLayout>(&content).map_err(|e| {
                CoreError::LayoutLoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?;

        layout.normalize();
        layout.validate()?;
        debug!(path = %path.display(), "Loaded library layout");
        Ok(layout)
    }

    /// Load `{root}/midi-librarian.json` if present, otherwise use defaults
    pub fn load_or_default(root: &Path) -> CoreResult<Self> {
        let path = root.join(LAYOUT_FILE);
        if !path.is_file() {
            debug!("Layout file not found, using defaults");
            return Ok(Self::default());
        }
        info!(path = %path.display(), "Using layout file");
        Self::load(&path)
    }

    /// Normalize fields, restoring defaults for empty values
    pub fn normalize(&mut self) {
        if self.version == 0 {
            self.version = LAYOUT_VERSION;
        }
        self.music.normalize(&default_music());
        self.sound_banks.normalize(&default_sound_banks());
    }

    /// Reject layouts that cannot produce a usable index
    pub fn validate(&self) -> CoreResult<()> {
        for collection in AssetCollection::ALL {
            self.collection(collection).validate(collection)?;
        }
        if self.music.directory == self.sound_banks.directory
            && self.music.index_file == self.sound_banks.index_file
        {
            return Err(CoreError::InvalidLayout(
                "MIDI and SoundFont collections would share one index file".to_string(),
            ));
        }
        Ok(())
    }

    /// Layout entry for a collection
    pub fn collection(&self, collection: AssetCollection) -> &CollectionLayout {
        match collection {
            AssetCollection::Music => &self.music,
            AssetCollection::SoundBank => &self.sound_banks,
        }
    }

    /// Absolute asset directory for a collection beneath `root`
    pub fn resolve(&self, root: &Path, collection: AssetCollection) -> PathBuf {
        let mut dir = root.to_path_buf();
        for segment in self.collection(collection).directory.split(['/', '\\']) {
            if !segment.is_empty() {
                dir.push(segment);
            }
        }
        dir
    }

    /// Index file path for a collection beneath `root`
    pub fn index_path(&self, root: &Path, collection: AssetCollection) -> PathBuf {
        self.resolve(root, collection)
            .join(&self.collection(collection).index_file)
    }
}
