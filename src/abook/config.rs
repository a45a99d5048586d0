use crate::api::CorruptBookPolicy;
use crate::error::{AbookError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "book.json";

/// User configuration, stored as JSON in the platform config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Where the contacts live. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_book_file")]
    pub book_file: PathBuf,

    /// Start with an empty book instead of refusing to run when the book
    /// file cannot be parsed.
    #[serde(default)]
    pub recover_corrupt_book: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_book_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOOK_FILE)
}

fn default_color() -> bool {
    true
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            recover_corrupt_book: false,
            color: default_color(),
        }
    }
}

impl AbookConfig {
    /// `config.json` inside the platform config dir, if one can be found.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "abook", "abook").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(AbookError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| AbookError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn corrupt_book_policy(&self) -> CorruptBookPolicy {
        if self.recover_corrupt_book {
            CorruptBookPolicy::StartEmpty
        } else {
            CorruptBookPolicy::Fail
        }
    }
}
