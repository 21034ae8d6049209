//! Run configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::Bucket;
use crate::constants::OWL_AXIOM_REFSET;
use crate::error::{Error, Result};

/// Settings for one report or conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// `YYYYMMDD` embedded in archive entry names
    pub effective_date: String,
    /// Strategy bucket handed to axiom generation in conversion mode
    pub target_bucket: Bucket,
    /// Directory receiving report files
    pub report_dir: PathBuf,
    /// Reference set id written on generated axiom rows
    pub axiom_refset_id: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            effective_date: "20990131".to_string(),
            target_bucket: Bucket::NoInternationalModelNeeded,
            report_dir: PathBuf::from("."),
            axiom_refset_id: OWL_AXIOM_REFSET,
        }
    }
}

impl RunConfig {
    /// Load from a TOML file; missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check the settings a conversion run depends on.
    pub fn validate(&self) -> Result<()> {
        let date = &self.effective_date;
        if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Config(format!(
                "effective date `{date}` is not in YYYYMMDD form"
            )));
        }
        if !self.target_bucket.is_axiom_strategy() {
            return Err(Error::Config(format!(
                "`{}` is a diagnostic set, not an axiom strategy",
                self.target_bucket
            )));
        }
        Ok(())
    }
}
