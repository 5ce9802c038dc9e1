//! Fund registry configuration.
//!
//! ```toml
//! normalize_names = true
//!
//! [[fund]]
//! key = "mirae"
//! name = "Mirae Asset Large & Midcap Fund"
//! normalized_name = "MiraeAssetLargeAndMidcapFund"
//! data_dir = "data"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use navdelta_core::{FundId, Period};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};
use crate::file_format::snapshot_file_name;

/// One registered fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundConfig {
    /// Short key used on the command line and in the store.
    pub key: String,

    /// Display name.
    pub name: String,

    /// File name prefix of the fund's snapshots.
    pub normalized_name: String,

    /// Directory holding the snapshot files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_true() -> bool {
    true
}

impl FundConfig {
    /// Creates a fund reading from the default data directory.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        normalized_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            normalized_name: normalized_name.into(),
            data_dir: default_data_dir(),
        }
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Store identifier of this fund.
    pub fn fund_id(&self) -> FundId {
        FundId::new(self.key.as_str())
    }

    /// Path of the snapshot file for a period.
    pub fn snapshot_path(&self, period: Period) -> PathBuf {
        self.data_dir
            .join(snapshot_file_name(&self.normalized_name, period))
    }
}

/// Registry of funds to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Normalize company names while loading.
    #[serde(default = "default_true")]
    pub normalize_names: bool,

    /// Registered funds.
    #[serde(default, rename = "fund")]
    pub funds: Vec<FundConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            normalize_names: true,
            funds: vec![
                FundConfig::new(
                    "mirae",
                    "Mirae Asset Large & Midcap Fund",
                    "MiraeAssetLargeAndMidcapFund",
                ),
                FundConfig::new(
                    "canara",
                    "Canara Robeco Large and Mid Cap Fund",
                    "CanaraRobecoLargeAndMidCapFund",
                ),
            ],
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    ///
    /// Relative data directories are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            for fund in &mut config.funds {
                if fund.data_dir.is_relative() {
                    fund.data_dir = base.join(&fund.data_dir);
                }
            }
        }
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> LoadResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| LoadError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that fund keys are unique and non-empty.
    pub fn validate(&self) -> LoadResult<()> {
        let mut keys = HashSet::new();
        for fund in &self.funds {
            if fund.key.trim().is_empty() || fund.normalized_name.trim().is_empty() {
                return Err(LoadError::Config(format!(
                    "fund '{}' needs a key and a normalized_name",
                    fund.name
                )));
            }
            if !keys.insert(fund.key.as_str()) {
                return Err(LoadError::Config(format!("duplicate fund key '{}'", fund.key)));
            }
        }
        Ok(())
    }

    /// Looks up a fund by key.
    pub fn fund(&self, key: &str) -> LoadResult<&FundConfig> {
        self.funds
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| LoadError::UnknownFund(key.to_string()))
    }

    /// Points every fund at the same data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        for fund in &mut self.funds {
            fund.data_dir = data_dir.as_ref().to_path_buf();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navdelta_core::Month;

    #[test]
    fn test_default_registry() {
        let config = RegistryConfig::default();
        assert!(config.normalize_names);
        assert_eq!(config.funds.len(), 2);
        assert_eq!(
            config.fund("mirae").unwrap().normalized_name,
            "MiraeAssetLargeAndMidcapFund"
        );
        assert!(matches!(config.fund("hdfc"), Err(LoadError::UnknownFund(_))));
    }

    #[test]
    fn test_parse_toml() {
        let config = RegistryConfig::from_toml_str(
            r#"
            normalize_names = false

            [[fund]]
            key = "canara"
            name = "Canara Robeco Large and Mid Cap Fund"
            normalized_name = "CanaraRobecoLargeAndMidCapFund"
            data_dir = "/srv/holdings"
            "#,
        )
        .unwrap();

        assert!(!config.normalize_names);
        let canara = config.fund("canara").unwrap();
        assert_eq!(canara.data_dir, PathBuf::from("/srv/holdings"));
        assert_eq!(
            canara.snapshot_path(Period::new(Month::June, 2025)),
            PathBuf::from("/srv/holdings/CanaraRobecoLargeAndMidCapFund-June-2025.json")
        );
    }

    #[test]
    fn test_defaults_when_omitted() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [[fund]]
            key = "mirae"
            name = "Mirae"
            normalized_name = "Mirae"
            "#,
        )
        .unwrap();
        assert!(config.normalize_names);
        assert_eq!(config.funds[0].data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [[fund]]
            key = "mirae"
            name = "A"
            normalized_name = "A"

            [[fund]]
            key = "mirae"
            name = "B"
            normalized_name = "B"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            RegistryConfig::from_toml_str("fund = 3"),
            Err(LoadError::Config(_))
        ));
    }
}
