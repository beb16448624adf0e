//! Configuration module
//!
//! Holds the static content of the compatibility report: suite and server
//! names, the known limitation and supported feature lists, references and
//! footer. Defaults describe the s3d server tested with Ceph s3-tests.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{ReportError, Result};

/// Static report content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Document title
    pub title: String,

    /// Name of the test suite the output came from
    pub suite_name: String,

    /// Name of the server under test
    pub server_name: String,

    /// Features the server does not implement yet
    pub known_limitations: Vec<String>,

    /// Features the server implements
    pub supported_features: Vec<String>,

    /// Links listed in the References section
    pub references: Vec<Reference>,
}

/// A titled link
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

impl Reference {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "S3 Compatibility Test Results".to_string(),
            suite_name: "Ceph s3-tests".to_string(),
            server_name: "s3d".to_string(),
            known_limitations: [
                "Bucket versioning",
                "Object locking",
                "Bucket policies",
                "ACLs (Access Control Lists)",
                "Server-side encryption",
                "Object tagging",
                "Lifecycle policies",
                "CORS (Cross-Origin Resource Sharing)",
                "Website hosting",
                "Logging",
                "Replication",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            supported_features: [
                "Bucket operations (create, list, delete, head)",
                "Object operations (put, get, delete, head, copy)",
                "ListObjects v1 and v2 with prefix/delimiter",
                "Multipart uploads",
                "AWS Signature V4 authentication",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            references: vec![
                Reference::new(
                    "AWS S3 API Documentation",
                    "https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html",
                ),
                Reference::new("Ceph s3-tests Repository", "https://github.com/ceph/s3-tests"),
                Reference::new("s3d Repository", "https://github.com/wzshiming/s3d"),
            ],
        }
    }
}

impl ReportConfig {
    /// Load configuration from a YAML (`.yaml`/`.yml`) or JSON file.
    /// Fields missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content).map_err(|source| ReportError::ConfigYaml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_json::from_str(&content).map_err(|source| ReportError::ConfigJson {
                path: path.to_path_buf(),
                source,
            })?
        };

        debug!("Loaded report config from {}", path.display());
        Ok(config)
    }

    /// Footer line attributing the report
    pub fn footer(&self) -> String {
        format!(
            "This report was automatically generated by the {} compatibility test suite.",
            self.server_name
        )
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.suite_name, "Ceph s3-tests");
        assert_eq!(config.server_name, "s3d");
        assert_eq!(config.known_limitations.len(), 11);
        assert_eq!(config.supported_features.len(), 5);
        assert_eq!(config.references.len(), 3);
        assert_eq!(
            config.footer(),
            "This report was automatically generated by the s3d compatibility test suite."
        );
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.yaml");

        let mut config = ReportConfig::default();
        config.server_name = "minio".to_string();
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

        let loaded = ReportConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let config = ReportConfig::default();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(ReportConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.yml");
        std::fs::write(&path, "server_name: rucket\nknown_limitations: []\n").unwrap();

        let config = ReportConfig::load(&path).unwrap();
        assert_eq!(config.server_name, "rucket");
        assert!(config.known_limitations.is_empty());
        assert_eq!(config.suite_name, "Ceph s3-tests");
        assert_eq!(config.references.len(), 3);
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ReportConfig::load(&path),
            Err(ReportError::ConfigJson { .. })
        ));
        assert!(matches!(
            ReportConfig::load(dir.path().join("missing.yaml")),
            Err(ReportError::ReadConfig { .. })
        ));
    }
}
