use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".compactrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.*",
    "**/*.spec.*",
    "**/__tests__/**",
    "**/test_*.py",
    "**/*_test.py",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns or literal relative paths excluded from compaction.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directory names skipped in addition to the built-in set.
    #[serde(default)]
    pub skip_dirs: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    /// Where compacted files are written, relative to the config file.
    /// Defaults to the compacted directory itself.
    #[serde(default)]
    pub output_dir: Option<String>,
}

fn default_ignore_test_files() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            skip_dirs: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or a
    /// `skipDirs` entry is not a plain directory name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for name in &self.skip_dirs {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                anyhow::bail!("Invalid directory name in 'skipDirs': \"{}\"", name);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Configured output directory, resolved against the config file location.
    pub fn output_dir(&self) -> Option<PathBuf> {
        let dir = self.config.output_dir.as_ref()?;
        let base = self
            .path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        Some(base.join(dir))
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ignores.is_empty());
        assert!(config.skip_dirs.is_empty());
        assert!(!config.ignore_test_files);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "ignores": ["**/generated/**"],
              "skipDirs": ["vendor"],
              "ignoreTestFiles": true,
              "outputDir": "docs"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.ignores, vec!["**/generated/**"]);
        assert_eq!(config.skip_dirs, vec!["vendor"]);
        assert!(config.ignore_test_files);
        assert_eq!(config.output_dir.as_deref(), Some("docs"));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "skipDirs": ["vendor"] }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.skip_dirs, vec!["vendor"]);
        assert!(config.ignores.is_empty());
        assert!(!config.ignore_test_files);
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/legacy/**"], "outputDir": "out/docs" }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.path.is_some());
        assert_eq!(result.config.ignores, vec!["**/legacy/**"]);
        assert_eq!(result.output_dir(), Some(dir.path().join("out/docs")));
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.path.is_none());
        assert_eq!(result.output_dir(), None);
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()], // unclosed bracket
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_invalid_skip_dir() {
        let config = Config {
            skip_dirs: vec!["src/generated".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("skipDirs"));
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "ignores": ["[invalid"] }"#).unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_default_config_json_is_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"skipDirs\""));
        assert!(json.contains("\"ignoreTestFiles\": false"));
        assert!(json.contains("\"outputDir\": null"));
    }
}
