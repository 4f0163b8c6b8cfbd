//! Configuration file resolution.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `holder-lint.toml` or `.holder-lint.toml` in the checked directory or
//!    the nearest ancestor that has one (Gradle modules share the root config)
//! 3. `$HOLDER_LINT_CONFIG_DIR/config.toml`, else `~/.holder-lint/config.toml`
//! 4. Built-in defaults
//!
//! A relative `[analyzer] root` is resolved against the directory holding
//! the config file that set it.

use anyhow::{Context, Result};
use holder_lint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the checked directory or one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Directory that relative paths in the config file are resolved against.
    ///
    /// The global config has none; its paths apply to the checked directory.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => p.parent(),
            Self::Global(_) | Self::Default => None,
        }
    }

    /// Returns the directory to analyze for a check of `checked`.
    ///
    /// Without a configured root the checked path itself is analyzed.
    #[must_use]
    pub fn analysis_root(&self, checked: &Path, configured: Option<&Path>) -> PathBuf {
        let Some(root) = configured else {
            return checked.to_path_buf();
        };
        if root.is_absolute() {
            return root.to_path_buf();
        }
        match self.base_dir() {
            Some(dir) => dir.join(root),
            None => checked.join(root),
        }
    }

    /// Loads the configuration this source points at.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        } else {
            tracing::debug!("Using config: {}", path.display());
        }

        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Project-level config file names, checked in order within each directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["holder-lint.toml", ".holder-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration source for a check of `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(project_dir, explicit, global_config_dir().as_deref())
}

fn resolve_with(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(project_dir) {
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Searches `start` and its ancestors for a project config file.
fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory path.
///
/// Resolution: `$HOLDER_LINT_CONFIG_DIR` > `~/.holder-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("HOLDER_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".holder-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use holder_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("holder-lint.toml"), "").unwrap();

        let result = resolve_with(tmp.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("holder-lint.toml"), "").unwrap();
        fs::write(tmp.path().join(".holder-lint.toml"), "").unwrap();

        let result = resolve_with(tmp.path(), None, None);
        let found = result.path().unwrap().file_name().unwrap().to_owned();
        assert_eq!(found, "holder-lint.toml");
    }

    #[test]
    fn module_directory_finds_root_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".holder-lint.toml"), "").unwrap();
        let module = tmp.path().join("feature/feed/src/main/java");
        fs::create_dir_all(&module).unwrap();

        let result = resolve_with(&module, None, None);
        assert!(matches!(result, ConfigSource::Project(_)));
        assert!(result.path().unwrap().ends_with(".holder-lint.toml"));
    }

    #[test]
    fn global_fallback_only_when_file_exists() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_with(project.path(), None, Some(global.path()));
        assert_eq!(result, ConfigSource::Default);

        fs::write(global.path().join("config.toml"), "").unwrap();
        let result = resolve_with(project.path(), None, Some(global.path()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
    }

    #[test]
    fn configured_root_is_relative_to_ancestor_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("holder-lint.toml"),
            "[analyzer]\nroot = \"app/src/main/java\"\n",
        )
        .unwrap();
        let module = tmp.path().join("app");
        let sources = module.join("src/main/java");
        fs::create_dir_all(&sources).unwrap();

        let source = resolve_with(&module, None, None);
        let config = source.load().unwrap();
        let root = source.analysis_root(&module, config.analyzer.root.as_deref());

        assert!(root.is_dir());
        assert_eq!(root.canonicalize().unwrap(), sources.canonicalize().unwrap());
    }

    #[test]
    fn unset_root_analyzes_checked_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("holder-lint.toml"), "").unwrap();
        let module = tmp.path().join("app");
        fs::create_dir_all(&module).unwrap();

        let source = resolve_with(&module, None, None);
        assert_eq!(source.analysis_root(&module, None), module);
    }

    #[test]
    fn configured_root_without_config_dir_follows_checked_path() {
        let checked = Path::new("/work/app");
        let root = ConfigSource::Default.analysis_root(checked, Some(Path::new("src")));
        assert_eq!(root, PathBuf::from("/work/app/src"));

        let global = ConfigSource::Global(PathBuf::from("/home/u/.holder-lint/config.toml"));
        assert_eq!(
            global.analysis_root(checked, Some(Path::new("src"))),
            PathBuf::from("/work/app/src")
        );
    }

    #[test]
    fn explicit_config_roots_relative_to_its_directory() {
        let source = ConfigSource::Explicit(PathBuf::from("/cfg/holder-lint.toml"));
        let root = source.analysis_root(Path::new("/work"), Some(Path::new("java")));
        assert_eq!(root, PathBuf::from("/cfg/java"));

        let absolute = source.analysis_root(Path::new("/work"), Some(Path::new("/abs/src")));
        assert_eq!(absolute, PathBuf::from("/abs/src"));
    }

    #[test]
    fn default_loads_default_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn load_reads_project_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("holder-lint.toml");
        fs::write(&path, "fail_on = \"warning\"\n").unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert_eq!(config.fail_threshold(), Severity::Warning);
    }

    #[test]
    fn load_reports_missing_explicit_file() {
        let err = ConfigSource::Explicit(PathBuf::from("/nonexistent/holder-lint.toml"))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/holder-lint.toml"));
    }
}
