//! Annotation file discovery
//!
//! Looks for `describe.{toml,yaml,yml,json}` in the global directory
//! (`~/.mtp/`) and the project directory (`./.mtp/`). Project files override
//! global ones when merged.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the directory holding annotation files
pub const CONFIG_DIR_NAME: &str = ".mtp";

/// Accepted annotation file names, in merge order within one directory
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "describe.toml",
    "describe.yaml",
    "describe.yml",
    "describe.json",
];

/// A discovered annotation file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
}

impl ConfigFile {
    pub fn new(path: PathBuf, format: ConfigFormat, scope: ConfigScope) -> Self {
        Self {
            path,
            format,
            scope,
        }
    }
}

/// File format detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    /// `.yaml` or `.yml`
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from a file extension, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where a file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// `~/.mtp/`
    Global,
    /// `./.mtp/`
    Project,
}

/// Finds annotation files in the global and project directories
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
    /// Resolve `./.mtp` and `~/.mtp` at discovery time
    from_environment: bool,
}

impl FileDiscovery {
    /// Discovery rooted at the current directory and the home directory
    ///
    /// Directories are resolved when [`discover_all`](Self::discover_all) runs.
    pub fn new() -> Self {
        Self {
            project_dir: None,
            global_dir: None,
            from_environment: true,
        }
    }

    /// Discovery over exactly the given directories
    ///
    /// Neither the current directory nor the home directory is consulted; a
    /// `None` scope contributes no files.
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
            from_environment: false,
        }
    }

    /// Discover all annotation files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let (project_dir, global_dir) = if self.from_environment {
            (Self::resolve_project_dir(), Self::resolve_global_dir())
        } else {
            (self.project_dir.clone(), self.global_dir.clone())
        };

        let mut files = Vec::new();
        if let Some(dir) = global_dir {
            files.extend(Self::search_directory(&dir, ConfigScope::Global));
        }
        if let Some(dir) = project_dir {
            files.extend(Self::search_directory(&dir, ConfigScope::Project));
        }

        debug!("Discovered {} annotation files", files.len());
        files
    }

    fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            debug!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| {
                let format = ConfigFormat::from_path(&candidate)?;
                trace!(
                    "Found annotation file: {} ({:?})",
                    candidate.display(),
                    format
                );
                Some(ConfigFile::new(candidate, format, scope))
            })
            .collect()
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}

impl Default for FileDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("toml"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("YML"),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension("Json"),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension("ini"), None);
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("/a/describe.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("/a/describe")), None);
    }

    #[test]
    fn test_discovers_only_known_names() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("describe.toml"), "version = \"1.0.0\"").unwrap();
        fs::write(project.path().join("other.toml"), "").unwrap();

        let discovery = FileDiscovery::with_directories(Some(project.path().to_path_buf()), None);
        let files = discovery.discover_all();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("describe.toml"));
        assert_eq!(files[0].format, ConfigFormat::Toml);
        assert_eq!(files[0].scope, ConfigScope::Project);
    }

    #[test]
    #[serial]
    fn test_pinned_discovery_ignores_cwd_and_home() {
        let sandbox = TempDir::new().unwrap();
        let mtp_dir = sandbox.path().join(CONFIG_DIR_NAME);
        fs::create_dir(&mtp_dir).unwrap();
        fs::write(mtp_dir.join("describe.toml"), "version = \"1.0.0\"").unwrap();

        let original_dir = std::env::current_dir().unwrap();
        let original_home = std::env::var_os("HOME");
        std::env::set_current_dir(sandbox.path()).unwrap();
        std::env::set_var("HOME", sandbox.path());

        let pinned = FileDiscovery::with_directories(None, None).discover_all();
        let resolved = FileDiscovery::new().discover_all();

        std::env::set_current_dir(original_dir).unwrap();
        match original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }

        assert!(pinned.is_empty());
        let scopes: Vec<ConfigScope> = resolved.iter().map(|f| f.scope).collect();
        assert_eq!(scopes, vec![ConfigScope::Global, ConfigScope::Project]);
    }

    #[test]
    fn test_global_files_precede_project_files() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("describe.json"), "{}").unwrap();
        fs::write(global.path().join("describe.yaml"), "{}").unwrap();

        let discovery = FileDiscovery::with_directories(
            Some(project.path().to_path_buf()),
            Some(global.path().to_path_buf()),
        );
        let scopes: Vec<ConfigScope> = discovery.discover_all().iter().map(|f| f.scope).collect();
        assert_eq!(scopes, vec![ConfigScope::Global, ConfigScope::Project]);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent");
        let global = TempDir::new().unwrap();
        let discovery =
            FileDiscovery::with_directories(Some(missing), Some(global.path().to_path_buf()));
        assert!(discovery.discover_all().is_empty());
    }
}
