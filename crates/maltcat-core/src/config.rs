//! Configuration for catalog reading and helper-backed inspection.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

/// Default suffix of type-definition entries inside a graph archive.
pub const DEFAULT_ENTRY_SUFFIX: &str = ".entity";

/// Default name of the environment variable that points at the helper's
/// runtime installation.
pub const DEFAULT_RUNTIME_HOME_VAR: &str = "JAVA_HOME";

/// Settings for reading the entity catalog out of an archive.
///
/// # Examples
///
/// ```
/// use maltcat_core::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.entry_suffix, ".entity");
///
/// let custom = CatalogConfig {
///     entry_suffix: ".icon".to_string(),
/// };
/// assert!(custom.matches("Icons/Person.icon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Entry names ending with this suffix are parsed as type definitions.
    pub entry_suffix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            entry_suffix: DEFAULT_ENTRY_SUFFIX.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Returns `true` if the archive entry name denotes a type definition.
    #[must_use]
    pub fn matches(&self, entry_name: &str) -> bool {
        !entry_name.ends_with('/') && entry_name.ends_with(&self.entry_suffix)
    }
}

/// How to launch the external index helper.
///
/// The helper is invoked as
/// `<program> [-cp <classpath>] <args>... <directory>` with
/// `runtime_home_var=<runtime_home>` in its environment and `working_dir`
/// as its current directory. Relative classpath entries and runtime home
/// are taken from `working_dir` when it is set. Every path named here must
/// exist for the helper to be considered available; see
/// [`HelperConfig::probe`].
///
/// # Examples
///
/// ```
/// use maltcat_core::HelperConfig;
///
/// let config = HelperConfig::new("java")
///     .classpath("lib/lucene-core.jar")
///     .arg("LuceneExtractor")
///     .runtime_home("/opt/jdk");
///
/// assert_eq!(config.args, vec!["LuceneExtractor".to_string()]);
/// assert_eq!(config.runtime_home_var, "JAVA_HOME");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Program to run. A bare name is looked up on `PATH`.
    pub program: PathBuf,

    /// Arguments placed between the classpath and the directory.
    pub args: Vec<String>,

    /// Dependency set passed as `-cp`, joined with the platform separator.
    pub classpath: Vec<PathBuf>,

    /// Runtime installation exported through `runtime_home_var`.
    pub runtime_home: Option<PathBuf>,

    /// Environment variable that receives `runtime_home`.
    pub runtime_home_var: String,

    /// Additional environment variables for the helper.
    pub env: BTreeMap<String, String>,

    /// Working directory for the helper (inherited when `None`).
    pub working_dir: Option<PathBuf>,
}

impl HelperConfig {
    /// Creates a configuration that runs `program` with no extra arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            classpath: Vec::new(),
            runtime_home: None,
            runtime_home_var: DEFAULT_RUNTIME_HOME_VAR.to_string(),
            env: BTreeMap::new(),
            working_dir: None,
        }
    }

    /// Appends an argument placed before the inspected directory.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends a classpath entry.
    pub fn classpath(mut self, entry: impl Into<PathBuf>) -> Self {
        self.classpath.push(entry.into());
        self
    }

    /// Sets the runtime home directory.
    pub fn runtime_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.runtime_home = Some(home.into());
        self
    }

    /// Sets an extra environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Sets the helper's working directory.
    pub fn working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Resolves a configured path the way the helper will see it.
    ///
    /// Relative paths are taken from `working_dir` when one is set, and made
    /// absolute so they stay valid once the helper runs there.
    pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => {
                let joined = dir.join(path);
                std::path::absolute(&joined).unwrap_or(joined)
            }
            _ => path.to_path_buf(),
        }
    }

    /// Joins the resolved classpath with the platform separator.
    ///
    /// Returns `None` when the classpath is empty or an entry contains the
    /// separator itself.
    pub(crate) fn joined_classpath(&self) -> Option<OsString> {
        if self.classpath.is_empty() {
            return None;
        }
        std::env::join_paths(self.classpath.iter().map(|entry| self.resolve(entry))).ok()
    }
}
