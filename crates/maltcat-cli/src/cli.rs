//! CLI argument parsing using clap.

use clap::Parser;
use maltcat_core::HelperConfig;
use maltcat_core::config::DEFAULT_ENTRY_SUFFIX;
use maltcat_core::config::DEFAULT_RUNTIME_HOME_VAR;
use std::path::PathBuf;

/// Archive read when none is given on the command line.
pub const DEFAULT_ARCHIVE: &str = "Sample/Maltego.mtgl";

/// Extracted graph inspected when no root is given.
pub const DEFAULT_GRAPH_ROOT: &str = "Sample/Graphs/Graph1";

#[cfg(windows)]
const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: char = ':';

#[derive(Parser)]
#[command(name = "maltcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Maltego graph archive (.mtgl)
    #[arg(value_name = "ARCHIVE", default_value = DEFAULT_ARCHIVE)]
    pub archive: PathBuf,

    /// Extracted graph directory holding the index subdirectories
    #[arg(
        long,
        value_name = "DIR",
        env = "MALTCAT_GRAPH_ROOT",
        default_value = DEFAULT_GRAPH_ROOT
    )]
    pub graph_root: PathBuf,

    /// Suffix of entity definition entries inside the archive
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_ENTRY_SUFFIX)]
    pub entry_suffix: String,

    #[command(flatten)]
    pub helper: HelperArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct HelperArgs {
    /// Helper program that dumps an index directory (falls back to a file
    /// listing when absent)
    #[arg(long, value_name = "PROGRAM", env = "MALTCAT_HELPER")]
    pub helper: Option<PathBuf>,

    /// Argument passed to the helper before the directory (repeatable)
    #[arg(long = "helper-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub helper_args: Vec<String>,

    /// Helper classpath entry (repeatable, or a path list)
    #[arg(
        long,
        value_name = "PATH",
        env = "MALTCAT_CLASSPATH",
        value_delimiter = PATH_LIST_SEPARATOR
    )]
    pub classpath: Vec<PathBuf>,

    /// Runtime installation exported to the helper
    #[arg(long, value_name = "DIR", env = "MALTCAT_RUNTIME_HOME")]
    pub runtime_home: Option<PathBuf>,

    /// Environment variable receiving the runtime home
    #[arg(long, value_name = "NAME", default_value = DEFAULT_RUNTIME_HOME_VAR)]
    pub runtime_home_var: String,

    /// Working directory for the helper
    #[arg(long, value_name = "DIR")]
    pub helper_workdir: Option<PathBuf>,
}

impl HelperArgs {
    /// Builds the helper configuration, `None` when no helper was given.
    pub fn to_config(&self) -> Option<HelperConfig> {
        let program = self.helper.as_ref()?;

        Some(HelperConfig {
            args: self.helper_args.clone(),
            classpath: self.classpath.clone(),
            runtime_home: self.runtime_home.clone(),
            runtime_home_var: self.runtime_home_var.clone(),
            working_dir: self.helper_workdir.clone(),
            ..HelperConfig::new(program)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["maltcat"]).unwrap();
        assert_eq!(cli.archive, PathBuf::from(DEFAULT_ARCHIVE));
        assert_eq!(cli.entry_suffix, ".entity");
        assert_eq!(cli.helper.runtime_home_var, "JAVA_HOME");
    }

    #[test]
    fn test_helper_config_from_args() {
        let cli = Cli::try_parse_from([
            "maltcat",
            "graph.mtgl",
            "--helper",
            "/usr/bin/java",
            "--classpath",
            "lucene-core.jar",
            "--classpath",
            "lucene-backward-codecs.jar",
            "--helper-arg",
            "LuceneExtractor",
            "--runtime-home",
            "/opt/jdk",
            "--helper-workdir",
            "/tmp",
        ])
        .unwrap();

        let config = cli.helper.to_config().unwrap();
        assert_eq!(config.program, PathBuf::from("/usr/bin/java"));
        assert_eq!(config.classpath.len(), 2);
        assert_eq!(config.args, ["LuceneExtractor".to_string()]);
        assert_eq!(config.runtime_home, Some(PathBuf::from("/opt/jdk")));
        assert_eq!(config.runtime_home_var, "JAVA_HOME");
        assert_eq!(config.working_dir, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["maltcat", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_helper_arg_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["maltcat", "--helper", "sh", "--helper-arg", "-c"]).unwrap();
        assert_eq!(cli.helper.helper_args, ["-c".to_string()]);
    }
}
