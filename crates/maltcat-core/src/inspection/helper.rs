//! External helper invocation and availability probing.

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use thiserror::Error;

use crate::HelperConfig;
use crate::inspection::DirectoryInspector;
use crate::inspection::InspectionResult;

/// Why the helper cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperUnavailable {
    /// No helper was configured.
    #[error("helper not configured")]
    NotConfigured,

    /// The helper program does not exist.
    #[error("helper program not found: {0}")]
    ProgramNotFound(PathBuf),

    /// A classpath entry does not exist.
    #[error("helper dependency not found: {0}")]
    ArtifactMissing(PathBuf),

    /// A classpath entry cannot be joined into a single classpath.
    #[error("invalid classpath entry: {0}")]
    InvalidClasspath(PathBuf),

    /// The runtime home directory does not exist.
    #[error("runtime home not found: {0}")]
    RuntimeHomeMissing(PathBuf),

    /// The working directory does not exist.
    #[error("helper working directory not found: {0}")]
    WorkingDirMissing(PathBuf),
}

impl HelperConfig {
    /// Checks that everything the helper needs is on disk.
    ///
    /// Returns the resolved program path on success.
    ///
    /// # Errors
    ///
    /// Returns the first missing piece: program, working directory, runtime
    /// home, or classpath entry. Relative runtime home and classpath entries
    /// are looked up under the working directory when one is set.
    pub fn probe(&self) -> Result<PathBuf, HelperUnavailable> {
        let program = resolve_program(&self.program)
            .ok_or_else(|| HelperUnavailable::ProgramNotFound(self.program.clone()))?;

        if let Some(dir) = &self.working_dir
            && !dir.is_dir()
        {
            return Err(HelperUnavailable::WorkingDirMissing(dir.clone()));
        }

        if let Some(home) = &self.runtime_home
            && !self.resolve(home).is_dir()
        {
            return Err(HelperUnavailable::RuntimeHomeMissing(home.clone()));
        }

        if let Some(missing) = self
            .classpath
            .iter()
            .find(|entry| !self.resolve(entry).exists())
        {
            return Err(HelperUnavailable::ArtifactMissing(missing.clone()));
        }

        if !self.classpath.is_empty() && self.joined_classpath().is_none() {
            let bad = self
                .classpath
                .iter()
                .find(|entry| std::env::join_paths([entry]).is_err())
                .unwrap_or(&self.classpath[0]);
            return Err(HelperUnavailable::InvalidClasspath(bad.clone()));
        }

        Ok(program)
    }
}

/// Resolves a program to an absolute path.
///
/// A program with a path component must exist as a file. A bare name is
/// searched on `PATH`.
fn resolve_program(program: &Path) -> Option<PathBuf> {
    if program.as_os_str().is_empty() {
        return None;
    }

    if program.is_absolute() || program.components().count() > 1 {
        return program
            .is_file()
            .then(|| std::path::absolute(program).ok())
            .flatten();
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        let suffix = std::env::consts::EXE_SUFFIX;
        if suffix.is_empty() {
            return None;
        }
        let mut with_suffix = candidate.into_os_string();
        with_suffix.push(suffix);
        let with_suffix = PathBuf::from(with_suffix);
        with_suffix.is_file().then_some(with_suffix)
    })
}

/// Inspector that runs the external helper on the directory.
///
/// Built only by [`select_inspector`](crate::inspection::select_inspector)
/// once the helper has been probed.
#[derive(Debug, Clone)]
pub struct HelperInspector {
    program: PathBuf,
    config: HelperConfig,
}

impl HelperInspector {
    pub(crate) fn new(program: PathBuf, config: HelperConfig) -> Self {
        Self { program, config }
    }

    fn command(&self, dir: &Path) -> Command {
        let mut command = Command::new(&self.program);

        if let Some(classpath) = self.config.joined_classpath() {
            command.arg("-cp").arg(classpath);
        }
        command.args(&self.config.args).arg(dir);

        if let Some(home) = &self.config.runtime_home {
            command.env(&self.config.runtime_home_var, self.config.resolve(home));
        }
        command.envs(&self.config.env);

        if let Some(working_dir) = &self.config.working_dir {
            command.current_dir(working_dir);
        }

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl DirectoryInspector for HelperInspector {
    fn inspect(&self, dir: &Path) -> InspectionResult {
        // No timeout: a helper that never exits blocks here.
        match self.command(dir).output() {
            Ok(output) if output.status.success() => InspectionResult::Succeeded {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            },
            Ok(output) => InspectionResult::Failed {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => InspectionResult::Exception {
                message: format!("failed to launch {}: {e}", self.program.display()),
            },
        }
    }

    fn describe(&self) -> String {
        format!("helper {}", self.program.display())
    }
}
