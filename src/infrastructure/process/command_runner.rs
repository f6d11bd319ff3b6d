use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors raised while launching an external command.
///
/// A command that launches but exits non-zero is not an error at this level;
/// callers inspect the returned [`ExitInfo`] instead.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command could not be spawned at all (missing executable,
    /// inaccessible working directory, ...)
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Exit information for a completed external command.
#[derive(Debug, Clone, Copy)]
pub struct ExitInfo {
    /// Exit code of the process; `None` when it was terminated by a signal
    pub code: Option<i32>,
}

impl ExitInfo {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Narrow capability for running an external command in a given directory.
///
/// Update procedures are expressed purely in terms of this trait so they can
/// be exercised without the real VCS binaries installed.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, with the child's working directory set to
    /// `cwd`, and wait for it to finish.
    async fn run(&self, program: &str, args: &[&str], cwd: &Path)
        -> Result<ExitInfo, CommandError>;
}

/// [`CommandRunner`] backed by real child processes.
///
/// The working directory is scoped to the spawned child; the tool's own
/// current directory is never changed, so a failing update cannot leak a
/// directory change into the rest of the run.
#[derive(Debug, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    /// Create a new process-backed command runner.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<ExitInfo, CommandError> {
        debug!(program, ?args, cwd = %cwd.display(), "running external command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            debug!(
                program,
                code = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "external command exited non-zero"
            );
        }

        Ok(ExitInfo {
            code: output.status.code(),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted stand-in for [`CommandRunner`] used across the crate's tests.

    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// One invocation observed by the scripted runner.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub program: String,
        pub args: Vec<String>,
        pub cwd: PathBuf,
    }

    impl RecordedCall {
        /// The invocation rendered as a single command line.
        pub fn command_line(&self) -> String {
            if self.args.is_empty() {
                self.program.clone()
            } else {
                format!("{} {}", self.program, self.args.join(" "))
            }
        }
    }

    struct FailRule {
        dir_name: Option<String>,
        command_prefix: String,
        exit_code: i32,
    }

    /// Records every invocation and answers with scripted exit codes.
    #[derive(Default)]
    pub struct ScriptedRunner {
        calls: Mutex<Vec<RecordedCall>>,
        rules: Mutex<Vec<FailRule>>,
    }

    impl ScriptedRunner {
        /// Runner where every command exits zero.
        pub fn succeeding() -> Self {
            Self::default()
        }

        /// Make commands starting with `command_prefix` exit with
        /// `exit_code`; when `dir_name` is given the rule only applies to
        /// invocations running in a directory of that name.
        pub fn fail_on(&self, dir_name: Option<&str>, command_prefix: &str, exit_code: i32) {
            self.rules.lock().unwrap().push(FailRule {
                dir_name: dir_name.map(str::to_string),
                command_prefix: command_prefix.to_string(),
                exit_code,
            });
        }

        /// Every recorded invocation, in order.
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Command lines of the invocations that ran in a directory named
        /// `dir_name`, in order.
        pub fn command_lines_in(&self, dir_name: &str) -> Vec<String> {
            self.calls()
                .iter()
                .filter(|call| {
                    call.cwd.file_name().and_then(|n| n.to_str()) == Some(dir_name)
                })
                .map(RecordedCall::command_line)
                .collect()
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(
            &self,
            program: &str,
            args: &[&str],
            cwd: &Path,
        ) -> Result<ExitInfo, CommandError> {
            let call = RecordedCall {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                cwd: cwd.to_path_buf(),
            };
            let command_line = call.command_line();
            self.calls.lock().unwrap().push(call);

            let dir_name = cwd.file_name().and_then(|n| n.to_str());
            for rule in self.rules.lock().unwrap().iter() {
                let dir_matches = match &rule.dir_name {
                    Some(name) => dir_name == Some(name.as_str()),
                    None => true,
                };
                if dir_matches && command_line.starts_with(&rule.command_prefix) {
                    return Ok(ExitInfo {
                        code: Some(rule.exit_code),
                    });
                }
            }

            Ok(ExitInfo { code: Some(0) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_reports_exit_status() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new();

        let ok = runner.run("true", &[], temp_dir.path()).await.unwrap();
        assert!(ok.success());
        assert_eq!(ok.code, Some(0));

        let failed = runner.run("false", &[], temp_dir.path()).await.unwrap();
        assert!(!failed.success());
    }

    #[tokio::test]
    async fn test_spawn_failure_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new();

        let result = runner
            .run("repoup-no-such-binary", &[], temp_dir.path())
            .await;
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }

    #[tokio::test]
    async fn test_child_runs_in_requested_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("present"), "").unwrap();
        let runner = ProcessCommandRunner::new();

        // `test -f` resolves the relative path against the child's cwd.
        let exit = runner
            .run("test", &["-f", "present"], temp_dir.path())
            .await
            .unwrap();
        assert!(exit.success());
    }
}
