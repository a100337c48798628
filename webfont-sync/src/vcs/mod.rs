//! Version-control operations on variant working copies.
//!
//! The production implementation shells out to `git`; the trait exists so
//! the sync workflow can be exercised against a recording stub.

mod error;

pub use error::VcsError;

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Committer identity used for generated commits.
const COMMIT_USER_NAME: &str = "Iosevka Webfonts Bot";
const COMMIT_USER_EMAIL: &str = "bot@iosevka-webfonts";

/// Version-control operations the sync workflow needs.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Clones `remote_url` into `dest`.
    async fn clone_repo(&self, remote_url: &str, dest: &Path) -> Result<(), VcsError>;

    /// Returns whether the working copy has staged or unstaged changes.
    async fn has_changes(&self, workdir: &Path) -> Result<bool, VcsError>;

    /// Stages all paths and commits them with `message`.
    async fn commit_all(&self, workdir: &Path, message: &str) -> Result<(), VcsError>;

    /// Pushes the current branch to its remote.
    async fn push(&self, workdir: &Path) -> Result<(), VcsError>;
}

/// [`VersionControl`] backed by the `git` binary.
#[derive(Debug, Default)]
pub struct GitCli;

#[async_trait]
impl VersionControl for GitCli {
    async fn clone_repo(&self, remote_url: &str, dest: &Path) -> Result<(), VcsError> {
        debug!(dest = %dest.display(), "Cloning repository");

        // Full history is never needed; the working copy only exists to
        // receive one commit.
        let target = dest.to_string_lossy();
        run_git(Path::new("."), &["clone", "--depth", "1", remote_url, &target]).await
    }

    async fn has_changes(&self, workdir: &Path) -> Result<bool, VcsError> {
        let stdout = run_git_capture(workdir, &["status", "--porcelain"]).await?;
        Ok(!stdout.trim().is_empty())
    }

    async fn commit_all(&self, workdir: &Path, message: &str) -> Result<(), VcsError> {
        debug!(workdir = %workdir.display(), "Committing all changes");

        run_git(workdir, &["config", "user.email", COMMIT_USER_EMAIL]).await?;
        run_git(workdir, &["config", "user.name", COMMIT_USER_NAME]).await?;
        run_git(workdir, &["add", "-A"]).await?;
        run_git(workdir, &["commit", "-m", message]).await
    }

    async fn push(&self, workdir: &Path) -> Result<(), VcsError> {
        debug!(workdir = %workdir.display(), "Pushing to remote");

        // Credentials are embedded in the remote URL set at clone time.
        run_git(workdir, &["push"]).await
    }
}

/// Runs a git command, discarding its output.
async fn run_git(workdir: &Path, args: &[&str]) -> Result<(), VcsError> {
    run_git_capture(workdir, args).await.map(|_| ())
}

/// Runs a git command and captures stdout.
async fn run_git_capture(workdir: &Path, args: &[&str]) -> Result<String, VcsError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| VcsError::Spawn {
            command: args.join(" "),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VcsError::CommandFailed {
            command: args.join(" "),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
