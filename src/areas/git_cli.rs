//! Repository capability backed by the `git` executable
//!
//! Each operation is one git subprocess run inside the repository directory.
//! Output is captured; a non-zero exit becomes an error carrying git's stderr.

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::SymRefName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

const GIT: &str = "git";

#[derive(Debug)]
pub struct GitCli {
    path: Box<Path>,
}

impl GitCli {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("failed to open repository at {:?}", path))?;
        let git_cli = Self {
            path: path.into_boxed_path(),
        };

        git_cli
            .run(&["rev-parse", "--git-dir"])
            .with_context(|| format!("not a git repository: {:?}", git_cli.path))?;

        Ok(git_cli)
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let command_line = format!("{} {}", GIT, args.join(" "));
        tracing::debug!(command = %command_line, path = ?self.path, "running git");

        let output = Command::new(GIT)
            .args(args)
            .current_dir(&self.path)
            .output()
            .with_context(|| format!("failed to spawn `{}`", command_line))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "`{}` failed ({}): {}",
                command_line,
                output.status,
                stderr.trim()
            );
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("`{}` printed invalid UTF-8", command_line))
    }
}

impl Repository for GitCli {
    fn current_ref(&self) -> anyhow::Result<SymRefName> {
        let name = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(SymRefName::new(name.trim().to_string()))
    }

    fn log(&self, revision: &Revision) -> anyhow::Result<History> {
        let stdout = self.run(&["log", "--first-parent", "--format=%H", revision.as_arg(), "--"])?;

        let commits = stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| ObjectId::try_parse(line.to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        History::from_newest_first(commits)
            .with_context(|| format!("history of {} is not linear", revision))
    }

    fn checkout(&mut self, revision: &Revision) -> anyhow::Result<()> {
        tracing::info!(%revision, "checking out");
        let mut args = vec!["checkout", "--force", "--quiet"];
        if revision.is_detached() {
            args.push("--detach");
        }
        args.extend([revision.as_arg(), "--"]);

        self.run(&args)?;
        Ok(())
    }
}
