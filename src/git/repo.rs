use crate::error::{GitcalError, Result};
use crate::model::CommitEvent;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Yields the commit events reachable from a repository's HEAD.
pub trait CommitSource {
    fn commit_events(&self, path: &Path) -> Result<Vec<CommitEvent>>;
}

/// History source backed by on-disk repositories.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHistory {
    pub progress: bool,
}

impl GitHistory {
    pub fn new(progress: bool) -> Self {
        Self { progress }
    }
}

impl CommitSource for GitHistory {
    fn commit_events(&self, path: &Path) -> Result<Vec<CommitEvent>> {
        GitRepo::open(path)?.collect_events(self.progress)
    }
}

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk every commit reachable from HEAD once, in no particular order.
    pub fn collect_events(&self, progress: bool) -> Result<Vec<CommitEvent>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut events = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = vec![head_commit.id];

        let pb = if progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {pos}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {}", self.path.display()));

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let author = commit.author()?;
            let time = author.time()?;

            events.push(CommitEvent {
                author_email: author.email.to_string(),
                authored_at: to_datetime(time.seconds, time.offset)?,
            });

            stack.extend(commit.parent_ids().map(|id| -> ObjectId { id.into() }));
            pb.inc(1);
        }

        pb.finish_and_clear();
        tracing::debug!(
            repo = %self.path.display(),
            commits = events.len(),
            "history walked"
        );
        Ok(events)
    }
}

fn to_datetime(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let zone = FixedOffset::east_opt(offset)
        .ok_or_else(|| GitcalError::InvalidDate(format!("Invalid UTC offset: {offset}")))?;
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| GitcalError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    Ok(utc.with_timezone(&zone))
}
