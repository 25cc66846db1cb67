use crate::clock::WindowClock;
use crate::error::GitcalError;
use crate::git::CommitSource;
use crate::model::{BucketTable, CommitEvent};
use std::path::{Path, PathBuf};

/// A registered repository whose history could not be read.
#[derive(Debug)]
pub struct SkippedRepo {
    pub path: PathBuf,
    pub error: GitcalError,
}

#[derive(Debug)]
pub struct Aggregation {
    pub buckets: BucketTable,
    pub skipped: Vec<SkippedRepo>,
}

/// Count `author_email`'s commits per day offset across `repositories`.
///
/// A repository that fails to open or walk is recorded in `skipped` and the rest are still
/// counted.
pub fn aggregate<S, P>(
    source: &S,
    repositories: &[P],
    author_email: &str,
    clock: &WindowClock,
) -> Aggregation
where
    S: CommitSource + ?Sized,
    P: AsRef<Path>,
{
    let mut buckets = BucketTable::new();
    let mut skipped = Vec::new();

    for repo in repositories {
        let path = repo.as_ref();
        match source.commit_events(path) {
            Ok(events) => fill_buckets(&mut buckets, &events, author_email, clock),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping repository");
                skipped.push(SkippedRepo {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    Aggregation { buckets, skipped }
}

fn fill_buckets(
    buckets: &mut BucketTable,
    events: &[CommitEvent],
    author_email: &str,
    clock: &WindowClock,
) {
    for event in events {
        if event.author_email != author_email {
            continue;
        }
        if let Some(offset) = clock.day_offset(&event.authored_at) {
            buckets.record(offset);
        }
    }
}
