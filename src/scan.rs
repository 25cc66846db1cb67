use crate::config::Config;
use crate::error::Result;
use anyhow::Context;
use console::style;
use ignore::gitignore::Gitignore;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

/// Find repository roots under `root`.
///
/// Every directory is visited at most once. A directory holding `.git` is recorded and not
/// descended into; directories matched by `ignore` are skipped.
pub fn scan_repositories(root: &Path, ignore: &Gitignore) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(root)?;
    // Fail early on an unreadable root; nested failures only warn.
    fs::read_dir(&root)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Scanning directories...");

    let mut found = Vec::new();
    let mut worklist = vec![root];

    while let Some(dir) = worklist.pop() {
        pb.tick();
        if dir.join(GIT_DIR).is_dir() {
            found.push(dir);
            continue;
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .filter(|path| !ignore.matched(path, true).is_ignore())
            .collect();

        // Reverse so the stack pops children in name order.
        children.sort();
        children.reverse();
        worklist.extend(children);
    }

    pb.finish_and_clear();
    Ok(found)
}

/// `--add`: scan `directory` and register every repository found.
pub fn exec(config: &Config, directory: &Path) -> anyhow::Result<()> {
    let root = fs::canonicalize(directory)
        .with_context(|| format!("Failed to resolve {}", directory.display()))?;
    let matcher = config
        .ignore_matcher(&root)
        .context("Failed to compile ignore patterns")?;

    println!("{}", style("Directories found:").bold());
    let repositories = scan_repositories(&root, &matcher)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    for repo in &repositories {
        println!("{}", repo.display());
    }

    let added = config
        .registry()
        .merge(&repositories)
        .with_context(|| format!("Failed to update {}", config.registry_path.display()))?;

    println!(
        "{} ({} new)",
        style("Successfully added").green(),
        added
    );
    Ok(())
}
