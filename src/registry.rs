use crate::error::{GitcalError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Newline-delimited, deduplicated list of repository roots.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registered repositories in file order. A missing file is an empty registry.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(GitcalError::Registry {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Append the paths not yet registered and rewrite the file. Returns how many were added.
    pub fn merge(&self, new_paths: &[PathBuf]) -> Result<usize> {
        let mut repos = self.load()?;
        let before = repos.len();
        for path in new_paths {
            if !repos.contains(path) {
                repos.push(path.clone());
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = repos
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.path, content)?;

        Ok(repos.len() - before)
    }
}
