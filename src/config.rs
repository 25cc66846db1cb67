use crate::error::{GitcalError, Result};
use crate::registry::Registry;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

pub const DEFAULT_IGNORE: &[&str] = &["node_modules"];

/// Registry file name, relative to the home directory.
const REGISTRY_FILE: &str = ".config/.gitcal";

#[derive(Debug, Clone)]
pub struct Config {
    pub registry_path: PathBuf,
    pub ignore_names: Vec<String>,
}

impl Config {
    /// Build from CLI overrides, falling back to `~/.config/.gitcal`.
    pub fn resolve(registry: Option<PathBuf>, extra_ignore: &[String]) -> Result<Self> {
        let registry_path = match registry {
            Some(path) => path,
            None => default_registry_path()?,
        };

        let mut ignore_names: Vec<String> = DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect();
        for name in extra_ignore {
            if !ignore_names.contains(name) {
                ignore_names.push(name.clone());
            }
        }

        Ok(Self {
            registry_path,
            ignore_names,
        })
    }

    pub fn registry(&self) -> Registry {
        Registry::new(&self.registry_path)
    }

    /// Compile the ignore names into a gitignore-style matcher rooted at `root`.
    pub fn ignore_matcher(&self, root: &Path) -> Result<Gitignore> {
        let mut builder = GitignoreBuilder::new(root);
        for name in &self.ignore_names {
            builder.add_line(None, name)?;
        }
        Ok(builder.build()?)
    }
}

fn default_registry_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(REGISTRY_FILE))
        .ok_or(GitcalError::HomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_registry_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/list")), &[]).unwrap();
        assert_eq!(config.registry_path, PathBuf::from("/tmp/list"));
        assert_eq!(config.ignore_names, vec!["node_modules".to_string()]);
    }

    #[test]
    fn extra_ignore_names_are_merged_once() {
        let extra = vec!["target".to_string(), "node_modules".to_string()];
        let config = Config::resolve(Some(PathBuf::from("/tmp/list")), &extra).unwrap();
        assert_eq!(
            config.ignore_names,
            vec!["node_modules".to_string(), "target".to_string()]
        );
    }

    #[test]
    fn matcher_flags_ignored_directories() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/list")), &["vendor*".to_string()]).unwrap();
        let root = Path::new("/work");
        let matcher = config.ignore_matcher(root).unwrap();
        assert!(matcher.matched(root.join("app/node_modules"), true).is_ignore());
        assert!(matcher.matched(root.join("vendored"), true).is_ignore());
        assert!(!matcher.matched(root.join("src"), true).is_ignore());
    }
}
