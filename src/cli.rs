use crate::config::Config;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_EMAIL: &str = "your@email.com";

#[derive(Parser)]
#[command(name = "gitcal")]
#[command(about = "Calendar heatmap of your commits over the last six months")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_name = "DIRECTORY", help = "Scan a directory for git repositories and register them")]
    pub add: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_EMAIL, help = "Author email to count commits for")]
    pub email: String,

    #[arg(long, value_name = "FILE", help = "Repository list file (default: ~/.config/.gitcal)")]
    pub registry: Option<PathBuf>,

    #[arg(long = "ignore", value_name = "NAME", help = "Extra directory name to skip while scanning (repeatable)")]
    pub ignore: Vec<String>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let config = Config::resolve(self.registry, &self.ignore)
            .context("Failed to resolve configuration")?;

        if let Some(directory) = self.add {
            return crate::scan::exec(&config, &directory);
        }

        let color = !self.no_color && console::colors_enabled();
        crate::stats::exec(&config, &self.email, color)
    }
}
