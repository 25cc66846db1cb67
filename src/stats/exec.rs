use super::{aggregate, build_grid, HeatmapRenderer};
use crate::clock::WindowClock;
use crate::config::Config;
use crate::git::{CommitSource, GitHistory};
use anyhow::Context;
use console::style;

/// Default pipeline: read the registry, count `email`'s commits, print the calendar.
pub fn exec(config: &Config, email: &str, color: bool) -> anyhow::Result<()> {
    let source = GitHistory::new(console::user_attended_stderr());
    let out = stats_report(config, &source, email, &WindowClock::now(), color)?;
    print!("{out}");
    Ok(())
}

/// Everything `exec` prints, against an explicit history source and clock.
pub fn stats_report<S: CommitSource + ?Sized>(
    config: &Config,
    source: &S,
    email: &str,
    clock: &WindowClock,
    color: bool,
) -> anyhow::Result<String> {
    let registry = config.registry();
    let repositories = registry
        .load()
        .with_context(|| format!("Failed to read repository list {}", registry.path().display()))?;

    if repositories.is_empty() {
        tracing::warn!(
            registry = %registry.path().display(),
            "no repositories registered, run with --add <directory>"
        );
    }

    let aggregation = aggregate(source, &repositories, email, clock);
    let grid = build_grid(&aggregation.buckets);
    let mut out = HeatmapRenderer::new(clock).styled(color).render(&grid);

    if !aggregation.skipped.is_empty() {
        let note = format!(
            "{} of {} repositories skipped",
            aggregation.skipped.len(),
            repositories.len()
        );
        out.push_str(&format!("\n{}\n", style(note).yellow().force_styling(color)));
    }
    Ok(out)
}
