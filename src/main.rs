//! Main entry point for the `collatab` CLI application.
//!
//! `collatab` reads the result of a text collation (witnesses plus alignment
//! table, as JSON) and renders it as colored tables or delimited text.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Installs the `tracing` subscriber
//! - Loads the collation document via [`input::load`]
//! - Renders the requested views, in parallel when there are several
//! - Writes each view to stdout, a file or an output directory
//!
//! # Flags of Interest
//! - `--view vertical|horizontal|alignment|csv|tsv`: views to render
//! - `--base SIGIL`: base witness of the horizontal view
//! - `--sort none|agreement|numeric`: order horizontal rows by disagreement
//! - `--markup html|terminal`: table markup

use anyhow::{Context, Result, bail};
use clap::Parser;
use collatab::metrics::{self, ProfileData};
use collatab::output::{self, View};
use collatab::{Args, Collation, input, time_phase};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sets up logging to stderr; `--verbose` forces debug level.
fn init_tracing(args: &Args) {
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders every requested view. Views share the collation read-only.
fn render_views(collation: &Collation, args: &Args) -> Result<Vec<(View, String)>> {
    let markup = args.markup();
    let horizontal = args.horizontal_options(collation.first_sigil().unwrap_or_default());

    args.view
        .par_iter()
        .map(|view| {
            output::render_view(
                *view,
                &collation.table,
                &collation.witnesses,
                &horizontal,
                markup.as_ref(),
            )
            .map(|text| (*view, text))
            .with_context(|| format!("Failed to render {} view", view.as_str()))
        })
        .collect()
}

/// Writes rendered views to an output directory, a single file or stdout.
/// Returns the path written to, if any.
fn write_results(rendered: &[(View, String)], args: &Args) -> Result<Option<std::path::PathBuf>> {
    let markup = args.markup();

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;
        let mut last = None;
        for (view, text) in rendered {
            let path = dir.join(format!("{}.{}", view.as_str(), view.extension(markup.as_ref())));
            write_file(&path, text)?;
            last = Some(path);
        }
        return Ok(last);
    }

    if let Some(path) = &args.output {
        if rendered.len() != 1 {
            bail!("--output takes a single view; use --output-dir for several");
        }
        write_file(path, &rendered[0].1)?;
        return Ok(Some(path.clone()));
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (idx, (_, text)) in rendered.iter().enumerate() {
        if idx > 0 {
            writeln!(handle)?;
        }
        handle.write_all(text.as_bytes())?;
    }
    handle.flush()?;
    Ok(None)
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write '{}'", path.display()))?;
    info!(path = %path.display(), "output written");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let mut profile = ProfileData::new();

    let (collation, timing) = time_phase!("Load", { input::load(&args.input) });
    let collation = collation?;
    profile.add_phase(timing);

    let (rendered, timing) = time_phase!("Render", { render_views(&collation, &args) });
    let rendered = rendered?;
    profile.add_phase(timing);

    let (written, timing) = time_phase!("Write", { write_results(&rendered, &args) });
    let written = written?;
    profile.add_phase(timing);

    if args.profile {
        profile.add_metadata("witnesses", &collation.witnesses.len().to_string());
        profile.add_metadata("columns", &collation.table.columns.len().to_string());
        let views: Vec<&str> = args.view.iter().map(View::as_str).collect();
        profile.add_metadata("views", &views.join(","));

        metrics::print_profile_summary(&profile);
        if let Some(path) = written {
            let stats = metrics::save_stats_json(&path, &profile)
                .context("Failed to save profiling stats")?;
            eprintln!("Performance stats saved to: {}", stats.display());
        }
    }

    Ok(())
}
