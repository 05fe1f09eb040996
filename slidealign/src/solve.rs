use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use slidealign::{CancelToken, OffsetSearch, ResultImageData, SearchConfig, io};
use tracing::info;

/// Printed result record; the composite itself only goes to `--output`
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub offset: i32,
    pub width: u32,
    pub height: u32,
    pub disorder: f32,
    pub candidates: usize,
}

impl From<&ResultImageData> for SolveReport {
    fn from(r: &ResultImageData) -> Self {
        Self {
            offset: r.best_offset,
            width: r.width(),
            height: r.height(),
            disorder: r.best_disorder,
            candidates: r.candidates_evaluated,
        }
    }
}

pub struct SolveArgs {
    pub foreground: PathBuf,
    pub background: Option<PathBuf>,
    pub offset: Option<f32>,
    pub output: Option<PathBuf>,
    pub json: bool,
}

pub fn solve(args: SolveArgs, config: SearchConfig) -> Result<()> {
    let assets = io::load_assets(&args.foreground, args.background.as_ref())
        .context("Failed to load captcha layers")?;

    let search = OffsetSearch::with_config(config)?;
    let result = search
        .find_best_alignment(&assets, args.offset, &CancelToken::new())
        .context("Offset search failed")?;

    if let Some(path) = &args.output {
        write_composite(&result, path)?;
    }

    let report = SolveReport::from(&result);
    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "offset={} width={} height={}",
            report.offset, report.width, report.height
        );
    }
    Ok(())
}

fn write_composite(result: &ResultImageData, path: &Path) -> Result<()> {
    io::write_png_file(&result.pixels, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote composite");
    Ok(())
}
