use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "slidealign",
    about = "Find the background shift that completes a slide captcha"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search (or replay) the best background offset for one captcha
    Solve {
        /// Foreground stencil PNG
        #[arg(long)]
        foreground: PathBuf,
        /// Background strip PNG
        #[arg(long)]
        background: Option<PathBuf>,
        /// Replay this internal offset instead of searching
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<f32>,
        /// Write the winning composite as PNG
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// TOML file with a [search] table
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        tuning: TuningArgs,
    },
}

/// Search tunables that override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct TuningArgs {
    /// Thumbnail height (canvas width)
    #[arg(long)]
    pub thumbnail_height: Option<u32>,
    /// Padding at both ends of the strip
    #[arg(long)]
    pub padding: Option<u32>,
    /// Red-channel threshold for dark pixels
    #[arg(long)]
    pub dark_threshold: Option<u32>,
    /// Smallest dark component kept as signal
    #[arg(long)]
    pub min_component_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_with_negative_offset() {
        let cli = Cli::try_parse_from([
            "slidealign",
            "solve",
            "--foreground",
            "fg.png",
            "--offset",
            "-12.5",
            "--padding",
            "4",
            "--json",
        ])
        .unwrap();
        let Command::Solve {
            foreground,
            background,
            offset,
            json,
            tuning,
            ..
        } = cli.command;
        assert_eq!(foreground, PathBuf::from("fg.png"));
        assert!(background.is_none());
        assert_eq!(offset, Some(-12.5));
        assert!(json);
        assert_eq!(tuning.padding, Some(4));
        assert_eq!(tuning.thumbnail_height, None);
    }

    #[test]
    fn test_foreground_is_required() {
        assert!(Cli::try_parse_from(["slidealign", "solve"]).is_err());
    }
}
