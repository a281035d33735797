//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "trace-widgets",
    version,
    about = "Mount chat widgets from trace files and replay pointer events against them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: <config dir>/trace-widgets/config.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mount the widget for a trace and print its HTML.
    Render(RenderArgs),

    /// Mount a trace, replay scripted events, and print emitted host events.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Trace JSON file: `{ "type": ..., "payload": ... }`.
    #[arg(value_name = "TRACE")]
    pub trace: PathBuf,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[arg(value_name = "TRACE")]
    pub trace: PathBuf,

    /// JSON array of events: `{ "kind": "drag_start", "target": "source-item-0", "x": 0 }`.
    #[arg(long, value_name = "PATH")]
    pub script: PathBuf,

    /// Print a terminal preview of a sortable list after the script.
    #[arg(long)]
    pub preview: bool,

    /// Preview width in columns.
    #[arg(long, default_value_t = 60)]
    pub width: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_parses_script_and_flags() {
        let cli = Cli::try_parse_from([
            "trace-widgets",
            "-vv",
            "play",
            "trace.json",
            "--script",
            "events.json",
            "--preview",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Play(args) => {
                assert_eq!(args.script, PathBuf::from("events.json"));
                assert!(args.preview);
                assert_eq!(args.width, 60);
            }
            Command::Render(_) => panic!("expected play"),
        }
    }

    #[test]
    fn play_requires_script() {
        assert!(Cli::try_parse_from(["trace-widgets", "play", "trace.json"]).is_err());
    }
}
