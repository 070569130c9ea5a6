//! thinkview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// thinkview - watch an assistant's reasoning stream in the terminal
#[derive(Parser, Debug)]
#[command(name = "thinkview")]
#[command(version)]
#[command(about = "TUI viewer for streamed assistant reasoning snapshots (JSONL)")]
pub struct Args {
    /// Path to JSONL snapshot file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Play the file back one snapshot per tick
    #[arg(short, long)]
    pub replay: bool,

    /// Tick interval in milliseconds (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,

    /// Hide the answer text below the reasoning panel
    #[arg(long)]
    pub no_answer: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = thinkview::config::load_config_with_precedence(args.config.clone())?;
        let merged = thinkview::config::merge_config(config_file);
        let with_env = thinkview::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let replay_override = args.replay.then_some(true);
        let show_answer_override = args.no_answer.then_some(false);

        thinkview::config::apply_cli_overrides(
            with_env,
            replay_override,
            args.tick_ms,
            show_answer_override,
        )
    };

    thinkview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        file = ?args.file,
        "Configuration loaded and resolved"
    );

    let input_source = thinkview::source::detect_input_source(args.file.clone(), config.replay)?;

    let cli_args = thinkview::view::CliArgs::new(config.tick_ms, config.show_answer, args.no_color);

    thinkview::view::run_with_source(input_source, cli_args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["thinkview", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["thinkview", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["thinkview"]);
        assert_eq!(args.file, None);
        assert!(!args.replay);
        assert_eq!(args.tick_ms, None);
        assert!(!args.no_answer);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["thinkview", "stream.jsonl"]);
        assert_eq!(args.file, Some(PathBuf::from("stream.jsonl")));
    }

    #[test]
    fn test_replay_flag_short_and_long() {
        assert!(Args::parse_from(["thinkview", "-r", "f.jsonl"]).replay);
        assert!(Args::parse_from(["thinkview", "--replay", "f.jsonl"]).replay);
    }

    #[test]
    fn test_tick_ms_parses() {
        let args = Args::parse_from(["thinkview", "--tick-ms", "250"]);
        assert_eq!(args.tick_ms, Some(250));
    }

    #[test]
    fn test_tick_ms_rejects_zero() {
        let err = Args::try_parse_from(["thinkview", "--tick-ms", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_color_and_no_answer_flags() {
        let args = Args::parse_from(["thinkview", "--no-color", "--no-answer"]);
        assert!(args.no_color);
        assert!(args.no_answer);
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["thinkview", "--config", "/tmp/thinkview.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/thinkview.toml")));
    }
}
