//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually loading replays or charts.

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "rewind")]
struct Args {
    #[arg(short, long, default_value = "rewind.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct Inputs {
    #[arg(short, long)]
    replay: PathBuf,
    #[arg(long, default_value = "charts.json")]
    charts: PathBuf,
    #[arg(long, value_name = "MODS")]
    add_mods: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    Judge {
        #[command(flatten)]
        inputs: Inputs,
    },
    Score {
        #[command(flatten)]
        inputs: Inputs,
    },
    Fix {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        full_combo: bool,
    },
}

#[test]
fn test_parse_judge_defaults() {
    let args = Args::try_parse_from(["rewind", "judge", "--replay", "play.json"]).unwrap();
    assert_eq!(args.config, PathBuf::from("rewind.toml"));
    match args.command {
        Command::Judge { inputs } => {
            assert_eq!(inputs.replay, PathBuf::from("play.json"));
            assert_eq!(inputs.charts, PathBuf::from("charts.json"));
            assert!(inputs.add_mods.is_none());
            assert!(!inputs.json);
        }
        _ => panic!("Expected Judge command"),
    }
}

#[test]
fn test_parse_score_with_json() {
    let args = Args::try_parse_from([
        "rewind", "score", "-r", "play.json", "--charts", "db.json", "--json",
    ])
    .unwrap();
    match args.command {
        Command::Score { inputs } => {
            assert_eq!(inputs.charts, PathBuf::from("db.json"));
            assert!(inputs.json);
        }
        _ => panic!("Expected Score command"),
    }
}

#[test]
fn test_parse_fix_defaults() {
    let args = Args::try_parse_from(["rewind", "fix", "--replay", "play.json"]).unwrap();
    match args.command {
        Command::Fix {
            output,
            seed,
            full_combo,
            ..
        } => {
            assert!(output.is_none());
            assert!(seed.is_none());
            assert!(!full_combo);
        }
        _ => panic!("Expected Fix command"),
    }
}

#[test]
fn test_parse_fix_all_options() {
    let args = Args::try_parse_from([
        "rewind",
        "fix",
        "--replay",
        "play.json",
        "-o",
        "out.json",
        "--seed",
        "1234",
        "--add-mods",
        "HD,DT",
        "--full-combo",
    ])
    .unwrap();
    match args.command {
        Command::Fix {
            inputs,
            output,
            seed,
            full_combo,
        } => {
            assert_eq!(output, Some(PathBuf::from("out.json")));
            assert_eq!(seed, Some(1234));
            assert_eq!(inputs.add_mods, Some("HD,DT".to_string()));
            assert!(full_combo);
        }
        _ => panic!("Expected Fix command"),
    }
}

#[test]
fn test_parse_global_config() {
    let args =
        Args::try_parse_from(["rewind", "--config", "my.toml", "judge", "-r", "a.json"]).unwrap();
    assert_eq!(args.config, PathBuf::from("my.toml"));
}

#[test]
fn test_replay_is_required() {
    assert!(Args::try_parse_from(["rewind", "fix"]).is_err());
}

#[test]
fn test_negative_seed_fails() {
    let result = Args::try_parse_from(["rewind", "fix", "-r", "a.json", "--seed", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_command_fails() {
    assert!(Args::try_parse_from(["rewind"]).is_err());
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["rewind", "invalid-command"]);
    assert!(result.is_err());
}
