//! CLI parsing tests.

use clap::Parser;

use super::{Cli, CliCommand};

#[test]
fn parses_resolve() {
    let cli = Cli::try_parse_from(["dlr", "resolve"]).unwrap();
    assert!(matches!(cli.command, CliCommand::Resolve));
}

#[test]
fn parses_watch_with_interval() {
    let cli = Cli::try_parse_from(["dlr", "watch", "--interval", "60"]).unwrap();
    match cli.command {
        CliCommand::Watch { interval } => assert_eq!(interval, Some(60)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn watch_interval_is_optional() {
    let cli = Cli::try_parse_from(["dlr", "watch"]).unwrap();
    match cli.command {
        CliCommand::Watch { interval } => assert_eq!(interval, None),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_candidates_and_release() {
    assert!(matches!(
        Cli::try_parse_from(["dlr", "candidates"]).unwrap().command,
        CliCommand::Candidates
    ));
    assert!(matches!(
        Cli::try_parse_from(["dlr", "release"]).unwrap().command,
        CliCommand::Release
    ));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["dlr", "frobnicate"]).is_err());
    assert!(Cli::try_parse_from(["dlr"]).is_err());
}
