//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args_is_interactive() {
    let cli = parse(&["bigg-fetch"]);
    assert!(cli.key.is_none());
    assert!(cli.model.is_none());
    assert!(cli.output_dir.is_none());
    assert!(!cli.list);
}

#[test]
fn cli_parse_key() {
    let cli = parse(&["bigg-fetch", "--key", "1"]);
    assert_eq!(cli.key.as_deref(), Some("1"));
}

#[test]
fn cli_parse_model_and_output_dir() {
    let cli = parse(&["bigg-fetch", "--model", "e_coli_core", "--output-dir", "/tmp/m"]);
    assert_eq!(cli.model.as_deref(), Some("e_coli_core"));
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("/tmp/m")));
}

#[test]
fn cli_parse_list() {
    assert!(parse(&["bigg-fetch", "--list"]).list);
}

#[test]
fn cli_key_conflicts_with_model() {
    assert!(Cli::try_parse_from(["bigg-fetch", "--key", "1", "--model", "x"]).is_err());
}

#[test]
fn cli_list_conflicts_with_key() {
    assert!(Cli::try_parse_from(["bigg-fetch", "--list", "--key", "1"]).is_err());
}

#[test]
fn cli_rejects_positional() {
    assert!(Cli::try_parse_from(["bigg-fetch", "1"]).is_err());
}
