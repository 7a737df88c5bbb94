#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("arke").chain(args.iter().copied())).unwrap()
}

fn config(text: &str) -> Config {
    Config::parse(text, Path::new("arke.toml")).unwrap()
}

fn zone_args(args: &[&str]) -> ZoneArgs {
    match parse(args).command {
        Command::Check(check) => check.zone,
        Command::Format(format) => format.zone,
        _ => panic!("not a zone command"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["tokens", "db.example", "-v", "-C", "custom.toml"]);
    assert!(cli.verbose);
    assert_eq!(cli.config.as_deref(), Some(Path::new("custom.toml")));
}

#[test]
fn check_requires_a_file() {
    assert!(Cli::try_parse_from(["arke", "check"]).is_err());
}

#[test]
fn hash_requires_a_name() {
    assert!(Cli::try_parse_from(["arke", "hash"]).is_err());
}

#[test]
fn format_output_flag() {
    match parse(&["format", "db.example", "-o", "json"]).command {
        Command::Format(args) => assert_eq!(args.output, Some(OutputFormat::Json)),
        _ => panic!("expected format"),
    }
}

#[test]
fn flags_override_config() {
    let args = zone_args(&["check", "db", "--origin", "example.net", "--class", "CH"]);
    let settings = args
        .settings(&config("[zone]\norigin = \"example.com.\"\nclass = \"HS\"\n"))
        .unwrap();
    assert_eq!(settings.origin, Domain::new("example.net", None));
    assert_eq!(settings.class, RrClass::CH);
}

#[test]
fn config_fills_missing_flags() {
    let args = zone_args(&["format", "db"]);
    let settings = args
        .settings(&config(
            "[zone]\norigin = \"example.com.\"\ndefault_ttl = 600\n",
        ))
        .unwrap();
    assert_eq!(settings.origin, Domain::new("example.com", None));
    assert_eq!(settings.class, RrClass::IN);
    assert_eq!(settings.default_ttl, Some(600));
}

#[test]
fn missing_origin_is_usage_error() {
    let args = zone_args(&["check", "db"]);
    let err = args.settings(&Config::default()).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
}

#[test]
fn invalid_class_flag_is_record_error() {
    let args = zone_args(&["check", "db", "--origin", "example.com", "--class", "XX"]);
    let err = args.settings(&Config::default()).unwrap_err();
    assert!(matches!(err, Error::Record(_)));
}

#[test]
fn no_color_wins_over_color_and_config() {
    let cli = parse(&["check", "db", "--color", "always", "--no-color"]);
    let Command::Check(args) = cli.command else {
        panic!("expected check");
    };
    assert_eq!(args.color_mode(&config("[output]\ncolor = \"always\"\n")), ColorMode::Never);
}

#[test]
fn color_falls_back_to_config() {
    let cli = parse(&["check", "db"]);
    let Command::Check(args) = cli.command else {
        panic!("expected check");
    };
    assert_eq!(args.color_mode(&config("[output]\ncolor = \"never\"\n")), ColorMode::Never);
    assert_eq!(args.color_mode(&Config::default()), ColorMode::Auto);
}
