use clap::Parser;
use fsmove::cli::{Args, Command};
use fsmove::config::types::{Config, ErrorPolicy, LogLevel};
use std::path::{Path, PathBuf};

#[test]
fn mv_builds_flat_spec() {
    let args = Args::parse_from(["fsmove", "mv", "/in", "/out", "-t", ".jpg"]);
    let spec = args.command.unwrap().to_spec().unwrap();
    assert_eq!(spec.source_root(), Path::new("/in"));
    assert_eq!(spec.destination_root(), Path::new("/out"));
    assert_eq!(spec.extension(), ".jpg");
    assert!(!spec.dry_run());
    assert!(!spec.date_mode());
}

#[test]
fn mv_date_and_alias_select_date_mode() {
    for name in ["mv-date", "mv-year"] {
        let args = Args::parse_from(["fsmove", name, "/in", "/out", "--type", "mp4", "--dry"]);
        assert!(matches!(args.command, Some(Command::MvDate(_))));
        let spec = args.command.unwrap().to_spec().unwrap();
        assert!(spec.date_mode());
        assert!(spec.dry_run());
    }
}

#[test]
fn dry_run_alias_and_short_flag() {
    let a = Args::parse_from(["fsmove", "mv", "/in", "/out", "-t", "png", "-d"]);
    let b = Args::parse_from(["fsmove", "mv", "/in", "/out", "-t", "png", "--dry-run"]);
    assert!(a.command.unwrap().to_spec().unwrap().dry_run());
    assert!(b.command.unwrap().to_spec().unwrap().dry_run());
}

#[test]
fn type_is_required() {
    assert!(Args::try_parse_from(["fsmove", "mv", "/in", "/out"]).is_err());
}

#[test]
fn blank_type_is_rejected_by_spec_validation() {
    let args = Args::parse_from(["fsmove", "mv", "/in", "/out", "-t", "  "]);
    let err = args.command.unwrap().to_spec().unwrap_err();
    assert!(matches!(err, fsmove::MoveError::EmptyExtension));
}

#[test]
fn quoted_paths_are_trimmed() {
    let args = Args::parse_from(["fsmove", "mv", "'/in dir'", "\"/out\"", "-t", ".jpg"]);
    let spec = args.command.unwrap().to_spec().unwrap();
    assert_eq!(spec.source_root(), Path::new("/in dir"));
    assert_eq!(spec.destination_root(), Path::new("/out"));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["fsmove", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["fsmove", "mv", "/a", "/b", "-t", "x", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "fsmove",
        "--log-level",
        "info",
        "--log-file",
        "/tmp/fsmove.log",
        "--json",
        "--continue-on-error",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/fsmove.log")));
    assert!(cfg.json);
    assert_eq!(cfg.error_policy, ErrorPolicy::Continue);
}

#[test]
fn apply_overrides_keeps_config_values_for_unset_flags() {
    let args = Args::parse_from(["fsmove", "mv", "/a", "/b", "-t", "x"]);
    let mut cfg = Config {
        log_level: LogLevel::Quiet,
        error_policy: ErrorPolicy::Continue,
        ..Config::default()
    };
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(cfg.error_policy, ErrorPolicy::Continue);
}
