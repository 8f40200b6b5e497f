//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler, builds the
//! move request, and runs discovery then execution. This is the only place that
//! decides the process exit status.

use anyhow::Result;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use fsmove::cli::{Args, Command};
use fsmove::config::{create_template_config, load_config};
use fsmove::output as out;
use fsmove::{LinePrompt, MoveError, RunOutcome, StdFs, default_config_path, execute, plan};

use crate::logging::init_tracing;

/// Exit status after Ctrl-C, following the shell convention of 128 + SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    // Config-file chores happen before logging init.
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }
    if args.init_config {
        let path = default_config_path()?;
        create_template_config(&path)?;
        out::print_success(&format!("A template fsmove config was written to: {}", path.display()));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = args.command.as_ref() else {
        out::print_error("No command given; run `fsmove --help` for usage.");
        return Ok(ExitCode::from(2));
    };

    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), cfg.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
    })?;

    // The handler drops the guard to flush the file appender before exiting.
    let guard_slot = Arc::new(Mutex::new(guard));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            out::print_warn("Received interrupt; stopping.");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        })?;
    }

    debug!(?args, ?cfg, "Starting fsmove");
    let code = run_command(command, &cfg);

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    Ok(code)
}

fn run_command(command: &Command, cfg: &fsmove::Config) -> ExitCode {
    let result = command.to_spec().and_then(|spec| {
        info!(
            source = %spec.source_root().display(),
            dest = %spec.destination_root().display(),
            ext = spec.extension(),
            dry_run = spec.dry_run(),
            date_mode = spec.date_mode(),
            "Planning"
        );
        let fs = StdFs;
        let planned = plan(&spec, &fs)?;
        let mut prompt = LinePrompt::stdio();
        execute(&spec, &planned, &fs, &mut prompt, cfg.error_policy)
    });

    match result {
        Ok(outcome) => {
            debug!(?outcome, "Run finished");
            if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                if let RunOutcome::Halted(summary) = &outcome {
                    let attempted = summary.results.len();
                    out::print_error(&format!("Stopped after the first failed move ({attempted} attempted)"));
                }
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &MoveError) {
    match e {
        MoveError::NotADirectory(path) => {
            error!(kind = e.kind(), path = %path.display(), "Source root is not a directory")
        }
        MoveError::Io { op, path, source, .. } => {
            error!(kind = e.kind(), op, path = %path.display(), error = %source, "I/O failure")
        }
        _ => error!(kind = e.kind(), error = %e, "Run failed"),
    }
    out::print_error(&e.to_string());
}

fn print_config_location() {
    if let Some(raw) = std::env::var_os(fsmove::config::CONFIG_ENV) {
        out::print_info(&format!(
            "Using {} (explicit):\n  {}",
            fsmove::config::CONFIG_ENV,
            raw.to_string_lossy()
        ));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default fsmove config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}
