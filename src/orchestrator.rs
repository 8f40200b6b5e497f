//! Move orchestration.
//!
//! Runs a `MovePlan` through the confirmation gates, in order:
//!  1) empty plan: report and stop, touching nothing
//!  2) dry run: report planned moves (and, in flat mode, would-be overwrites), then stop
//!  3) date mode only: show the plan and ask whether to proceed
//!  4) missing destination directories: ask, then create; a decline aborts before any move
//!  5) per file: ask before overwriting an existing destination; a decline skips that file
//!  6) move; a failure halts the run unless the policy says continue
//!
//! Nothing here exits the process. The caller turns the returned outcome into a status.

use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::ErrorPolicy;
use crate::errors::MoveError;
use crate::fs_ops::FileSystem;
use crate::output as out;
use crate::plan::{MoveOutcome, MovePlan, MoveSpec, PlannedMove, SkipReason};
use crate::prompt::Prompt;

/// How a run ended. Declines and empty plans are normal endings, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NothingToDo,
    DryRun,
    Declined,
    /// Every planned move was attempted.
    Completed(RunSummary),
    /// Stopped at the first failed move; later entries were not attempted.
    Halted(RunSummary),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            RunOutcome::NothingToDo | RunOutcome::DryRun | RunOutcome::Declined => true,
            RunOutcome::Completed(summary) => summary.failed() == 0,
            RunOutcome::Halted(_) => false,
        }
    }
}

/// Per-file outcomes in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub results: Vec<(PlannedMove, MoveOutcome)>,
}

impl RunSummary {
    fn record(&mut self, planned: &PlannedMove, outcome: MoveOutcome) {
        self.results.push((planned.clone(), outcome));
    }

    fn count(&self, pred: impl Fn(&MoveOutcome) -> bool) -> usize {
        self.results.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Moved))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Failed(_)))
    }
}

/// Execute `plan` for `spec`. Errors are setup failures (stat, listing, directory
/// creation, unreadable operator input); per-file move failures are outcomes.
pub fn execute<F, P>(
    spec: &MoveSpec,
    plan: &MovePlan,
    fs: &F,
    prompt: &mut P,
    policy: ErrorPolicy,
) -> Result<RunOutcome, MoveError>
where
    F: FileSystem + ?Sized,
    P: Prompt + ?Sized,
{
    if plan.is_empty() {
        out::print_info(&format!(
            "No files found in {} for type {}",
            spec.source_root().display(),
            spec.extension()
        ));
        return Ok(RunOutcome::NothingToDo);
    }

    if spec.dry_run() {
        report_dry_run(spec, plan, fs)?;
        return Ok(RunOutcome::DryRun);
    }

    if spec.date_mode() {
        print_plan(plan, "will");
        if !prompt.confirm("Do you want to proceed?")? {
            out::print_info("Aborting");
            return Ok(RunOutcome::Declined);
        }
    }

    let dirs = if spec.date_mode() {
        plan.destination_dirs()
    } else {
        vec![spec.destination_root()]
    };
    if !ensure_destination_dirs(&dirs, fs, prompt)? {
        out::print_info("Aborting");
        return Ok(RunOutcome::Declined);
    }

    let mut summary = RunSummary::default();
    for planned in plan {
        match move_one(planned, fs, prompt) {
            Ok(outcome) => summary.record(planned, outcome),
            Err(e @ MoveError::Prompt(_)) => return Err(e),
            Err(e) => {
                error!(kind = e.kind(), src = %planned.source.display(), dest = %planned.destination.display(), error = %e, "Move failed");
                out::print_error(&format!(
                    "Could not move {} to {}: {e}",
                    planned.source.display(),
                    planned.destination.display()
                ));
                summary.record(planned, MoveOutcome::Failed(e.to_string()));
                if policy == ErrorPolicy::Halt {
                    let remaining = plan.len() - summary.results.len();
                    warn!(remaining, "Halting after failed move");
                    return Ok(RunOutcome::Halted(summary));
                }
            }
        }
    }

    let msg = format!(
        "Done: {} moved, {} skipped, {} failed",
        summary.moved(),
        summary.skipped(),
        summary.failed()
    );
    if summary.failed() == 0 {
        out::print_success(&msg);
    } else {
        out::print_warn(&msg);
    }
    info!(moved = summary.moved(), skipped = summary.skipped(), failed = summary.failed(), "Run complete");
    Ok(RunOutcome::Completed(summary))
}

fn print_plan(plan: &MovePlan, verb: &str) {
    out::print_rule();
    out::print_user(&format!("Here are the files that {verb} be moved:"));
    for planned in plan {
        out::print_user(&planned.to_string());
    }
    out::print_rule();
}

/// Reporting only: reads are allowed, mutations are not.
fn report_dry_run<F: FileSystem + ?Sized>(spec: &MoveSpec, plan: &MovePlan, fs: &F) -> Result<(), MoveError> {
    print_plan(plan, "would");
    out::print_info("This is a dry run, nothing will be changed in the filesystem");
    if spec.date_mode() {
        return Ok(());
    }

    let dest_root = spec.destination_root();
    if !fs.exists(dest_root)? {
        out::print_info(&format!(
            "Destination folder {} does not exist, it would be created if you want to proceed",
            dest_root.display()
        ));
        return Ok(());
    }

    let existing = fs.list_dir(dest_root)?;
    let overwrites: Vec<&PlannedMove> = plan
        .iter()
        .filter(|m| m.destination.file_name().is_some_and(|n| existing.iter().any(|e| e.as_os_str() == n)))
        .collect();
    if overwrites.is_empty() {
        out::print_info(&format!("No files in {} would be overwritten", dest_root.display()));
    } else {
        out::print_warn("The following files would be overwritten (if you want to proceed):");
        for m in overwrites {
            out::print_user(&m.destination.display().to_string());
        }
    }
    Ok(())
}

/// Ask for every missing directory first, then create them all. Returns false on the
/// first decline, in which case nothing has been created.
fn ensure_destination_dirs<F, P>(dirs: &[&Path], fs: &F, prompt: &mut P) -> Result<bool, MoveError>
where
    F: FileSystem + ?Sized,
    P: Prompt + ?Sized,
{
    let mut missing = Vec::new();
    for dir in dirs {
        if fs.exists(dir)? {
            continue;
        }
        let question = format!("Destination folder {} does not exist, create it?", dir.display());
        if !prompt.confirm(&question)? {
            info!(dir = %dir.display(), "Operator declined directory creation");
            return Ok(false);
        }
        missing.push(*dir);
    }

    for dir in missing {
        fs.create_dir_all(dir)?;
        info!(dir = %dir.display(), "Created destination directory");
    }
    Ok(true)
}

fn move_one<F, P>(planned: &PlannedMove, fs: &F, prompt: &mut P) -> Result<MoveOutcome, MoveError>
where
    F: FileSystem + ?Sized,
    P: Prompt + ?Sized,
{
    let dest = &planned.destination;
    if fs.exists(dest)? {
        let question = format!("File {} already exists, overwrite?", dest.display());
        if !prompt.confirm(&question)? {
            out::print_info(&format!("Skipping {}", dest.display()));
            debug!(dest = %dest.display(), "Overwrite declined");
            return Ok(MoveOutcome::Skipped(SkipReason::OverwriteDeclined));
        }
    }

    fs.move_entry(&planned.source, dest)?;
    out::print_user(&format!("Moved {}", planned));
    info!(src = %planned.source.display(), dest = %dest.display(), "Moved");
    Ok(MoveOutcome::Moved)
}
