//! Operator-facing messages.
//! Informational lines go to stdout next to the prompts; warnings and errors go to stderr.
//! Prefixes are colored only when stdout is a TTY.

use owo_colors::OwoColorize;

const RULE_WIDTH: usize = 80;

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn emit(tone: Tone, msg: &str) {
    let label = match tone {
        Tone::Info => "info:",
        Tone::Warn => "warn:",
        Tone::Error => "error:",
        Tone::Success => "ok:",
    };
    let prefix = if is_tty() {
        match tone {
            Tone::Info => label.cyan().bold().to_string(),
            Tone::Warn => label.yellow().bold().to_string(),
            Tone::Error => label.red().bold().to_string(),
            Tone::Success => label.green().bold().to_string(),
        }
    } else {
        label.to_string()
    };
    match tone {
        Tone::Warn | Tone::Error => eprintln!("{prefix} {msg}"),
        Tone::Info | Tone::Success => println!("{prefix} {msg}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Tone::Info, msg);
}

pub fn print_warn(msg: &str) {
    emit(Tone::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Tone::Error, msg);
}

pub fn print_success(msg: &str) {
    emit(Tone::Success, msg);
}

/// Plain line, no prefix. Used for plan entries such as "a.jpg => b/a.jpg".
pub fn print_user(msg: &str) {
    println!("{msg}");
}

/// Separator framing plan listings.
pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}
