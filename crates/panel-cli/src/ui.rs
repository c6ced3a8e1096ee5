//! Status messages on stderr.

use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Decide once whether status lines are colored.
///
/// `--no-color` and `NO_COLOR` disable colors, `FORCE_COLOR` enables them
/// even when stderr is piped, otherwise stderr must be a terminal.
pub fn init_colors(no_color: bool) {
    let enabled = should_use_color(
        no_color,
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        console::user_attended_stderr(),
    );
    COLORS.store(enabled, Ordering::Relaxed);
}

fn should_use_color(no_color_flag: bool, no_color: bool, force_color: bool, attended: bool) -> bool {
    if no_color_flag || no_color {
        return false;
    }
    force_color || attended
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub fn success(message: &str) {
    if colors() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

pub fn info(message: &str) {
    if colors() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

pub fn warning(message: &str) {
    if colors() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}
