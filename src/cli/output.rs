//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles NO_COLOR and TTY detection):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, keys, paths
//! - Dim: secondary info

use std::fmt::Display;
use std::io::{self, Write as IoWrite};

use console::style;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ wallet ready`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run holster ensure`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  address:  0xabc…`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Print a bold title with a separator line.
pub fn section(title: &str) {
    println!();
    println!("{}", style(title).bold());
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    print!("{}... ", style(label).dim());
    let _ = io::stdout().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(ok: bool) {
    if ok {
        println!("{}", style("ok").green());
    } else {
        println!("{}", style("failed").red());
    }
}

/// Shorten a secret for display: first and last four hex chars.
///
/// Example: `0x1234…cdef`
pub fn redacted(secret: &str) -> String {
    let hex_part = secret.strip_prefix("0x").unwrap_or(secret);
    if hex_part.len() <= 8 {
        return "0x…".to_string();
    }
    format!("0x{}…{}", &hex_part[..4], &hex_part[hex_part.len() - 4..])
}
