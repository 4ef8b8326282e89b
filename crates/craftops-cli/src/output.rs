use craftops_types::ErrorNode;
use owo_colors::OwoColorize;

/// Print the short user-facing line; the full error tree goes to the
/// operational log only.
pub fn report_failure(message: &str, err: &ErrorNode) {
    tracing::error!("{message}\n{}", err.render());
    println!("{}", message.red());
}

pub fn confirm(message: &str) {
    println!("{} {message}", "✔".green());
}

pub fn deny(reason: &str) {
    println!("{}", reason.yellow());
}
