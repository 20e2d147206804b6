use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Sitegauge".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!(
        "{}",
        "Analyze web pages for SEO, conversion, performance and mobile-friendliness\n".dimmed()
    );
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
#[allow(dead_code)]
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a category score with color coding
pub fn print_score(label: &str, score: u8) {
    let line = format!("{:<22} {:>3}/100", format!("{}:", label), score);
    if score >= 90 {
        eprintln!("  {}", line.bright_green());
    } else if score >= 70 {
        eprintln!("  {}", line.bright_yellow());
    } else {
        eprintln!("  {}", line.bright_red());
    }
}
