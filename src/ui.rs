/// Console status and error output
///
/// The report itself goes through `report::ReportWriter`; this module
/// covers everything around it: progress lines, the fatal error banner,
/// and the decision whether stdout gets ANSI colors at all.

use std::io::Write;

/// Print a progress line with the "movecall: " prefix
pub fn status(s: &str) {
    println!("movecall: {}", s);
}

/// Whether the report should emit colors: the flag wins, otherwise ask
/// the term crate whether stdout is a color-capable terminal
pub fn use_colors(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    term::stdout().map_or(false, |t| t.supports_color())
}

/// Print an error message with a colored "error" prefix
pub fn print_error(msg: &str) {
    println!();
    if !really_print_color("error", term::color::BRIGHT_RED) {
        print!("error");
    }
    println!(": {}", msg);
    println!();
}

/// Returns false when nothing colored was written, so the caller can fall
/// back to plain text; a missing terminfo terminal counts as a failure
fn really_print_color(s: &str, fg: term::color::Color) -> bool {
    match term::stdout() {
        Some(ref mut t) => {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            true
        }
        None => false,
    }
}
