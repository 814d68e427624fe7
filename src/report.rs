/// Execution-result report rendering
///
/// Turns one `TransactionBlockResponse` into a fixed-order, human-readable
/// report: Status, Gas Usage, Created Objects, Balance Changes. Sections
/// whose input is absent or empty are silently omitted. Nothing in here
/// mutates the response or keeps state between calls, so rendering the
/// same response twice produces byte-identical output.
///
/// Output goes through `ReportWriter`, which writes to any `io::Write`
/// and either emits ANSI color codes or plain text. The only error that
/// can propagate out of a render is an `io::Error` from the sink; a
/// malformed or partial response degrades to omitted sections and
/// "Unknown" placeholders, never a failure.

use std::io::{self, Write};
use term::color::{self, Color};

use crate::amount::format_amount;
use crate::owner;
use crate::types::{ObjectChange, TransactionBlockResponse};

/// Placeholder for a created object whose declared type cannot be found
const UNKNOWN_TYPE: &str = "Unknown";

/// Writer for report output - configurable for color/plain text
pub struct ReportWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Consume the writer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)
    }

    /// Write text with a foreground color, falling back to plain text
    /// when colors are disabled
    fn write_colored(&mut self, text: &str, fg: Color) -> io::Result<()> {
        if self.use_colors {
            write!(self.writer, "{}{}\x1b[0m", ansi_fg(fg), text)
        } else {
            self.write_plain(text)
        }
    }

    /// Write bold text (section headers and labels)
    fn write_bold(&mut self, text: &str) -> io::Result<()> {
        if self.use_colors {
            write!(self.writer, "\x1b[1m{}\x1b[0m", text)
        } else {
            self.write_plain(text)
        }
    }

    fn write_bold_colored(&mut self, text: &str, fg: Color) -> io::Result<()> {
        if self.use_colors {
            write!(self.writer, "\x1b[1m{}{}\x1b[0m", ansi_fg(fg), text)
        } else {
            self.write_plain(text)
        }
    }

    fn writeln(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }
}

/// Map a term color constant to its ANSI foreground escape
fn ansi_fg(fg: Color) -> &'static str {
    match fg {
        color::RED => "\x1b[31m",
        color::GREEN => "\x1b[32m",
        color::YELLOW => "\x1b[33m",
        color::BLUE => "\x1b[34m",
        color::MAGENTA => "\x1b[35m",
        color::CYAN => "\x1b[36m",
        color::BRIGHT_BLACK => "\x1b[90m",
        color::BRIGHT_RED => "\x1b[91m",
        color::BRIGHT_GREEN => "\x1b[92m",
        _ => "\x1b[39m",
    }
}

/// Render the full report in fixed section order. This function owns the
/// ordering and spacing; the sections only decide their own content.
pub fn render<W: Write>(
    res: &TransactionBlockResponse,
    out: &mut ReportWriter<W>,
) -> io::Result<()> {
    out.writeln()?;
    out.write_bold_colored("Transaction Result", color::BLUE)?;
    out.writeln()?;
    out.writeln()?;

    write_status_section(res, out)?;
    write_gas_section(res, out)?;
    write_created_section(res, out)?;
    write_balance_section(res, out)?;

    Ok(())
}

/// Status line: green "success", red anything else, with the node's
/// failure reason on a second line when it supplied one
pub fn write_status_section<W: Write>(
    res: &TransactionBlockResponse,
    out: &mut ReportWriter<W>,
) -> io::Result<()> {
    let status = res.effects.as_ref().and_then(|e| e.status.as_ref());

    out.write_bold("Status:")?;
    out.write_plain(" ")?;
    match status {
        Some(s) if s.is_success() => out.write_colored(&s.status, color::GREEN)?,
        Some(s) => {
            out.write_colored(&s.status, color::RED)?;
            if let Some(reason) = &s.error {
                out.writeln()?;
                out.write_bold("Error:")?;
                out.write_plain(" ")?;
                out.write_colored(reason, color::RED)?;
            }
        }
        None => out.write_colored("unknown", color::RED)?,
    }
    out.writeln()
}

/// Gas block: three fixed sub-lines, values verbatim in MIST. The
/// computation, storage, and rebate figures are deliberately never
/// combined into a net cost.
pub fn write_gas_section<W: Write>(
    res: &TransactionBlockResponse,
    out: &mut ReportWriter<W>,
) -> io::Result<()> {
    let gas = match res.effects.as_ref().and_then(|e| e.gas_used.as_ref()) {
        Some(gas) => gas,
        None => return Ok(()),
    };

    out.writeln()?;
    out.write_bold("Gas Usage:")?;
    out.writeln()?;

    out.write_plain("  Computation Cost: ")?;
    out.write_colored(&gas.computation_cost, color::YELLOW)?;
    out.write_plain(" MIST")?;
    out.writeln()?;

    out.write_plain("  Storage Cost: ")?;
    out.write_colored(&gas.storage_cost, color::YELLOW)?;
    out.write_plain(" MIST")?;
    out.writeln()?;

    out.write_plain("  Storage Rebate: ")?;
    out.write_colored(&gas.storage_rebate, color::GREEN)?;
    out.write_plain(" MIST")?;
    out.writeln()
}

/// Created-objects block: one ID/Type/Owner group per created reference,
/// in input order, full (non-shortened) owner addresses
pub fn write_created_section<W: Write>(
    res: &TransactionBlockResponse,
    out: &mut ReportWriter<W>,
) -> io::Result<()> {
    let created = match res.effects.as_ref().and_then(|e| e.created.as_ref()) {
        Some(created) if !created.is_empty() => created,
        _ => return Ok(()),
    };
    let changes = res.object_changes.as_deref().unwrap_or(&[]);

    out.writeln()?;
    out.write_bold("Created Objects:")?;
    out.writeln()?;

    for obj in created {
        out.write_plain("  ID: ")?;
        out.write_colored(&obj.reference.object_id, color::CYAN)?;
        out.writeln()?;

        out.write_plain("  Type: ")?;
        out.write_colored(lookup_object_type(changes, &obj.reference.object_id), color::YELLOW)?;
        out.writeln()?;

        out.write_plain("  Owner: ")?;
        out.write_colored(owner::resolve(&obj.owner), color::MAGENTA)?;
        out.writeln()?;
        out.writeln()?;
    }
    Ok(())
}

/// Declared type of a created object, by first-match linear scan over the
/// heterogeneous object changes. Both collections are bounded by one
/// transaction's effects, so the O(n*m) scan stays cheap.
pub fn lookup_object_type<'a>(changes: &'a [ObjectChange], object_id: &str) -> &'a str {
    changes
        .iter()
        .find(|change| change.object_id.as_deref() == Some(object_id))
        .and_then(|change| change.object_type.as_deref())
        .unwrap_or(UNKNOWN_TYPE)
}

/// Balance block: one line per delta in input order, amount colored by
/// debit/credit class, shortened owner dimmed in parentheses
pub fn write_balance_section<W: Write>(
    res: &TransactionBlockResponse,
    out: &mut ReportWriter<W>,
) -> io::Result<()> {
    let changes = match res.balance_changes.as_ref() {
        Some(changes) if !changes.is_empty() => changes,
        _ => return Ok(()),
    };

    out.writeln()?;
    out.write_bold("Balance Changes:")?;
    out.writeln()?;

    for change in changes {
        let formatted = format_amount(&change.amount, &change.coin_type);
        let fg = if formatted.negative { color::RED } else { color::GREEN };
        let short_owner = owner::shorten(owner::resolve(&change.owner));

        out.write_plain("   ")?;
        out.write_colored(&formatted.text, fg)?;
        out.write_plain(" ")?;
        out.write_colored(&format!("({})", short_owner), color::BRIGHT_BLACK)?;
        out.writeln()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
