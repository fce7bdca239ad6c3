//! Session reporting
//!
//! This module prints a collected series and its final classification, then
//! pushes the status to the display collaborator. It is a purely
//! side-effecting consumer: no state, no recovery beyond propagating
//! collaborator failures.

use crate::classifier::Classification;
use crate::display::DisplaySink;
use crate::error::Result;
use crate::reading::ReadingSeries;
use std::io::Write;

/// Print a series and its classification, then scroll the status
///
/// Writes one `Reading <i>: <value> <unit>` line per reading in collection
/// order, then the `Status:` line, then invokes the display. The console
/// lines are flushed before the display is touched, so a display failure
/// never corrupts already-printed output.
pub fn report<W, D>(
    series: &ReadingSeries,
    result: &Classification,
    out: &mut W,
    display: &mut D,
) -> Result<()>
where
    W: Write,
    D: DisplaySink + ?Sized,
{
    for (i, reading) in series.iter().enumerate() {
        writeln!(out, "Reading {}: {}", i + 1, reading)?;
    }
    writeln!(
        out,
        "Status: {} (Scrolling {} on LED Matrix)",
        result.label, result.color
    )?;
    out.flush()?;

    display.scroll_message(result.label, result.color)?;
    Ok(())
}
