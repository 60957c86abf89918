//! Run report printed after graphs are written

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::dot::EmitSummary;

/// Write one line per emitted graph: its path and how many edges it holds.
pub fn write_report<W: WriteColor>(summaries: &[EmitSummary], out: &mut W) -> io::Result<()> {
    let mut path_spec = ColorSpec::new();
    path_spec.set_fg(Some(Color::Green)).set_bold(true);
    let mut empty_spec = ColorSpec::new();
    empty_spec.set_fg(Some(Color::Yellow));

    for summary in summaries {
        out.set_color(&path_spec)?;
        write!(out, "{}", summary.path.display())?;
        out.reset()?;

        let noun = if summary.edges == 1 { "edge" } else { "edges" };
        if summary.edges == 0 {
            out.set_color(&empty_spec)?;
            writeln!(out, "  0 {}", noun)?;
            out.reset()?;
        } else {
            writeln!(out, "  {} {}", summary.edges, noun)?;
        }
    }
    Ok(())
}

/// Print the run report to stdout with optional color.
pub fn print_report(summaries: &[EmitSummary], use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(summaries, &mut stdout)
}
