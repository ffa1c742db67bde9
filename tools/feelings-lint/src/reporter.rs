use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

use crate::scan::Report;

pub fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "\n=== Checking for feelings in your code ===\n"
            .if_supports_color(Stdout, |s| s.magenta())
    )
}

/// Errors first, then warnings, then the summary.
pub fn print_report(report: &Report, out: &mut impl Write) -> io::Result<()> {
    if report.is_clean() {
        writeln!(
            out,
            "{} {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            "Beautiful! Your code has soul.".if_supports_color(Stdout, |s| s.green()),
        )?;
        return print_failures_note(report, out);
    }

    if !report.errors.is_empty() {
        writeln!(
            out,
            "{}",
            "Some code needs more heart:\n".if_supports_color(Stdout, |s| s.red())
        )?;
        for error in &report.errors {
            writeln!(
                out,
                "  {} {}",
                "\u{2717}".if_supports_color(Stdout, |s| s.red()),
                error.if_supports_color(Stdout, |s| s.red()),
            )?;
        }
        writeln!(out)?;
    }

    if !report.warnings.is_empty() {
        writeln!(
            out,
            "{}",
            "Consider these suggestions:\n".if_supports_color(Stdout, |s| s.yellow())
        )?;
        for warning in &report.warnings {
            writeln!(
                out,
                "  {} {}",
                "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
                warning.if_supports_color(Stdout, |s| s.yellow()),
            )?;
        }
        writeln!(out)?;
    }

    print_summary(report, out)
}

fn print_summary(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "--- Summary ---".if_supports_color(Stdout, |s| s.bold()))?;

    let counts = format!(
        "\n{} error(s), {} warning(s).",
        report.errors.len(),
        report.warnings.len()
    );
    if report.has_errors() {
        writeln!(out, "{}", counts.if_supports_color(Stdout, |s| s.red()))?;
    } else {
        writeln!(out, "{}", counts.if_supports_color(Stdout, |s| s.yellow()))?;
    }
    print_failures_note(report, out)?;

    writeln!(
        out,
        "{}",
        "\nRemember: we're creating memories, not just websites.\n"
            .if_supports_color(Stdout, |s| s.cyan())
    )
}

fn print_failures_note(report: &Report, out: &mut impl Write) -> io::Result<()> {
    if report.io_failures == 0 {
        return Ok(());
    }
    writeln!(
        out,
        "{}",
        format!(
            "{} path(s) could not be read and were skipped (see stderr).",
            report.io_failures
        )
        .if_supports_color(Stdout, |s| s.dimmed())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Diagnostic;
    use std::path::Path;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        print_report(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn clean_report_praises() {
        let output = render(&Report::default());
        assert!(output.contains("Your code has soul"));
        assert!(!output.contains("Summary"));
    }

    #[test]
    fn errors_come_before_warnings() {
        let mut report = Report::default();
        report.record(Diagnostic::warning("w", Path::new("a.ts"), "first warning".into()));
        report.record(Diagnostic::error("e", Path::new("b.ts"), "late error".into()));

        let output = render(&report);

        let error_at = output.find("late error").unwrap();
        let warning_at = output.find("first warning").unwrap();
        assert!(error_at < warning_at);
        assert!(output.contains("1 error(s), 1 warning(s)."));
    }

    #[test]
    fn warnings_only_has_no_error_section() {
        let mut report = Report::default();
        report.record(Diagnostic::warning("w", Path::new("a.ts"), "gentle hint".into()));

        let output = render(&report);

        assert!(output.contains("gentle hint"));
        assert!(!output.contains("needs more heart"));
    }

    #[test]
    fn mentions_skipped_paths() {
        let report = Report { io_failures: 2, ..Report::default() };
        assert!(render(&report).contains("2 path(s) could not be read"));
    }
}
