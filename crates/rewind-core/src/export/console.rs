//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::judge::{GradedEvent, HitGrade, MissReason, Verdict};
use crate::pipeline::{FixReport, GradeCounts};

/// Format a fix report as a boxed multi-line block
pub fn format_report_console(report: &FixReport) -> String {
    let mut output = String::new();

    let title_content = format!("  {} [{}]", report.title.bold(), report.mods);
    let border_width = (report.title.len() + report.mods.len() + 6).max(50);
    let border = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let w = &report.windows;

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title_content);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  WINDOW : {}/{}/{}ms  RADIUS {:.2}",
        w.window_300, w.window_100, w.window_50, w.hit_radius
    );
    let _ = writeln!(output, "  BEFORE : {}", format_counts(&report.before));
    if !report.corrections.is_empty() {
        let _ = writeln!(output, "  AFTER  : {}", format_counts(&report.after));
        let _ = writeln!(
            output,
            "  FIXED  : {}",
            report.corrections.len().to_string().green()
        );
    }
    let _ = writeln!(
        output,
        "  SCORE  : {} ({})",
        report.score.bold(),
        report.reconstruction.formula
    );
    let _ = writeln!(output, "  COMBO  : {}x", report.max_combo);
    let _ = write!(output, "{}", border_dim);

    output
}

fn format_counts(counts: &GradeCounts) -> String {
    format!(
        "{}/{}/{}/{} (aim {}, timing {})",
        counts.hit_300.cyan(),
        counts.hit_100.green(),
        counts.hit_50.yellow(),
        counts.misses().red(),
        counts.aim_miss,
        counts.timing_miss,
    )
}

/// One line per graded event
pub fn format_graded_line(event: &GradedEvent) -> String {
    let label = match event.verdict {
        Verdict::Hit {
            grade: HitGrade::Hit300,
        } => "300".cyan().to_string(),
        Verdict::Hit {
            grade: HitGrade::Hit100,
        } => "100".green().to_string(),
        Verdict::Hit {
            grade: HitGrade::Hit50,
        } => " 50".yellow().to_string(),
        Verdict::Miss {
            reason: MissReason::Aim,
        } => "AIM".red().to_string(),
        Verdict::Miss {
            reason: MissReason::Timing,
        } => "LATE".red().to_string(),
    };
    format!(
        "{:>8}ms  {:<4} {:<7} time {:>3}ms  aim {:>6.2}",
        event.object.time, label, event.object.kind, event.time_offset, event.aim_offset
    )
}
