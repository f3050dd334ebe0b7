use anyhow::Result;
use colored::*;
use dq_core::{AnomalyFinding, DatasetProfile, Severity, Status, ValidationReport};
use serde_json::json;

pub fn print_validation_report(report: &ValidationReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATA QUALITY REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "All checks PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Some checks FAILED".red().bold()
        );
    }

    if !report.results.is_empty() {
        println!("\n{}", "Results:".bold());
        for result in &report.results {
            let line = match result.status {
                Status::Pass => result.to_string().normal(),
                Status::Fail => result.to_string().red(),
            };
            println!(
                "  {:<20} {} [{}]",
                result.column,
                line,
                colored_severity(result.severity)
            );
        }
    }

    let failed_columns = report.failed_columns();
    if !failed_columns.is_empty() {
        println!("\n{} {}", "Failed columns:".red().bold(), failed_columns.join(", "));
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total checks: {}", report.summary.total);
    println!("  Passed:       {}", report.summary.passed);
    println!("  Failed:       {}", report.summary.failed);
    println!("  Rows:         {}", report.rows_evaluated);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    let output = json!({
        "passed": report.passed(),
        "summary": report.summary,
        "failed_columns": report.failed_columns(),
        "results": report.results,
        "rows_evaluated": report.rows_evaluated,
        "duration_ms": report.duration_ms,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_profile(profile: &DatasetProfile, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATASET PROFILE".bold());
    println!("{}", "═".repeat(60));
    println!("  Rows:    {}", profile.row_count);
    println!("  Columns: {}", profile.column_count);

    for (name, column) in &profile.columns {
        println!("\n{} ({})", name.bold(), column.dtype);
        println!("  Null ratio:   {:.2}%", column.null_ratio * 100.0);
        println!("  Unique ratio: {:.2}%", column.unique_ratio * 100.0);

        if let Some(stats) = &column.numeric_stats {
            let std_dev = stats
                .std_dev
                .map_or_else(|| "n/a".to_string(), |s| s.to_string());
            println!(
                "  min={} max={} mean={} std={}",
                stats.min, stats.max, stats.mean, std_dev
            );
        }
        if let Some(samples) = &column.sample_values {
            println!("  Samples: {}", samples.join(", "));
        }
    }
    println!("{}", "═".repeat(60));
    Ok(())
}

pub fn print_findings(findings: &[AnomalyFinding], z_threshold: f64, format: &str) -> Result<()> {
    if format == "json" {
        let output = json!({
            "z_threshold": z_threshold,
            "anomalies": findings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if findings.is_empty() {
        print_success("No anomalies detected");
        return Ok(());
    }

    println!("\n{}", "Anomalies:".bold());
    for finding in findings {
        println!(
            "  {:<20} {} [{}]",
            finding.column,
            finding.issue,
            colored_severity(finding.severity)
        );
        println!(
            "  {:<20} {} of {} values outside [{}, {}] (mean={}, std={})",
            "",
            finding.outlier_count,
            finding.total_count,
            finding.bounds.0,
            finding.bounds.1,
            finding.mean,
            finding.std_dev
        );
    }
    Ok(())
}

fn colored_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => severity.to_string().red().bold(),
        Severity::Medium => severity.to_string().yellow(),
        Severity::Low => severity.to_string().dimmed(),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
