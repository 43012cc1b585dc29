use collscope_api::models::{Diagnostic, Severity};
use collscope_core::{discover_units, AnalysisEngine, CollscopeConfig, UnitReport};
use nu_ansi_term::{Color, Style};
use std::fmt::Write;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct CheckOptions {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub no_stdlib: bool,
    pub show_fixes: bool,
}

pub fn run(options: CheckOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CollscopeConfig::load(options.config.as_deref())?;
    if options.no_stdlib {
        config.include_stdlib = false;
    }

    let files = discover_units(&options.paths)?;
    if files.is_empty() {
        warn!("No unit files found");
    }
    info!("Checking {} unit file(s)", files.len());

    let engine = AnalysisEngine::new(config);
    let mut reports = Vec::new();
    let mut failures = 0;
    for (path, result) in files.iter().zip(engine.analyze_files(&files)) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}: {}", Color::Red.bold().paint("error"), path.display(), e);
            }
        }
    }

    match options.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => print!("{}", render_text(&reports, options.show_fixes, true)),
    }

    if failures > 0 {
        return Err(format!("{} unit file(s) could not be analyzed", failures).into());
    }
    Ok(())
}

/// Human-readable report, one finding per line followed by its source line.
pub fn render_text(reports: &[UnitReport], show_fixes: bool, colored: bool) -> String {
    let paint = |style: Style, text: &str| {
        if colored {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let mut findings = 0;
    for report in reports {
        let location = report
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| report.name.clone());

        for diagnostic in &report.diagnostics {
            findings += 1;
            let _ = writeln!(
                out,
                "{}:{} {} [{}] {}",
                location,
                diagnostic.range.start,
                paint(severity_style(diagnostic.severity), &diagnostic.severity.to_string()),
                diagnostic.inspection,
                diagnostic.message
            );
            let _ = writeln!(out, "    | {}", line_at(&report.source, diagnostic.range.start));

            if show_fixes {
                if let Some(fixed) = fixed_line(&report.source, diagnostic) {
                    let label = diagnostic
                        .fix
                        .as_ref()
                        .map(|fix| fix.family_name.as_str())
                        .unwrap_or_default();
                    let _ = writeln!(out, "    = {}: {}", paint(Color::Green.bold(), label), fixed);
                }
            }
        }
    }

    let _ = writeln!(
        out,
        "{} finding(s) in {} unit(s)",
        findings,
        reports.len()
    );
    out
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Warning => Color::Yellow.bold(),
        Severity::WeakWarning => Style::new().fg(Color::Cyan),
    }
}

/// The line of `text` containing byte `offset`, without its newline.
fn line_at(text: &str, offset: usize) -> &str {
    let offset = offset.min(text.len());
    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
    &text[start..end]
}

fn fixed_line(source: &str, diagnostic: &Diagnostic) -> Option<String> {
    let fix = diagnostic.fix.as_ref()?;
    let fixed = fix.apply(source).ok()?;
    Some(line_at(&fixed, fix.anchor.start).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at() {
        let text = "first;\nsecond;\nthird;\n";
        assert_eq!(line_at(text, 0), "first;");
        assert_eq!(line_at(text, 9), "second;");
        assert_eq!(line_at(text, text.len()), "");
    }
}
