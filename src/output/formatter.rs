//! Output formatters: console, JSON and markdown renderings of parsed resumes

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::ParsedResume;
use crate::processing::record::Field;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &ParsedResume) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;

    fn format_batch(&self, reports: &[ParsedResume]) -> Result<String> {
        let rendered = reports
            .iter()
            .map(|report| self.format_report(report))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n"))
    }
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Cgpa => "CGPA",
        Field::Skills => "Skills",
        Field::Education => "Education",
        Field::Projects => "Projects",
        Field::Experience => "Experience",
    }
}

/// Section fields hold several items; everything else is a one-liner.
fn is_multi_item(field: Field) -> bool {
    matches!(field, Field::Education | Field::Projects | Field::Experience)
}

fn items(value: &str) -> impl Iterator<Item = &str> {
    value.split('\n').map(str::trim).filter(|item| !item.is_empty())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_label(&self, label: &str) -> String {
        let padded = format!("{:<11}", format!("{}:", label));
        if self.use_colors {
            padded.bold().to_string()
        } else {
            padded
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ParsedResume) -> Result<String> {
        let mut output = String::new();
        let record = &report.record;

        output.push_str(&self.format_header(&report.title()));
        output.push_str(&format!(
            "Source: {} | {}/{} fields | {}ms\n\n",
            report.metadata.source,
            report.metadata.fields_found,
            report.metadata.fields_total,
            report.metadata.processing_time_ms
        ));

        for field in Field::ALL {
            let label = self.format_label(field_label(field));
            let value = record.get(field);

            if !record.is_found(field) {
                output.push_str(&format!("{} {}\n", label, self.colorize(value, Color::Red)));
            } else if is_multi_item(field) {
                output.push_str(&format!("{}\n", label));
                for item in items(value) {
                    output.push_str(&format!("  • {}\n", self.colorize(item, Color::Green)));
                }
            } else {
                output.push_str(&format!("{} {}\n", label, self.colorize(value, Color::Green)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ParsedResume) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    /// A batch renders as one JSON array.
    fn format_batch(&self, reports: &[ParsedResume]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(reports)?)
        } else {
            Ok(serde_json::to_string(reports)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ParsedResume) -> Result<String> {
        let mut output = String::new();
        let record = &report.record;

        output.push_str(&format!("# {}\n\n", report.title()));

        if self.include_metadata {
            output.push_str(&format!(
                "**Source:** `{}` | **Fields found:** {}/{} | **Processing time:** {}ms\n\n",
                report.metadata.source,
                report.metadata.fields_found,
                report.metadata.fields_total,
                report.metadata.processing_time_ms
            ));
        }

        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        for field in Field::ALL.into_iter().filter(|f| !is_multi_item(*f)) {
            output.push_str(&format!(
                "| {} | {} |\n",
                field_label(field),
                record.get(field).replace('|', "\\|")
            ));
        }
        output.push('\n');

        for field in Field::ALL.into_iter().filter(|f| is_multi_item(*f)) {
            output.push_str(&format!("## {}\n\n", field_label(field)));
            if record.is_found(field) {
                for item in items(record.get(field)) {
                    output.push_str(&format!("- {}\n", item));
                }
            } else {
                output.push_str(&format!("_{}_\n", record.get(field)));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.pretty_json, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, report: &ParsedResume, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_batch(&self, reports: &[ParsedResume], format: OutputFormat) -> Result<String> {
        self.formatter(format).format_batch(reports)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_parsed.txt", base_name),
        OutputFormat::Json => format!("{}_parsed.json", base_name),
        OutputFormat::Markdown => format!("{}_parsed.md", base_name),
    }
}
