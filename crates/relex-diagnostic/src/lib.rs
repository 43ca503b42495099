//! Diagnostic and error reporting for relex.
//! relex 的诊断与错误报告。
//!
//! Scan and rule-table errors convert into [`Diagnostic`]s, which this crate
//! renders with ariadne.
//! 扫描错误和规则表错误会转换为 [`Diagnostic`]，再由本 crate 通过 ariadne 渲染。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use std::io;
use std::ops::Range;

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let mut ariadne_label =
            AriadneLabel::new((filename, label.span.range())).with_message(&label.message);
        if color {
            ariadne_label = ariadne_label.with_color(colors.next());
        }
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = diagnostic.help() {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Render a diagnostic to a plain (uncoloured) string.
/// 将诊断信息渲染为不带颜色的字符串。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<String> {
    let mut out = Vec::new();
    build_report(filename, diagnostic, false).write((filename, Source::from(source)), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
