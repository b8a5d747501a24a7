//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML test reports.
//! It creates styled HTML files with run statistics and a detailed
//! per-case results table.
//!
//! 此模块处理 HTML 测试报告的生成。
//! 它创建带有运行统计和逐用例详细结果表格的样式化 HTML 文件。

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::models::{CaseRecord, RunStats};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates an HTML report from the per-case records and the final
/// counters: a header, a row of summary tiles and a results table with one
/// row per scored case.
///
/// 从逐用例记录和最终计数器生成 HTML 报告：
/// 页眉、一排摘要磁贴，以及每个已计分用例一行的结果表格。
///
/// # Errors
/// Returns an error when the output file cannot be written.
pub fn generate_html_report(
    records: &[CaseRecord],
    stats: &RunStats,
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));

    // Add summary statistics
    let tiles = [
        ("html_report.summary.total", stats.total, ""),
        ("html_report.summary.passed", stats.expected_passed, "passed-text"),
        ("html_report.summary.failed", stats.expected_failed, "failed-text"),
        ("html_report.summary.skipped", stats.expected_skipped, "skipped-text"),
        ("html_report.summary.empty", stats.expected_empty, "skipped-text"),
        ("html_report.summary.timeout", stats.expected_timeout, "failed-text"),
        ("html_report.summary.untested", stats.untested, "failed-text"),
    ];

    html.push_str("<div class='summary-container'>");
    for (key, count, class) in tiles {
        html.push_str(&format!(
            "<div class='summary-item'><span class='count {}'>{}</span><span class='label'>{}</span></div>",
            class,
            count,
            t!(key, locale = locale)
        ));
    }
    html.push_str("</div>");

    // Add results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.name", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='mark-col'>{}</th>",
        t!("html_report.table.header.mark", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for record in records {
        let status_str = record.outcome.status_str(locale);
        let status_class = record.outcome.status_class();

        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", escape_html(&record.name)));
        html.push_str(&format!("<td class='mark-col'>{}</td>", record.mark));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div></td>",
            status_class, status_str
        ));
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<div class='footer'>{}</div>",
        t!(
            "html_report.generated_at",
            locale = locale,
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::write(output_path, html)?;
    Ok(())
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
