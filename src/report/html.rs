//! HTML report.
//!
//! Self-contained page with the comparison table, the per-experiment
//! sections and the IPC means. Styling is kept to a minimal inline sheet.

use super::console::{cell, UNMEASURED_MARK};
use super::sections;
use super::table::{Column, GroupBy};
use super::Report;
use std::fmt;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse;margin-bottom:1.5em}\
th,td{border:1px solid #999;padding:4px 8px;text-align:right}\
th{background:#eee}td.label{text-align:left}";

/// Escapes text for use inside HTML elements and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display adapter producing the HTML page.
pub struct HtmlReport<'a> {
    pub report: &'a Report<'a>,
    /// Chart file name, embedded when present.
    pub chart: Option<&'a str>,
}

impl fmt::Display for HtmlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let policy = &report.policy;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html><head><meta charset=\"utf-8\">")?;
        writeln!(f, "<title>gem5 ILP Experiment Summary</title>")?;
        writeln!(f, "<style>{}</style></head><body>", STYLE)?;
        writeln!(f, "<h1>gem5 ILP Experiment Summary</h1>")?;

        writeln!(f, "<h2>Performance Comparison</h2>")?;
        if report.table.is_empty() {
            writeln!(f, "<p>No experiment data found!</p>")?;
        } else {
            let swept = report.table.has_configurations();
            write!(f, "<table><tr><th>experiment</th><th>workload</th>")?;
            if swept {
                write!(f, "<th>configuration</th>")?;
            }
            for col in Column::ALL {
                write!(f, "<th>{}</th>", col.metric())?;
            }
            writeln!(f, "</tr>")?;
            for row in report.table.rows() {
                write!(
                    f,
                    "<tr><td class=\"label\">{}</td><td class=\"label\">{}</td>",
                    escape(&row.experiment),
                    escape(&row.workload)
                )?;
                if swept {
                    write!(
                        f,
                        "<td class=\"label\">{}</td>",
                        escape(row.configuration.as_deref().unwrap_or("-"))
                    )?;
                }
                for col in Column::ALL {
                    write!(f, "<td>{}</td>", cell(row, col, policy))?;
                }
                writeln!(f, "</tr>")?;
            }
            writeln!(f, "</table>")?;
            if report.table.rows().iter().any(|r| r.unmeasured().next().is_some()) {
                writeln!(
                    f,
                    "<p>{} not reported by gem5, counted as 0</p>",
                    UNMEASURED_MARK
                )?;
            }
        }

        if let Some(chart) = self.chart {
            writeln!(
                f,
                "<img src=\"{}\" alt=\"IPC comparison\">",
                escape(chart)
            )?;
        }

        if let Some(rows) = sections::branch_prediction(report.experiments) {
            writeln!(f, "<h2>Branch Prediction</h2>")?;
            writeln!(
                f,
                "<table><tr><th>workload</th><th>configuration</th><th>predictor</th>\
                 <th>ipc</th><th>accuracy</th><th>lookups</th><th>mispredictions</th>\
                 <th>ipc vs none</th></tr>"
            )?;
            for row in rows {
                writeln!(
                    f,
                    "<tr><td class=\"label\">{}</td><td class=\"label\">{}</td>\
                     <td class=\"label\">{}</td><td>{}</td><td>{}</td><td>{}</td>\
                     <td>{}</td><td>{}</td></tr>",
                    escape(&row.workload),
                    escape(row.configuration.as_deref().unwrap_or("-")),
                    escape(row.predictor.as_deref().unwrap_or("-")),
                    policy.display(row.ipc),
                    policy.percent(row.accuracy),
                    row.lookups,
                    row.mispredictions,
                    row.improvement.map_or("-".to_string(), |i| format!("{:+.2}%", i))
                )?;
            }
            writeln!(f, "</table>")?;
        }

        if let Some(rows) = sections::superscalar(report.experiments) {
            writeln!(f, "<h2>Superscalar Scaling</h2>")?;
            writeln!(
                f,
                "<table><tr><th>workload</th><th>configuration</th><th>issue width</th>\
                 <th>ipc</th><th>fetch</th><th>decode</th><th>commit</th>\
                 <th>efficiency</th><th>scaling</th></tr>"
            )?;
            for row in rows {
                writeln!(
                    f,
                    "<tr><td class=\"label\">{}</td><td class=\"label\">{}</td>\
                     <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                     <td>{}</td><td>{}</td></tr>",
                    escape(&row.workload),
                    escape(row.configuration.as_deref().unwrap_or("-")),
                    row.issue_width.map_or("-".to_string(), |w| w.to_string()),
                    policy.display(row.ipc),
                    policy.display(row.fetch_rate),
                    policy.display(row.decode_rate),
                    policy.display(row.commit_rate),
                    row.efficiency.map_or("-".to_string(), |e| policy.percent(e)),
                    row.scaling.map_or("-".to_string(), |s| format!("{:.2}x", s))
                )?;
            }
            writeln!(f, "</table>")?;
        }

        for (title, group) in [
            ("workload", GroupBy::Workload),
            ("experiment", GroupBy::Experiment),
        ] {
            let means = report.table.mean_by(group, Column::Ipc);
            if means.is_empty() {
                continue;
            }
            writeln!(f, "<h2>Average IPC by {}</h2>", title)?;
            writeln!(f, "<table><tr><th>{}</th><th>mean ipc</th></tr>", title)?;
            for mean in means {
                writeln!(
                    f,
                    "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
                    escape(&mean.label),
                    policy.display(mean.mean)
                )?;
            }
            writeln!(f, "</table>")?;
        }

        writeln!(f, "</body></html>")
    }
}
