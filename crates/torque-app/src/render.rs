//! Plain-text rendering surface for render instructions.
//!
//! The selection pipeline hands over a renderer-agnostic instruction; this
//! renderer realizes it as terminal text. Bars and lines get proportional
//! glyph rows, pies get a percentage breakdown, and the raw dump prints each
//! record verbatim as one JSON object per line.

use torque_viz::selector::RenderInstruction;

/// Width in characters of the widest bar.
const BAR_WIDTH: usize = 40;

/// Renders instructions as plain terminal text.
pub struct TextRenderer;

impl TextRenderer {
    /// Produce the terminal text for one instruction.
    pub fn render(&self, instruction: &RenderInstruction) -> String {
        match instruction {
            RenderInstruction::BarChart { x, y, title } => chart_rows(x, y, title, '#'),
            RenderInstruction::LineChart { x, y, title } => chart_rows(x, y, title, '*'),
            RenderInstruction::PieChart {
                labels,
                values,
                title,
            } => pie_rows(labels, values, title),
            RenderInstruction::RawDump { records } => {
                if records.is_empty() {
                    return "(no rows)".to_string();
                }
                records
                    .iter()
                    .map(|r| {
                        serde_json::to_string(r)
                            .unwrap_or_else(|_| "<unserializable record>".to_string())
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            RenderInstruction::Warning { message } => message.clone(),
        }
    }
}

/// Rows of `label  value  bar` scaled so the largest value fills the width.
fn chart_rows(x: &[String], y: &[f64], title: &str, glyph: char) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(title);
        out.push('\n');
    }
    if x.is_empty() {
        out.push_str("(no rows)");
        return out;
    }

    let label_width = x.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = y.iter().cloned().fold(f64::MIN, f64::max);

    for (label, value) in x.iter().zip(y) {
        let bar_len = if max > 0.0 && *value > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(glyph).take(bar_len).collect();
        out.push_str(&format!(
            "{:<label_width$}  {:>10}  {}\n",
            label,
            format_value(*value),
            bar
        ));
    }
    out.trim_end().to_string()
}

/// Rows of `label  value (pct%)`; percentages are omitted when the total is
/// not positive.
fn pie_rows(labels: &[String], values: &[f64], title: &str) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(title);
        out.push('\n');
    }
    if labels.is_empty() {
        out.push_str("(no rows)");
        return out;
    }

    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let total: f64 = values.iter().sum();

    for (label, value) in labels.iter().zip(values) {
        if total > 0.0 {
            out.push_str(&format!(
                "{:<label_width$}  {:>10}  ({:.1}%)\n",
                label,
                format_value(*value),
                value / total * 100.0
            ));
        } else {
            out.push_str(&format!(
                "{:<label_width$}  {:>10}\n",
                label,
                format_value(*value)
            ));
        }
    }
    out.trim_end().to_string()
}

/// Format a value without a trailing `.0` when it is a whole number.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// =============================================================================
// Tests
// =============================================================================
