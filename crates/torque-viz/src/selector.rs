//! Deterministic mapping from query results to render instructions.

use serde::{Deserialize, Serialize};

use torque_core::types::{QueryResult, Record, VisualizationType};

/// Message carried by the warning instruction when a result has no `data` key.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Renderer-agnostic description of what to draw for one query result.
///
/// Charts carry their field bindings in the original record order plus a
/// title (empty when the service sent none). The raw dump carries the records
/// verbatim and ignores any title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Vertical bars: one bar per record, labeled by `x`, sized by `y`.
    BarChart {
        x: Vec<String>,
        y: Vec<f64>,
        title: String,
    },
    /// Proportional slices, one per record.
    PieChart {
        labels: Vec<String>,
        values: Vec<f64>,
        title: String,
    },
    /// A single series over an ordered axis.
    LineChart {
        x: Vec<String>,
        y: Vec<f64>,
        title: String,
    },
    /// The records verbatim, without field interpretation.
    RawDump { records: Vec<Record> },
    /// Nothing to draw; show the message instead.
    Warning { message: String },
}

/// Choose how to render a query result.
///
/// Pure and total: the same result always maps to the same instruction, and
/// no well-formed result panics. A result without a `data` key warns without
/// touching any chart fields; an empty `data` array still selects its chart
/// and renders empty. Unrecognized visualization tags fall back to the raw
/// dump rather than failing.
pub fn select(result: &QueryResult) -> RenderInstruction {
    let Some(data) = result.data.as_ref() else {
        return RenderInstruction::Warning {
            message: NO_DATA_MESSAGE.to_string(),
        };
    };

    let title = result.title().to_string();
    match result.visualization() {
        VisualizationType::Bar => RenderInstruction::BarChart {
            x: names(data),
            y: values(data),
            title,
        },
        VisualizationType::Pie => RenderInstruction::PieChart {
            labels: names(data),
            values: values(data),
            title,
        },
        VisualizationType::Line => RenderInstruction::LineChart {
            x: names(data),
            y: values(data),
            title,
        },
        VisualizationType::Table => RenderInstruction::RawDump {
            records: data.clone(),
        },
    }
}

fn names(data: &[Record]) -> Vec<String> {
    data.iter().map(|r| r.name.clone()).collect()
}

fn values(data: &[Record]) -> Vec<f64> {
    data.iter().map(|r| r.value).collect()
}

// =============================================================================
// Tests
// =============================================================================
