use crate::style::{LayoutHints, RenderStyle};
use refnet_graph::{wrap_label, GraphWeights};
use std::fmt::Write;

/// Serializes a weighted reference graph as Graphviz DOT
pub struct DotWriter<'a> {
    style: &'a RenderStyle,
    hints: &'a LayoutHints,
    label_max_chars: usize,
}

impl<'a> DotWriter<'a> {
    pub fn new(style: &'a RenderStyle, hints: &'a LayoutHints, label_max_chars: usize) -> Self {
        Self {
            style,
            hints,
            label_max_chars,
        }
    }

    pub fn write(&self, weights: &GraphWeights) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_into(&mut out, weights);
        out
    }

    fn write_into(&self, out: &mut String, weights: &GraphWeights) -> std::fmt::Result {
        let style = self.style;
        let hints = self.hints;

        writeln!(out, "digraph {{")?;
        writeln!(
            out,
            "    graph [overlap={}, sep={}, splines={}, outputorder={}, K={}];",
            quote(&hints.overlap),
            quote(&hints.sep),
            quote(&hints.splines),
            quote(&hints.output_order),
            quote(&hints.k.to_string()),
        )?;
        writeln!(
            out,
            "    node [shape=\"circle\", style=\"filled\", fillcolor={}, color={}, fontname={}, fontsize={}, fixedsize=\"true\"];",
            quote(&style.node_fill_color),
            quote(&style.node_edge_color),
            quote(&style.font_family),
            quote(&style.font_size.to_string()),
        )?;
        writeln!(
            out,
            "    edge [color={}, arrowsize={}, penwidth={}];",
            quote(&style.edge_color),
            quote(&style.arrow_size.to_string()),
            quote(&style.pen_width.to_string()),
        )?;

        for node in &weights.nodes {
            let label = wrap_label(&node.name, self.label_max_chars);
            writeln!(
                out,
                "    {} [label={}, width=\"{:.2}\", height=\"{:.2}\", fontsize=\"{:.1}\"];",
                quote(&node.name),
                quote(&label),
                node.width,
                node.height,
                node.font_size,
            )?;
        }

        for edge in &weights.edges {
            writeln!(
                out,
                "    {} -> {} [len=\"{:.2}\"];",
                quote(&edge.source),
                quote(&edge.target),
                edge.length,
            )?;
        }

        writeln!(out, "}}")
    }
}

/// DOT double-quoted string; newlines become centered line breaks
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
