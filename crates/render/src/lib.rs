//! # Reference Graph Rendering
//!
//! Turns a weighted reference graph into a drawing: [`DotWriter`] serializes
//! nodes (wrapped label, fixed circular size, font size) and edges (target
//! length) as DOT, and [`Graphviz`] runs a force-directed layout program on
//! it.

mod dot;
mod error;
mod graphviz;
mod style;

pub use dot::DotWriter;
pub use error::{RenderError, Result};
pub use graphviz::Graphviz;
pub use style::{LayoutHints, RenderStyle};
