//! # Reference Graph
//!
//! Detects which documents of a fixed corpus textually reference each other
//! and derives a weighted directed graph from it.
//!
//! ## Architecture
//!
//! ```text
//! raw document texts            alias registry
//!     │                               │
//!     ├──> Normalizer <───────────────┤
//!     │      (lowercase, join hyphen breaks, collapse whitespace)
//!     │                               │
//!     └──> Reference Detector <───────┘
//!            │  substring match, first alias wins, no self-references
//!            │
//!            └──> Reference Graph (petgraph)
//!                   ├─ Adjacency Matrix (delimited table with sums)
//!                   └─ Weight Mapper (node size, font size, edge length)
//! ```

mod builder;
mod detector;
mod error;
mod graph;
mod label;
mod matrix;
mod normalize;
mod registry;
mod types;
mod weights;

pub use builder::{GraphBuilder, NormalizedDocument};
pub use detector::{Detection, ReferenceDetector};
pub use error::{GraphError, Result};
pub use label::{wrap_label, DEFAULT_LABEL_MAX_CHARS};
pub use matrix::{AdjacencyMatrix, COLUMN_SUM_LABEL, DEFAULT_DELIMITER, ROW_SUM_LABEL};
pub use normalize::normalize_for_search;
pub use registry::{AliasRegistry, ClusterEntry, PreparedCluster};
pub use types::{EntityKind, EntityNode, ReferenceEdge, ReferenceGraph};
pub use weights::{EdgeWeight, GraphWeights, NodeWeight, WeightConfig, WeightMapper};
