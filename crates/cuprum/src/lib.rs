//! Net segment topology canonicalization for PCB copper traces.
//!
//! A net segment is the small planar graph a board editor accumulates while
//! the user draws wires: junctions, vias and pin/pad attachment points joined
//! by straight copper lines. Interactive editing leaves that graph redundant
//! in predictable ways (coincident junctions, duplicated or zero-length
//! lines, lines crossing without a junction, needless bend points on straight
//! runs). [`NetSegmentSimplifier`] rewrites such a graph into a minimal,
//! topologically equivalent form and reports which elements changed, so the
//! caller can patch its own board model instead of rebuilding it.
//!
//! The simplifier is a build-then-drain accumulator: feed it anchors and
//! lines, call [`NetSegmentSimplifier::simplify`] once, translate the result
//! back, repeat with fresh ids for the next segment. It performs no I/O and
//! holds no state across calls.

mod coalesce;
mod dedupe;
mod degenerate;
pub mod geom;
mod graph;
mod merge;
mod model;
mod simplifier;
mod split;

pub use geom::{Length, Point};
pub use model::{AnchorId, AnchorKind, Line, LineId, SimplifyResult};
pub use simplifier::NetSegmentSimplifier;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
