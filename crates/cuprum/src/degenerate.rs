//! Remove self-loop lines left behind by coalescing.
//!
//! A line whose endpoints resolve to the same anchor carries no geometric
//! or electrical information. Zero-length lines between two *distinct*
//! anchors survive this pass; after coalescing that can only mean a pair
//! of coincident pins/pads, which legitimately keep their connection.

use crate::graph::SegmentGraph;

pub(crate) fn run<P, L>(g: &mut SegmentGraph<P, L>) -> bool {
    let before = g.lines.len();
    g.lines.retain(|_, line| line.p1 != line.p2);
    g.lines.len() != before
}
