//! Collapse duplicate lines connecting the same anchor pair.
//!
//! Last writer wins: for every unordered endpoint pair only the most
//! recently added line survives. Discarded duplicates never touch the
//! survivor's endpoints, so its own `modified` flag stays untouched.

use rustc_hash::FxHashMap;

use crate::graph::SegmentGraph;
use crate::model::{AnchorId, LineId};

pub(crate) fn run<P, L>(g: &mut SegmentGraph<P, L>) -> bool {
    let mut keep: FxHashMap<(AnchorId, AnchorId), LineId> = FxHashMap::default();
    for line in g.lines.values() {
        // Ascending id iteration leaves the highest id in the map.
        keep.insert(pair_key(line.p1, line.p2), line.id);
    }
    if keep.len() == g.lines.len() {
        return false;
    }
    g.lines
        .retain(|_, line| keep[&pair_key(line.p1, line.p2)] == line.id);
    true
}

fn pair_key(p1: AnchorId, p2: AnchorId) -> (AnchorId, AnchorId) {
    (p1.min(p2), p1.max(p2))
}
