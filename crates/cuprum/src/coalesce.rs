//! Merge anchors occupying the same position.
//!
//! Two coincident pins/pads are the one exception: they are distinct
//! physical attachment points that merely overlap visually, so they always
//! stay apart. Everything else collapses onto a single survivor per
//! position, and lines are rewritten to reference it.

use rustc_hash::FxHashMap;

use crate::geom::Point;
use crate::graph::{SegmentGraph, resolve};
use crate::model::AnchorId;

pub(crate) fn run<P, L>(g: &mut SegmentGraph<P, L>) -> bool {
    // Group live anchors by position, in id order.
    let mut groups: FxHashMap<Point, Vec<AnchorId>> = FxHashMap::default();
    for anchor in &g.anchors {
        if g.is_live(anchor.id) {
            groups.entry(anchor.pos).or_default().push(anchor.id);
        }
    }

    let mut changed = false;
    for ids in groups.values() {
        if ids.len() < 2 {
            continue;
        }
        // Pins and pads are canonical: one of them is the survivor whenever
        // the group has any. Otherwise the oldest anchor wins.
        let survivor = ids
            .iter()
            .copied()
            .find(|&id| g.anchors[id].kind.is_attachment())
            .unwrap_or(ids[0]);
        for &id in ids {
            if id == survivor || g.anchors[id].kind.is_attachment() {
                continue;
            }
            g.redirect[id] = survivor;
            g.anchors[id].payload = None;
            changed = true;
        }
    }
    if !changed {
        return false;
    }

    let redirect = &g.redirect;
    for line in g.lines.values_mut() {
        line.p1 = resolve(redirect, line.p1);
        line.p2 = resolve(redirect, line.p2);
    }
    true
}
