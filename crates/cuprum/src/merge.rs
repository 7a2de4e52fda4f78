//! Fuse collinear line chains at passive degree-2 anchors.
//!
//! A junction or via with exactly two incident lines is a mere bend point.
//! When the two lines are exactly collinear and agree on layer and width,
//! the lower-id line is stretched over the anchor to the far endpoint of
//! the higher-id line, which disappears along with the bend. Pins and pads
//! never qualify: an attachment point stays an endpoint.

use std::collections::BTreeMap;

use crate::geom::collinear_between;
use crate::graph::SegmentGraph;
use crate::model::{AnchorId, LineId};

pub(crate) fn run<P, L: PartialEq>(g: &mut SegmentGraph<P, L>) -> bool {
    // Each fusion changes the incidence of the outer anchors, so rebuild
    // and rescan after every one; chains of any length collapse fully.
    let mut changed = false;
    while merge_next(g) {
        changed = true;
    }
    changed
}

fn merge_next<P, L: PartialEq>(g: &mut SegmentGraph<P, L>) -> bool {
    let mut incident: BTreeMap<AnchorId, Vec<LineId>> = BTreeMap::new();
    for line in g.lines.values() {
        for p in [line.p1, line.p2] {
            if !g.anchors[p].kind.is_attachment() {
                incident.entry(p).or_default().push(line.id);
            }
        }
    }

    for (&anchor, line_ids) in &incident {
        let &[id0, id1] = line_ids.as_slice() else {
            continue;
        };
        let (l0, l1) = (&g.lines[&id0], &g.lines[&id1]);
        if l0.layer != l1.layer || l0.width != l1.width {
            continue;
        }
        let outer0 = if l0.p1 == anchor { l0.p2 } else { l0.p1 };
        let outer1 = if l1.p1 == anchor { l1.p2 } else { l1.p1 };
        if !collinear_between(
            g.anchors[outer0].pos,
            g.anchors[anchor].pos,
            g.anchors[outer1].pos,
        ) {
            continue;
        }

        // Line ids ascend within each incidence list, so id0 is the keeper.
        let far = outer1;
        if let Some(kept) = g.lines.get_mut(&id0) {
            if kept.p1 == anchor {
                kept.p1 = far;
            } else {
                kept.p2 = far;
            }
        }
        g.lines.remove(&id1);
        return true;
    }
    false
}
