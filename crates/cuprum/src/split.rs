//! Split lines at crossing points and at anchors lying on them.
//!
//! Two stages. First, every same-layer pair of lines whose interiors cross
//! at a grid point gets a junction minted at the crossing (one junction per
//! coordinate, and never where an anchor already sits). Second, any line
//! with an anchor on its open interior is cut there: the line keeps its id
//! and ends at the anchor, and a new line with the next free id continues
//! to the old far endpoint.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::geom::{Point, collinear_between, segment_crossing};
use crate::graph::{LineRec, SegmentGraph};
use crate::model::{AnchorId, LineId};

pub(crate) fn run<P, L: Clone + PartialEq>(g: &mut SegmentGraph<P, L>) -> bool {
    let minted = add_junctions_at_crossings(g);
    let split = split_lines_at_anchors(g);
    minted || split
}

fn add_junctions_at_crossings<P, L: PartialEq>(g: &mut SegmentGraph<P, L>) -> bool {
    let mut crossings: Vec<Point> = Vec::new();
    {
        let segs: Vec<(Point, Point, &L)> = g
            .lines
            .values()
            .map(|line| (g.anchors[line.p1].pos, g.anchors[line.p2].pos, &line.layer))
            .collect();
        for (i, &(a1, a2, layer0)) in segs.iter().enumerate() {
            for &(b1, b2, layer1) in &segs[i + 1..] {
                if layer0 != layer1 {
                    continue;
                }
                if let Some(pos) = segment_crossing(a1, a2, b1, b2) {
                    crossings.push(pos);
                }
            }
        }
    }

    // Coordinate-keyed interning: several pairs crossing at one coordinate
    // share a single junction, and an existing anchor at the coordinate is
    // reused as-is (the second stage will split through it).
    let mut occupied: FxHashSet<Point> = g.anchors.iter().map(|a| a.pos).collect();
    let mut changed = false;
    for pos in crossings {
        if occupied.insert(pos) {
            g.add_junction(pos);
            changed = true;
        }
    }
    changed
}

fn split_lines_at_anchors<P, L: Clone>(g: &mut SegmentGraph<P, L>) -> bool {
    // The same line may need several cuts, so rescan from the lowest id
    // after every split. Growth is capped like the interactive tools cap
    // it; hitting the cap means the predicates disagree with each other,
    // and the whole stage is discarded rather than looping forever.
    let max_lines = g.lines.len() * 2 + 10;
    let mut lines = g.lines.clone();
    let mut next_line_id = g.next_line_id;
    let mut finished: FxHashSet<LineId> = FxHashSet::default();
    let mut changed = false;

    loop {
        let mut split: Option<(LineId, AnchorId)> = None;
        for (&id, line) in &lines {
            if finished.contains(&id) {
                continue;
            }
            match find_anchor_on_interior(g, &lines, line) {
                Some(anchor) => {
                    split = Some((id, anchor));
                    break;
                }
                None => {
                    finished.insert(id);
                }
            }
        }
        let Some((id, anchor)) = split else { break };

        if let Some(line) = lines.get_mut(&id) {
            let tail = line.p2;
            let layer = line.layer.clone();
            let width = line.width;
            line.p2 = anchor;

            let new_id = next_line_id;
            next_line_id += 1;
            lines.insert(
                new_id,
                LineRec {
                    id: new_id,
                    p1: anchor,
                    p2: tail,
                    layer,
                    width,
                    born: (anchor, tail),
                    is_new: true,
                },
            );
            changed = true;
        }

        if lines.len() >= max_lines {
            tracing::warn!(
                initial = g.lines.len(),
                reached = lines.len(),
                "aborted net segment line splitting, discarding the stage"
            );
            return false;
        }
    }

    if changed {
        g.lines = lines;
        g.next_line_id = next_line_id;
    }
    changed
}

fn find_anchor_on_interior<P, L>(
    g: &SegmentGraph<P, L>,
    lines: &BTreeMap<LineId, LineRec<L>>,
    line: &LineRec<L>,
) -> Option<AnchorId> {
    let p1 = g.anchors[line.p1].pos;
    let p2 = g.anchors[line.p2].pos;
    g.anchors
        .iter()
        .filter(|a| g.is_live(a.id))
        .find(|a| {
            collinear_between(p1, a.pos, p2)
                // A stray junction or via with no copper of its own is left
                // alone: cutting there would only create a bend point for
                // the merge pass to undo. Pins/pads always connect, and a
                // freshly minted crossing junction exists to be cut into.
                && (a.kind.is_attachment()
                    || a.is_new
                    || lines.values().any(|l| l.p1 == a.id || l.p2 == a.id))
        })
        .map(|a| a.id)
}
