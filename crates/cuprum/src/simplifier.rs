//! The public accumulator and the pass pipeline.
//!
//! `simplify` runs the five passes (coalesce, drop degenerate lines, drop
//! duplicates, split at intersections, merge collinear chains) as rounds
//! over the accumulated graph until a whole round changes nothing. Splitting
//! can expose new coincidences and merging can expose new duplicates, so a
//! single ordered sweep is not enough in general; the fixed point is.

use std::collections::{BTreeMap, BTreeSet};
use std::mem;

use rustc_hash::FxHashSet;

use crate::geom::{Length, Point};
use crate::graph::{Anchor, LineRec, SegmentGraph};
use crate::model::{AnchorId, AnchorKind, Line, LineId, SimplifyResult};
use crate::{coalesce, dedupe, degenerate, merge, split};

/// Canonicalizes one net segment's worth of connection geometry.
///
/// The simplifier is an accumulator: [`add_anchor`](Self::add_anchor) and
/// [`add_line`](Self::add_line) build up the graph, then one
/// [`simplify`](Self::simplify) call computes the canonical form and drains
/// the accumulator, so the instance can be reused for the next segment with
/// ids starting from 0 again.
///
/// `P` is an opaque payload the caller can attach to each anchor (a board
/// item reference, say); the simplifier never inspects it. `L` is the
/// caller's copper layer reference; the passes only ever compare layers for
/// equality. Callers that need neither instantiate both with `()`.
pub struct NetSegmentSimplifier<P = (), L = ()> {
    graph: SegmentGraph<P, L>,
}

impl<P, L> Default for NetSegmentSimplifier<P, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, L> NetSegmentSimplifier<P, L> {
    pub fn new() -> Self {
        Self {
            graph: SegmentGraph::default(),
        }
    }

    /// Appends an anchor and returns its id (0-based, insertion order).
    ///
    /// Duplicates are permitted and expected; resolving them is the whole
    /// point of [`simplify`](Self::simplify).
    pub fn add_anchor(
        &mut self,
        kind: AnchorKind,
        pos: Point,
        payload_a: P,
        payload_b: P,
    ) -> AnchorId {
        let id = self.graph.anchors.len();
        self.graph.anchors.push(Anchor {
            id,
            kind,
            pos,
            payload: Some((payload_a, payload_b)),
            is_new: false,
        });
        self.graph.redirect.push(id);
        id
    }

    /// Appends a line between two previously added anchors and returns its
    /// id (0-based, numbered independently from anchors).
    ///
    /// # Panics
    ///
    /// When an endpoint does not reference a previously added anchor. That
    /// is a broken caller, not a recoverable condition.
    pub fn add_line(&mut self, p1: AnchorId, p2: AnchorId, layer: L, width: Length) -> LineId {
        let anchors = self.graph.anchors.len();
        assert!(
            p1 < anchors && p2 < anchors,
            "line endpoints ({p1}, {p2}) must reference existing anchors (have {anchors})"
        );

        let id = self.graph.next_line_id;
        self.graph.next_line_id += 1;
        self.graph.lines.insert(
            id,
            LineRec {
                id,
                p1,
                p2,
                layer,
                width,
                born: (p1, p2),
                is_new: false,
            },
        );
        id
    }
}

impl<P, L: Clone + PartialEq> NetSegmentSimplifier<P, L> {
    /// Computes the canonical form of the accumulated graph and drains the
    /// accumulator.
    ///
    /// Calling this on an empty accumulator returns an all-empty result
    /// with `modified == false`.
    pub fn simplify(&mut self) -> SimplifyResult<L> {
        let mut graph = mem::take(&mut self.graph);

        // Generous round cap; real segments settle within a couple of
        // rounds, and a run that does not is a predicate bug we would
        // rather surface than spin on.
        let round_cap = graph.anchors.len() + graph.lines.len() + 8;
        let mut rounds = 0usize;
        loop {
            let mut changed = coalesce::run(&mut graph);
            changed |= degenerate::run(&mut graph);
            changed |= dedupe::run(&mut graph);
            changed |= split::run(&mut graph);
            changed |= merge::run(&mut graph);
            if !changed {
                break;
            }
            graph.modified = true;
            rounds += 1;
            if rounds > round_cap {
                tracing::warn!(
                    rounds,
                    "net segment simplification did not settle, returning best-effort result"
                );
                break;
            }
        }

        assemble(graph)
    }
}

fn assemble<P, L>(graph: SegmentGraph<P, L>) -> SimplifyResult<L> {
    let mut connected: FxHashSet<AnchorId> = FxHashSet::default();
    for line in graph.lines.values() {
        connected.insert(line.p1);
        connected.insert(line.p2);
    }

    let new_junctions: BTreeMap<AnchorId, Point> = graph
        .anchors
        .iter()
        .filter(|a| a.is_new)
        .map(|a| (a.id, a.pos))
        .collect();

    let disconnected_pins_or_pads: BTreeSet<AnchorId> = graph
        .anchors
        .iter()
        .filter(|a| a.kind.is_attachment() && !connected.contains(&a.id))
        .map(|a| a.id)
        .collect();

    let modified = graph.modified;
    let lines: Vec<Line<L>> = graph
        .lines
        .into_values()
        .map(|rec| Line {
            id: rec.id,
            p1: rec.p1,
            p2: rec.p2,
            layer: rec.layer,
            width: rec.width,
            modified: rec.is_new || (rec.p1, rec.p2) != rec.born,
        })
        .collect();

    SimplifyResult {
        lines,
        new_junctions,
        disconnected_pins_or_pads,
        modified,
    }
}
