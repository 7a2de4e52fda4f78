//! Mutable working graph threaded through the simplification passes.
//!
//! Anchors live in an append-only arena with a redirect table; coalescing
//! rewrites the table instead of splicing references, so a dangling anchor
//! id cannot exist. Lines live in an id-ordered map that passes filter and
//! extend; id order is what makes every pass deterministic.

use std::collections::BTreeMap;

use crate::geom::{Length, Point};
use crate::model::{AnchorId, AnchorKind, LineId};

#[derive(Debug, Clone)]
pub(crate) struct Anchor<P> {
    pub id: AnchorId,
    pub kind: AnchorKind,
    pub pos: Point,
    /// Caller back-references, never interpreted. A coalescing group's
    /// survivor keeps its own pair; the losers' pairs and the anchors
    /// minted by the splitter carry none.
    #[allow(dead_code)]
    pub payload: Option<(P, P)>,
    /// Minted by the splitter during this run, reported in `new_junctions`.
    pub is_new: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct LineRec<L> {
    pub id: LineId,
    pub p1: AnchorId,
    pub p2: AnchorId,
    pub layer: L,
    pub width: Length,
    /// Endpoints the line was added with; the public `modified` flag is
    /// derived from them at assembly time.
    pub born: (AnchorId, AnchorId),
    pub is_new: bool,
}

#[derive(Debug)]
pub(crate) struct SegmentGraph<P, L> {
    pub anchors: Vec<Anchor<P>>,
    /// `redirect[id]` is the id merging replaced `id` with; identity for
    /// live anchors.
    pub redirect: Vec<AnchorId>,
    pub lines: BTreeMap<LineId, LineRec<L>>,
    pub next_line_id: LineId,
    /// Set once any pass changed anything.
    pub modified: bool,
}

impl<P, L> Default for SegmentGraph<P, L> {
    fn default() -> Self {
        Self {
            anchors: Vec::new(),
            redirect: Vec::new(),
            lines: BTreeMap::new(),
            next_line_id: 0,
            modified: false,
        }
    }
}

impl<P, L> SegmentGraph<P, L> {
    pub fn is_live(&self, id: AnchorId) -> bool {
        self.redirect[id] == id
    }

    /// Mint a junction at `pos`, continuing the anchor numbering.
    pub fn add_junction(&mut self, pos: Point) -> AnchorId {
        let id = self.anchors.len();
        self.anchors.push(Anchor {
            id,
            kind: AnchorKind::Junction,
            pos,
            payload: None,
            is_new: true,
        });
        self.redirect.push(id);
        id
    }
}

/// Follow the redirect table to the surviving anchor id.
pub(crate) fn resolve(redirect: &[AnchorId], mut id: AnchorId) -> AnchorId {
    while redirect[id] != id {
        id = redirect[id];
    }
    id
}
