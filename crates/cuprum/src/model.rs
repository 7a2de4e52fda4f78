//! Public data model of the simplifier.
//!
//! These types are intentionally lightweight and `Clone`-friendly so callers
//! can diff a result against their own board model in deterministic tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::geom::{Length, Point};

/// Dense anchor index, assigned in insertion order starting at 0.
///
/// Ids are only meaningful within one accumulate/simplify cycle; the counter
/// restarts at 0 once [`simplify`](crate::NetSegmentSimplifier::simplify)
/// has drained the accumulator.
pub type AnchorId = usize;

/// Dense line index, numbered independently from anchors.
pub type LineId = usize;

/// What a vertex of the net segment graph stands for in the board model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// A free bend or T point; owned by the net segment itself.
    Junction,
    /// A plated through-hole connecting copper layers.
    Via,
    /// A fixed attachment point of a device. Pins and pads are canonical:
    /// they are never merged away, even when they coincide.
    PinOrPad,
}

impl AnchorKind {
    /// Whether this anchor is a device attachment point rather than passive
    /// segment geometry. Attachment points survive coalescing, are never
    /// bend points, and are reported when they end up without copper.
    pub fn is_attachment(self) -> bool {
        match self {
            AnchorKind::PinOrPad => true,
            AnchorKind::Junction | AnchorKind::Via => false,
        }
    }
}

/// An edge of the net segment graph: a straight copper line between two
/// anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<L> {
    pub id: LineId,
    pub p1: AnchorId,
    pub p2: AnchorId,
    pub layer: L,
    pub width: Length,
    /// True when `(p1, p2)` differ from the endpoints the line was added
    /// with, or when the line was created by a split.
    pub modified: bool,
}

/// Output of one [`simplify`](crate::NetSegmentSimplifier::simplify) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyResult<L> {
    /// Surviving lines, ascending by id. Lines that survive unsplit keep
    /// their original id; lines created by splits continue the numbering.
    pub lines: Vec<Line<L>>,
    /// Anchors minted by the intersection splitter, keyed by their new id.
    /// Pre-existing anchors never show up here, even when a split reuses
    /// them.
    pub new_junctions: BTreeMap<AnchorId, Point>,
    /// Pins and pads that ended up with zero incident lines.
    pub disconnected_pins_or_pads: BTreeSet<AnchorId>,
    /// Whether the output differs from the input in any way.
    pub modified: bool,
}

impl<L> Default for SimplifyResult<L> {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            new_junctions: BTreeMap::new(),
            disconnected_pins_or_pads: BTreeSet::new(),
            modified: false,
        }
    }
}
