//! Port shapes and the placement search on area ports.

use std::fmt::Display;

use geometry::prelude::*;
use technology::diagnostics::{Diagnostic, IssueSet};
use technology::instance::Instance;
use technology::realize::Frame;
use technology::template::DrawStyle;

use crate::kind::SchematicKind;

/// Candidates closer than this to an existing connection are occupied.
const OCCUPIED_TOLERANCE: f64 = 1e-9;

/// An issue found while computing a port shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PortIssue {
    /// Every candidate position on an area port already has a wire.
    SearchExhausted {
        /// The primitive being searched.
        kind: SchematicKind,
        /// The number of candidates tried.
        candidates: usize,
    },
}

impl Display for PortIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortIssue::SearchExhausted { kind, candidates } => write!(
                f,
                "cannot find a free port position on {kind} ({candidates} candidates occupied)"
            ),
        }
    }
}

impl Diagnostic for PortIssue {
    fn help(&self) -> Option<Box<dyn Display>> {
        match self {
            PortIssue::SearchExhausted { .. } => Some(Box::new(
                "enlarge the primitive or move existing wires off the port",
            )),
        }
    }
}

/// The evaluated shape of a port on an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PortShape {
    /// The port area in absolute coordinates, or a single point.
    pub polygon: Polygon,
    /// How the area is drawn.
    pub style: DrawStyle,
    /// Issues found while computing the shape.
    pub issues: IssueSet<PortIssue>,
}

/// The horizontal position of candidate `i`, in units of the gate lambda.
fn candidate_x(kind: SchematicKind, width: f64, i: usize) -> f64 {
    match kind {
        SchematicKind::Switch => -2.,
        SchematicKind::Mux => -width * 4. / 10.,
        SchematicKind::Or | SchematicKind::Xor => match i {
            0 => -4. + 0.75,
            1 | 2 => -4. + 0.5,
            _ => -4.,
        },
        _ => -4.,
    }
}

/// The vertical position of candidate `i`: 0, -2, 2, -4, 4, ...
fn candidate_y(i: usize) -> f64 {
    let y = ((i + 1) / 2 * 2) as f64;
    if i % 2 == 1 {
        -y
    } else {
        y
    }
}

/// Finds a free wire position on port 0 of an area-port primitive, closest to `select`.
///
/// `frame` is the instance frame at full size. Candidates alternate above and below the
/// center of the port, with two more candidates than there are wires on it. Ties go to the
/// earlier candidate. If every candidate is taken, a warning is recorded in `issues` and
/// the first candidate is returned.
pub(crate) fn search(
    kind: SchematicKind,
    instance: &Instance,
    frame: &Frame,
    lambda: f64,
    select: Point,
    issues: &mut IssueSet<PortIssue>,
) -> Point {
    let total = (instance.connections_on(0).count() + 2).max(3);
    let candidate = |i: usize| {
        let local = Point::new(candidate_x(kind, frame.width(), i), candidate_y(i)) * lambda;
        frame.to_absolute(local)
    };
    let occupied = |p: Point| {
        instance
            .connections()
            .iter()
            .any(|c| c.location.manhattan_distance(p) < OCCUPIED_TOLERANCE)
    };

    let mut best: Option<(f64, Point)> = None;
    for p in (0..total).map(candidate).filter(|&p| !occupied(p)) {
        let dist = p.manhattan_distance(select);
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, p));
        }
    }

    match best {
        Some((_, p)) => p,
        None => {
            issues.emit(PortIssue::SearchExhausted {
                kind,
                candidates: total,
            });
            candidate(0)
        }
    }
}
