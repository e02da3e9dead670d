//! Snapshots of placed primitives.

use derive_builder::Builder;
use geometry::prelude::*;
use serde::{Deserialize, Serialize};

use crate::layer::ArcId;
use crate::port::PortCharacteristic;
use crate::prototype::PrototypeId;

/// A wire end attached to a port of an instance.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// The index of the port within the prototype.
    pub port: usize,
    /// The kind of wire.
    pub arc: ArcId,
    /// Where the wire end sits, in absolute coordinates.
    pub location: Point,
    /// Whether the connection is drawn with a negating bubble.
    pub negated: bool,
}

impl Connection {
    /// Creates a non-negated connection.
    pub fn new(port: usize, arc: ArcId, location: Point) -> Self {
        Self {
            port,
            arc,
            location,
            negated: false,
        }
    }

    /// Marks the connection as negated.
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }
}

/// A port of an instance that is exported from its enclosing cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    /// The index of the port within the prototype.
    pub port: usize,
    /// The characteristic of the export.
    pub characteristic: PortCharacteristic,
}

impl Export {
    /// Creates a new export.
    pub fn new(port: usize, characteristic: PortCharacteristic) -> Self {
        Self {
            port,
            characteristic,
        }
    }
}

/// A read-only snapshot of a placed primitive.
///
/// The anchor is the center of the instance's bounding box. Geometry is
/// oriented about the anchor.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Instance {
    /// The prototype being instantiated.
    prototype: PrototypeId,
    /// The center of the bounding box.
    #[builder(setter(into), default)]
    anchor: Point,
    /// The reported width.
    width: f64,
    /// The reported height.
    height: f64,
    /// Rotation and reflection about the anchor.
    #[builder(setter(into), default)]
    orientation: Orientation,
    /// Technology-specific variant bits.
    #[builder(default)]
    selector: u32,
    /// Wire ends attached to the instance, grouped by port.
    #[builder(default)]
    connections: Vec<Connection>,
    /// Ports exported from the enclosing cell.
    #[builder(default)]
    exports: Vec<Export>,
}

impl Instance {
    /// Returns a new [`InstanceBuilder`].
    #[inline]
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::default()
    }

    /// The prototype being instantiated.
    #[inline]
    pub fn prototype(&self) -> PrototypeId {
        self.prototype
    }

    /// The center of the bounding box.
    #[inline]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The reported width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The reported height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The variant bits.
    #[inline]
    pub fn selector(&self) -> u32 {
        self.selector
    }

    /// All connections.
    #[inline]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Connections on the given port.
    pub fn connections_on(&self, port: usize) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.port == port)
    }

    /// Exported ports.
    #[inline]
    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    /// Whether any port is exported.
    #[inline]
    pub fn has_exports(&self) -> bool {
        !self.exports.is_empty()
    }
}
