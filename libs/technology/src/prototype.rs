//! Primitive prototypes.

use std::sync::Arc;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::function::PrimitiveFunction;
use crate::port::PortTemplate;
use crate::template::{SizeCorrection, TemplateLayer};

/// An index of a [`PrimitivePrototype`] within a technology.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PrototypeId(pub(crate) usize);

impl PrototypeId {
    /// The position of the prototype in its technology's prototype table.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The border between a prototype's bounding box and its visible geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeOffset {
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the top edge.
    pub top: f64,
}

impl SizeOffset {
    /// Creates a new size offset.
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// A size offset with no border.
    pub const fn zero() -> Self {
        Self::new(0., 0., 0., 0.)
    }

    /// Whether there is no border.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// The total horizontal border.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// The total vertical border.
    pub fn vertical(&self) -> f64 {
        self.bottom + self.top
    }

    /// The correction [`fixup`](crate::template::fixup) applies for this border.
    pub fn correction(&self) -> SizeCorrection {
        SizeCorrection::from_size_offset(self)
    }
}

/// A primitive symbol: a default size, template layers, and ports.
///
/// `K` is the technology's tag for the prototype, used to dispatch
/// behavior that depends on which primitive this is.
#[derive(Debug, Clone)]
pub struct PrimitivePrototype<K> {
    name: ArcStr,
    kind: K,
    default_width: f64,
    default_height: f64,
    size_offset: SizeOffset,
    layers: Arc<[TemplateLayer]>,
    ports: Vec<PortTemplate>,
    function: PrimitiveFunction,
}

impl<K> PrimitivePrototype<K> {
    /// Creates a prototype with no layers and no ports.
    pub fn new(
        name: impl Into<ArcStr>,
        kind: K,
        default_width: f64,
        default_height: f64,
        function: PrimitiveFunction,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            default_width,
            default_height,
            size_offset: SizeOffset::zero(),
            layers: Arc::from(Vec::<TemplateLayer>::new()),
            ports: Vec::new(),
            function,
        }
    }

    /// Sets the size offset.
    pub fn with_size_offset(mut self, size_offset: SizeOffset) -> Self {
        self.size_offset = size_offset;
        self
    }

    /// Sets the base template layers.
    pub fn with_layers(mut self, layers: impl Into<Vec<TemplateLayer>>) -> Self {
        self.layers = Arc::from(layers.into());
        self
    }

    /// Sets the ports.
    pub fn with_ports(mut self, ports: impl Into<Vec<PortTemplate>>) -> Self {
        self.ports = ports.into();
        self
    }

    /// The prototype name.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The technology's tag for this prototype.
    #[inline]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// The width of a newly placed instance.
    #[inline]
    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    /// The height of a newly placed instance.
    #[inline]
    pub fn default_height(&self) -> f64 {
        self.default_height
    }

    /// The size offset.
    #[inline]
    pub fn size_offset(&self) -> SizeOffset {
        self.size_offset
    }

    /// The base template layers.
    #[inline]
    pub fn layers(&self) -> &Arc<[TemplateLayer]> {
        &self.layers
    }

    /// The ports, in declaration order.
    #[inline]
    pub fn ports(&self) -> &[PortTemplate] {
        &self.ports
    }

    /// The port at `index`.
    #[inline]
    pub fn port(&self, index: usize) -> Option<&PortTemplate> {
        self.ports.get(index)
    }

    /// Finds a port by name.
    pub fn port_by_name(&self, name: &str) -> Option<(usize, &PortTemplate)> {
        self.ports
            .iter()
            .enumerate()
            .find(|(_, p)| p.name().as_str() == name)
    }

    /// The primitive function.
    #[inline]
    pub fn function(&self) -> PrimitiveFunction {
        self.function
    }

    pub(crate) fn fixup(&self, correction: SizeCorrection) -> Self
    where
        K: Clone,
    {
        let layers: Vec<_> = self
            .layers
            .iter()
            .map(|l| crate::template::fixup(l, correction))
            .collect();
        Self {
            layers: Arc::from(layers),
            ports: self.ports.iter().map(|p| p.fixup(correction)).collect(),
            ..self.clone()
        }
    }
}
