//! Immutable technology descriptions and their builder.

use arcstr::ArcStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use unicase::UniCase;

use crate::drc::SpacingMatrix;
use crate::error::{BuildError, Result};
use crate::instance::Instance;
use crate::interchange::InterchangeTable;
use crate::layer::{ArcId, ArcProto, Layer, LayerId};
use crate::prototype::{PrimitivePrototype, PrototypeId};
use crate::template::{fixup, TemplateLayer};

/// Whether an instance's reported size includes its prototype's size-offset border.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeConvention {
    /// Reported sizes span the full bounding box.
    #[default]
    IncludesOffset,
    /// Reported sizes span only the visible geometry inside the border.
    ExcludesOffset,
}

/// A complete, immutable technology.
///
/// Built once by a [`TechnologyBuilder`] and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Technology<K> {
    name: ArcStr,
    description: ArcStr,
    scale_nm: f64,
    layers: Vec<Layer>,
    arcs: Vec<ArcProto>,
    prototypes: Vec<PrimitivePrototype<K>>,
    names: IndexMap<UniCase<ArcStr>, PrototypeId>,
    spacing: SpacingMatrix,
    interchange: InterchangeTable,
    size_convention: SizeConvention,
}

impl<K> Technology<K> {
    /// Returns a new [`TechnologyBuilder`].
    pub fn builder(name: impl Into<ArcStr>) -> TechnologyBuilder<K> {
        TechnologyBuilder::new(name)
    }

    /// The technology name.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// A human-readable description.
    #[inline]
    pub fn description(&self) -> &ArcStr {
        &self.description
    }

    /// Nanometers per technology unit.
    #[inline]
    pub fn scale_nm(&self) -> f64 {
        self.scale_nm
    }

    /// The layer with the given id.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    /// All layers, in id order.
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers.iter().enumerate().map(|(i, l)| (LayerId(i), l))
    }

    /// Finds a layer by name.
    pub fn layer_by_name(&self, name: &str) -> Option<LayerId> {
        self.layers().find(|(_, l)| l.name() == name).map(|(id, _)| id)
    }

    /// The arc with the given id.
    pub fn arc(&self, id: ArcId) -> Option<&ArcProto> {
        self.arcs.get(id.0)
    }

    /// All arcs, in id order.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &ArcProto)> {
        self.arcs.iter().enumerate().map(|(i, a)| (ArcId(i), a))
    }

    /// Finds an arc by name.
    pub fn arc_by_name(&self, name: &str) -> Option<ArcId> {
        self.arcs().find(|(_, a)| a.name() == name).map(|(id, _)| id)
    }

    /// The prototype with the given id.
    pub fn prototype(&self, id: PrototypeId) -> Option<&PrimitivePrototype<K>> {
        self.prototypes.get(id.0)
    }

    /// All prototypes, in id order.
    pub fn prototypes(&self) -> impl Iterator<Item = (PrototypeId, &PrimitivePrototype<K>)> {
        self.prototypes
            .iter()
            .enumerate()
            .map(|(i, p)| (PrototypeId(i), p))
    }

    /// Finds a prototype by name, ignoring case.
    pub fn prototype_by_name(&self, name: &str) -> Option<PrototypeId> {
        self.names
            .get(&UniCase::new(ArcStr::from(name)))
            .copied()
    }

    /// The prototype of an instance.
    pub fn prototype_of(&self, instance: &Instance) -> Option<&PrimitivePrototype<K>> {
        self.prototype(instance.prototype())
    }

    /// The spacing rules.
    #[inline]
    pub fn spacing(&self) -> &SpacingMatrix {
        &self.spacing
    }

    /// The interchange layer names.
    #[inline]
    pub fn interchange(&self) -> &InterchangeTable {
        &self.interchange
    }

    /// How instance sizes are reported.
    #[inline]
    pub fn size_convention(&self) -> SizeConvention {
        self.size_convention
    }

    /// Prepares freshly built template layers for a prototype of this technology.
    ///
    /// Under [`SizeConvention::ExcludesOffset`] each layer is fixed up once for the
    /// prototype's size offset. Pass only layers that have not been adopted before.
    pub fn adopt(&self, prototype: PrototypeId, layers: Vec<TemplateLayer>) -> Vec<TemplateLayer> {
        let Some(proto) = self.prototype(prototype) else {
            return layers;
        };
        let correction = proto.size_offset().correction();
        if self.size_convention == SizeConvention::IncludesOffset || correction.is_zero() {
            return layers;
        }
        layers.iter().map(|l| fixup(l, correction)).collect()
    }

    /// The full width and height of an instance, including the size-offset border.
    pub fn full_extent(&self, instance: &Instance) -> (f64, f64) {
        let (w, h) = (instance.width(), instance.height());
        match (self.size_convention, self.prototype_of(instance)) {
            (SizeConvention::ExcludesOffset, Some(proto)) => {
                let so = proto.size_offset();
                (w + so.horizontal(), h + so.vertical())
            }
            _ => (w, h),
        }
    }
}

/// A builder for [`Technology`].
#[derive(Debug, Clone)]
pub struct TechnologyBuilder<K> {
    name: ArcStr,
    description: ArcStr,
    scale_nm: f64,
    layers: Vec<Layer>,
    arcs: Vec<ArcProto>,
    prototypes: Vec<PrimitivePrototype<K>>,
    spacing: Option<SpacingMatrix>,
    interchange: InterchangeTable,
    size_convention: SizeConvention,
}

impl<K> TechnologyBuilder<K> {
    /// Creates an empty builder.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: ArcStr::new(),
            scale_nm: 1.,
            layers: Vec::new(),
            arcs: Vec::new(),
            prototypes: Vec::new(),
            spacing: None,
            interchange: InterchangeTable::new(),
            size_convention: SizeConvention::default(),
        }
    }

    /// Sets the description.
    pub fn description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Sets the number of nanometers per technology unit.
    pub fn scale_nm(&mut self, scale_nm: f64) -> &mut Self {
        self.scale_nm = scale_nm;
        self
    }

    /// Sets the size convention.
    pub fn size_convention(&mut self, size_convention: SizeConvention) -> &mut Self {
        self.size_convention = size_convention;
        self
    }

    /// Sets the spacing rules. Without this, the technology gets an empty matrix.
    pub fn spacing(&mut self, spacing: SpacingMatrix) -> &mut Self {
        self.spacing = Some(spacing);
        self
    }

    /// Sets the interchange layer names.
    pub fn interchange(&mut self, interchange: InterchangeTable) -> &mut Self {
        self.interchange = interchange;
        self
    }

    /// Adds a layer.
    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        self.layers.push(layer);
        LayerId(self.layers.len() - 1)
    }

    /// Adds an arc.
    pub fn add_arc(&mut self, arc: ArcProto) -> ArcId {
        self.arcs.push(arc);
        ArcId(self.arcs.len() - 1)
    }

    /// Adds a prototype.
    pub fn add_prototype(&mut self, prototype: PrimitivePrototype<K>) -> PrototypeId {
        self.prototypes.push(prototype);
        PrototypeId(self.prototypes.len() - 1)
    }

    fn validate(&self) -> Result<IndexMap<UniCase<ArcStr>, PrototypeId>> {
        let num_layers = self.layers.len();
        for layer in self.layers.iter() {
            if layer.name().is_empty() {
                return Err(BuildError::EmptyName("layer"));
            }
        }
        for arc in self.arcs.iter() {
            if arc.name().is_empty() {
                return Err(BuildError::EmptyName("arc"));
            }
            if arc.layer().0 >= num_layers {
                return Err(BuildError::UnknownLayer {
                    owner: arc.name().clone(),
                    layer: arc.layer().0,
                });
            }
        }

        let mut names = IndexMap::new();
        for (i, proto) in self.prototypes.iter().enumerate() {
            if proto.name().is_empty() {
                return Err(BuildError::EmptyName("prototype"));
            }
            if let Some(layer) = proto.layers().iter().find(|l| l.layer().0 >= num_layers) {
                return Err(BuildError::UnknownLayer {
                    owner: proto.name().clone(),
                    layer: layer.layer().0,
                });
            }
            for port in proto.ports() {
                if let Some(arc) = port.allowed_arcs().iter().find(|a| a.0 >= self.arcs.len()) {
                    return Err(BuildError::UnknownArc {
                        prototype: proto.name().clone(),
                        port: port.name().clone(),
                        arc: arc.0,
                    });
                }
            }
            if names
                .insert(UniCase::new(proto.name().clone()), PrototypeId(i))
                .is_some()
            {
                return Err(BuildError::DuplicatePrototype(proto.name().clone()));
            }
        }
        Ok(names)
    }

    /// Validates the description and produces an immutable [`Technology`].
    ///
    /// Under [`SizeConvention::ExcludesOffset`] every prototype's base layers and ports
    /// are fixed up here, exactly once.
    pub fn build(&self) -> Result<Technology<K>>
    where
        K: Clone,
    {
        let names = self.validate()?;
        let prototypes = match self.size_convention {
            SizeConvention::IncludesOffset => self.prototypes.clone(),
            SizeConvention::ExcludesOffset => self
                .prototypes
                .iter()
                .map(|p| p.fixup(p.size_offset().correction()))
                .collect(),
        };
        tracing::debug!(
            name = %self.name,
            layers = self.layers.len(),
            arcs = self.arcs.len(),
            prototypes = prototypes.len(),
            "built technology"
        );
        Ok(Technology {
            name: self.name.clone(),
            description: self.description.clone(),
            scale_nm: self.scale_nm,
            layers: self.layers.clone(),
            arcs: self.arcs.clone(),
            prototypes,
            names,
            spacing: self
                .spacing
                .clone()
                .unwrap_or_else(|| SpacingMatrix::new(self.layers.len())),
            interchange: self.interchange.clone(),
            size_convention: self.size_convention,
        })
    }
}
