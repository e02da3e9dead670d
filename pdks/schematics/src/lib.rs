//! The schematic technology.
//!
//! Defines the primitives of circuit schematics: pins, gates, flip-flops,
//! passive and active devices, and connectors. Most primitives are drawn from
//! fixed templates. Some redraw themselves from the state of an instance:
//!
//! * bus pins size their discs from the wires on them,
//! * wire pins vanish in the middle of a straight wire,
//! * gates keep their proportions as they grow,
//! * switches gain throws as they get taller,
//! * off-page connectors show the direction of their exports,
//! * devices with several wires on one port get junction dots.
//!
//! Selector bits on an instance pick among the variants of a primitive,
//! such as the kind of transistor or flip-flop.
#![warn(missing_docs)]

use geometry::prelude::*;
use lazy_static::lazy_static;
use technology::diagnostics::IssueSet;
use technology::function::PrimitiveFunction;
use technology::instance::Instance;
use technology::prototype::{PrimitivePrototype, PrototypeId, SizeOffset};
use technology::realize::{port_area, realize_into, Frame, PolygonSink, Shape, ShapeCollector};
use technology::template::{DrawStyle, TemplateLayer};
use technology::Technology;

use crate::symbols::Symbols;
use crate::synth::{gate_size_offset, gate_unit, negating_bubbles, Synthesizer};

pub mod bits;
pub mod config;
mod edges;
pub mod error;
pub mod function;
pub mod kind;
pub mod layers;
pub mod names;
pub mod port;
mod prototypes;
mod symbols;
mod synth;
pub mod variant;

#[cfg(test)]
mod tests;

pub use config::SchematicsConfig;
pub use error::{Error, Result};
pub use kind::SchematicKind;
pub use layers::{SchematicArcs, SchematicLayers};
pub use port::{PortIssue, PortShape};
pub use variant::VariantTables;

/// The name of the schematic technology.
pub const TECHNOLOGY_NAME: &str = "schematic";

/// Nanometers per schematic unit.
pub const SCALE_NM: f64 = 2000.;

lazy_static! {
    /// The schematic technology with the default configuration.
    pub static ref SCHEMATICS: Schematics =
        Schematics::new().expect("default schematic technology is valid");
}

/// The schematic technology.
///
/// Immutable once built. Shape queries take `&self` and may run on many
/// threads at once.
#[derive(Debug)]
pub struct Schematics {
    tech: Technology<SchematicKind>,
    layers: SchematicLayers,
    arcs: SchematicArcs,
    ids: Vec<PrototypeId>,
    variants: VariantTables,
    symbols: Symbols,
    config: SchematicsConfig,
}

impl Schematics {
    /// Builds the technology with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(SchematicsConfig::default())
    }

    /// Builds the technology with the given configuration.
    pub fn with_config(config: SchematicsConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Technology::builder(TECHNOLOGY_NAME);
        builder
            .description("Schematic capture")
            .scale_nm(SCALE_NM)
            .size_convention(config.size_convention);
        let layers = SchematicLayers::install(&mut builder);
        let arcs = SchematicArcs::install(&mut builder, &layers);
        let symbols = Symbols::new(layers);
        let ids: Vec<_> = prototypes::prototypes(&symbols, &arcs)
            .into_iter()
            .map(|proto| builder.add_prototype(proto))
            .collect();
        let tech = builder.build()?;
        let variants = VariantTables::new(&tech, &ids, &symbols);

        if config.hierarchical_bus_pins {
            tracing::warn!("hierarchical bus pin counting is not supported; ignoring");
        }
        tracing::debug!(
            convention = ?config.size_convention,
            prototypes = ids.len(),
            "built schematic technology"
        );

        Ok(Self {
            tech,
            layers,
            arcs,
            ids,
            variants,
            symbols,
            config,
        })
    }

    /// The underlying technology description.
    #[inline]
    pub fn technology(&self) -> &Technology<SchematicKind> {
        &self.tech
    }

    /// The drawing layers.
    #[inline]
    pub fn layers(&self) -> &SchematicLayers {
        &self.layers
    }

    /// The wire and bus arcs.
    #[inline]
    pub fn arcs(&self) -> &SchematicArcs {
        &self.arcs
    }

    /// The configuration the technology was built with.
    #[inline]
    pub fn config(&self) -> &SchematicsConfig {
        &self.config
    }

    /// The variant layer lists.
    #[inline]
    pub fn variants(&self) -> &VariantTables {
        &self.variants
    }

    /// The prototype of the given kind.
    pub fn id(&self, kind: SchematicKind) -> PrototypeId {
        self.ids[kind.index()]
    }

    /// The prototype of the given kind.
    pub fn prototype(&self, kind: SchematicKind) -> Option<&PrimitivePrototype<SchematicKind>> {
        self.tech.prototype(self.id(kind))
    }

    /// Looks up a prototype by name, ignoring case.
    pub fn prototype_by_name(&self, name: &str) -> Option<&PrimitivePrototype<SchematicKind>> {
        self.tech
            .prototype_by_name(name)
            .and_then(|id| self.tech.prototype(id))
    }

    /// The kind of primitive an instance places.
    ///
    /// Returns `None` if the instance refers to a prototype of another technology.
    pub fn kind_of(&self, instance: &Instance) -> Option<SchematicKind> {
        self.tech.prototype_of(instance).map(|p| *p.kind())
    }

    /// The template layers drawn for an instance.
    ///
    /// The result reflects the instance's selector, size, connections, and exports,
    /// but not its negated connections, which [`Schematics::shape_of_node`] draws
    /// separately.
    pub fn node_layers(&self, instance: &Instance) -> Option<std::sync::Arc<[TemplateLayer]>> {
        let prototype = self.tech.prototype_of(instance)?;
        let kind = *prototype.kind();
        let resolved = self.variants.resolve(kind, instance.selector());
        Some(self.synthesizer().synthesize(
            prototype,
            instance.prototype(),
            instance,
            resolved,
        ))
    }

    /// The absolute shapes of an instance.
    ///
    /// Returns an empty list if the instance is not a schematic primitive.
    pub fn shape_of_node(&self, instance: &Instance) -> Vec<Shape> {
        let mut collector = ShapeCollector::new();
        self.shape_of_node_into(instance, &mut collector);
        collector.into_shapes()
    }

    /// Delivers the absolute shapes of an instance to `sink`.
    pub fn shape_of_node_into<S: PolygonSink + ?Sized>(&self, instance: &Instance, sink: &mut S) {
        let (Some(prototype), Some(layers)) =
            (self.tech.prototype_of(instance), self.node_layers(instance))
        else {
            tracing::debug!(
                prototype = instance.prototype().index(),
                "not a schematic primitive"
            );
            return;
        };
        realize_into(&layers, &Frame::from_instance(instance), sink);
        negating_bubbles(
            prototype,
            instance,
            self.layers.node,
            self.config.negating_bubble_size,
            sink,
        );
    }

    /// The area of port `port` on an instance.
    ///
    /// When `select` is given on an area port of a gate, multiplexer, or switch,
    /// the result is the single free wire position closest to `select`. Returns
    /// `None` if the instance is not a schematic primitive or has no such port.
    pub fn shape_of_port(
        &self,
        instance: &Instance,
        port: usize,
        select: Option<Point>,
    ) -> Option<PortShape> {
        let prototype = self.tech.prototype_of(instance)?;
        let template = prototype.port(port)?;
        let kind = *prototype.kind();
        let (width, height) = self.tech.full_extent(instance);
        let lambda = gate_unit(kind, width, height);

        let mut issues = IssueSet::new();
        let (polygon, style) = match select {
            Some(select) if port == 0 && kind.has_port_search() => {
                let frame = Frame::new(instance.anchor(), width, height, instance.orientation());
                let point = crate::port::search(kind, instance, &frame, lambda, select, &mut issues);
                (Polygon::from_verts(vec![point]), DrawStyle::Filled)
            }
            _ => {
                let area = port_area(template, &Frame::from_instance(instance), lambda);
                (area.polygon, area.style)
            }
        };
        Some(PortShape {
            polygon,
            style,
            issues,
        })
    }

    /// The size-offset border of an instance.
    ///
    /// Gates scale their border with their drawing; other primitives use the
    /// prototype's fixed border.
    pub fn size_offset(&self, instance: &Instance) -> Option<SizeOffset> {
        let prototype = self.tech.prototype_of(instance)?;
        let kind = *prototype.kind();
        let (width, height) = self.tech.full_extent(instance);
        Some(
            gate_size_offset(kind, gate_unit(kind, width, height))
                .unwrap_or_else(|| prototype.size_offset()),
        )
    }

    /// The function of an instance, taking its selector into account.
    pub fn primitive_function(&self, instance: &Instance) -> Option<PrimitiveFunction> {
        self.kind_of(instance)
            .map(|kind| function::primitive_function(kind, instance.selector()))
    }

    /// Maps a port name from an older library to a current port index.
    pub fn convert_old_port_name(&self, kind: SchematicKind, name: &str) -> Option<usize> {
        self.prototype(kind)
            .and_then(|proto| names::convert_old_port_name(proto, name))
    }

    /// The configured VHDL name of a primitive, as `name/negated-name`.
    pub fn vhdl_names(&self, kind: SchematicKind) -> Option<&str> {
        self.config.vhdl_names.get(kind.name()).map(String::as_str)
    }

    fn synthesizer(&self) -> Synthesizer<'_> {
        Synthesizer {
            tech: &self.tech,
            symbols: &self.symbols,
            layers: self.layers,
            arcs: self.arcs,
        }
    }
}
