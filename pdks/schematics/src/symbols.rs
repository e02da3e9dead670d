//! Template layers for the schematic symbols.
//!
//! Pieces shared between several variant lists are built by one method each, so
//! every list that uses a piece gets an identical copy.

use technology::edge::EdgeDescriptor;
use technology::layer::LayerId;
use technology::template::{center_box, full_box, DrawStyle, TemplateLayer, TemplatePoint};

use crate::edges::*;
use crate::layers::SchematicLayers;

/// Builds schematic template layers on a fixed set of layers.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Symbols {
    layers: SchematicLayers,
}

impl Symbols {
    pub(crate) fn new(layers: SchematicLayers) -> Self {
        Self { layers }
    }

    fn node(&self, style: DrawStyle, points: impl Into<Vec<TemplatePoint>>) -> TemplateLayer {
        TemplateLayer::points(self.layers.node, style, points)
    }

    fn node_text(&self, corners: [TemplatePoint; 4], message: &'static str) -> TemplateLayer {
        self.node(DrawStyle::TextBox, corners).with_message(message)
    }

    /// A disc of the given multiple of the height on `layer`.
    pub(crate) fn center_disc(&self, layer: LayerId, size: f64) -> TemplateLayer {
        TemplateLayer::points(
            layer,
            DrawStyle::Disc,
            [center(), pt(c(), EdgeDescriptor::scaled(size))],
        )
    }

    /// A wire-colored dot centered on `(x, y)`.
    pub(crate) fn blob(&self, x: EdgeDescriptor, y: EdgeDescriptor, radius: f64) -> TemplateLayer {
        TemplateLayer::points(
            self.layers.arc,
            DrawStyle::Disc,
            [pt(x, y), pt(x.with_offset(x.offset() + radius), y)],
        )
    }

    pub(crate) fn wire_pin(&self) -> Vec<TemplateLayer> {
        vec![TemplateLayer::points(
            self.layers.arc,
            DrawStyle::Disc,
            [center(), pt(right(), c())],
        )]
    }

    pub(crate) fn bus_pin(&self) -> Vec<TemplateLayer> {
        [self.layers.bus, self.layers.arc]
            .into_iter()
            .map(|layer| {
                TemplateLayer::points(layer, DrawStyle::Disc, [center(), pt(right(), c())])
            })
            .collect()
    }

    pub(crate) fn wire_con(&self) -> Vec<TemplateLayer> {
        vec![
            TemplateLayer::boxed(self.layers.node, DrawStyle::Closed, full_box()),
            TemplateLayer::points(self.layers.text, DrawStyle::TextCenter, center_box())
                .with_message("J"),
        ]
    }

    pub(crate) fn buffer(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Closed,
            [
                pt(EdgeDescriptor::from_right(1.), c()),
                pt(left(), EdgeDescriptor::from_top(0.25)),
                pt(left(), EdgeDescriptor::from_bottom(0.25)),
            ],
        )]
    }

    /// The AND body, with every offset multiplied by `unit`.
    pub(crate) fn and(&self, unit: f64) -> Vec<TemplateLayer> {
        let fc = |d: f64| EdgeDescriptor::from_center(d * unit);
        vec![
            self.node(
                DrawStyle::CircleArc,
                [pt(fc(0.5), c()), pt(fc(0.5), fc(3.)), pt(fc(0.5), fc(-3.))],
            ),
            self.node(
                DrawStyle::Opened,
                [
                    pt(fc(0.5), fc(3.)),
                    pt(fc(-4.), fc(3.)),
                    pt(fc(-4.), top()),
                    pt(fc(-4.), bot()),
                    pt(fc(-4.), fc(-3.)),
                    pt(fc(0.5), fc(-3.)),
                ],
            ),
        ]
    }

    /// The OR body, with every offset multiplied by `unit`.
    pub(crate) fn or(&self, unit: f64) -> Vec<TemplateLayer> {
        let mut layers = self.or_arcs(unit);
        layers.push(self.or_wires(unit));
        layers
    }

    /// The XOR body, with every offset multiplied by `unit`.
    pub(crate) fn xor(&self, unit: f64) -> Vec<TemplateLayer> {
        let fc = |d: f64| EdgeDescriptor::from_center(d * unit);
        let mut layers = self.or_arcs(unit);
        layers.push(self.node(
            DrawStyle::CircleArc,
            [pt(fc(-10.), c()), pt(fc(-5.), fc(3.)), pt(fc(-5.), fc(-3.))],
        ));
        layers.push(self.or_wires(unit));
        layers
    }

    fn or_arcs(&self, unit: f64) -> Vec<TemplateLayer> {
        let fc = |d: f64| EdgeDescriptor::from_center(d * unit);
        vec![
            self.node(
                DrawStyle::CircleArc,
                [pt(fc(-9.), c()), pt(fc(-4.), fc(3.)), pt(fc(-4.), fc(-3.))],
            ),
            self.node(
                DrawStyle::CircleArc,
                [pt(fc(-0.75), fc(-3.)), pt(fc(-0.75), fc(3.)), pt(fc(4.5), c())],
            ),
            self.node(
                DrawStyle::CircleArc,
                [pt(fc(-0.75), fc(3.)), pt(fc(4.5), c()), pt(fc(-0.75), fc(-3.))],
            ),
        ]
    }

    fn or_wires(&self, unit: f64) -> TemplateLayer {
        let fc = |d: f64| EdgeDescriptor::from_center(d * unit);
        self.node(
            DrawStyle::Vectors,
            [
                pt(fc(-4.), top()),
                pt(fc(-4.), fc(3.)),
                pt(fc(-4.), fc(3.)),
                pt(fc(-0.75), fc(3.)),
                pt(fc(-4.), bot()),
                pt(fc(-4.), fc(-3.)),
                pt(fc(-4.), fc(-3.)),
                pt(fc(-0.75), fc(-3.)),
            ],
        )
    }

    pub(crate) fn ff_box(&self) -> TemplateLayer {
        TemplateLayer::boxed(self.layers.node, DrawStyle::Closed, full_box())
    }

    pub(crate) fn ff_arrow(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left(), bot_by(0.2)),
                pt(left_by(0.7), c()),
                pt(left(), top_by(0.2)),
            ],
        )
    }

    pub(crate) fn ff_waveform_negative(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.6), top_by(0.2)),
                pt(left_by(0.4), top_by(0.2)),
                pt(left_by(0.4), bot_by(0.2)),
                pt(left_by(0.2), bot_by(0.2)),
            ],
        )
    }

    pub(crate) fn ff_waveform_positive(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.6), bot_by(0.2)),
                pt(left_by(0.4), bot_by(0.2)),
                pt(left_by(0.4), top_by(0.2)),
                pt(left_by(0.2), top_by(0.2)),
            ],
        )
    }

    pub(crate) fn ff_waveform_master_slave(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.6), bot_by(0.2)),
                pt(left_by(0.4), bot_by(0.2)),
                pt(left_by(0.4), top_by(0.2)),
                pt(left_by(0.2), top_by(0.2)),
                pt(left_by(0.2), bot_by(0.2)),
                pt(c(), bot_by(0.2)),
            ],
        )
    }

    /// A letter in the upper left corner.
    pub(crate) fn ff_upper_letter(&self, message: &'static str) -> TemplateLayer {
        self.node_text(
            [
                pt(left(), top_by(0.4)),
                pt(left(), top_by(0.8)),
                pt(left_by(0.4), top_by(0.8)),
                pt(left_by(0.4), top_by(0.4)),
            ],
            message,
        )
    }

    /// A letter in the lower left corner.
    pub(crate) fn ff_lower_letter(&self, message: &'static str) -> TemplateLayer {
        self.node_text(
            [
                pt(left(), bot_by(0.4)),
                pt(left(), bot_by(0.8)),
                pt(left_by(0.4), bot_by(0.8)),
                pt(left_by(0.4), bot_by(0.4)),
            ],
            message,
        )
    }

    /// The output, preset and clear labels shared by every flip-flop.
    pub(crate) fn ff_frame(&self) -> Vec<TemplateLayer> {
        vec![
            self.ff_box(),
            self.ff_arrow(),
            self.node_text(
                [
                    pt(right(), top_by(0.4)),
                    pt(right(), top_by(0.8)),
                    pt(right_by(0.4), top_by(0.8)),
                    pt(right_by(0.4), top_by(0.4)),
                ],
                "Q",
            ),
            self.node_text(
                [
                    pt(right(), bot_by(0.4)),
                    pt(right(), bot_by(0.8)),
                    pt(right_by(0.4), bot_by(0.8)),
                    pt(right_by(0.4), bot_by(0.4)),
                ],
                "QB",
            ),
            self.node_text(
                [
                    pt(left_by(0.6), top_by(0.6)),
                    pt(left_by(0.6), top()),
                    pt(right_by(0.6), top()),
                    pt(right_by(0.6), top_by(0.6)),
                ],
                "PR",
            ),
            self.node_text(
                [
                    pt(left_by(0.6), bot_by(0.6)),
                    pt(left_by(0.6), bot()),
                    pt(right_by(0.6), bot()),
                    pt(right_by(0.6), bot_by(0.6)),
                ],
                "CLR",
            ),
        ]
    }

    pub(crate) fn mux(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Closed,
            [
                pt(right_by(0.8), top_by(0.75)),
                pt(right_by(0.8), bot_by(0.75)),
                pt(left_by(0.8), bot()),
                pt(left_by(0.8), top()),
            ],
        )]
    }

    pub(crate) fn bbox(&self) -> Vec<TemplateLayer> {
        vec![TemplateLayer::boxed(
            self.layers.node,
            DrawStyle::Closed,
            full_box(),
        )]
    }

    /// The contact, the straight arm and the diagonal arm.
    pub(crate) fn switch(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(
                DrawStyle::Disc,
                [
                    pt(EdgeDescriptor::from_right(1.), c()),
                    pt(EdgeDescriptor::from_right(1.25), c()),
                ],
            ),
            self.node(
                DrawStyle::Opened,
                [
                    pt(EdgeDescriptor::from_right(1.), c()),
                    pt(EdgeDescriptor::from_left(1.), c()),
                ],
            ),
            self.node(
                DrawStyle::Opened,
                [
                    pt(EdgeDescriptor::from_right(1.), c()),
                    pt(EdgeDescriptor::from_left(1.), fc(1.)),
                ],
            ),
        ]
    }

    /// One extra throw of a switch, `y` units above the bottom.
    pub(crate) fn switch_rung(&self, y: f64) -> TemplateLayer {
        self.node(
            DrawStyle::Disc,
            [
                pt(EdgeDescriptor::from_left(1.), EdgeDescriptor::from_bottom(y)),
                pt(EdgeDescriptor::from_left(1.25), EdgeDescriptor::from_bottom(y)),
            ],
        )
    }

    pub(crate) fn off_page_plain(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Closed,
            [
                pt(left(), bot()),
                pt(left(), top()),
                pt(right_by(0.5), top()),
                pt(right(), c()),
                pt(right_by(0.5), bot()),
            ],
        )]
    }

    pub(crate) fn off_page_input(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Closed,
            [
                pt(left(), bot()),
                pt(left_by(0.5), c()),
                pt(left(), top()),
                pt(right_by(0.5), top()),
                pt(right(), c()),
                pt(right_by(0.5), bot()),
            ],
        )]
    }

    pub(crate) fn off_page_output(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Closed,
            [
                pt(left(), bot()),
                pt(left(), top()),
                pt(right(), top()),
                pt(right_by(0.5), c()),
                pt(right(), bot()),
            ],
        )]
    }

    pub(crate) fn off_page_bidirectional(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Closed,
            [
                pt(left(), c()),
                pt(left_by(0.5), top()),
                pt(right_by(0.5), top()),
                pt(right(), c()),
                pt(right_by(0.5), bot()),
                pt(left_by(0.5), bot()),
            ],
        )]
    }

    pub(crate) fn power(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(DrawStyle::Circle, [center(), pt(c(), top())]),
            self.node(DrawStyle::Circle, [center(), pt(c(), top_by(0.75))]),
        ]
    }

    pub(crate) fn ground(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Vectors,
            [
                center(),
                pt(c(), top()),
                pt(left(), c()),
                pt(right(), c()),
                pt(left_by(0.75), bot_by(0.25)),
                pt(right_by(0.75), bot_by(0.25)),
                pt(left_by(0.5), bot_by(0.5)),
                pt(right_by(0.5), bot_by(0.5)),
                pt(left_by(0.25), bot_by(0.75)),
                pt(right_by(0.25), bot_by(0.75)),
                pt(c(), bot()),
                pt(c(), bot()),
            ],
        )]
    }

    pub(crate) fn source(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(DrawStyle::Circle, [center(), pt(right(), c())]),
            self.node(
                DrawStyle::Vectors,
                [
                    pt(left_by(0.3), top_by(0.6)),
                    pt(right_by(0.3), top_by(0.6)),
                    pt(c(), top_by(0.3)),
                    pt(c(), top_by(0.9)),
                ],
            ),
        ]
    }

    pub(crate) fn tran_mos(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left(), bot()),
                pt(left_by(0.75), bot()),
                pt(left_by(0.75), bot_by(0.5)),
                pt(right_by(0.75), bot_by(0.5)),
                pt(right_by(0.75), bot()),
                pt(right(), bot()),
            ],
        )
    }

    pub(crate) fn tran_top(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [pt(left_by(0.75), bot_by(0.25)), pt(right_by(0.75), bot_by(0.25))],
        )
    }

    pub(crate) fn tran_nmos(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [pt(c(), bot_by(0.25)), pt(c(), EdgeDescriptor::from_top(1.))],
        )
    }

    pub(crate) fn tran_pmos(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [pt(c(), top_by(0.25)), pt(c(), EdgeDescriptor::from_top(1.))],
        )
    }

    pub(crate) fn tran_pmos_circle(&self) -> TemplateLayer {
        self.node(DrawStyle::Circle, [center(), pt(c(), bot_by(0.25))])
    }

    pub(crate) fn tran_dmos(&self) -> TemplateLayer {
        TemplateLayer::boxed(
            self.layers.node,
            DrawStyle::Filled,
            [
                pt(left_by(0.75), bot_by(0.75)),
                pt(right_by(0.75), bot_by(0.5)),
            ],
        )
    }

    pub(crate) fn tran_bipolar(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left(), bot()),
                pt(left_by(0.75), bot()),
                pt(left_by(0.25), bot_by(0.25)),
                pt(right_by(0.25), bot_by(0.25)),
                pt(right_by(0.75), bot()),
                pt(right(), bot()),
            ],
        )
    }

    pub(crate) fn tran_npn_emitter(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.75), bot_by(0.75)),
                pt(left_by(0.75), bot()),
                pt(left_by(0.5), bot_by(0.875)),
            ],
        )
    }

    pub(crate) fn tran_pnp_emitter(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.5), bot_by(0.375)),
                pt(left_by(0.25), bot_by(0.25)),
                pt(left_by(0.25), bot_by(0.5)),
            ],
        )
    }

    pub(crate) fn tran_fet(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), bot()),
                pt(left_by(0.75), bot()),
                pt(left_by(0.75), bot()),
                pt(left_by(0.75), bot_by(0.25)),
                pt(left_by(0.875), bot_by(0.25)),
                pt(right_by(0.875), bot_by(0.25)),
                pt(right_by(0.75), bot_by(0.25)),
                pt(right_by(0.75), bot()),
                pt(right_by(0.75), bot()),
                pt(right(), bot()),
            ],
        )
    }

    pub(crate) fn tran_njfet_arrow(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.125), c()),
                pt(c(), bot_by(0.25)),
                pt(right_by(0.125), c()),
            ],
        )
    }

    pub(crate) fn tran_pjfet_arrow(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(0.125), c()),
                pt(c(), top_by(0.25)),
                pt(right_by(0.125), c()),
            ],
        )
    }

    pub(crate) fn tran_emes(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), bot()),
                pt(left_by(0.75), bot()),
                pt(left_by(0.75), bot()),
                pt(left_by(0.75), bot_by(0.25)),
                pt(left_by(0.875), bot_by(0.25)),
                pt(left_by(0.5), bot_by(0.25)),
                pt(left_by(0.25), bot_by(0.25)),
                pt(right_by(0.25), bot_by(0.25)),
                pt(right_by(0.5), bot_by(0.25)),
                pt(right_by(0.875), bot_by(0.25)),
                pt(right_by(0.75), bot_by(0.25)),
                pt(right_by(0.75), bot()),
                pt(right_by(0.75), bot()),
                pt(right(), bot()),
            ],
        )
    }

    /// A bulk lead from `start` down to the bottom edge, with an arrow pointing at
    /// `point` whose barbs end at `barb`.
    fn tran4_bulk(
        &self,
        start: EdgeDescriptor,
        point: EdgeDescriptor,
        barb: EdgeDescriptor,
    ) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left_by(0.5), start),
                pt(left_by(0.5), bot()),
                pt(left_by(0.5), point),
                pt(left_by(0.35), barb),
                pt(left_by(0.5), point),
                pt(left_by(TWO_THIRDS), barb),
            ],
        )
    }

    pub(crate) fn tran4_nmos(&self) -> TemplateLayer {
        self.tran4_bulk(bot_by(0.5), bot_by(0.5), bot_by(0.75))
    }

    pub(crate) fn tran4_pmos(&self) -> TemplateLayer {
        self.tran4_bulk(bot_by(0.5), bot(), bot_by(0.75))
    }

    pub(crate) fn tran4_dmos(&self) -> TemplateLayer {
        self.tran4_bulk(bot_by(0.75), bot_by(0.75), bot_by(0.9))
    }

    pub(crate) fn tran4_bipolar(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [pt(left_by(0.5), bot()), pt(c(), bot_by(0.25))],
        )
    }

    pub(crate) fn tran4_pmes(&self) -> TemplateLayer {
        self.tran4_bulk(bot_by(0.25), bot(), bot_by(0.75))
    }

    pub(crate) fn tran4_nmes(&self) -> TemplateLayer {
        self.tran4_bulk(bot_by(0.25), bot_by(0.25), bot_by(0.5))
    }

    /// The placeholder cross of a four-terminal transistor.
    pub(crate) fn cross(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Vectors,
            [
                center(),
                pt(c(), top()),
                pt(left(), c()),
                pt(right(), c()),
                pt(left(), c()),
                pt(c(), bot()),
                pt(right(), c()),
                pt(c(), bot()),
            ],
        )]
    }

    pub(crate) fn resistor(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Opened,
            [
                pt(left_by(TWO_THIRDS), c()),
                pt(left_by(0.6), c()),
                pt(left_by(0.5), top()),
                pt(left_by(0.3), bot()),
                pt(left_by(0.1), top()),
                pt(right_by(0.1), bot()),
                pt(right_by(0.3), top()),
                pt(right_by(0.5), bot()),
                pt(right_by(0.6), c()),
                pt(right_by(TWO_THIRDS), c()),
            ],
        )
    }

    pub(crate) fn resistor_poly(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(right_by(0.4), top_by(0.5)),
                pt(right_by(0.6), top_by(0.5)),
                pt(right_by(0.5), top_by(0.2)),
                pt(right_by(0.5), top_by(0.8)),
            ],
        )
    }

    pub(crate) fn capacitor(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), top_by(0.2)),
                pt(right(), top_by(0.2)),
                pt(left(), bot_by(0.2)),
                pt(right(), bot_by(0.2)),
                pt(c(), top_by(0.2)),
                pt(c(), top()),
                pt(c(), bot_by(0.2)),
                pt(c(), bot()),
            ],
        )
    }

    pub(crate) fn capacitor_electrolytic(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(right_by(0.2), bot_by(0.6)),
                pt(right_by(0.6), bot_by(0.6)),
                pt(right_by(0.4), bot_by(0.4)),
                pt(right_by(0.4), bot_by(0.8)),
            ],
        )
    }

    pub(crate) fn diode_bar(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), top_by(0.5)),
                pt(right(), top_by(0.5)),
                pt(c(), top_by(0.5)),
                pt(c(), top()),
                pt(c(), bot_by(0.5)),
                pt(c(), bot()),
            ],
        )
    }

    pub(crate) fn diode_triangle(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Filled,
            [
                pt(left(), bot_by(0.5)),
                pt(right(), bot_by(0.5)),
                pt(c(), top_by(0.5)),
            ],
        )
    }

    pub(crate) fn diode_zener_bar(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), top_by(0.75)),
                pt(left(), top_by(0.5)),
                pt(left(), top_by(0.5)),
                pt(right(), top_by(0.5)),
                pt(right(), top_by(0.5)),
                pt(right(), top_by(0.25)),
                pt(c(), top_by(0.5)),
                pt(c(), top()),
                pt(c(), bot_by(0.5)),
                pt(c(), bot()),
            ],
        )
    }

    pub(crate) fn inductor(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(DrawStyle::Opened, [pt(c(), top()), pt(c(), bot())]),
            self.node(
                DrawStyle::Circle,
                [pt(left_by(0.5), top_by(ONE_THIRD)), pt(c(), top_by(ONE_THIRD))],
            ),
            self.node(DrawStyle::Circle, [pt(left_by(0.5), c()), center()]),
            self.node(
                DrawStyle::Circle,
                [pt(left_by(0.5), bot_by(ONE_THIRD)), pt(c(), bot_by(ONE_THIRD))],
            ),
        ]
    }

    pub(crate) fn meter(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(DrawStyle::Circle, [center(), pt(right(), c())]),
            self.node(DrawStyle::TextBox, full_box()).with_message("V"),
        ]
    }

    pub(crate) fn well(&self) -> Vec<TemplateLayer> {
        vec![self.node(
            DrawStyle::Vectors,
            [
                pt(left(), bot()),
                pt(right(), bot()),
                pt(c(), top()),
                pt(c(), bot()),
            ],
        )]
    }

    pub(crate) fn two_box(&self) -> TemplateLayer {
        TemplateLayer::boxed(
            self.layers.node,
            DrawStyle::Closed,
            [pt(left_by(0.8), top()), pt(right_by(0.8), bot())],
        )
    }

    pub(crate) fn two_norm_wire(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), top_by(TWO_THIRDS)),
                pt(left_by(0.6), top_by(TWO_THIRDS)),
                pt(left(), bot_by(TWO_THIRDS)),
                pt(left_by(0.6), bot_by(TWO_THIRDS)),
                pt(right(), top_by(TWO_THIRDS)),
                pt(right_by(0.6), top_by(TWO_THIRDS)),
                pt(right_by(0.6), top_by(TWO_THIRDS)),
                pt(right_by(0.6), top_by(0.3)),
                pt(right(), bot_by(TWO_THIRDS)),
                pt(right_by(0.6), bot_by(TWO_THIRDS)),
                pt(right_by(0.6), bot_by(TWO_THIRDS)),
                pt(right_by(0.6), bot_by(0.3)),
            ],
        )
    }

    pub(crate) fn two_voltage_source(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Circle,
            [pt(right_by(0.6), c()), pt(right_by(0.6), top_by(0.3))],
        )
    }

    fn two_plus(&self, x: fn(f64) -> EdgeDescriptor, near: f64, far: f64, mid: f64) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(x(near), top_by(TWO_THIRDS)),
                pt(x(far), top_by(TWO_THIRDS)),
                pt(x(mid), top_by(SEVEN_TWELFTHS)),
                pt(x(mid), top_by(0.75)),
            ],
        )
    }

    pub(crate) fn two_upper_right_plus(&self) -> TemplateLayer {
        self.two_plus(right_by, 0.35, 0.45, 0.4)
    }

    pub(crate) fn two_upper_left_plus(&self) -> TemplateLayer {
        self.two_plus(left_by, 0.35, 0.45, 0.4)
    }

    pub(crate) fn two_line_plus(&self) -> TemplateLayer {
        self.two_plus(right_by, F31_60, F37_60, F17_30)
    }

    pub(crate) fn two_current_arrow(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(right_by(F23_60), top_by(ONE_THIRD)),
                pt(right_by(F23_60), bot_by(ONE_THIRD)),
                pt(right_by(F23_60), bot_by(ONE_THIRD)),
                pt(right_by(ONE_THIRD), bot_by(ONE_SIXTH)),
                pt(right_by(F23_60), bot_by(ONE_THIRD)),
                pt(right_by(F13_30), bot_by(ONE_SIXTH)),
            ],
        )
    }

    fn two_leads(&self, left_end: f64, right_end: f64) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left(), top_by(TWO_THIRDS)),
                pt(left_by(left_end), top_by(TWO_THIRDS)),
                pt(left(), bot_by(TWO_THIRDS)),
                pt(left_by(left_end), bot_by(TWO_THIRDS)),
                pt(right(), top_by(TWO_THIRDS)),
                pt(right_by(right_end), top_by(TWO_THIRDS)),
                pt(right(), bot_by(TWO_THIRDS)),
                pt(right_by(right_end), bot_by(TWO_THIRDS)),
            ],
        )
    }

    pub(crate) fn two_generic_wire(&self) -> TemplateLayer {
        self.two_leads(0.8, 0.8)
    }

    pub(crate) fn two_current_source(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(right_by(0.6), top_by(0.3)),
                pt(right_by(0.45), c()),
                pt(right_by(0.45), c()),
                pt(right_by(0.6), bot_by(0.3)),
                pt(right_by(0.6), bot_by(0.3)),
                pt(right_by(0.75), c()),
                pt(right_by(0.75), c()),
                pt(right_by(0.6), top_by(0.3)),
            ],
        )
    }

    pub(crate) fn two_current_control(&self) -> TemplateLayer {
        self.node(
            DrawStyle::OpenedDotted,
            [
                pt(left_by(0.6), top_by(TWO_THIRDS)),
                pt(left_by(0.6), bot_by(TWO_THIRDS)),
            ],
        )
    }

    pub(crate) fn two_line_box(&self) -> TemplateLayer {
        self.node(
            DrawStyle::Vectors,
            [
                pt(left_by(0.8), top()),
                pt(right_by(0.8), top()),
                pt(left_by(0.8), bot()),
                pt(right_by(0.8), bot()),
            ],
        )
    }

    pub(crate) fn two_line_arcs(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(
                DrawStyle::CircleArc,
                [center(), pt(left_by(0.8), bot()), pt(left_by(0.8), top())],
            ),
            self.node(
                DrawStyle::CircleArc,
                [pt(left_by(1.6), c()), pt(left_by(0.8), top()), pt(left_by(0.8), bot())],
            ),
            self.node(
                DrawStyle::CircleArc,
                [center(), pt(right_by(0.8), top()), pt(right_by(0.8), bot())],
            ),
        ]
    }

    pub(crate) fn two_line_wire(&self) -> TemplateLayer {
        self.two_leads(0.8, 0.9)
    }

    pub(crate) fn global_signal(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(
                DrawStyle::Closed,
                [pt(left(), c()), pt(c(), top()), pt(right(), c()), pt(c(), bot())],
            ),
            self.node(
                DrawStyle::Closed,
                [
                    pt(left_by(0.9), c()),
                    pt(c(), top_by(0.9)),
                    pt(right_by(0.9), c()),
                    pt(c(), bot_by(0.9)),
                ],
            ),
        ]
    }

    pub(crate) fn global_partition(&self) -> Vec<TemplateLayer> {
        vec![
            self.node(
                DrawStyle::Closed,
                [
                    pt(left(), c()),
                    pt(left_by(0.5), top()),
                    pt(right_by(0.5), top()),
                    pt(right(), c()),
                    pt(right_by(0.5), bot()),
                    pt(left_by(0.5), bot()),
                ],
            ),
            TemplateLayer::points(self.layers.text, DrawStyle::TextCenter, center_box())
                .with_message("GP"),
        ]
    }
}
