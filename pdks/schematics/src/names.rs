//! Port names used by older libraries.

use technology::prototype::PrimitivePrototype;

use crate::kind::SchematicKind;

/// Maps a port name from an older library to the index of the current port.
///
/// Returns `None` if the name is not a known legacy name.
pub fn convert_old_port_name(
    prototype: &PrimitivePrototype<SchematicKind>,
    name: &str,
) -> Option<usize> {
    let index = match (prototype.kind(), name) {
        (SchematicKind::Source | SchematicKind::Meter, "top") => Some(0),
        (SchematicKind::Source | SchematicKind::Meter, "bottom") => Some(1),
        (SchematicKind::TwoPort, "upperleft") => Some(0),
        (SchematicKind::TwoPort, "lowerleft") => Some(1),
        (SchematicKind::TwoPort, "upperright") => Some(2),
        (SchematicKind::TwoPort, "lowerright") => Some(3),
        (SchematicKind::Power, "pwr") => Some(0),
        _ => None,
    };
    if let Some(index) = index {
        return (index < prototype.ports().len()).then_some(index);
    }

    // "-bot" was renamed to "-bottom"
    if name.len() > 4 && name.ends_with("-bot") {
        return prototype
            .port_by_name(&format!("{name}tom"))
            .map(|(index, _)| index);
    }
    None
}
