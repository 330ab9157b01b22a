use crate::api::types::BodyKind;
use crate::core::store::StateTable;
use crate::renderer::instance::{BodyInstance, InstanceBuffer};

/// Render-side attributes of a body that the state table does not carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyVisual {
    pub scale: f32,
    pub kind: BodyKind,
}

impl Default for BodyVisual {
    fn default() -> Self {
        Self {
            scale: 1.0,
            kind: BodyKind::Planet,
        }
    }
}

/// Build the instance buffer from the state table, one instance per entry in table order.
/// Entries past the buffer capacity are dropped with a warning.
pub fn build_instance_buffer(
    table: &StateTable,
    visual: impl Fn(&str) -> BodyVisual,
    buffer: &mut InstanceBuffer,
) {
    buffer.clear();

    for (name, state) in table.iter() {
        let v = visual(name);
        let instance = BodyInstance {
            x: state.position.x,
            y: state.position.y,
            z: state.position.z,
            rot_x: state.rotation.x,
            rot_y: state.rotation.y,
            rot_z: state.rotation.z,
            scale: v.scale,
            kind: v.kind.code(),
        };
        if !buffer.push(instance) {
            log::warn!(
                "instance buffer full ({} bodies), dropping {} and later bodies",
                buffer.capacity(),
                name
            );
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::OrbitalState;
    use glam::Vec3;

    #[test]
    fn packs_in_table_order() {
        let mut table = StateTable::new();
        table.set("sun", OrbitalState::ZERO);
        table.set(
            "earth",
            OrbitalState {
                position: Vec3::new(1.0, 2.0, 3.0),
                rotation: Vec3::new(0.0, 0.5, 0.0),
            },
        );

        let mut buffer = InstanceBuffer::with_capacity(8);
        build_instance_buffer(
            &table,
            |name| match name {
                "sun" => BodyVisual { scale: 10.0, kind: BodyKind::Star },
                _ => BodyVisual::default(),
            },
            &mut buffer,
        );

        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.instances[0].scale, 10.0);
        assert_eq!(buffer.instances[0].kind, BodyKind::Star.code());
        assert_eq!(buffer.instances[1].z, 3.0);
        assert_eq!(buffer.instances[1].rot_y, 0.5);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut table = StateTable::new();
        table.set("earth", OrbitalState::ZERO);
        let mut buffer = InstanceBuffer::with_capacity(8);
        build_instance_buffer(&table, |_| BodyVisual::default(), &mut buffer);
        build_instance_buffer(&table, |_| BodyVisual::default(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn overflow_truncates() {
        let mut table = StateTable::new();
        for name in ["a", "b", "c"] {
            table.set(name, OrbitalState::ZERO);
        }
        let mut buffer = InstanceBuffer::with_capacity(2);
        build_instance_buffer(&table, |_| BodyVisual::default(), &mut buffer);
        assert_eq!(buffer.instance_count(), 2);
    }
}
