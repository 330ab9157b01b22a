use bytemuck::{Pod, Zeroable};

/// Per-body data read by the TypeScript renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation (XYZ, radians).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Rendered radius in scene units.
    pub scale: f32,
    /// `BodyKind::code()`.
    pub kind: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Instance buffer, one slot per body in state-table order.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
    capacity: usize,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Push an instance. Returns `false` once the buffer is full.
    pub fn push(&mut self, instance: BodyInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The instances as a flat f32 slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut buf = InstanceBuffer::with_capacity(2);
        assert!(buf.push(BodyInstance::default()));
        assert!(buf.push(BodyInstance::default()));
        assert!(!buf.push(BodyInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }

    #[test]
    fn flat_view_preserves_field_order() {
        let mut buf = InstanceBuffer::with_capacity(1);
        buf.push(BodyInstance { x: 1.0, y: 2.0, z: 3.0, rot_y: 4.0, scale: 5.0, kind: 2.0, ..BodyInstance::default() });
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 3.0, 0.0, 4.0, 0.0, 5.0, 2.0]);
    }
}
