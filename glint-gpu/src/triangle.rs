use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub center: Vec3,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            center: (v0 + v1 + v2) / 3.0,
        }
    }

    pub fn positions(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Returns the minimum corner of this triangle's bounding box.
    pub fn min(&self) -> Vec3 {
        self.v0.min(self.v1).min(self.v2)
    }

    /// Returns the maximum corner of this triangle's bounding box.
    pub fn max(&self) -> Vec3 {
        self.v0.max(self.v1).max(self.v2)
    }
}
