use std::ops::Index;

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the axis along which `extent` is the largest.
    ///
    /// Ties are resolved in favour of X, then Y.
    pub fn largest(extent: Vec3) -> Self {
        if extent.x >= extent.y && extent.x >= extent.z {
            Self::X
        } else if extent.y >= extent.z {
            Self::Y
        } else {
            Self::Z
        }
    }
}

impl Index<Axis> for Vec3 {
    type Output = f32;

    fn index(&self, index: Axis) -> &Self::Output {
        match index {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
