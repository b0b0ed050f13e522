use std::ops::{Add, AddAssign};

use glam::Vec3;

use crate::Axis;

/// Axis-aligned bounding box.
///
/// A default box is "unset": its corners are inverted (`min = +MAX`,
/// `max = -MAX`), which makes it the identity element for [`Self::expand()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn size(&self) -> Vec3 {
        self.max() - self.min()
    }

    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) / 2.0
    }

    /// Returns the axis along which this box is the longest.
    pub fn longest_axis(&self) -> Axis {
        Axis::largest(self.size())
    }

    pub fn is_set(&self) -> bool {
        self.min.x <= self.max.x
    }

    /// Grows this box so that it becomes the tightest box containing both
    /// itself and the box spanned by `min` and `max`.
    pub fn expand(&mut self, min: Vec3, max: Vec3) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// Returns whether `other` lies entirely within this box; unset boxes are
    /// contained in everything.
    pub fn contains(&self, other: &Self) -> bool {
        if !other.is_set() {
            return true;
        }

        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::MAX, Vec3::MIN)
    }
}

impl Add<Vec3> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.expand(rhs, rhs);
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        self.expand(rhs.min, rhs.max);
    }
}

impl FromIterator<Self> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Self>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}
