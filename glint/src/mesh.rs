use glam::Vec3;

use crate::{stage, Result, StagedGeometry};

/// Triangle mesh described by vertex positions and index triples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn stage(&self) -> Result<StagedGeometry> {
        stage(&self.positions, &self.indices)
    }
}
