mod builder;
mod nodes;
mod printer;
mod stats;

pub use self::nodes::*;
pub use self::printer::*;
pub use self::stats::*;
use crate::{gpu, utils, BoundingBox, BvhConfig, Mesh, Result, StagedGeometry};

/// Bounding volume hierarchy built over a single mesh.
///
/// Consists of two flat buffers: nodes (with the root at index zero) and
/// triangles, ordered so that every leaf owns a contiguous range of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Bvh {
    nodes: Vec<gpu::BvhNode>,
    triangles: Vec<gpu::Triangle>,
}

impl Bvh {
    pub fn build(mesh: &Mesh, config: &BvhConfig) -> Result<Self> {
        config.validate()?;

        Self::from_staged(mesh.stage()?, config)
    }

    pub fn from_staged(
        staged: StagedGeometry,
        config: &BvhConfig,
    ) -> Result<Self> {
        config.validate()?;

        let (mut triangles, bounds) = staged.into_parts();

        let nodes = utils::measure("bvh_build", || {
            builder::run(config, &mut triangles, bounds)
        });

        let this = Self {
            nodes: nodes.into_vec(),
            triangles,
        };

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Built BVH; triangles={}, {}",
                this.triangles.len(),
                this.stats()
            );
        }

        Ok(this)
    }

    pub fn nodes(&self) -> &[gpu::BvhNode] {
        &self.nodes
    }

    pub fn triangles(&self) -> &[gpu::Triangle] {
        &self.triangles
    }

    pub fn root(&self) -> gpu::BvhNode {
        self.nodes[0]
    }

    pub fn bounds(&self) -> BoundingBox {
        let root = self.root();

        BoundingBox::new(root.min, root.max)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether this tree contains no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn nodes_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.nodes)
    }

    pub fn triangles_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn view(&self) -> gpu::BvhView<'_> {
        gpu::BvhView::new(&self.nodes, &self.triangles)
    }

    pub fn stats(&self) -> BvhStats {
        BvhStats::collect(&self.nodes)
    }

    pub fn print(&self) -> String {
        BvhPrinter::print(&self.nodes)
    }
}
