use glam::Vec3;

use crate::utils::TriangleExt;
use crate::{gpu, BoundingBox, InvalidGeometry, Result};

/// Triangles resolved from a mesh, ready to be partitioned by the builder.
///
/// Can only be created through [`stage()`] (or as an empty default), so the
/// bounds always match the triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StagedGeometry {
    triangles: Vec<gpu::Triangle>,
    bounds: BoundingBox,
}

impl StagedGeometry {
    pub fn triangles(&self) -> &[gpu::Triangle] {
        &self.triangles
    }

    /// Returns bounds of all the triangles (i.e. of their vertices, not just
    /// of their centers); unset if there are no triangles.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub(crate) fn into_parts(self) -> (Vec<gpu::Triangle>, BoundingBox) {
        (self.triangles, self.bounds)
    }
}

/// Converts vertex positions + index triples into per-triangle records.
///
/// Input is validated up-front, so nothing gets allocated for a mesh that's
/// going to be rejected anyway.
pub fn stage(positions: &[Vec3], indices: &[u32]) -> Result<StagedGeometry> {
    validate(positions, indices)?;

    let mut bounds = BoundingBox::default();

    let triangles = indices
        .chunks_exact(3)
        .map(|ids| {
            let triangle = gpu::Triangle::new(
                positions[ids[0] as usize],
                positions[ids[1] as usize],
                positions[ids[2] as usize],
            );

            bounds += triangle.bounds();
            triangle
        })
        .collect();

    Ok(StagedGeometry { triangles, bounds })
}

fn validate(
    positions: &[Vec3],
    indices: &[u32],
) -> Result<(), InvalidGeometry> {
    if indices.len() % 3 != 0 {
        return Err(InvalidGeometry::IndexCountNotMultipleOfThree {
            len: indices.len(),
        });
    }

    // Leaves address triangles through `i32`s
    if indices.len() / 3 > i32::MAX as usize {
        return Err(InvalidGeometry::TooManyTriangles {
            count: indices.len() / 3,
        });
    }

    for (triangle, ids) in indices.chunks_exact(3).enumerate() {
        let invalid_id =
            ids.iter().find(|&&id| (id as usize) >= positions.len());

        if let Some(&index) = invalid_id {
            return Err(InvalidGeometry::IndexOutOfRange {
                triangle,
                index,
                vertex_count: positions.len(),
            });
        }
    }

    Ok(())
}
