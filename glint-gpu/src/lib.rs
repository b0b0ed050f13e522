//! Records shared between Glint's BVH builder and the GPU kernels that walk
//! its output.
//!
//! Everything here is `#[repr(C)]` + `Pod`, so both buffers can be uploaded
//! as-is via `bytemuck::cast_slice()`.

#![allow(clippy::len_without_is_empty)]

mod bvh_node;
mod bvh_view;
mod triangle;

pub use self::bvh_node::*;
pub use self::bvh_view::*;
pub use self::triangle::*;

/// Maximum depth of a tree the GPU side is able to walk.
///
/// Traversal keeps a fixed-size stack per thread, so trees deeper than this
/// cannot be consumed (the builder refuses configurations exceeding it).
pub const BVH_STACK_SIZE: usize = 24;
