//! Glint builds bounding volume hierarchies over triangle meshes, in a layout
//! that GPU ray-tracing kernels can consume directly.
//!
//! The usual flow is:
//!
//! - describe geometry as a [`Mesh`] (vertex positions + index triples),
//! - call [`Bvh::build()`],
//! - upload [`Bvh::nodes_bytes()`] and [`Bvh::triangles_bytes()`].
//!
//! When juggling many objects, [`Scene`] keeps track of which of them got
//! modified and rebuilds just those.

#![allow(clippy::len_without_is_empty)]

mod bvh;
mod config;
mod error;
mod mesh;
mod scene;
mod staging;
mod utils;

pub use glint_gpu as gpu;

pub use self::bvh::*;
pub use self::config::*;
pub use self::error::*;
pub use self::mesh::*;
pub use self::scene::*;
pub use self::staging::*;
pub use self::utils::*;
