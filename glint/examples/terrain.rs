//! Builds hierarchies for a couple of procedural terrain patches and prints
//! what they look like.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=debug cargo run --example terrain [config.toml] [--dot]
//! ```

use std::env;
use std::error::Error;

use glam::vec3;
use glint::{BvhConfig, Mesh, Scene};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut config = BvhConfig::default();
    let mut print_dot = false;

    for arg in env::args().skip(1) {
        if arg == "--dot" {
            print_dot = true;
        } else {
            config = BvhConfig::load(&arg)?;
        }
    }

    let mut scene = Scene::default();

    scene.add("hills", terrain(64, 1.0, 0.0));
    scene.add("dunes", terrain(128, 0.5, 3.0));
    scene.add("flat", terrain(8, 4.0, 0.0));

    let rebuilt = scene.rebuild(&config)?;

    println!("rebuilt {rebuilt} object(s) with {config:?}");

    for (name, bvh) in scene.iter() {
        println!(
            "{name}: triangles={}, {}",
            bvh.triangles().len(),
            bvh.stats()
        );

        if print_dot {
            println!("{}", bvh.print());
        }
    }

    Ok(())
}

/// Generates a `size` x `size` grid of quads, displaced by a few sines.
fn terrain(size: u32, spacing: f32, phase: f32) -> Mesh {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for z in 0..=size {
        for x in 0..=size {
            let (x, z) = (x as f32 * spacing, z as f32 * spacing);
            let y = (x * 0.15 + phase).sin() * (z * 0.1).cos() * 4.0;

            positions.push(vec3(x, y, z));
        }
    }

    let row = size + 1;

    for z in 0..size {
        for x in 0..size {
            let i = z * row + x;

            indices.extend([i, i + 1, i + row]);
            indices.extend([i + 1, i + row + 1, i + row]);
        }
    }

    Mesh::new(positions, indices)
}
