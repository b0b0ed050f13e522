use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] InvalidGeometry),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("couldn't parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("couldn't read config: {0}")]
    Io(#[from] io::Error),

    #[error("object is not part of the scene")]
    UnknownObject,
}

/// Reasons a mesh can get rejected during staging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidGeometry {
    #[error("index count ({len}) is not a multiple of three")]
    IndexCountNotMultipleOfThree { len: usize },

    #[error(
        "triangle #{triangle} refers to vertex #{index}, but there are only \
         {vertex_count} vertices"
    )]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("mesh has {count} triangles, which exceeds the supported maximum")]
    TooManyTriangles { count: usize },
}
