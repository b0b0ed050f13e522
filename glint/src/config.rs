use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{gpu, Error, Result};

/// Parameters of the BVH construction.
///
/// Can be loaded from TOML, e.g.:
///
/// ```toml
/// max_depth = 12
/// min_split_triangles = 4
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BvhConfig {
    /// Depth at which subdivision stops; the root lives at depth zero.
    pub max_depth: u32,

    /// Nodes owning fewer triangles than this are not subdivided.
    ///
    /// Defaults to 2, so single-triangle nodes end up as leaves early. Zero
    /// disables the check entirely, in which case every node (including empty
    /// ones) keeps getting split until `max_depth` is reached, so any non-empty
    /// mesh yields a full tree of `2^(max_depth + 1) - 1` nodes.
    pub min_split_triangles: u32,
}

impl BvhConfig {
    pub const DEFAULT_MAX_DEPTH: u32 = 10;
    pub const DEFAULT_MIN_SPLIT_TRIANGLES: u32 = 2;
    pub const MAX_DEPTH_LIMIT: u32 = gpu::BVH_STACK_SIZE as u32;

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_split_triangles(
        mut self,
        min_split_triangles: u32,
    ) -> Self {
        self.min_split_triangles = min_split_triangles;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            return Err(Error::InvalidConfig(format!(
                "max_depth must be within 1..={}, got {}",
                Self::MAX_DEPTH_LIMIT,
                self.max_depth
            )));
        }

        Ok(())
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let this: Self = toml::from_str(text)?;

        this.validate()?;

        Ok(this)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        log::debug!("Loading BVH config from `{}`", path.display());

        Self::from_toml(&fs::read_to_string(path)?)
    }
}

impl Default for BvhConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            min_split_triangles: Self::DEFAULT_MIN_SPLIT_TRIANGLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let target = BvhConfig::default();

        assert_eq!(10, target.max_depth);
        assert_eq!(2, target.min_split_triangles);
        assert!(target.validate().is_ok());
    }

    #[test]
    fn from_toml() {
        let target =
            BvhConfig::from_toml("max_depth = 4\nmin_split_triangles = 0")
                .unwrap();

        assert_eq!(
            BvhConfig::default()
                .with_max_depth(4)
                .with_min_split_triangles(0),
            target
        );
    }

    #[test]
    fn from_toml_with_missing_fields() {
        assert_eq!(BvhConfig::default(), BvhConfig::from_toml("").unwrap());

        assert_eq!(
            BvhConfig::default().with_max_depth(16),
            BvhConfig::from_toml("max_depth = 16").unwrap()
        );
    }

    #[test]
    fn from_toml_with_unknown_field() {
        let err = BvhConfig::from_toml("max_dept = 4").unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate() {
        for max_depth in [0, BvhConfig::MAX_DEPTH_LIMIT + 1] {
            let err = BvhConfig::default()
                .with_max_depth(max_depth)
                .validate()
                .unwrap_err();

            assert!(matches!(err, Error::InvalidConfig(_)));
        }

        assert!(BvhConfig::default()
            .with_max_depth(BvhConfig::MAX_DEPTH_LIMIT)
            .validate()
            .is_ok());
    }

    #[test]
    fn from_toml_validates() {
        let err = BvhConfig::from_toml("max_depth = 0").unwrap_err();

        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn load() {
        let path = std::env::temp_dir()
            .join(format!("glint-bvh-config-{}.toml", std::process::id()));

        fs::write(&path, "max_depth = 7\n").unwrap();

        let target = BvhConfig::load(&path);

        _ = fs::remove_file(&path);

        assert_eq!(BvhConfig::default().with_max_depth(7), target.unwrap());
    }

    #[test]
    fn load_missing_file() {
        let err = BvhConfig::load("/definitely/not/here.toml").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
