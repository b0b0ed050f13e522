use std::hash::Hash;

use derivative::Derivative;
use fxhash::FxHashMap;

use crate::{utils, Bvh, BvhConfig, Error, Mesh, Result};

/// Collection of objects, each with its own mesh and BVH.
///
/// Modifying an object marks it dirty; [`Self::rebuild()`] then rebuilds
/// hierarchies of all the dirty objects from scratch. Until that happens,
/// [`Self::get()`] keeps returning the previously built hierarchy (if any).
#[derive(Debug, Derivative)]
#[derivative(Default(bound = ""))]
pub struct Scene<H>
where
    H: Eq + Hash,
{
    objects: FxHashMap<H, SceneObject>,
    dirty: bool,
}

impl<H> Scene<H>
where
    H: Eq + Hash,
{
    /// Adds object to the scene, replacing its mesh if it's already there.
    pub fn add(&mut self, handle: H, mesh: Mesh) {
        let object = self.objects.entry(handle).or_default();

        object.mesh = mesh;
        object.dirty = true;

        self.dirty = true;
    }

    pub fn update(&mut self, handle: &H, mesh: Mesh) -> Result<()> {
        let object =
            self.objects.get_mut(handle).ok_or(Error::UnknownObject)?;

        object.mesh = mesh;
        object.dirty = true;

        self.dirty = true;

        Ok(())
    }

    pub fn remove(&mut self, handle: &H) -> bool {
        let removed = self.objects.remove(handle).is_some();

        if removed {
            self.dirty = self.objects.values().any(|object| object.dirty);
        }

        removed
    }

    pub fn contains(&self, handle: &H) -> bool {
        self.objects.contains_key(handle)
    }

    /// Returns the most recently built hierarchy of given object.
    pub fn get(&self, handle: &H) -> Option<&Bvh> {
        self.objects.get(handle)?.bvh.as_ref()
    }

    /// Returns all objects that have been built at least once.
    pub fn iter(&self) -> impl Iterator<Item = (&H, &Bvh)> + '_ {
        self.objects
            .iter()
            .filter_map(|(handle, object)| Some((handle, object.bvh.as_ref()?)))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuilds hierarchies of all the dirty objects, returning how many of
    /// them got rebuilt.
    ///
    /// If any mesh turns out to be invalid, the rebuilding stops and that
    /// object (together with the ones not yet processed) stays dirty.
    pub fn rebuild(&mut self, config: &BvhConfig) -> Result<usize> {
        config.validate()?;

        if !self.dirty {
            return Ok(0);
        }

        let rebuilt = utils::measure("scene_rebuild", || {
            let mut rebuilt = 0;

            for object in self.objects.values_mut() {
                if object.dirty {
                    object.bvh = Some(Bvh::build(&object.mesh, config)?);
                    object.dirty = false;

                    rebuilt += 1;
                }
            }

            Ok::<_, Error>(rebuilt)
        })?;

        self.dirty = false;

        log::info!("Rebuilt {rebuilt} BVH(s); objects={}", self.objects.len());

        Ok(rebuilt)
    }
}

#[derive(Debug, Default)]
struct SceneObject {
    mesh: Mesh,
    bvh: Option<Bvh>,
    dirty: bool,
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;
    use crate::InvalidGeometry;

    fn triangle(x: f32) -> Mesh {
        Mesh::new(
            vec![
                vec3(x, 0.0, 0.0),
                vec3(x + 1.0, 0.0, 0.0),
                vec3(x, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
    }

    fn broken() -> Mesh {
        Mesh::new(vec![vec3(0.0, 0.0, 0.0)], vec![0, 1, 2])
    }

    #[test]
    fn test() {
        let config = BvhConfig::default();
        let mut target = Scene::<&str>::default();

        assert!(target.is_empty());
        assert!(!target.is_dirty());
        assert_eq!(0, target.rebuild(&config).unwrap());

        // ---
        // Case 1: Adding objects

        target.add("a", triangle(0.0));
        target.add("b", triangle(5.0));

        assert!(target.is_dirty());
        assert!(target.get(&"a").is_none());
        assert_eq!(0, target.iter().count());

        assert_eq!(2, target.rebuild(&config).unwrap());
        assert!(!target.is_dirty());
        assert_eq!(2, target.iter().count());

        assert_eq!(
            vec3(5.0, 0.0, 0.0),
            target.get(&"b").unwrap().bounds().min()
        );

        // Nothing has changed, so nothing gets rebuilt
        assert_eq!(0, target.rebuild(&config).unwrap());

        // ---
        // Case 2: Updating an object

        target.update(&"a", triangle(10.0)).unwrap();

        assert!(target.is_dirty());

        // Stale hierarchy stays available until the rebuild
        assert_eq!(
            vec3(0.0, 0.0, 0.0),
            target.get(&"a").unwrap().bounds().min()
        );

        assert_eq!(1, target.rebuild(&config).unwrap());

        assert_eq!(
            vec3(10.0, 0.0, 0.0),
            target.get(&"a").unwrap().bounds().min()
        );

        // ---
        // Case 3: Removing an object

        assert!(target.remove(&"a"));
        assert!(!target.remove(&"a"));
        assert!(!target.contains(&"a"));
        assert!(target.contains(&"b"));
        assert_eq!(1, target.len());
    }

    #[test]
    fn remove_dirty_object() {
        let config = BvhConfig::default();
        let mut target = Scene::<u32>::default();

        target.add(1, triangle(0.0));
        target.rebuild(&config).unwrap();

        target.add(2, triangle(5.0));
        target.add(3, triangle(10.0));
        target.remove(&2);

        assert!(target.is_dirty());

        target.remove(&3);

        assert!(!target.is_dirty());
        assert_eq!(0, target.rebuild(&config).unwrap());
        assert!(target.get(&1).is_some());
    }

    #[test]
    fn update_unknown_object() {
        let mut target = Scene::<u32>::default();
        let err = target.update(&1, triangle(0.0)).unwrap_err();

        assert!(matches!(err, Error::UnknownObject));
        assert!(!target.is_dirty());
    }

    #[test]
    fn add_replaces_mesh() {
        let config = BvhConfig::default();
        let mut target = Scene::<u32>::default();

        target.add(1, triangle(0.0));
        target.rebuild(&config).unwrap();
        target.add(1, triangle(3.0));
        target.rebuild(&config).unwrap();

        assert_eq!(1, target.len());

        assert_eq!(
            vec3(3.0, 0.0, 0.0),
            target.get(&1).unwrap().bounds().min()
        );
    }

    #[test]
    fn rebuild_with_invalid_mesh() {
        let config = BvhConfig::default();
        let mut target = Scene::<u32>::default();

        target.add(1, broken());

        let err = target.rebuild(&config).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidGeometry(InvalidGeometry::IndexOutOfRange { .. })
        ));

        assert!(target.is_dirty());
        assert!(target.get(&1).is_none());

        // Fixing the mesh makes the scene buildable again
        target.update(&1, triangle(0.0)).unwrap();

        assert_eq!(1, target.rebuild(&config).unwrap());
        assert!(!target.is_dirty());
    }

    #[test]
    fn rebuild_with_invalid_config() {
        let mut target = Scene::<u32>::default();

        target.add(1, triangle(0.0));

        let err = target
            .rebuild(&BvhConfig::default().with_max_depth(0))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(target.is_dirty());
    }
}
