/// Where a ray meets an object. `ray_distance` is the parametric distance along
/// the ray, so intersections with different objects compare directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {

    ray_distance: f64,
}

impl Intersection {

    pub fn new(ray_distance: f64) -> Self {
        Self {
            ray_distance,
        }
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }
}
