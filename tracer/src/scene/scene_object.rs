use std::sync::Arc;

use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::Intersection;

/// Geometry that rays can hit.
///
/// Implementations never fail: a miss is `None`. Behaviour for rays with a zero
/// direction is unspecified.
pub trait SceneObject {

    /// Nearest intersection in front of the ray origin, if any.
    fn check_intersection(&self, ray: &Ray) -> Option<Intersection>;

    /// Outward unit normal at `point`. Only meaningful when `point` lies on the
    /// surface, i.e. was produced from a successful `check_intersection`.
    fn surface_normal(&self, point: &Vector3) -> Vector3;

    fn material(&self) -> &Arc<Material>;

    fn set_material(&mut self, material: Arc<Material>);
}
