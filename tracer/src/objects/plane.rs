use std::sync::Arc;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::scene_object::SceneObject;

const DELTA: f64 = 1e-10;

/// Infinite plane through `position`. Visible from both sides, but the normal is
/// always the one it was built with.
pub struct Plane {

    position: Vector3,
    normal: Vector3,
    material: Arc<Material>,
}

impl Plane {

    pub fn new(position: Vector3, normal: Vector3, material: Arc<Material>) -> Self {
        Self {
            position,
            normal: normal.normalized(),
            material,
        }
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }
}

impl SceneObject for Plane {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let angle = self.normal.dot_product(ray.direction());

        if angle.abs() <= DELTA {
            return None;
        }

        let direction = &self.position - ray.origin();
        let scale = direction.dot_product(&self.normal) / angle;
        if scale <= 0.0 {
            return None;
        }

        Some(Intersection::new(scale))
    }

    fn surface_normal(&self, _point: &Vector3) -> Vector3 {
        self.normal
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }

    fn set_material(&mut self, material: Arc<Material>) {
        self.material = material;
    }
}
