use std::sync::Arc;

use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::scene_object::SceneObject;

pub struct Sphere {

    center: Vector3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SceneObject for Sphere {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        // |origin + t * direction - center|**2 = radius**2 expands to a * t**2 + b * t + c = 0 with
        // a = |direction|**2
        // b = 2 * dot(direction, origin - center)
        // c = |origin - center|**2 - radius**2
        let to_origin = ray.origin() - &self.center;

        let a = ray.direction().dot_product_with_self();
        let b = 2.0 * ray.direction().dot_product(&to_origin);
        let c = to_origin.dot_product_with_self() - self.radius.powi(2);

        let discriminant = b.powi(2) - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();
        let near = (-b - discriminant_sqrt) / (2.0 * a);
        let far = (-b + discriminant_sqrt) / (2.0 * a);

        if near > 0.0 {
            Some(Intersection::new(near))
        } else if far > 0.0 {
            // origin is inside the sphere
            Some(Intersection::new(far))
        } else {
            None
        }
    }

    fn surface_normal(&self, point: &Vector3) -> Vector3 {
        (point - &self.center) / self.radius
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }

    fn set_material(&mut self, material: Arc<Material>) {
        self.material = material;
    }
}

#[cfg(test)]
mod tests {
    use tracer_core::models::colour::Colour;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sphere(center: Vector3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Arc::new(Material::default()))
    }

    #[test]
    fn test_intersection_towards_center() {
        let center = Vector3::new(10.0, -20.0, 100.0);
        let origin = Vector3::new(-5.0, 3.0, -40.0);
        let sphere = sphere(center, 50.0);

        let ray = Ray::new(origin, Vector3::between(&origin, &center));
        let intersection = sphere.check_intersection(&ray).expect("expected ray to hit the sphere");

        let expected = origin.distance_to(&center) - 50.0;
        assert!((intersection.ray_distance() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_miss() {
        let sphere = sphere(Vector3::new(0.0, 0.0, 100.0), 50.0);
        let ray = Ray::new(Vector3::zero(), Vector3::up());

        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_missed() {
        let sphere = sphere(Vector3::new(0.0, 0.0, -100.0), 50.0);
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));

        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_hits_far_side() {
        let sphere = sphere(Vector3::zero(), 5.0);
        let ray = Ray::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 1.0));

        let intersection = sphere.check_intersection(&ray).expect("expected ray to hit the sphere");
        assert!((intersection.ray_distance() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_surface_normal_is_outward_unit() {
        let center = Vector3::new(1.0, 2.0, 3.0);
        let sphere = sphere(center, 4.0);

        let directions = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-3.0, 0.5, 2.0),
        ];

        for direction in directions.iter() {
            let point = center + direction.normalized() * 4.0;
            let normal = sphere.surface_normal(&point);

            assert!((normal.length() - 1.0).abs() < EPSILON);
            assert!(normal.dot_product(&(point - center)) > 0.0);
        }
    }

    #[test]
    fn test_set_material_last_wins() {
        let mut sphere = sphere(Vector3::zero(), 1.0);
        let red = Arc::new(Material::new(Colour::from_rgb(255, 0, 0)));
        let blue = Arc::new(Material::new(Colour::from_rgb(0, 0, 255)));

        sphere.set_material(red);
        sphere.set_material(blue.clone());

        assert!(Arc::ptr_eq(sphere.material(), &blue));
    }
}
