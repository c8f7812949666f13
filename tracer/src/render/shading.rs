use std::sync::atomic::{AtomicU64, Ordering};

use tracer_core::models::colour::Colour;

use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::scene::{Scene, SceneObjectBox};

/// Hits closer than this to the ray origin are ignored, so secondary rays do
/// not hit the surface they start from.
pub const INTERSECTION_EPSILON: f64 = 0.0001;

/// Keeps light falloff finite when a light sits on the surface.
const ATTENUATION_BIAS: f64 = 0.01;

/// Specular highlights are added to every channel, scaled to the 0..255 range.
const SPECULAR_SCALE: f64 = 255.0;

/// Phong shading with hard shadows over a scene.
///
/// Counts every primary and shadow ray it casts. The counter is atomic, so one
/// shader can be shared by several render threads and still report an exact total.
pub struct Shader {
    scene: Scene,
    ray_count: AtomicU64,
}

impl Shader {

    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            ray_count: AtomicU64::new(0),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn ray_count(&self) -> u64 {
        self.ray_count.load(Ordering::Relaxed)
    }

    /// Casts the primary ray for pixel (x, y) and shades it.
    pub fn trace_pixel(&self, x: usize, y: usize) -> Colour {
        let ray = self.scene.camera().pixel_ray(x, y);
        self.count_ray();

        self.trace_ray(&ray)
    }

    /// Colour seen along `ray`. Only shadow rays cast while shading are counted.
    pub fn trace_ray(&self, ray: &Ray) -> Colour {
        let (object, intersection) = match self.find_intersection(ray) {
            Some(v) => v,
            None => return self.scene.background(),
        };

        let hit_point = ray.point(intersection.ray_distance());
        let hit_normal = object.surface_normal(&hit_point);

        self.shade(object.material(), &hit_point, &hit_normal)
    }

    /// Nearest object along `ray`. When two objects are hit at exactly the same
    /// distance the one added to the scene first wins.
    pub fn find_intersection(&self, ray: &Ray) -> Option<(&SceneObjectBox, Intersection)> {
        let mut result: Option<(&SceneObjectBox, Intersection)> = None;

        for object in self.scene.objects() {
            let intersection = match object.check_intersection(ray) {
                Some(v) if v.ray_distance() > INTERSECTION_EPSILON => v,
                _ => continue,
            };

            let is_closer = match &result {
                Some((_, nearest)) => intersection.ray_distance() < nearest.ray_distance(),
                None => true,
            };

            if is_closer {
                result = Some((object, intersection));
            }
        }

        result
    }

    fn shade(&self, material: &Material, hit_point: &Vector3, hit_normal: &Vector3) -> Colour {
        let object_colour = material.colour();

        let mut colour = object_colour * (material.ambient_reflection_coeff() * self.scene.ambient_lighting_intensity());

        let to_camera = Vector3::between(hit_point, self.scene.camera().position()).normalized();

        for light in self.scene.lights() {
            let to_light = Vector3::between(hit_point, light.position());
            let light_distance = to_light.length();
            let light_direction = to_light.normalized();

            let attenuation = light.intensity() / (light_distance.powf(material.phong_attenuation()) + ATTENUATION_BIAS);

            let facing = hit_normal.dot_product(&light_direction);
            if facing <= 0.0 {
                continue;
            }

            // TODO: ignore occluders further away than the light itself
            if self.is_in_shadow(&Ray::new(*hit_point, light_direction)) {
                continue;
            }

            colour += object_colour * (attenuation * material.diffuse_reflection_coeff() * facing);

            // light_direction is unit length and facing is its projection on the normal,
            // so the reflection is already normalized
            let reflected = *hit_normal * (facing * 2.0) - light_direction;
            let cos_alpha = reflected.dot_product(&to_camera);

            // max also turns NaN from negative bases into zero
            let specular = cos_alpha.powf(material.phong_specularity()).max(0.0);

            colour += SPECULAR_SCALE * attenuation * material.specular_reflection_coeff() * specular;
        }

        colour
    }

    /// Any hit at all counts, even one behind the light.
    fn is_in_shadow(&self, shadow_ray: &Ray) -> bool {
        self.count_ray();

        self.scene.objects().iter().any(|object| {
            object.check_intersection(shadow_ray)
                .map(|intersection| intersection.ray_distance() > INTERSECTION_EPSILON)
                .unwrap_or(false)
        })
    }

    fn count_ray(&self) {
        self.ray_count.fetch_add(1, Ordering::Relaxed);
    }
}
