use std::sync::Arc;

use tracer_core::models::colour::Colour;

use super::{camera::Camera, point_light::PointLight, scene_object::SceneObject};
use crate::materials::material::Material;

pub type SceneObjectBox = Box<dyn SceneObject + Sync + Send>;

/// Everything a render pass reads: camera, lights, materials, objects and
/// the lighting environment. Objects are kept in insertion order, which is
/// also the order used to break ties between equally distant hits.
pub struct Scene {
    camera: Camera,
    objects: Vec<SceneObjectBox>,
    lights: Vec<PointLight>,
    materials: Vec<Arc<Material>>,

    background: Colour,
    ambient_lighting_enabled: bool,
    ambient_lighting_intensity: f64,
}

impl Scene {

    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
            materials: Vec::new(),
            background: Colour::black(),
            ambient_lighting_enabled: true,
            ambient_lighting_intensity: 0.01,
        }
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn add_object(&mut self, obj: SceneObjectBox) {
        self.objects.push(obj)
    }

    pub fn objects(&self) -> &[SceneObjectBox] {
        &self.objects
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light)
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Registers a material with the scene and returns the handle objects should share.
    pub fn add_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials.push(material.clone());
        material
    }

    pub fn materials(&self) -> &[Arc<Material>] {
        &self.materials
    }

    pub fn set_background(&mut self, background: Colour) {
        self.background = background;
    }

    pub fn background(&self) -> Colour {
        self.background
    }

    pub fn set_ambient_lighting_enabled(&mut self, enabled: bool) {
        self.ambient_lighting_enabled = enabled;
    }

    pub fn set_ambient_lighting_intensity(&mut self, intensity: f64) {
        self.ambient_lighting_intensity = intensity;
    }

    /// Intensity the ambient term is scaled by, zero while ambient lighting is disabled.
    pub fn ambient_lighting_intensity(&self) -> f64 {
        if self.ambient_lighting_enabled {
            self.ambient_lighting_intensity
        } else {
            0.0
        }
    }
}
