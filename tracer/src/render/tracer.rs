use std::time::Instant;

use tracer_core::models::{colour::Colour, image::Image};

use crate::config::RenderSettings;
use crate::geometry::ray::Ray;
use crate::render::basic::BasicRender;
use crate::render::framebuffer::Framebuffer;
use crate::render::multithreaded::MultithreadedRender;
use crate::render::render::{Render, RenderError};
use crate::render::shading::Shader;
use crate::scene::scene::Scene;

/// Owns a scene and the framebuffer it is rendered into.
pub struct Tracer {
    shader: Shader,
    framebuffer: Framebuffer,
    threads: usize,
    show_progress: bool,
}

impl Tracer {

    /// The scene camera is reconfigured to the settings' resolution and the
    /// framebuffer starts out filled with the background colour.
    pub fn new(mut scene: Scene, settings: &RenderSettings) -> Self {
        let camera = scene.camera().with_render_dimensions(settings.width, settings.height);
        scene.set_camera(camera);

        let framebuffer = Framebuffer::new(settings.width, settings.height, scene.background());

        Self {
            shader: Shader::new(scene),
            framebuffer,
            threads: settings.threads,
            show_progress: settings.show_progress,
        }
    }

    pub fn render(&mut self) -> Result<(), RenderError> {
        let render = self.renderer();

        info!(
            "rendering {}x{} image using {} thread{}",
            self.framebuffer.width(),
            self.framebuffer.height(),
            self.threads,
            if self.threads > 1 { "s" } else { "" }
        );
        debug!(
            "scene has {} objects, {} materials and {} lights",
            self.shader.scene().objects().len(),
            self.shader.scene().materials().len(),
            self.shader.scene().lights().len()
        );

        let started_at = Instant::now();
        render.render(&self.shader, &mut self.framebuffer)?;

        info!("rendered in {:.2?}, {} rays cast", started_at.elapsed(), self.ray_count());
        Ok(())
    }

    fn renderer(&self) -> Box<dyn Render> {
        if self.threads > 1 {
            Box::new(MultithreadedRender::new(self.threads, self.show_progress))
        } else {
            Box::new(BasicRender::new(self.show_progress))
        }
    }

    pub fn trace_ray(&self, ray: &Ray) -> Colour {
        self.shader.trace_ray(ray)
    }

    /// Primary and shadow rays cast so far. Diagnostic only.
    pub fn ray_count(&self) -> u64 {
        self.shader.ray_count()
    }

    pub fn scene(&self) -> &Scene {
        self.shader.scene()
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn image(&self) -> Image {
        self.framebuffer.to_image()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::{plane::Plane, sphere::Sphere};
    use crate::scene::{camera::Camera, point_light::PointLight};
    use crate::scenes::{demo::DemoSceneProvider, provider::SceneProvider};

    use super::*;

    const WIDTH: usize = 32;
    const HEIGHT: usize = 24;

    fn settings(threads: usize) -> RenderSettings {
        RenderSettings {
            width: WIDTH,
            height: HEIGHT,
            threads,
            output: "unused.bmp".to_string(),
            show_progress: false,
        }
    }

    fn sphere_scene() -> Scene {
        let camera = Camera::new(Vector3::zero(), Vector3::new(0.0, 0.0, 100.0))
            .with_horizontal_field_of_view(60.0);
        let mut scene = Scene::new(camera);
        scene.set_background(Colour::from_rgb(10, 20, 30));
        scene.set_ambient_lighting_intensity(0.5);

        let material = scene.add_material(Material::new(Colour::from_rgb(200, 100, 50)));
        scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 0.0, 100.0), 50.0, material)));

        scene
    }

    #[test]
    fn test_new_fills_framebuffer_with_background() {
        let tracer = Tracer::new(sphere_scene(), &settings(1));

        assert_eq!(tracer.framebuffer().width(), WIDTH);
        assert_eq!(tracer.framebuffer().height(), HEIGHT);
        assert!(tracer.framebuffer().cells().iter().all(|v| *v == Colour::from_rgb(10, 20, 30)));
        assert_eq!(tracer.ray_count(), 0);
    }

    #[test]
    fn test_render_single_sphere_without_lights() {
        let mut tracer = Tracer::new(sphere_scene(), &settings(1));
        tracer.render().expect("failed to render");

        let framebuffer = tracer.framebuffer();
        let background = Colour::from_rgb(10, 20, 30);
        let ambient = Colour::new(100.0, 50.0, 25.0);

        for &(x, y) in [(0, 0), (WIDTH - 1, 0), (0, HEIGHT - 1), (WIDTH - 1, HEIGHT - 1)].iter() {
            assert_eq!(framebuffer.get(x, y), background, "corner ({}, {})", x, y);
        }
        for &(x, y) in [(WIDTH / 2, HEIGHT / 2), (WIDTH / 2 - 1, HEIGHT / 2 - 1)].iter() {
            assert_eq!(framebuffer.get(x, y), ambient, "center ({}, {})", x, y);
        }

        assert_eq!(tracer.ray_count(), (WIDTH * HEIGHT) as u64);
    }

    #[test]
    fn test_render_empty_scene_is_background() {
        let mut scene = Scene::new(Camera::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0)));
        scene.set_background(Colour::from_rgb(1, 2, 3));
        let mut tracer = Tracer::new(scene, &settings(1));
        tracer.render().expect("failed to render");

        assert!(tracer.framebuffer().cells().iter().all(|v| *v == Colour::from_rgb(1, 2, 3)));
    }

    #[test]
    fn test_trace_ray_standalone() {
        let tracer = Tracer::new(sphere_scene(), &settings(1));

        let hit = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));
        let miss = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(tracer.trace_ray(&hit), Colour::new(100.0, 50.0, 25.0));
        assert_eq!(tracer.trace_ray(&miss), Colour::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_multithreaded_matches_basic() {
        let scene = || {
            let mut scene = sphere_scene();
            let floor = scene.add_material(Material::new(Colour::from_rgb(179, 248, 203)));
            scene.add_object(Box::new(Plane::new(Vector3::new(0.0, -40.0, 0.0), Vector3::up(), floor)));
            scene.add_light(PointLight::new(Vector3::new(100.0, 100.0, 0.0), 100.0));
            scene.add_light(PointLight::new(Vector3::new(-100.0, 50.0, 50.0), 30.0));
            scene
        };

        let mut basic = Tracer::new(scene(), &settings(1));
        basic.render().expect("failed to render");

        let mut multithreaded = Tracer::new(scene(), &settings(4));
        multithreaded.render().expect("failed to render");

        assert_eq!(basic.framebuffer().cells(), multithreaded.framebuffer().cells());
        assert_eq!(basic.ray_count(), multithreaded.ray_count());
        assert!(basic.ray_count() > (WIDTH * HEIGHT) as u64);
    }

    #[test]
    fn test_render_demo_scene() {
        let mut tracer = Tracer::new(DemoSceneProvider::new().scene(), &settings(2));
        tracer.render().expect("failed to render");

        let image = tracer.image();
        assert_eq!(image.pixels.len(), WIDTH * HEIGHT);
        // the floor fills the bottom of the frame
        assert_ne!(image.get_pixel(WIDTH / 2, HEIGHT - 1), tracer.scene().background().to_pixel());
    }
}
