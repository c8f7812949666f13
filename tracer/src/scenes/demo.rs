use tracer_core::models::colour::Colour;

use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::objects::{plane::Plane, sphere::Sphere};
use crate::scene::{camera::Camera, point_light::PointLight, scene::Scene};
use crate::scenes::provider::SceneProvider;

/// Three spheres resting on a floor, lit by two point lights.
pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self) -> Scene {
        let camera = Camera::new(Vector3::new(200.0, 200.0, -300.0), Vector3::zero())
            .with_up_direction(Vector3::up())
            .with_horizontal_field_of_view(120.0);

        let mut scene = Scene::new(camera);
        scene.set_ambient_lighting_enabled(true);
        scene.set_ambient_lighting_intensity(0.08);

        scene.add_light(
            PointLight::new(Vector3::new(500.0, 200.0, 500.0), 100.0)
                .with_colour(Colour::white())
        );
        scene.add_light(PointLight::new(Vector3::new(-500.0, 200.0, -500.0), 30.0));

        let red = scene.add_material(
            Material::new(Colour::from_rgb(255, 183, 182))
                .with_phong_specularity(200.0)
        );
        let blue = scene.add_material(
            Material::new(Colour::from_rgb(119, 158, 247))
                .with_specular_reflection_coeff(0.5)
                .with_phong_specularity(8.0)
        );
        let green = scene.add_material(
            Material::new(Colour::from_rgb(179, 248, 203))
                .with_specular_reflection_coeff(0.0)
                .with_phong_specularity(0.0)
        );

        scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 100.0, 100.0), 70.0, red.clone())));
        scene.add_object(Box::new(Sphere::new(Vector3::new(-150.0, 0.0, 0.0), 50.0, blue)));
        scene.add_object(Box::new(Sphere::new(Vector3::new(150.0, 0.0, 0.0), 50.0, red)));
        scene.add_object(Box::new(Plane::new(Vector3::zero(), Vector3::up(), green)));

        scene
    }
}
