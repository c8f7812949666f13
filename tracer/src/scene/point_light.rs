use tracer_core::models::colour::Colour;

use crate::geometry::vector3::Vector3;

#[derive(Clone, Debug)]
pub struct PointLight {

    position: Vector3,
    intensity: f64,
    colour: Colour,
}

impl PointLight {

    pub fn new(position: Vector3, intensity: f64) -> Self {
        PointLight {
            position,
            intensity,
            colour: Colour::white(),
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Not used by shading, highlights are always white.
    pub fn colour(&self) -> Colour {
        self.colour
    }
}

impl Default for PointLight {

    fn default() -> Self {
        Self::new(Vector3::zero(), 1.0)
    }
}
