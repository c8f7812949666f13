use tracer_core::models::colour::Colour;

/// Phong surface description. One material is usually shared by several
/// objects, so scenes hand it out as `Arc<Material>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    colour: Colour,
    ambient_reflection_coeff: f64,
    diffuse_reflection_coeff: f64,
    specular_reflection_coeff: f64,
    phong_specularity: f64,
    phong_attenuation: f64,
}

impl Material {

    pub fn new(colour: Colour) -> Self {
        Self {
            colour,
            ..Self::default()
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_ambient_reflection_coeff(mut self, coeff: f64) -> Self {
        self.ambient_reflection_coeff = coeff;
        self
    }

    pub fn with_diffuse_reflection_coeff(mut self, coeff: f64) -> Self {
        self.diffuse_reflection_coeff = coeff;
        self
    }

    pub fn with_specular_reflection_coeff(mut self, coeff: f64) -> Self {
        self.specular_reflection_coeff = coeff;
        self
    }

    pub fn with_phong_specularity(mut self, specularity: f64) -> Self {
        self.phong_specularity = specularity;
        self
    }

    pub fn with_phong_attenuation(mut self, attenuation: f64) -> Self {
        self.phong_attenuation = attenuation;
        self
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn ambient_reflection_coeff(&self) -> f64 {
        self.ambient_reflection_coeff
    }

    pub fn diffuse_reflection_coeff(&self) -> f64 {
        self.diffuse_reflection_coeff
    }

    pub fn specular_reflection_coeff(&self) -> f64 {
        self.specular_reflection_coeff
    }

    pub fn phong_specularity(&self) -> f64 {
        self.phong_specularity
    }

    /// Exponent applied to the light distance when computing falloff.
    pub fn phong_attenuation(&self) -> f64 {
        self.phong_attenuation
    }
}

impl Default for Material {

    fn default() -> Self {
        Self {
            colour: Colour::white(),
            ambient_reflection_coeff: 1.0,
            diffuse_reflection_coeff: 1.0,
            specular_reflection_coeff: 1.0,
            phong_specularity: 10.0,
            phong_attenuation: 0.8,
        }
    }
}
