use std::ops::{Add, AddAssign, Mul};

use super::pixel::Pixel;

/// Linear colour used while shading. Channels use the 0..255 scale of [`Pixel`]
/// but are never clamped until [`Colour::to_pixel`] is called.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colour {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Colour {

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Colour {
            red,
            green,
            blue,
        }
    }

    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::new(255.0, 255.0, 255.0)
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red as f64, green as f64, blue as f64)
    }

    pub fn to_pixel(&self) -> Pixel {
        Pixel::from_rgb(
            to_display_channel(self.red),
            to_display_channel(self.green),
            to_display_channel(self.blue),
        )
    }
}

impl Default for Colour {

    fn default() -> Self {
        Self::black()
    }
}

// `max` discards NaN, so a broken channel becomes 0.
fn to_display_channel(value: f64) -> u8 {
    value.max(0.0).min(255.0) as u8
}

impl Add for Colour {

    type Output = Colour;

    fn add(self, rhs: Self) -> Self::Output {
        Colour::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

/// Adds the same amount to every channel.
impl Add<f64> for Colour {

    type Output = Colour;

    fn add(self, rhs: f64) -> Self::Output {
        Colour::new(self.red + rhs, self.green + rhs, self.blue + rhs)
    }
}

impl AddAssign for Colour {

    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<f64> for Colour {

    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Colour {

    type Output = Colour;

    fn mul(self, rhs: f64) -> Self::Output {
        Colour::new(self.red * rhs, self.green * rhs, self.blue * rhs)
    }
}
