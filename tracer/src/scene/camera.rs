use crate::geometry::{ray::Ray, vector3::Vector3};

/// Pinhole camera looking from `position` at `target`.
///
/// Pixel (0, 0) is the top left corner of the image and rows go down, in the
/// direction opposite to `up`.
#[derive(Clone, Debug)]
pub struct Camera {

    position: Vector3,
    target: Vector3,
    up_direction: Vector3,
    horizontal_field_of_view: f64,
    width: usize,
    height: usize,

    forward: Vector3,
    right: Vector3,
    up: Vector3,
    half_width: f64,
    half_height: f64,
}

impl Camera {

    pub fn new(position: Vector3, target: Vector3) -> Self {
        Self::with_settings(position, target, Vector3::up(), 90.0, 640, 480)
    }

    fn with_settings(
        position: Vector3,
        target: Vector3,
        up_direction: Vector3,
        horizontal_field_of_view: f64,
        width: usize,
        height: usize,
    ) -> Self {
        let forward = Vector3::between(&position, &target).normalized();
        let right = up_direction.cross_product(&forward).normalized();
        let up = forward.cross_product(&right);

        let half_width = (horizontal_field_of_view.to_radians() / 2.0).tan();
        let half_height = half_width * height as f64 / width as f64;

        Self {
            position,
            target,
            up_direction,
            horizontal_field_of_view,
            width,
            height,
            forward,
            right,
            up,
            half_width,
            half_height,
        }
    }

    pub fn with_up_direction(&self, up_direction: Vector3) -> Self {
        Self::with_settings(self.position, self.target, up_direction, self.horizontal_field_of_view, self.width, self.height)
    }

    /// Field of view in degrees.
    pub fn with_horizontal_field_of_view(&self, degrees: f64) -> Self {
        Self::with_settings(self.position, self.target, self.up_direction, degrees, self.width, self.height)
    }

    pub fn with_render_dimensions(&self, width: usize, height: usize) -> Self {
        Self::with_settings(self.position, self.target, self.up_direction, self.horizontal_field_of_view, width, height)
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn render_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_ray(&self, x: usize, y: usize) -> Ray {
        let normalized_x = 2.0 * (x as f64 + 0.5) / self.width as f64 - 1.0;
        let normalized_y = 1.0 - 2.0 * (y as f64 + 0.5) / self.height as f64;

        let direction = self.forward
            + self.right * (normalized_x * self.half_width)
            + self.up * (normalized_y * self.half_height);

        Ray::new(self.position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vector3::zero(), Vector3::new(0.0, 0.0, 100.0))
            .with_horizontal_field_of_view(90.0)
            .with_render_dimensions(101, 51)
    }

    #[test]
    fn test_center_pixel_looks_at_target() {
        let ray = camera().pixel_ray(50, 25);

        assert_eq!(*ray.origin(), Vector3::zero());
        assert_eq!(*ray.direction(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_top_left_pixel_looks_up_and_left() {
        let direction = *camera().pixel_ray(0, 0).direction();

        assert!(direction.x < 0.0);
        assert!(direction.y > 0.0);
        assert!(direction.z > 0.0);
    }

    #[test]
    fn test_horizontal_field_of_view() {
        let camera = Camera::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0))
            .with_horizontal_field_of_view(90.0)
            .with_render_dimensions(2, 2);

        // pixel centers are at a quarter of the image from the edge
        let direction = *camera.pixel_ray(1, 0).direction();
        let expected = Vector3::new(0.5, 0.5, 1.0).normalized();
        assert_eq!(direction, expected);
    }

    #[test]
    fn test_pixel_ray_is_deterministic() {
        let camera = camera();
        let first = camera.pixel_ray(13, 42);
        let second = camera.pixel_ray(13, 42);

        assert_eq!(*first.direction(), *second.direction());
    }

    #[test]
    fn test_flipped_up_direction_flips_rows() {
        let camera = camera().with_up_direction(Vector3::new(0.0, -1.0, 0.0));
        assert!(camera.pixel_ray(0, 0).direction().y < 0.0);
    }
}
