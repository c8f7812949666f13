use super::vector3::Vector3;

#[derive(Clone, Debug)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {

    /// `direction` is normalized here, so parametric distances along the ray are world distances.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}
