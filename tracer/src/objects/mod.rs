pub mod plane;
pub mod sphere;
