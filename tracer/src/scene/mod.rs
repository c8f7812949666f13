pub mod camera;
pub mod point_light;
pub mod scene;
pub mod scene_object;
