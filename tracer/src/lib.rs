#[macro_use]
extern crate log;

pub mod config;
pub mod geometry;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;
