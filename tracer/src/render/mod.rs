pub mod basic;
pub mod framebuffer;
pub mod intersection;
pub mod multithreaded;
pub mod render;
pub mod shading;
pub mod tracer;
