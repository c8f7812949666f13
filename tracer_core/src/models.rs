pub mod colour;
pub mod image;
pub mod io;
pub mod pixel;
