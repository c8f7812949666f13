use crate::models::io::{ImageReader, ImageWriter};

/// Reader and writer for a single image file format.
pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn file_extension(&self) -> String {
        self.format_name().to_lowercase()
    }

    fn reader(&self) -> Box<dyn ImageReader>;
    fn writer(&self) -> Box<dyn ImageWriter>;
}
