use tracer_core::models::{colour::Colour, image::Image};

/// Flat, row-major buffer of unclamped colours, (0, 0) is the top left cell.
pub struct Framebuffer {
    width: usize,
    height: usize,
    cells: Vec<Colour>,
}

impl Framebuffer {

    pub fn new(width: usize, height: usize, fill: Colour) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Colour] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Colour] {
        &mut self.cells
    }

    /// Pixel coordinates of the cell at `index`.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        let x = index % self.width;
        let y = (index - x) / self.width;
        (x, y)
    }

    pub fn get(&self, x: usize, y: usize) -> Colour {
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        self.cells[y * self.width + x] = colour;
    }

    /// Clamps every cell to a displayable pixel.
    pub fn to_image(&self) -> Image {
        let mut image = Image::new(self.width, self.height);
        for (pixel, colour) in image.pixels.iter_mut().zip(self.cells.iter()) {
            *pixel = colour.to_pixel();
        }
        image
    }
}
