use super::pixel::Pixel;

#[derive(Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>, // starting at top left pixel of the image, pos = y * width + x
}

impl Image {

    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Pixel::zero(); width * height],
        }
    }

    pub fn test_image() -> Self {
        let mut image = Self::new(3, 2);

        let white = Pixel::from_rgb(255, 255, 255);
        let blue = Pixel::from_rgb(3, 155, 229);
        let red = Pixel::from_rgb(221, 47, 47);

        image.fill(white);
        image.set_pixel(0, 0, blue);
        image.set_pixel(2, 1, red);

        image
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.pixels[y * self.width + x] = pixel;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    pub fn set_pixel_bottom_left_origin(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.set_pixel(x, self.height - 1 - y, pixel)
    }

    pub fn get_pixel_bottom_left_origin(&self, x: usize, y: usize) -> Pixel {
        self.get_pixel(x, self.height - 1 - y)
    }

    pub fn fill(&mut self, color: Pixel) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_left_origin() {
        let image = Image::test_image();

        assert_eq!(image.get_pixel_bottom_left_origin(0, 1), Pixel::from_rgb(3, 155, 229));
        assert_eq!(image.get_pixel_bottom_left_origin(2, 0), Pixel::from_rgb(221, 47, 47));
        assert_eq!(image.get_pixel_bottom_left_origin(1, 0), Pixel::white());
    }
}
