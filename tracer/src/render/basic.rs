use super::render::{check_framebuffer, progress_bar, Render, RenderError};
use crate::render::framebuffer::Framebuffer;
use crate::render::shading::Shader;

/// Renders every pixel in order on the calling thread.
pub struct BasicRender {
    show_progress: bool,
}

impl BasicRender {

    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
        }
    }
}

impl Render for BasicRender {

    fn render(&self, shader: &Shader, render_to: &mut Framebuffer) -> Result<(), RenderError> {
        check_framebuffer(shader, render_to)?;

        let width = render_to.width();
        let progress = progress_bar(render_to.height(), self.show_progress);

        for index in 0..render_to.cells().len() {
            let (x, y) = render_to.coordinates(index);
            let colour = shader.trace_pixel(x, y);
            render_to.cells_mut()[index] = colour;

            if x == width - 1 {
                progress.inc(1);
            }
        }

        progress.finish_and_clear();
        Ok(())
    }
}
