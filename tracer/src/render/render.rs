use custom_error::custom_error;
use indicatif::ProgressBar;

use crate::render::framebuffer::Framebuffer;
use crate::render::shading::Shader;

custom_error! {pub RenderError
    InvalidFramebuffer {description: String} = "Invalid framebuffer: {description}",
    ThreadPool {description: String} = "Failed to start render threads: {description}",
}

/// Fills a framebuffer with the colour of every pixel's primary ray.
pub trait Render {

    fn render(&self, shader: &Shader, render_to: &mut Framebuffer) -> Result<(), RenderError>;
}

pub fn check_framebuffer(shader: &Shader, render_to: &Framebuffer) -> Result<(), RenderError> {
    let (width, height) = shader.scene().camera().render_dimensions();

    if width == 0 || height == 0 {
        return Err(RenderError::InvalidFramebuffer {
            description: format!("nothing to render into a {}x{} framebuffer", width, height),
        });
    }

    if (width, height) != (render_to.width(), render_to.height()) {
        return Err(RenderError::InvalidFramebuffer {
            description: format!(
                "camera renders {}x{} but framebuffer is {}x{}",
                width, height, render_to.width(), render_to.height()
            ),
        });
    }

    Ok(())
}

pub fn progress_bar(rows: usize, show_progress: bool) -> ProgressBar {
    if show_progress {
        ProgressBar::new(rows as u64)
    } else {
        ProgressBar::hidden()
    }
}
