use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::render::{check_framebuffer, progress_bar, Render, RenderError};
use crate::render::framebuffer::Framebuffer;
use crate::render::shading::Shader;

/// Renders rows in parallel on a dedicated rayon pool. Produces the same
/// framebuffer and ray count as [`super::basic::BasicRender`].
pub struct MultithreadedRender {
    threads: usize,
    show_progress: bool,
}

impl MultithreadedRender {

    pub fn new(threads: usize, show_progress: bool) -> Self {
        Self {
            threads,
            show_progress,
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, shader: &Shader, render_to: &mut Framebuffer) -> Result<(), RenderError> {
        check_framebuffer(shader, render_to)?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|err| RenderError::ThreadPool { description: err.to_string() })?;

        let width = render_to.width();
        let progress = progress_bar(render_to.height(), self.show_progress);

        pool.install(|| {
            render_to.cells_mut().par_chunks_mut(width).enumerate().for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = shader.trace_pixel(x, y);
                }
                progress.inc(1);
            });
        });

        progress.finish_and_clear();
        Ok(())
    }
}
