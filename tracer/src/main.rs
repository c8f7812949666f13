#[macro_use]
extern crate log;

use std::error::Error;
use std::{env, fs, process};

use env_logger::Env;

use bmp_support::BMPFormatSupportPlugin;
use tracer::config::{parse_args, RenderSettings};
use tracer::render::tracer::Tracer;
use tracer::scenes::demo::DemoSceneProvider;
use tracer::scenes::provider::SceneProvider;
use tracer_core::models::io::ImageWriterOptions;
use tracer_core::plugins::ImageFormatSupportPlugin;
use tracer_core::utils::print_intro;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().skip(1).collect();
    debug!("args are: {:?}", args);

    let settings = match parse_args(&args).and_then(|options| RenderSettings::from_options(&options)) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            error!("usage: tracer --width=640 --height=480 --threads=4 --output=result.bmp --progress=false");
            process::exit(1);
        }
    };

    if let Err(err) = render_scene(&settings) {
        error!("{}", err);
        process::exit(1);
    }

    info!("done");
}

fn render_scene(settings: &RenderSettings) -> Result<(), Box<dyn Error>> {
    let output_format_support = BMPFormatSupportPlugin::new();
    let scene_provider = DemoSceneProvider::new();

    let extension = output_format_support.file_extension();
    if !settings.output.to_lowercase().ends_with(&format!(".{}", extension)) {
        warn!("output file {} does not have .{} extension, writing {} anyway", settings.output, extension, output_format_support.format_name());
    }

    let mut tracer = Tracer::new(scene_provider.scene(), settings);
    tracer.render()?;

    info!("saving rendered image as {}", output_format_support.format_name());

    let image_bytes = output_format_support.writer()
        .write(&tracer.image(), &ImageWriterOptions::default())?;
    fs::write(&settings.output, &image_bytes)?;

    info!("saved {}", settings.output);
    Ok(())
}
