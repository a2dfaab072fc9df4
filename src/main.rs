use clap::Parser;
use log::info;

mod camera;
mod cli;
mod hittable;
mod interval;
mod logger;
mod material;
mod output;
mod quad;
mod random;
mod ray;
mod render;
mod scene;
mod sphere;

use cli::Args;
use logger::init_logger;
use output::save_image_as_png;
use render::{postprocess, render_parallel, RenderConfig};

fn main() {
    let args = Args::parse();

    init_logger(&args);

    // Log application startup with version information
    info!(
        "boxtrace - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}, workers: {}",
        args.width, args.height, args.samples, args.max_depth, args.workers
    );

    let cfg = RenderConfig {
        width: args.width,
        height: args.height,
        samples: args.samples,
        max_depth: args.max_depth,
        workers: args.workers,
    };

    let image = render_parallel(&cfg);

    info!("combining images");
    let pixels = postprocess(&image, args.width, args.height, args.samples);

    save_image_as_png(&pixels, args.width, args.height, &args.output);
}
