//! Parallel orchestration and image post-processing.
//!
//! The total sample budget is sharded across worker threads. Each worker
//! owns a private Scene, Camera and RNG stream and reports one unnormalized
//! image over a channel; the orchestrator sums the partial images, then
//! normalizes, tone-maps, reorients and quantizes the result. The reduction
//! is commutative, so worker completion order does not matter.

use std::sync::mpsc;
use std::thread;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::camera::Camera;
use crate::interval::Interval;
use crate::scene::Scene;

/// Render parameters for one full image.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Total samples per pixel, across all workers.
    pub samples: u32,
    /// Ray bounce limit.
    pub max_depth: u32,
    /// Number of worker threads.
    pub workers: u32,
}

/// Split a sample budget as evenly as possible across workers.
///
/// The first `total % workers` workers take one extra sample, so the shares
/// always sum to exactly `total`.
pub fn split_samples(total: u32, workers: u32) -> Vec<u32> {
    let base = total / workers;
    let extra = total % workers;
    (0..workers).map(|i| base + u32::from(i < extra)).collect()
}

/// One render worker: builds its own scene and accumulates its sample share.
fn render_worker(cfg: RenderConfig, samples: u32) -> Vec<f32> {
    let scene = Scene::cornell_box();
    let camera = Camera::new(cfg.width, cfg.height, cfg.max_depth);
    camera.render(&scene, samples)
}

/// Render the scene across `cfg.workers` isolated workers and sum their
/// partial images.
///
/// Returns the unnormalized accumulation buffer, shaped (width, height, 3).
/// A worker dying before it reports is fatal; there is no recovery or
/// timeout policy.
pub fn render_parallel(cfg: &RenderConfig) -> Vec<f32> {
    let (tx, rx) = mpsc::channel();

    let mut handles = Vec::with_capacity(cfg.workers as usize);
    for samples in split_samples(cfg.samples, cfg.workers) {
        let tx = tx.clone();
        let cfg = *cfg;
        handles.push(thread::spawn(move || {
            // Send fails only when the orchestrator is gone
            let _ = tx.send(render_worker(cfg, samples));
        }));
    }
    drop(tx);

    let pb = ProgressBar::new(cfg.workers as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .expect("static progress template"),
    );

    let mut image = vec![0.0f32; cfg.width as usize * cfg.height as usize * 3];
    for _ in 0..cfg.workers {
        let partial = rx.recv().expect("worker terminated without a result");
        for (acc, p) in image.iter_mut().zip(&partial) {
            *acc += p;
        }
        pb.inc(1);
    }
    pb.finish();

    for (id, handle) in handles.into_iter().enumerate() {
        handle.join().expect("worker thread panicked");
        info!("worker {} done", id);
    }

    image
}

/// Normalize, tone-map, reorient and quantize an accumulation buffer.
///
/// Divides by the total sample count, clamps to [0, 1], applies square-root
/// gamma, transposes the (width, height) axes and flips the row order so the
/// origin lands at the top left, then truncates to 8-bit channels. The
/// result is a (height, width, 3) row-major pixel buffer.
pub fn postprocess(image: &[f32], width: u32, height: u32, total_samples: u32) -> Vec<u8> {
    let unit = Interval::new(0.0, 1.0);
    let scale = 1.0 / total_samples as f32;

    let (w, h) = (width as usize, height as usize);
    let mut pixels = vec![0u8; w * h * 3];

    for i in 0..w {
        for j in 0..h {
            let src = (i * h + j) * 3;
            let dst = ((h - 1 - j) * w + i) * 3;

            for c in 0..3 {
                let v = unit.clamp(image[src + c] * scale).sqrt();
                pixels[dst + c] = (v * 255.0) as u8;
            }
        }
    }

    pixels
}
