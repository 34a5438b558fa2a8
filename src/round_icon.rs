use crate::config::{IconSpec, RoundIconConfig};
use crate::error::IconError;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::FilterType,
    ColorType, DynamicImage, GrayImage, ImageEncoder, ImageError, ImageResult, Luma, RgbaImage,
};
use imageproc::drawing::draw_filled_ellipse_mut;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// What to do when one icon fails after the source check passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing icon and return its error.
    #[default]
    Halt,
    /// Record the failure and carry on with the remaining icons.
    KeepGoing,
}

/// Outcome of a driver run that got past the source check.
#[derive(Debug, Default)]
pub struct RunReport {
    pub generated: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, IconError)>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Returns true if `path` is a regular file. Otherwise prints an error line
/// naming the path and returns false; nothing should be rendered then.
pub fn ensure_source_exists(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }
    println!("Error: {} not found!", path.display());
    false
}

/// Render every configured round icon from the configured source, in order.
pub fn generate_round_icons(
    config: &RoundIconConfig,
    policy: FailurePolicy,
) -> Result<RunReport, IconError> {
    if !ensure_source_exists(&config.source) {
        return Err(IconError::MissingSource {
            path: config.source.clone(),
        });
    }

    let mut report = RunReport::default();

    for spec in &config.icons {
        match render_spec(&config.source, spec) {
            Ok(()) => report.generated.push(spec.output().to_path_buf()),
            Err(err) if policy == FailurePolicy::KeepGoing => {
                warn!(density = spec.density(), error = ?err, "skipping round icon");
                report.failed.push((spec.output().to_path_buf(), err));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

fn render_spec(source: &Path, spec: &IconSpec) -> Result<(), IconError> {
    render_round_icon(source, spec.size(), spec.output())?;
    info!(density = spec.density(), size = spec.size(), "rendered round icon");
    Ok(())
}

/// Decode `source_path`, fit it to a `size`×`size` square, clip it to the
/// inscribed circle and write the result as PNG to `output_path`.
///
/// The source is decoded before anything touches the filesystem, so a
/// decode failure leaves `output_path` as it was.
pub fn render_round_icon(
    source_path: &Path,
    size: u32,
    output_path: &Path,
) -> Result<(), IconError> {
    let source = load_image(source_path)?;
    let icon = round_icon(&source, size);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|err| IconError::io(parent, err))?;
    }

    save_png(&icon, output_path)?;
    println!("Generated: {}", output_path.display());
    Ok(())
}

fn load_image(path: &Path) -> Result<DynamicImage, IconError> {
    let source = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        "decoded source image"
    );

    Ok(DynamicImage::ImageRgba8(source.to_rgba8()))
}

/// Centered aspect-fit of `source` to `size`×`size` with a circular alpha.
pub fn round_icon(source: &DynamicImage, size: u32) -> RgbaImage {
    // Scales to cover the square, then trims the overflow equally from both sides.
    let mut icon = source
        .resize_to_fill(size, size, FilterType::Lanczos3)
        .to_rgba8();
    let mask = circular_mask(size);
    apply_mask(&mut icon, &mask);
    icon
}

/// Single-channel mask: 255 inside the circle inscribed in a `size` square,
/// 0 everywhere else.
pub fn circular_mask(size: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let radius = (size / 2) as i32;
    draw_filled_ellipse_mut(&mut mask, (radius, radius), radius, radius, Luma([255]));
    mask
}

/// Replaces the alpha channel of `icon` with `mask`.
fn apply_mask(icon: &mut RgbaImage, mask: &GrayImage) {
    for (pixel, coverage) in icon.pixels_mut().zip(mask.pixels()) {
        pixel[3] = coverage[0];
    }
}

fn save_png(icon: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|err| IconError::io(path, err))?;
    let mut out = BufWriter::new(file);

    write_png(icon, &mut out).map_err(|err| match err {
        ImageError::IoError(err) => IconError::io(path, err),
        source => IconError::Encode {
            path: path.to_path_buf(),
            source,
        },
    })?;
    out.flush().map_err(|err| IconError::io(path, err))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(icon: &RgbaImage, w: W) -> ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(icon.as_raw(), icon.width(), icon.height(), ColorType::Rgba8)
}
