use std::fmt;
use std::path::{Path, PathBuf};

use crate::encode::assemble::build_animation;
use crate::encode::write::write_atomic;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SeqError, SeqResult};
use crate::lottie::model::Animation;
use crate::sequence::natord::{NameOrder, NaturalOrder};
use crate::sequence::scan::{SourceImage, scan_dir};

/// Options for [`encode`].
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeOpts {
    /// Frame rate recorded in the descriptor. Does not change the frame count.
    pub fps: f64,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Prefix recorded on every asset; consumers resolve images as `prefix + file name`.
    pub url_prefix: String,
    /// Take the canvas size from the first image (in playback order) instead of
    /// `width`/`height`.
    pub canvas_from_first_image: bool,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for EncodeOpts {
    fn default() -> Self {
        Self {
            fps: 60.0,
            width: 1880,
            height: 920,
            url_prefix: "images/".to_string(),
            canvas_from_first_image: false,
            pretty: false,
        }
    }
}

impl EncodeOpts {
    /// Reject option values that cannot produce a valid descriptor.
    ///
    /// `width`/`height` are only checked when they are actually used.
    pub fn validate(&self) -> SeqResult<()> {
        Fps::new(self.fps)?;
        if !self.canvas_from_first_image {
            Canvas::new(self.width, self.height)?;
        }
        Ok(())
    }
}

/// What an encode produced.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeSummary {
    /// Written descriptor.
    pub out_path: PathBuf,
    /// Number of frames (= images).
    pub frames: u64,
    /// Recorded frame rate.
    pub fps: f64,
    /// Canvas used for assets and centering.
    pub canvas: Canvas,
    /// Recorded asset URL prefix.
    pub url_prefix: String,
}

impl fmt::Display for EncodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrote {} ({} frames @ {} fps, {}x{}, prefix '{}')",
            self.out_path.display(),
            self.frames,
            self.fps,
            self.canvas.width,
            self.canvas.height,
            self.url_prefix
        )
    }
}

/// Encode the images of `images_dir` into a descriptor written at `out_path`.
///
/// Images are ordered with [`NaturalOrder`]. Nothing is written unless the whole descriptor
/// could be built.
pub fn encode(
    images_dir: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    opts: &EncodeOpts,
) -> SeqResult<EncodeSummary> {
    encode_with_order(images_dir.as_ref(), out_path.as_ref(), opts, &NaturalOrder)
}

/// [`encode`] with a caller-chosen name ordering.
#[tracing::instrument(skip(opts, order))]
pub fn encode_with_order(
    images_dir: &Path,
    out_path: &Path,
    opts: &EncodeOpts,
    order: &impl NameOrder,
) -> SeqResult<EncodeSummary> {
    let anim = build_from_dir(images_dir, opts, order)?;
    let bytes = anim.to_json_bytes(opts.pretty)?;
    write_atomic(out_path, &bytes)?;

    let summary = EncodeSummary {
        out_path: out_path.to_path_buf(),
        frames: anim.frame_count(),
        fps: anim.frame_rate.0,
        canvas: Canvas {
            width: anim.width,
            height: anim.height,
        },
        url_prefix: opts.url_prefix.clone(),
    };
    tracing::info!(
        out = %summary.out_path.display(),
        frames = summary.frames,
        fps = summary.fps,
        width = summary.canvas.width,
        height = summary.canvas.height,
        url_prefix = %summary.url_prefix,
        "encoded image sequence"
    );
    Ok(summary)
}

/// Scan `images_dir` and build the descriptor in memory without writing anything.
pub fn build_from_dir(
    images_dir: &Path,
    opts: &EncodeOpts,
    order: &impl NameOrder,
) -> SeqResult<Animation> {
    opts.validate()?;
    let fps = Fps::new(opts.fps)?;

    let images = scan_dir(images_dir, order)?;
    let canvas = if opts.canvas_from_first_image {
        probe_canvas(images_dir, &images)?
    } else {
        Canvas::new(opts.width, opts.height)?
    };
    tracing::debug!(
        images = images.len(),
        width = canvas.width,
        height = canvas.height,
        "assembling descriptor"
    );

    build_animation(&images, canvas, fps, &opts.url_prefix)
}

fn probe_canvas(images_dir: &Path, images: &[SourceImage]) -> SeqResult<Canvas> {
    let Some(first) = images.first() else {
        return Err(SeqError::EmptySequence {
            path: images_dir.to_path_buf(),
        });
    };
    let path = first.path_in(images_dir);
    let (width, height) =
        image::image_dimensions(&path).map_err(|source| SeqError::Probe {
            path: path.clone(),
            source,
        })?;
    Canvas::new(width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/encoder.rs"]
mod tests;
