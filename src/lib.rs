//! seqlottie turns a directory of still images into a frame-by-frame animation descriptor.
//!
//! The descriptor is Lottie-shaped JSON: one external image asset and one image layer per
//! source file, every layer visible for exactly one frame and pinned to the canvas center.
//!
//! # Pipeline
//!
//! 1. **Scan**: list accepted images (`webp`, `png`, `jpg`, `jpeg`) and sort them with a
//!    [`NameOrder`] (by default [`NaturalOrder`], so `image_2` plays before `image_10`).
//! 2. **Assemble**: build an [`Animation`] value with fixed field order.
//! 3. **Write**: serialize and replace the output file atomically.
//!
//! Encoding is deterministic: the same directory contents and [`EncodeOpts`] always produce
//! byte-identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod lottie;
mod sequence;

pub use encode::assemble::build_animation;
pub use encode::encoder::{EncodeOpts, EncodeSummary, build_from_dir, encode, encode_with_order};
pub use encode::write::{ensure_parent_dir, write_atomic};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{SeqError, SeqResult};
pub use lottie::model::{
    Animation, FORMAT_VERSION, IMAGE_LAYER_TYPE, ImageAsset, ImageLayer, LayerTransform, Num,
    SEQUENCE_NAME, StaticValue, image_id,
};
pub use sequence::natord::{LexicalOrder, NameOrder, NaturalOrder, natural_cmp};
pub use sequence::scan::{ACCEPTED_EXTENSIONS, SourceImage, image_extension, scan_dir};
