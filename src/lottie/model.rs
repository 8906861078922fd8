//! Serde model of the image-sequence animation descriptor.
//!
//! Field order of every struct is the serialization order, so two equal documents always
//! serialize to identical bytes.

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{SeqError, SeqResult};
use serde::{Deserialize, Serialize, Serializer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Descriptor format version written into `v`.
pub const FORMAT_VERSION: &str = "5.5.9";
/// Composition name written into `nm`.
pub const SEQUENCE_NAME: &str = "image-sequence";
/// Layer type code of an image layer.
pub const IMAGE_LAYER_TYPE: u8 = 2;

/// Asset identifier for the image at `ordinal`.
pub fn image_id(ordinal: usize) -> String {
    format!("image_{ordinal}")
}

/// JSON number that prints whole values as integers (`60`, not `60.0`).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Num(pub f64);

impl Serialize for Num {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // 2^53: beyond this not every integer is representable anyway
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        let v = self.0;
        if v.fract() == 0.0 && v.abs() <= MAX_EXACT {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// The whole descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Format version.
    #[serde(rename = "v")]
    pub version: String,
    /// Frame rate.
    #[serde(rename = "fr")]
    pub frame_rate: Num,
    /// In-point (always 0).
    #[serde(rename = "ip")]
    pub in_point: u64,
    /// Out-point (= number of images).
    #[serde(rename = "op")]
    pub out_point: u64,
    /// Canvas width.
    #[serde(rename = "w")]
    pub width: u32,
    /// Canvas height.
    #[serde(rename = "h")]
    pub height: u32,
    /// Composition name.
    #[serde(rename = "nm")]
    pub name: String,
    /// 3-D flag (always 0).
    #[serde(rename = "ddd")]
    pub three_d: u8,
    /// One image asset per frame, in playback order.
    pub assets: Vec<ImageAsset>,
    /// One image layer per frame, in playback order.
    pub layers: Vec<ImageLayer>,
}

/// Reference to one source image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// `image_<ordinal>`.
    pub id: String,
    /// Width the image is placed at.
    #[serde(rename = "w")]
    pub width: u32,
    /// Height the image is placed at.
    #[serde(rename = "h")]
    pub height: u32,
    /// Prefix consumers prepend to `file_name` to resolve the image.
    #[serde(rename = "u")]
    pub url_prefix: String,
    /// Original file name.
    #[serde(rename = "p")]
    pub file_name: String,
    /// Embedded flag (always 0: images are external).
    #[serde(rename = "e")]
    pub embedded: u8,
}

/// Timed placement of one asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    /// 3-D flag (always 0).
    #[serde(rename = "ddd")]
    pub three_d: u8,
    /// 1-based layer index.
    #[serde(rename = "ind")]
    pub index: u64,
    /// Layer type ([`IMAGE_LAYER_TYPE`]).
    #[serde(rename = "ty")]
    pub layer_type: u8,
    /// Display name (original file name).
    #[serde(rename = "nm")]
    pub name: String,
    /// Classifier; the lowercased file extension.
    #[serde(rename = "cl")]
    pub class: String,
    /// Id of the referenced [`ImageAsset`].
    #[serde(rename = "refId")]
    pub ref_id: String,
    /// Time stretch (always 1).
    #[serde(rename = "sr")]
    pub stretch: u8,
    /// Static transform.
    #[serde(rename = "ks")]
    pub transform: LayerTransform,
    /// Auto-orient flag (always 0).
    #[serde(rename = "ao")]
    pub auto_orient: u8,
    /// First frame the layer is visible on.
    #[serde(rename = "ip")]
    pub in_point: u64,
    /// First frame the layer is no longer visible on.
    #[serde(rename = "op")]
    pub out_point: u64,
    /// Start time.
    #[serde(rename = "st")]
    pub start_time: u64,
    /// Blend mode (always 0, normal).
    #[serde(rename = "bm")]
    pub blend_mode: u8,
}

impl ImageLayer {
    /// Frames on which this layer is visible.
    pub fn active_range(&self) -> SeqResult<FrameRange> {
        FrameRange::new(FrameIndex(self.in_point), FrameIndex(self.out_point))
    }
}

/// Position and anchor of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerTransform {
    /// Position keyframe.
    #[serde(rename = "p")]
    pub position: StaticValue,
    /// Anchor keyframe.
    #[serde(rename = "a")]
    pub anchor: StaticValue,
}

/// Non-animated 3-component property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticValue {
    /// Animated flag (always 0).
    #[serde(rename = "a")]
    pub animated: u8,
    /// `[x, y, z]`.
    #[serde(rename = "k")]
    pub value: [Num; 3],
}

impl StaticValue {
    /// A fixed point at `(x, y, 0)`.
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            animated: 0,
            value: [Num(x), Num(y), Num(0.0)],
        }
    }
}

impl Animation {
    /// Parse a descriptor from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SeqResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SeqError::serde(format!("parse animation JSON: {e}")))
    }

    /// Parse a descriptor from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SeqResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|source| SeqError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to JSON bytes, compact unless `pretty`.
    pub fn to_json_bytes(&self, pretty: bool) -> SeqResult<Vec<u8>> {
        let out = if pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        };
        out.map_err(|e| SeqError::serde(format!("serialize animation JSON: {e}")))
    }

    /// Number of frames (= number of images).
    pub fn frame_count(&self) -> u64 {
        self.out_point
    }

    /// The layer visible on frame `f`, if any.
    pub fn layer_at(&self, f: FrameIndex) -> Option<&ImageLayer> {
        self.layers
            .iter()
            .find(|l| l.active_range().is_ok_and(|r| r.contains(f)))
    }

    /// Check the structural invariants of an image sequence.
    ///
    /// One asset and one layer per frame; layer `i` references `image_<i>`, has index `i + 1`
    /// and is visible on exactly `[i, i + 1)`, so the layers partition `[0, op)`.
    pub fn validate(&self) -> SeqResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SeqError::validation("canvas width/height must be > 0"));
        }
        if !(self.frame_rate.0.is_finite() && self.frame_rate.0 > 0.0) {
            return Err(SeqError::validation("frame rate must be positive"));
        }
        if self.in_point != 0 {
            return Err(SeqError::validation(format!(
                "in-point must be 0, got {}",
                self.in_point
            )));
        }
        let n = self.layers.len();
        if self.assets.len() != n || self.out_point != n as u64 {
            return Err(SeqError::validation(format!(
                "asset count ({}), layer count ({n}) and out-point ({}) must agree",
                self.assets.len(),
                self.out_point
            )));
        }

        for (i, (asset, layer)) in self.assets.iter().zip(&self.layers).enumerate() {
            let id = image_id(i);
            if asset.id != id {
                return Err(SeqError::validation(format!(
                    "asset {i} has id '{}', expected '{id}'",
                    asset.id
                )));
            }
            if layer.ref_id != id {
                return Err(SeqError::validation(format!(
                    "layer {i} references '{}', expected '{id}'",
                    layer.ref_id
                )));
            }
            if layer.index != i as u64 + 1 {
                return Err(SeqError::validation(format!(
                    "layer {i} has index {}, expected {}",
                    layer.index,
                    i + 1
                )));
            }
            let range = layer.active_range()?;
            if range != FrameRange::single(FrameIndex(i as u64)) || layer.start_time != i as u64
            {
                return Err(SeqError::validation(format!(
                    "layer {i} must be visible on exactly [{i}, {}), got [{}, {})",
                    i + 1,
                    layer.in_point,
                    layer.out_point
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lottie/model.rs"]
mod tests;
