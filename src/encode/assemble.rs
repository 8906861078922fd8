use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SeqError, SeqResult};
use crate::lottie::model::{
    Animation, FORMAT_VERSION, IMAGE_LAYER_TYPE, ImageAsset, ImageLayer, LayerTransform, Num,
    SEQUENCE_NAME, StaticValue, image_id,
};
use crate::sequence::scan::SourceImage;

/// Build the descriptor for `images`, which must already be in playback order.
///
/// Image with ordinal `i` becomes asset `image_<i>` and layer `i + 1`, visible on
/// `[i, i + 1)` and pinned to the canvas center. Every ordinal must equal the image's
/// position in the slice.
pub fn build_animation(
    images: &[SourceImage],
    canvas: Canvas,
    fps: Fps,
    url_prefix: &str,
) -> SeqResult<Animation> {
    if let Some((pos, img)) = images
        .iter()
        .enumerate()
        .find(|(pos, img)| img.ordinal != *pos)
    {
        return Err(SeqError::validation(format!(
            "image '{}' has ordinal {} but sits at position {pos}",
            img.name, img.ordinal
        )));
    }

    let (cx, cy) = canvas.center();

    let assets = images
        .iter()
        .map(|img| ImageAsset {
            id: image_id(img.ordinal),
            width: canvas.width,
            height: canvas.height,
            url_prefix: url_prefix.to_string(),
            file_name: img.name.clone(),
            embedded: 0,
        })
        .collect();

    let layers = images
        .iter()
        .map(|img| {
            let frame = img.ordinal as u64;
            ImageLayer {
                three_d: 0,
                index: frame + 1,
                layer_type: IMAGE_LAYER_TYPE,
                name: img.name.clone(),
                class: img.extension.clone(),
                ref_id: image_id(img.ordinal),
                stretch: 1,
                transform: LayerTransform {
                    position: StaticValue::point(cx, cy),
                    anchor: StaticValue::point(cx, cy),
                },
                auto_orient: 0,
                in_point: frame,
                out_point: frame + 1,
                start_time: frame,
                blend_mode: 0,
            }
        })
        .collect();

    Ok(Animation {
        version: FORMAT_VERSION.to_string(),
        frame_rate: Num(fps.as_f64()),
        in_point: 0,
        out_point: images.len() as u64,
        width: canvas.width,
        height: canvas.height,
        name: SEQUENCE_NAME.to_string(),
        three_d: 0,
        assets,
        layers,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/assemble.rs"]
mod tests;
