use crate::color::{Hsv, Rgbw, rgbw};

/// Convert HSV to RGBW (all channels are 0-255).
///
/// Hue is split into six 43-wide regions. A saturation of zero collapses to
/// the dedicated white channel instead of mixing equal RGB.
#[allow(clippy::cast_lossless)]
pub const fn hsv_to_rgbw(hsv: Hsv) -> Rgbw {
    let v = hsv.val as u16;
    let s = hsv.sat as u16;
    if s == 0 {
        return rgbw(0, 0, 0, hsv.val);
    }

    let region = hsv.hue / 43;
    let remainder = (hsv.hue as u16 - region as u16 * 43) * 6;

    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
    let v = hsv.val;

    match region {
        0 => rgbw(v, t, p, 0),
        1 => rgbw(q, v, p, 0),
        2 => rgbw(p, v, t, 0),
        3 => rgbw(p, q, v, 0),
        4 => rgbw(t, p, v, 0),
        _ => rgbw(v, p, q, 0),
    }
}
