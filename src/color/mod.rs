mod blend;
mod convert;

pub use blend::{blend_colors, flicker, rgbw_from_u32, scale_color, taper};
pub use convert::hsv_to_rgbw;
use smart_leds::{RGBW, White, hsv::Hsv as HSV};

pub type Rgbw = RGBW<u8>;
pub type Hsv = HSV;

/// Fully dark pixel
pub const OFF: Rgbw = rgbw(0, 0, 0, 0);

/// Build an RGBW color from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}
