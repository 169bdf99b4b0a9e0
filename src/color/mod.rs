mod hex;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use hex::{ColorError, HEX_COLOR_LEN, HexColor, format_hex_color, parse_hex_color};
pub use utils::{BLACK, BLUE, RED, WHITE, dim, hsv, hsv2rgb, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
