//! Color constants and the curated palette catalogs.
//!
//! Two catalogs drive the randomized animations: contrast pairs (a primary
//! and a secondary color, used by chase/swap/pulse) and ordered color lists
//! of varying length (used by the colorlist animations). Both are process-wide
//! constants; selection draws a uniformly random index.
//!
//! Callers must not assume a fixed list length; catalog lists range from
//! 7 to 11 entries.

use palette::Srgb;
use rand::Rng;

/// An 8-bit RGB triple, the only color representation the engine works with.
pub type Color = Srgb<u8>;

pub const MAROON: Color = Srgb::new(82, 26, 19);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const ORANGE: Color = Srgb::new(255, 165, 0);
pub const YELLOW: Color = Srgb::new(255, 230, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);
pub const INDIGO: Color = Srgb::new(75, 0, 130);
pub const PURPLE: Color = Srgb::new(100, 0, 255);
pub const VIOLET: Color = Srgb::new(238, 130, 238);
pub const GOLD: Color = Srgb::new(255, 215, 0);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const BLACK: Color = Srgb::new(0, 0, 0);
pub const GREY: Color = Srgb::new(187, 187, 187);

/// Curated primary/secondary contrast pairs.
pub const COLOR_PAIRS: [(Color, Color); 7] = [
    (RED, GREEN),
    (WHITE, GOLD),
    (WHITE, BLACK),
    (WHITE, BLUE),
    (WHITE, RED),
    (WHITE, GREEN),
    (GOLD, BLACK),
];

pub const LIST_BRIGHT: &[Color] = &[
    Srgb::new(68, 119, 170),
    Srgb::new(102, 204, 238),
    Srgb::new(34, 136, 51),
    Srgb::new(204, 187, 68),
    Srgb::new(238, 102, 119),
    Srgb::new(170, 51, 119),
    GREY,
];

pub const LIST_VIBRANT: &[Color] = &[
    Srgb::new(0, 119, 187),
    Srgb::new(51, 187, 238),
    Srgb::new(0, 153, 136),
    Srgb::new(238, 119, 51),
    Srgb::new(204, 51, 17),
    Srgb::new(238, 51, 119),
    GREY,
];

pub const LIST_MUTED: &[Color] = &[
    Srgb::new(51, 34, 136),
    Srgb::new(136, 204, 238),
    Srgb::new(68, 170, 153),
    Srgb::new(17, 119, 51),
    Srgb::new(153, 153, 51),
    Srgb::new(221, 204, 119),
    Srgb::new(221, 204, 119),
    Srgb::new(136, 34, 85),
    Srgb::new(170, 68, 153),
];

pub const LIST_LIGHT: &[Color] = &[
    Srgb::new(119, 170, 221),
    Srgb::new(153, 221, 255),
    Srgb::new(68, 187, 153),
    Srgb::new(187, 204, 51),
    Srgb::new(187, 204, 51),
    Srgb::new(238, 221, 136),
    Srgb::new(238, 136, 102),
    Srgb::new(255, 170, 187),
    Srgb::new(221, 221, 221),
];

pub const LIST_SUNSET: &[Color] = &[
    Srgb::new(54, 75, 154),
    Srgb::new(74, 123, 183),
    Srgb::new(110, 166, 205),
    Srgb::new(152, 202, 225),
    Srgb::new(194, 228, 239),
    Srgb::new(234, 236, 204),
    Srgb::new(254, 218, 139),
    Srgb::new(253, 179, 102),
    Srgb::new(246, 126, 75),
    Srgb::new(221, 61, 45),
    Srgb::new(165, 0, 38),
];

pub const LIST_BLUE_RED: &[Color] = &[
    Srgb::new(33, 102, 172),
    Srgb::new(67, 147, 195),
    Srgb::new(146, 197, 222),
    Srgb::new(209, 229, 240),
    Srgb::new(247, 247, 247),
    Srgb::new(253, 219, 199),
    Srgb::new(244, 165, 130),
    Srgb::new(214, 96, 77),
    Srgb::new(178, 24, 43),
];

pub const LIST_PURPLE_GREEN: &[Color] = &[
    Srgb::new(178, 24, 43),
    Srgb::new(178, 24, 43),
    Srgb::new(194, 165, 207),
    Srgb::new(231, 212, 232),
    Srgb::new(231, 212, 232),
    Srgb::new(217, 240, 211),
    Srgb::new(172, 211, 158),
    Srgb::new(90, 174, 97),
    Srgb::new(27, 120, 55),
];

pub const LIST_RAINBOW: &[Color] = &[
    Srgb::new(136, 46, 114),
    Srgb::new(25, 101, 176),
    Srgb::new(123, 175, 222),
    Srgb::new(78, 178, 101),
    Srgb::new(202, 224, 171),
    Srgb::new(247, 240, 86),
    Srgb::new(244, 167, 54),
    Srgb::new(232, 96, 28),
    Srgb::new(220, 5, 12),
    Srgb::new(114, 25, 14),
];

/// Curated ordered color sequences for the colorlist animations.
pub const COLOR_LISTS: [&[Color]; 8] = [
    LIST_BRIGHT,
    LIST_VIBRANT,
    LIST_MUTED,
    LIST_LIGHT,
    LIST_SUNSET,
    LIST_BLUE_RED,
    LIST_PURPLE_GREEN,
    LIST_RAINBOW,
];

/// Uniformly selects one of the curated contrast pairs.
#[inline]
pub fn random_color_pair<R: Rng>(rng: &mut R) -> (Color, Color) {
    COLOR_PAIRS[rng.gen_range(0..COLOR_PAIRS.len())]
}

/// Uniformly selects one of the curated color lists.
#[inline]
pub fn random_color_list<R: Rng>(rng: &mut R) -> &'static [Color] {
    COLOR_LISTS[rng.gen_range(0..COLOR_LISTS.len())]
}
