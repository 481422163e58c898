use crate::color::Color;
use crate::model::Palette;

/// Short labels for the eight ANSI hues, shared by normal and bright slots.
pub const SLOT_NAMES: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];

/// Built-in reference theme: a Catppuccin Mocha terminal port.
pub const CATPPUCCIN_MOCHA: Palette = [
    Color::new(0x1e, 0x1e, 0x2e), // base
    Color::new(0xf3, 0x8b, 0xa8),
    Color::new(0xa6, 0xe3, 0xa1),
    Color::new(0xf9, 0xe2, 0xaf),
    Color::new(0x89, 0xb4, 0xfa),
    Color::new(0xcb, 0xa6, 0xf7),
    Color::new(0x94, 0xe2, 0xd5),
    Color::new(0xcd, 0xd6, 0xf4), // text
    Color::new(0x45, 0x47, 0x5a), // surface1
    Color::new(0xeb, 0xa0, 0xac), // maroon
    Color::new(0x94, 0xe2, 0xb6),
    Color::new(0xff, 0xe5, 0xb8),
    Color::new(0xb3, 0xc8, 0xff),
    Color::new(0xd0, 0xb3, 0xff),
    Color::new(0xb5, 0xf1, 0xe3),
    Color::new(0xff, 0xff, 0xff),
];

pub fn slot_name(index: usize) -> &'static str {
    SLOT_NAMES[index % SLOT_NAMES.len()]
}
