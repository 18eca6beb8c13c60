//! Named CSS colors understood by the codec
//!
//! Lookup is an exact, case-insensitive match on the keyword. `transparent`
//! and the system colors are deliberately absent.

use super::Color;

pub(crate) const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("red", Color::rgb(0xff, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("lime", Color::rgb(0x00, 0xff, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xff)),
    ("yellow", Color::rgb(0xff, 0xff, 0x00)),
    ("cyan", Color::rgb(0x00, 0xff, 0xff)),
    ("aqua", Color::rgb(0x00, 0xff, 0xff)),
    ("magenta", Color::rgb(0xff, 0x00, 0xff)),
    ("fuchsia", Color::rgb(0xff, 0x00, 0xff)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("silver", Color::rgb(0xc0, 0xc0, 0xc0)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("orange", Color::rgb(0xff, 0xa5, 0x00)),
    ("pink", Color::rgb(0xff, 0xc0, 0xcb)),
    ("brown", Color::rgb(0xa5, 0x2a, 0x2a)),
    ("gold", Color::rgb(0xff, 0xd7, 0x00)),
    ("indigo", Color::rgb(0x4b, 0x00, 0x82)),
    ("violet", Color::rgb(0xee, 0x82, 0xee)),
    ("coral", Color::rgb(0xff, 0x7f, 0x50)),
    ("salmon", Color::rgb(0xfa, 0x80, 0x72)),
    ("tomato", Color::rgb(0xff, 0x63, 0x47)),
    ("crimson", Color::rgb(0xdc, 0x14, 0x3c)),
    ("turquoise", Color::rgb(0x40, 0xe0, 0xd0)),
    ("beige", Color::rgb(0xf5, 0xf5, 0xdc)),
    ("ivory", Color::rgb(0xff, 0xff, 0xf0)),
    ("lavender", Color::rgb(0xe6, 0xe6, 0xfa)),
    ("khaki", Color::rgb(0xf0, 0xe6, 0x8c)),
    ("orchid", Color::rgb(0xda, 0x70, 0xd6)),
    ("plum", Color::rgb(0xdd, 0xa0, 0xdd)),
    ("tan", Color::rgb(0xd2, 0xb4, 0x8c)),
    ("chocolate", Color::rgb(0xd2, 0x69, 0x1e)),
    ("darkblue", Color::rgb(0x00, 0x00, 0x8b)),
    ("darkgreen", Color::rgb(0x00, 0x64, 0x00)),
    ("darkred", Color::rgb(0x8b, 0x00, 0x00)),
    ("lightgray", Color::rgb(0xd3, 0xd3, 0xd3)),
    ("lightgrey", Color::rgb(0xd3, 0xd3, 0xd3)),
    ("steelblue", Color::rgb(0x46, 0x82, 0xb4)),
    ("slategray", Color::rgb(0x70, 0x80, 0x90)),
    ("whitesmoke", Color::rgb(0xf5, 0xf5, 0xf5)),
    ("rebeccapurple", Color::rgb(0x66, 0x33, 0x99)),
];

pub(crate) fn lookup(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}
