use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0x3a, 0xed);
pub const HEADLINE: Color = Color::Rgb(0xf8, 0xfa, 0xfc);
pub const SUBTITLE: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const PANEL_BORDER: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const PANEL_TITLE: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const BODY_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const BODY_MID: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const BODY_FULL: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const PLACEHOLDER: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const GAUGE_RAW: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const GAUGE_SMOOTH: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const STATUS: Color = Color::Rgb(0x6b, 0x72, 0x80);
