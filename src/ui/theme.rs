use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const CARD_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const PRICE_TEXT: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const DESCRIPTION_TEXT: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const IMAGE_REF: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
