use ratatui::style::Color;

pub const ITEM_FILL: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const ITEM_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PLACEHOLDER_BORDER: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const CONTAINER_BORDER: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
pub const DROP_INDICATOR: Color = Color::Rgb(0xff, 0x45, 0x00);
pub const HINT_TEXT: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const DISABLED: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
