use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 220, b: 120 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 120 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const PORT: Color = Color::TrueColor { r: 100, g: 180, b: 255 };
pub const SERVICE_KNOWN: Color = Color::TrueColor { r: 120, g: 220, b: 120 };
pub const SERVICE_UNKNOWN: Color = Color::TrueColor { r: 150, g: 150, b: 160 };
