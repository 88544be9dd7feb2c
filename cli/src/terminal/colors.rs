use colored::Color;

pub const TITLE: Color = Color::BrightGreen;
pub const HEADER: Color = Color::BrightRed;
pub const TEXT_DEFAULT: Color = Color::White;
pub const NOTICE: Color = Color::Yellow;
