// Color values for sections and render instructions
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}'")]
pub struct ColorParseError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const GRAY: Color = Color::new(0x80, 0x80, 0x80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // "#abc" expands each digit: a -> aa
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = c.to_digit(16)? as u8;
                    *slot = d * 16 + d;
                }
                Some(Self::new(digits[0], digits[1], digits[2]))
            }
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "gray" | "grey" => Self::GRAY,
            "silver" => Self::new(0xC0, 0xC0, 0xC0),
            "red" => Self::new(0xFF, 0x00, 0x00),
            "green" => Self::new(0x00, 0x80, 0x00),
            "lime" => Self::new(0x00, 0xFF, 0x00),
            "blue" => Self::new(0x00, 0x00, 0xFF),
            "yellow" => Self::new(0xFF, 0xFF, 0x00),
            "orange" => Self::new(0xFF, 0xA5, 0x00),
            "cyan" | "aqua" => Self::new(0x00, 0xFF, 0xFF),
            "magenta" | "fuchsia" => Self::new(0xFF, 0x00, 0xFF),
            "purple" => Self::new(0x80, 0x00, 0x80),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::from_name(trimmed),
        };
        parsed.ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#909090".parse::<Color>().unwrap(), Color::new(0x90, 0x90, 0x90));
        assert_eq!("#0f0".parse::<Color>().unwrap(), Color::new(0x00, 0xFF, 0x00));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::new(0xFF, 0, 0));
        assert_eq!("grey".parse::<Color>().unwrap(), Color::GRAY);
    }

    #[test]
    fn test_rejects_invalid_colors() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trips_hex() {
        assert_eq!(Color::new(0x80, 0x0A, 0xFF).to_string(), "#800AFF");
    }
}
