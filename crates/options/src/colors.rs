use serde::{Serialize, Serializer};

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
///
/// Serializes as a CSS hex string so a JS-side renderer can use it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GREEN: Self = Self { r: 0.0, g: 227.0 / 255.0, b: 150.0 / 255.0, a: 1.0 }; // #00E396
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Format as `#RRGGBB` (or `#RRGGBBAA` when not fully opaque).
    pub fn to_hex(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

        if self.a >= 1.0 {
            format!(
                "#{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a)
            )
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Color::from_hex("#00E396").unwrap();
        assert_eq!(color, Color::GREEN);
        assert_eq!(color.to_hex(), "#00E396");
    }

    #[test]
    fn eight_digit_hex_keeps_alpha() {
        let color = Color::from_hex("#1e1e2e80").unwrap();
        assert!((color.a - 0.502).abs() < 0.01);
        assert_eq!(color.to_hex(), "#1E1E2E80");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Color::from_hex("#123").is_none());
        assert!(Color::from_hex("not-a-color").is_none());
    }
}
