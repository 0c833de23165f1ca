use thiserror::Error;

/// Errors raised while resolving widget configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A colour string was not of the form `#RRGGBB` or `#AARRGGBB`.
    #[error("invalid colour string {0:?}")]
    InvalidColour(String),
}

/// An 8-bit-per-channel RGBA colour.
///
/// Host toolkits usually deliver text colours as `#RRGGBB` attribute
/// strings, so a parser for that form is provided alongside plain channel
/// constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates an opaque colour from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a `#RRGGBB` or `#AARRGGBB` colour string.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let digits = s
            .strip_prefix('#')
            .filter(|digits| digits.is_ascii())
            .ok_or_else(|| ConfigError::InvalidColour(s.to_string()))?;

        let channel = |hi: usize| {
            u8::from_str_radix(&digits[hi..hi + 2], 16)
                .map_err(|_| ConfigError::InvalidColour(s.to_string()))
        };

        match digits.len() {
            6 => Ok(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Ok(Self {
                a: channel(0)?,
                r: channel(2)?,
                g: channel(4)?,
                b: channel(6)?,
            }),
            _ => Err(ConfigError::InvalidColour(s.to_string())),
        }
    }

    /// Returns the colour as normalized `[r, g, b, a]` floats.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Display scale factor used to convert scale-independent text sizes into
/// device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(pub f32);

impl Scale {
    /// Converts a size in scale-independent units to whole device pixels.
    ///
    /// Rounds to the nearest pixel; text sizes are handed to the rasterizer
    /// as integral pixel counts so repeated conversions stay stable.
    pub fn to_px(self, sp: f32) -> f32 {
        (sp * self.0 + 0.5).floor()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Resolved widget configuration.
///
/// Resolved once per configuration change and treated as read-only for the
/// duration of a paint pass. The render plan reads `one_line`; the drawing
/// surface reads the size and colour through [`crate::TextStyle`].
#[derive(Clone, Debug, PartialEq)]
pub struct JustificationConfig {
    /// Justify a lone line instead of leaving it left-aligned.
    pub one_line: bool,
    /// Text size in scale-independent units.
    pub text_size: f32,
    /// Fill colour for glyphs.
    pub text_color: Rgba,
}

impl JustificationConfig {
    pub const DEFAULT_TEXT_SIZE: f32 = 20.0;
    pub const DEFAULT_TEXT_COLOR: Rgba = Rgba::new(0x42, 0x4D, 0x5C);
}

impl Default for JustificationConfig {
    fn default() -> Self {
        Self {
            one_line: false,
            text_size: Self::DEFAULT_TEXT_SIZE,
            text_color: Self::DEFAULT_TEXT_COLOR,
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_hex() {
        let colour = Rgba::from_hex("#424D5C").unwrap();
        assert_eq!(colour, Rgba::new(0x42, 0x4D, 0x5C));
        assert_eq!(colour.a, 255);
    }

    #[test]
    fn parse_argb_hex() {
        let colour = Rgba::from_hex("#80FF0000").unwrap();
        assert_eq!(
            colour,
            Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 128
            }
        );
    }

    #[test]
    fn reject_malformed_colours() {
        assert!(Rgba::from_hex("424D5C").is_err());
        assert!(Rgba::from_hex("#424D").is_err());
        assert!(Rgba::from_hex("#GGGGGG").is_err());
        assert!(Rgba::from_hex("#aéééb").is_err());
    }

    #[test]
    fn float_channels_are_normalized() {
        let array = Rgba::new(255, 0, 51).to_f32_array();
        assert_eq!(array, [1.0, 0.0, 0.2, 1.0]);

        let translucent = Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        };
        assert_eq!(translucent.to_f32_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn scale_rounds_to_nearest_pixel() {
        assert_eq!(Scale(2.0).to_px(20.0), 40.0);
        assert_eq!(Scale(1.5).to_px(21.0), 32.0); // 31.5 rounds up
        assert_eq!(Scale(1.0).to_px(20.2), 20.0);
    }

    #[test]
    fn defaults_match_widget_attributes() {
        let config = JustificationConfig::default();
        assert!(!config.one_line);
        assert_eq!(config.text_size, 20.0);
        assert_eq!(config.text_color, Rgba::new(0x42, 0x4D, 0x5C));
    }
}
