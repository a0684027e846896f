use std::str::FromStr;

use crate::error::Error;

const MAX_CHANNEL_VALUE: f64 = 255.0;
const INTEGER_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RGBColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl RGBColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const DARK_GRAY: Self = Self::new(64, 64, 64);
    pub const GRAY: Self = Self::new(128, 128, 128);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const LIGHT_GRAY: Self = Self::new(192, 192, 192);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const ORANGE: Self = Self::new(255, 200, 0);
    pub const PINK: Self = Self::new(255, 175, 175);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    pub fn components(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "blue" => Ok(Self::BLUE),
            "cyan" => Ok(Self::CYAN),
            "darkgray" | "dark_gray" => Ok(Self::DARK_GRAY),
            "gray" => Ok(Self::GRAY),
            "green" => Ok(Self::GREEN),
            "lightgray" | "light_gray" => Ok(Self::LIGHT_GRAY),
            "magenta" => Ok(Self::MAGENTA),
            "orange" => Ok(Self::ORANGE),
            "pink" => Ok(Self::PINK),
            "red" => Ok(Self::RED),
            "white" => Ok(Self::WHITE),
            "yellow" => Ok(Self::YELLOW),
            _ => Err(Error::UnknownColor(s.to_owned())),
        }
    }
}

/// A color as stored in a file, relative to the file's own max value
pub struct RangeColorFormat<T> {
    max: T,
    red: T,
    green: T,
    blue: T,
}

impl RangeColorFormat<u16> {
    pub fn new(max: u16, red: u16, green: u16, blue: u16) -> crate::Result<Self> {
        if max == 0 {
            return Err(Error::InvalidMaxValue(max));
        }
        if let Some(&value) = [red, green, blue].iter().find(|&&value| value > max) {
            return Err(Error::ColorValueExceedsMaxValue(value, max));
        }
        Ok(RangeColorFormat {
            max,
            red,
            green,
            blue,
        })
    }

    fn scale(&self, value: u16) -> u8 {
        let scaled = value as f64 * MAX_CHANNEL_VALUE / self.max as f64;
        scaled.round() as u8
    }
}

impl From<&RangeColorFormat<u16>> for RGBColor {
    fn from(value: &RangeColorFormat<u16>) -> Self {
        RGBColor::new(
            value.scale(value.red),
            value.scale(value.green),
            value.scale(value.blue),
        )
    }
}

impl From<RangeColorFormat<u16>> for RGBColor {
    fn from(value: RangeColorFormat<u16>) -> Self {
        RGBColor::from(&value)
    }
}

/// Converts a computed channel value into the [0, 255] range.
///
/// The value is truncated toward zero and clamped. Values that only miss an
/// integer by floating point noise are snapped to it first, so weights that
/// sum to one keep a full white at 255.
pub fn clamp_channel(value: f64) -> u8 {
    let nearest = value.round();
    let value = if (value - nearest).abs() < INTEGER_TOLERANCE {
        nearest
    } else {
        value.trunc()
    };
    value.clamp(0.0, MAX_CHANNEL_VALUE) as u8
}

#[cfg(test)]
mod test {
    use super::{clamp_channel, Channel, RGBColor, RangeColorFormat};
    use crate::error::Error;

    #[test]
    fn parse_named_colors() {
        assert_eq!("red".parse::<RGBColor>().unwrap(), RGBColor::RED);
        assert_eq!("White".parse::<RGBColor>().unwrap(), RGBColor::WHITE);
        assert_eq!("dark_gray".parse::<RGBColor>().unwrap(), RGBColor::DARK_GRAY);
        assert_eq!(
            "orange".parse::<RGBColor>().unwrap(),
            RGBColor::new(255, 200, 0)
        );
    }

    #[test]
    fn parse_unknown_color() {
        match "chartreuse".parse::<RGBColor>() {
            Err(Error::UnknownColor(name)) => assert_eq!(name, "chartreuse"),
            other => panic!("Unknown color not detected, got {:?}", other),
        }
    }

    #[test]
    fn access_channels() {
        let mut color = RGBColor::new(1, 2, 3);
        assert_eq!(color.channel(Channel::Green), 2);
        color.set_channel(Channel::Blue, 200);
        assert_eq!(color.components(), [1, 2, 200]);
    }

    #[test]
    fn convert_range_color_full_range() {
        let range_color = RangeColorFormat::new(255, 0, 128, 255).unwrap();
        assert_eq!(RGBColor::from(&range_color), RGBColor::new(0, 128, 255));
    }

    #[test]
    fn convert_range_color_4bit_to_rgb() {
        let range_color = RangeColorFormat::new(0b1111, 0b0010, 0b0101, 0b1111).unwrap();
        assert_eq!(RGBColor::from(range_color), RGBColor::new(34, 85, 255));
    }

    #[test]
    fn create_range_color_out_of_range() {
        match RangeColorFormat::new(144, 12, 144, 145) {
            Err(Error::ColorValueExceedsMaxValue(145, 144)) => {}
            _ => panic!("Color value above max value not detected"),
        }
    }

    #[test]
    fn create_range_color_with_zero_max() {
        assert!(matches!(
            RangeColorFormat::new(0, 0, 0, 0),
            Err(Error::InvalidMaxValue(0))
        ));
    }

    #[test]
    fn clamp_channel_truncates_and_clamps() {
        assert_eq!(clamp_channel(12.99), 12);
        assert_eq!(clamp_channel(-4.2), 0);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(254.999_999_999_99), 255);
    }
}
