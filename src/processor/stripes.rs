use std::fmt::Display;
use std::str::FromStr;

use crate::color::RGBColor;
use crate::error::Error;
use crate::image::Image;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(Error::UnsupportedOrientation(s.to_owned())),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Thickness of a single stripe when `size` dots are split into
/// `number_of_stripes` stripes.
///
/// `size` is rounded up to the next multiple of `number_of_stripes`, so the
/// last stripe may end up to `number_of_stripes - 1` dots thinner.
pub fn stripe_size(size: usize, number_of_stripes: usize) -> usize {
    size.div_ceil(number_of_stripes)
}

pub fn draw_stripes(
    height: usize,
    width: usize,
    colors: &[RGBColor],
    orientation: Orientation,
) -> crate::Result<Image> {
    if height < 1 || width < 1 {
        return Err(Error::InvalidImageDimensions { height, width });
    }
    if colors.is_empty() {
        return Err(Error::EmptyColorList);
    }

    let (primary_length, secondary_length) = match orientation {
        Orientation::Horizontal => (height, width),
        Orientation::Vertical => (width, height),
    };
    let stripe = stripe_size(primary_length, colors.len());
    let last_color_index = colors.len() - 1;
    log::debug!(
        "Drawing {} {} stripes of {} dots",
        colors.len(),
        orientation,
        stripe
    );

    let mut image = Image::try_new(width, height)?;
    for position in 0..primary_length {
        let color = colors[(position / stripe).min(last_color_index)];
        for offset in 0..secondary_length {
            match orientation {
                Orientation::Horizontal => image.set_dot(position, offset, color),
                Orientation::Vertical => image.set_dot(offset, position, color),
            }
        }
    }
    Ok(image)
}

#[cfg(test)]
mod test {
    use super::{draw_stripes, stripe_size, Orientation};
    use crate::color::RGBColor;
    use crate::error::Error;

    const COLORS: [RGBColor; 3] = [RGBColor::RED, RGBColor::GREEN, RGBColor::BLUE];

    #[test]
    fn compute_stripe_size() {
        assert_eq!(stripe_size(1024, 3), 342);
        assert_eq!(stripe_size(1024, 4), 256);
        assert_eq!(stripe_size(629, 9), 70);
        assert_eq!(stripe_size(1920, 5), 384);
        assert_eq!(stripe_size(767, 5), 154);
    }

    #[test]
    fn stripe_size_covers_size() {
        for size in 1..200 {
            for number_of_stripes in 1..12 {
                let stripe = stripe_size(size, number_of_stripes);
                assert!(stripe * number_of_stripes >= size);
                assert!((stripe - 1) * number_of_stripes < size);
            }
        }
    }

    #[test]
    fn parse_orientation() {
        assert_eq!("horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("VERTICAL".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(Error::UnsupportedOrientation(_))
        ));
    }

    #[test]
    fn horizontal_stripes() {
        let image = draw_stripes(10, 4, &COLORS, Orientation::Horizontal).unwrap();
        assert_eq!((image.width(), image.height()), (4, 10));
        // stripe size is 4, the last stripe only gets 2 rows
        assert_eq!(image.dot(0, 3), RGBColor::RED);
        assert_eq!(image.dot(3, 0), RGBColor::RED);
        assert_eq!(image.dot(4, 0), RGBColor::GREEN);
        assert_eq!(image.dot(7, 2), RGBColor::GREEN);
        assert_eq!(image.dot(8, 0), RGBColor::BLUE);
        assert_eq!(image.dot(9, 3), RGBColor::BLUE);
    }

    #[test]
    fn vertical_stripes() {
        let image = draw_stripes(2, 6, &COLORS, Orientation::Vertical).unwrap();
        let first_row: Vec<RGBColor> = image.rows().next().unwrap().to_vec();
        assert_eq!(
            first_row,
            vec![
                RGBColor::RED,
                RGBColor::RED,
                RGBColor::GREEN,
                RGBColor::GREEN,
                RGBColor::BLUE,
                RGBColor::BLUE
            ]
        );
        assert_eq!(image.dot(1, 5), RGBColor::BLUE);
    }

    #[test]
    fn last_color_absorbs_remainder() {
        let image = draw_stripes(1, 7, &COLORS[..2], Orientation::Vertical).unwrap();
        let colors: Vec<RGBColor> = image.dots().to_vec();
        assert_eq!(&colors[..4], &[RGBColor::RED; 4]);
        assert_eq!(&colors[4..], &[RGBColor::GREEN; 3]);
    }

    #[test]
    fn reject_invalid_arguments() {
        assert!(matches!(
            draw_stripes(0, 8, &COLORS, Orientation::Horizontal),
            Err(Error::InvalidImageDimensions {
                height: 0,
                width: 8
            })
        ));
        assert!(matches!(
            draw_stripes(1920, 0, &COLORS, Orientation::Horizontal),
            Err(Error::InvalidImageDimensions { .. })
        ));
        assert!(matches!(
            draw_stripes(1920, 780, &[], Orientation::Horizontal),
            Err(Error::EmptyColorList)
        ));
    }

    #[test]
    fn reject_dimensions_too_large_for_memory() {
        assert!(matches!(
            draw_stripes(1 << 33, 1 << 31, &COLORS, Orientation::Horizontal),
            Err(Error::InvalidImageDimensions {
                height: 8589934592,
                width: 2147483648
            })
        ));
    }
}
