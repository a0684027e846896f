use crate::color::RGBColor;
use crate::error::Error;
use crate::image::Image;

pub const SQUARES_PER_SIDE: usize = 8;

/// Draws an 8x8 board of `square_size` wide squares, starting with `primary` in the top left
pub fn draw_checkerboard(
    square_size: usize,
    primary: RGBColor,
    secondary: RGBColor,
) -> crate::Result<Image> {
    if square_size == 0 {
        return Err(Error::InvalidSquareSize(square_size));
    }
    let size = square_size
        .checked_mul(SQUARES_PER_SIDE)
        .ok_or(Error::InvalidSquareSize(square_size))?;

    let mut image =
        Image::try_new(size, size).map_err(|_| Error::InvalidSquareSize(square_size))?;
    for row in 0..size {
        for column in 0..size {
            let color = if (column / square_size) % 2 == (row / square_size) % 2 {
                primary
            } else {
                secondary
            };
            image.set_dot(row, column, color);
        }
    }
    Ok(image)
}

#[cfg(test)]
mod test {
    use super::draw_checkerboard;
    use crate::color::RGBColor;
    use crate::error::Error;

    #[test]
    fn board_has_eight_squares_per_side() {
        let image = draw_checkerboard(3, RGBColor::BLACK, RGBColor::WHITE).unwrap();
        assert_eq!((image.width(), image.height()), (24, 24));
    }

    #[test]
    fn squares_alternate() {
        let image = draw_checkerboard(2, RGBColor::RED, RGBColor::BLUE).unwrap();
        assert_eq!(image.dot(0, 0), RGBColor::RED);
        assert_eq!(image.dot(1, 1), RGBColor::RED);
        assert_eq!(image.dot(0, 2), RGBColor::BLUE);
        assert_eq!(image.dot(2, 0), RGBColor::BLUE);
        assert_eq!(image.dot(2, 2), RGBColor::RED);
        assert_eq!(image.dot(15, 15), RGBColor::RED);
        assert_eq!(image.dot(15, 0), RGBColor::BLUE);
    }

    #[test]
    fn large_board() {
        let image = draw_checkerboard(399, RGBColor::WHITE, RGBColor::BLACK).unwrap();
        assert_eq!((image.width(), image.height()), (3192, 3192));
        assert_eq!(image.dot(0, 0), RGBColor::WHITE);
        assert_eq!(image.dot(0, 399), RGBColor::BLACK);
    }

    #[test]
    fn reject_zero_square_size() {
        assert!(matches!(
            draw_checkerboard(0, RGBColor::WHITE, RGBColor::BLACK),
            Err(Error::InvalidSquareSize(0))
        ));
    }

    #[test]
    fn reject_square_size_too_large_for_memory() {
        // the side fits, the dots do not
        assert!(matches!(
            draw_checkerboard(1 << 28, RGBColor::RED, RGBColor::BLUE),
            Err(Error::InvalidSquareSize(268435456))
        ));
    }

    #[test]
    fn reject_overflowing_square_size() {
        assert!(matches!(
            draw_checkerboard(usize::MAX / 4, RGBColor::WHITE, RGBColor::BLACK),
            Err(Error::InvalidSquareSize(_))
        ));
    }
}
