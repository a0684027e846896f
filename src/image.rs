use crate::color::{Channel, RGBColor};
use crate::error::Error;

pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// An 8 bit RGB raster, stored row by row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    dots: Vec<RGBColor>,
}

impl Image {
    /// Creates a black image of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, RGBColor::BLACK)
    }

    pub fn filled(width: usize, height: usize, color: RGBColor) -> Self {
        Self {
            width,
            height,
            dots: vec![color; width * height],
        }
    }

    /// Like [`Image::new`], but fails instead of panicking when the dots
    /// would not fit into memory addressable by a `Vec`
    pub fn try_new(width: usize, height: usize) -> crate::Result<Self> {
        width
            .checked_mul(height)
            .and_then(|dots| dots.checked_mul(std::mem::size_of::<RGBColor>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(Error::InvalidImageDimensions { height, width })?;
        Ok(Self::new(width, height))
    }

    pub fn from_dots(width: usize, height: usize, dots: Vec<RGBColor>) -> crate::Result<Self> {
        if dots.len() != width * height {
            return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
        }
        Ok(Self {
            width,
            height,
            dots,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn number_of_dots(&self) -> usize {
        self.dots.len()
    }

    /// An image without any dots stands for "no image loaded"
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dot(&self, row: usize, column: usize) -> RGBColor {
        self.dots[self.index(row, column)]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<RGBColor> {
        if row < self.height && column < self.width {
            Some(self.dot(row, column))
        } else {
            None
        }
    }

    pub fn set_dot(&mut self, row: usize, column: usize, color: RGBColor) {
        let index = self.index(row, column);
        self.dots[index] = color;
    }

    pub fn channel(&self, row: usize, column: usize, channel: Channel) -> u8 {
        self.dot(row, column).channel(channel)
    }

    pub fn set_channel(&mut self, row: usize, column: usize, channel: Channel, value: u8) {
        let index = self.index(row, column);
        self.dots[index].set_channel(channel, value);
    }

    pub fn dots(&self) -> &[RGBColor] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut [RGBColor] {
        &mut self.dots
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RGBColor]> {
        // chunks panics on a zero chunk size
        self.dots.chunks(self.width.max(1))
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.height && column < self.width,
            "Dot ({}, {}) is outside of the {}x{} image",
            row,
            column,
            self.width,
            self.height
        );
        row * self.width + column
    }
}

#[cfg(test)]
mod test {
    use super::Image;
    use crate::color::{Channel, RGBColor};
    use crate::error::Error;

    #[test]
    fn new_image_is_black() {
        let image = Image::new(3, 2);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert!(image.dots().iter().all(|&dot| dot == RGBColor::BLACK));
    }

    #[test]
    fn try_new_checks_size() {
        let image = Image::try_new(3, 2).unwrap();
        assert_eq!(image, Image::new(3, 2));
        assert!(matches!(
            Image::try_new(1 << 33, 1 << 31),
            Err(Error::InvalidImageDimensions {
                height: 2147483648,
                width: 8589934592
            })
        ));
        assert!(matches!(
            Image::try_new(usize::MAX / 2, 1),
            Err(Error::InvalidImageDimensions { .. })
        ));
    }

    #[test]
    fn default_image_is_empty() {
        let image = Image::default();
        assert!(image.is_empty());
        assert_eq!(image.rows().count(), 0);
    }

    #[test]
    fn set_and_read_dot() {
        let mut image = Image::new(4, 3);
        image.set_dot(2, 1, RGBColor::RED);
        assert_eq!(image.dot(2, 1), RGBColor::RED);
        assert_eq!(image.dots()[2 * 4 + 1], RGBColor::RED);
        image.set_channel(2, 1, Channel::Green, 9);
        assert_eq!(image.channel(2, 1, Channel::Green), 9);
    }

    #[test]
    fn get_outside_of_image() {
        let image = Image::new(2, 2);
        assert!(image.get(1, 1).is_some());
        assert!(image.get(2, 0).is_none());
        assert!(image.get(0, 2).is_none());
    }

    #[test]
    fn rows_have_image_width() {
        let image = Image::new(5, 3);
        let rows: Vec<_> = image.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn from_dots_with_wrong_length() {
        let result = Image::from_dots(2, 2, vec![RGBColor::WHITE; 3]);
        assert!(matches!(
            result,
            Err(Error::MismatchOfSizeBetweenHeaderAndValues)
        ));
    }

    #[test]
    #[should_panic]
    fn dot_outside_of_image() {
        Image::new(2, 2).dot(0, 2);
    }
}
