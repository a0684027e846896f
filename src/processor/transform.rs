use crate::color::{clamp_channel, RGBColor};
use crate::image::Image;

/// Maps an input (red, green, blue) vector onto a new one
pub struct ColorMatrix([[f64; 3]; 3]);

pub const GREYSCALE: ColorMatrix = ColorMatrix([
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
]);

pub const SEPIA: ColorMatrix = ColorMatrix([
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
]);

impl ColorMatrix {
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    pub fn multiply(&self, color: RGBColor) -> RGBColor {
        let input = color.components();
        let mut output = [0_u8; 3];
        for (value, row) in output.iter_mut().zip(self.0.iter()) {
            let weighted_sum = row
                .iter()
                .zip(input.iter())
                .map(|(&weight, &component)| weight * component as f64)
                .sum::<f64>();
            *value = clamp_channel(weighted_sum);
        }
        RGBColor::from(output)
    }
}

pub fn apply_color_matrix(image: &mut Image, matrix: &ColorMatrix) {
    for dot in image.dots_mut() {
        *dot = matrix.multiply(*dot);
    }
}
