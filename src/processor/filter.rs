use crate::color::{clamp_channel, Channel};
use crate::image::Image;

/// A convolution kernel, centred on the dot it is applied to
pub struct Kernel {
    rows: usize,
    columns: usize,
    weights: &'static [f64],
}

impl Kernel {
    pub const fn new(rows: usize, columns: usize, weights: &'static [f64]) -> Self {
        assert!(rows * columns == weights.len());
        Self {
            rows,
            columns,
            weights,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn weight(&self, row: usize, column: usize) -> f64 {
        self.weights[row * self.columns + column]
    }

    fn row_range(&self) -> usize {
        self.rows / 2
    }

    fn column_range(&self) -> usize {
        self.columns / 2
    }
}

#[rustfmt::skip]
const BLUR_WEIGHTS: [f64; 9] = [
    1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
    1.0 / 8.0,  1.0 / 4.0, 1.0 / 8.0,
    1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
];

pub const BLUR: Kernel = Kernel::new(3, 3, &BLUR_WEIGHTS);

#[rustfmt::skip]
const SHARPEN_WEIGHTS: [f64; 35] = [
    -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0,
    -1.0 / 8.0,  1.0 / 4.0,  1.0 / 4.0,  1.0 / 4.0, -1.0 / 8.0,
    -1.0 / 8.0,  1.0 / 4.0,  1.0,        1.0 / 4.0, -1.0 / 8.0,
    -1.0 / 8.0,  1.0 / 4.0,  1.0 / 4.0,  1.0 / 4.0, -1.0 / 8.0,
    -1.0 / 8.0,  1.0 / 4.0,  1.0,        1.0 / 4.0, -1.0 / 8.0,
    -1.0 / 8.0,  1.0 / 4.0,  1.0 / 4.0,  1.0 / 4.0, -1.0 / 8.0,
    -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0,
];

pub const SHARPEN: Kernel = Kernel::new(7, 5, &SHARPEN_WEIGHTS);

/// Convolves every channel of the image with the kernel.
///
/// Samples outside of the image count as zero, so dots near the border get
/// darker instead of repeating the edge.
pub fn apply_kernel(image: &Image, kernel: &Kernel) -> Image {
    let mut result = Image::new(image.width(), image.height());
    for channel in Channel::ALL {
        for row in 0..image.height() {
            for column in 0..image.width() {
                let value = convolve_dot(image, kernel, row, column, channel);
                result.set_channel(row, column, channel, clamp_channel(value));
            }
        }
    }
    result
}

fn convolve_dot(image: &Image, kernel: &Kernel, row: usize, column: usize, channel: Channel) -> f64 {
    let mut acc = 0.0;
    for kernel_row in 0..kernel.rows() {
        for kernel_column in 0..kernel.columns() {
            let sample = sample_channel(
                image,
                (row + kernel_row).checked_sub(kernel.row_range()),
                (column + kernel_column).checked_sub(kernel.column_range()),
                channel,
            );
            acc += kernel.weight(kernel_row, kernel_column) * sample as f64;
        }
    }
    acc
}

fn sample_channel(image: &Image, row: Option<usize>, column: Option<usize>, channel: Channel) -> u8 {
    match (row, column) {
        (Some(row), Some(column)) => image
            .get(row, column)
            .map_or(0, |dot| dot.channel(channel)),
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::{apply_kernel, Kernel, BLUR, SHARPEN};
    use crate::color::RGBColor;
    use crate::image::Image;

    fn gradient_image(width: usize, height: usize) -> Image {
        let mut image = Image::new(width, height);
        for row in 0..height {
            for column in 0..width {
                let value = ((row * 37 + column * 91) % 256) as u8;
                image.set_dot(row, column, RGBColor::new(value, 255 - value, value / 2));
            }
        }
        image
    }

    #[test]
    fn kernels_have_expected_shape() {
        assert_eq!((BLUR.rows(), BLUR.columns()), (3, 3));
        assert_eq!((SHARPEN.rows(), SHARPEN.columns()), (7, 5));
        assert_eq!(SHARPEN.weight(2, 2), 1.0);
        assert_eq!(SHARPEN.weight(4, 2), 1.0);
        assert_eq!(SHARPEN.weight(6, 4), -0.125);
    }

    #[test]
    fn blur_keeps_dimensions() {
        let image = gradient_image(7, 4);
        let blurred = apply_kernel(&image, &BLUR);
        assert_eq!(blurred.width(), 7);
        assert_eq!(blurred.height(), 4);
    }

    #[test]
    fn blur_uniform_image_pads_edges_with_zero() {
        let image = Image::filled(3, 3, RGBColor::grey(160));
        let blurred = apply_kernel(&image, &BLUR);
        // centre sees the whole kernel
        assert_eq!(blurred.dot(1, 1), RGBColor::grey(160));
        // edge misses one kernel row: 160 * 12 / 16
        assert_eq!(blurred.dot(0, 1), RGBColor::grey(120));
        // corner misses a row and a column: 160 * 9 / 16
        assert_eq!(blurred.dot(0, 0), RGBColor::grey(90));
    }

    #[test]
    fn blur_truncates_weighted_sum() {
        let mut image = Image::new(1, 1);
        image.set_dot(0, 0, RGBColor::new(7, 255, 0));
        let blurred = apply_kernel(&image, &BLUR);
        // 7 / 4 = 1.75, 255 / 4 = 63.75
        assert_eq!(blurred.dot(0, 0), RGBColor::new(1, 63, 0));
    }

    #[test]
    fn channels_are_filtered_independently() {
        let image = Image::filled(3, 3, RGBColor::new(160, 0, 32));
        let blurred = apply_kernel(&image, &BLUR);
        assert_eq!(blurred.dot(1, 1), RGBColor::new(160, 0, 32));
        assert_eq!(blurred.dot(2, 2), RGBColor::new(90, 0, 18));
    }

    #[test]
    fn sharpen_single_dot_uses_kernel_centre() {
        let image = Image::filled(1, 1, RGBColor::grey(100));
        let sharpened = apply_kernel(&image, &SHARPEN);
        // centre weight of the 7x5 kernel at (3, 2) is 1/4
        assert_eq!(sharpened.dot(0, 0), RGBColor::grey(25));
    }

    #[test]
    fn sharpen_full_weight_one_row_above_and_below_centre() {
        let mut image = Image::new(5, 7);
        image.set_dot(3, 2, RGBColor::grey(100));
        let sharpened = apply_kernel(&image, &SHARPEN);
        assert_eq!(sharpened.dot(3, 2), RGBColor::grey(25));
        assert_eq!(sharpened.dot(2, 2), RGBColor::grey(100));
        assert_eq!(sharpened.dot(4, 2), RGBColor::grey(100));
        assert_eq!(sharpened.dot(3, 1), RGBColor::grey(25));
        assert_eq!(sharpened.dot(3, 3), RGBColor::grey(25));
        assert_eq!(sharpened.dot(1, 2), RGBColor::grey(25));
        assert_eq!(sharpened.dot(0, 2), RGBColor::BLACK);
    }

    #[test]
    fn sharpen_clamps_bright_values() {
        let image = Image::filled(9, 9, RGBColor::grey(200));
        let sharpened = apply_kernel(&image, &SHARPEN);
        // kernel weights sum up to 2.75
        assert_eq!(sharpened.dot(4, 4), RGBColor::WHITE);
    }

    #[test]
    fn sharpen_clamps_negative_values() {
        let mut image = Image::new(5, 7);
        image.set_dot(0, 0, RGBColor::WHITE);
        let sharpened = apply_kernel(&image, &SHARPEN);
        // (3, 2) only sees the corner dot with weight -1/8
        assert_eq!(sharpened.dot(3, 2), RGBColor::BLACK);
    }

    #[test]
    fn filter_preserves_number_of_dots() {
        let image = gradient_image(16, 11);
        for kernel in [&BLUR, &SHARPEN] {
            let filtered = apply_kernel(&image, kernel);
            assert_eq!(filtered.number_of_dots(), image.number_of_dots());
        }
    }

    #[test]
    fn custom_kernel_identity() {
        const IDENTITY_WEIGHTS: [f64; 9] = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        const IDENTITY: Kernel = Kernel::new(3, 3, &IDENTITY_WEIGHTS);
        let image = gradient_image(5, 5);
        assert_eq!(apply_kernel(&image, &IDENTITY), image);
    }
}
