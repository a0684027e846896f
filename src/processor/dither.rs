use crate::color::RGBColor;
use crate::image::Image;

const DITHER_RIGHT: f32 = 7.0 / 16.0;
const DITHER_BELOW_LEFT: f32 = 3.0 / 16.0;
const DITHER_BELOW: f32 = 5.0 / 16.0;
const DITHER_BELOW_RIGHT: f32 = 1.0 / 16.0;

const WHITE_VALUE: i32 = 255;
const BLACK_VALUE: i32 = 0;

/// Floyd-Steinberg error diffusion on an image that is already grey.
///
/// Only the red channel is read. Diffused values are tracked in a signed
/// buffer, they may leave the [0, 255] range until their dot is quantized.
pub fn apply_error_diffusion(image: &mut Image) {
    let width = image.width();
    let height = image.height();
    let mut grey: Vec<i32> = image.dots().iter().map(|dot| dot.red as i32).collect();

    for row in 0..height {
        for column in 0..width {
            let index = row * width + column;
            let old_color = grey[index];
            let new_color = quantize(old_color);
            let error = old_color - new_color;
            grey[index] = new_color;

            if column + 1 < width {
                diffuse(&mut grey[index + 1], DITHER_RIGHT, error);
            }
            if row + 1 < height {
                let below = index + width;
                if column > 0 {
                    diffuse(&mut grey[below - 1], DITHER_BELOW_LEFT, error);
                }
                diffuse(&mut grey[below], DITHER_BELOW, error);
                if column + 1 < width {
                    diffuse(&mut grey[below + 1], DITHER_BELOW_RIGHT, error);
                }
            }
        }
    }

    for (dot, value) in image.dots_mut().iter_mut().zip(grey) {
        *dot = RGBColor::grey(value.clamp(BLACK_VALUE, WHITE_VALUE) as u8);
    }
}

fn quantize(old_color: i32) -> i32 {
    if old_color > (old_color - WHITE_VALUE).abs() {
        WHITE_VALUE
    } else {
        BLACK_VALUE
    }
}

// rounds half up
fn diffuse(value: &mut i32, weight: f32, error: i32) {
    *value = (*value as f32 + weight * error as f32 + 0.5).floor() as i32;
}
