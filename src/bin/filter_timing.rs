use std::time::{Duration, Instant};

use dmmt_image_processor::image::Image;
use dmmt_image_processor::processor::filter::{apply_kernel, Kernel, BLUR, SHARPEN};
use dmmt_image_processor::RGBColor;

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;

fn create_test_image() -> Image {
    let mut image = Image::new(IMAGE_WIDTH, IMAGE_HEIGHT);
    for row in 0..IMAGE_HEIGHT {
        for column in 0..IMAGE_WIDTH {
            let value = ((column + row * 8) % 256) as u8;
            image.set_dot(row, column, RGBColor::new(value, 255 - value, value / 2));
        }
    }
    image
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}

const NUMBER_OF_ROUNDS: u32 = 5;

fn time_kernel(name: &str, image: &Image, kernel: &Kernel) {
    println!("Starting {}", name);
    let mut durations: Vec<Duration> = Vec::new();

    for round in 1..=NUMBER_OF_ROUNDS {
        let start = Instant::now();
        let filtered = apply_kernel(image, kernel);
        let duration = start.elapsed();

        println!(
            "Finished {} round {} after {} microseconds ({} dots)",
            name,
            round,
            duration.as_micros(),
            filtered.number_of_dots(),
        );
        durations.push(duration);
    }

    let min_duration = durations.iter().min().unwrap();
    let max_duration = durations.iter().max().unwrap();
    let avg_duration = durations.iter().sum::<Duration>() / NUMBER_OF_ROUNDS;
    let std_deviation = calculate_std_deviation_in_micros(&avg_duration, &durations);

    println!(
        "{} - Min: {}, Max: {}, Average: {}, Std Deviation: {}",
        name,
        min_duration.as_micros(),
        max_duration.as_micros(),
        avg_duration.as_micros(),
        std_deviation,
    );
}

fn main() {
    println!("Creating test image");
    let test_image = create_test_image();
    time_kernel("blur", &test_image, &BLUR);
    time_kernel("sharpen", &test_image, &SHARPEN);
}
