use std::collections::HashSet;

use rand::Rng;

use crate::error::Error;
use crate::image::Image;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    fn squared_distance(&self, other: &Coordinate) -> usize {
        let rows = self.row.abs_diff(other.row);
        let columns = self.column.abs_diff(other.column);
        rows * rows + columns * columns
    }
}

/// Draws `count` distinct dot coordinates, retrying whenever a coordinate was already drawn
pub fn sample_seeds<R: Rng>(
    rng: &mut R,
    image: &Image,
    count: usize,
) -> crate::Result<Vec<Coordinate>> {
    check_number_of_seeds(image, count)?;
    let mut drawn = HashSet::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);
    while seeds.len() < count {
        let column = rng.gen_range(0..image.width());
        let row = rng.gen_range(0..image.height());
        let seed = Coordinate::new(row, column);
        if drawn.insert(seed) {
            seeds.push(seed);
        }
    }
    Ok(seeds)
}

pub fn check_number_of_seeds(image: &Image, count: usize) -> crate::Result<()> {
    let pixels = image.number_of_dots();
    if count < 1 || count > pixels {
        return Err(Error::InvalidNumberOfSeeds {
            seeds: count,
            pixels,
        });
    }
    Ok(())
}

/// Paints every dot with the color of its nearest seed.
///
/// Ties go to the seed that comes first. Colors are taken from the image as it
/// was before the pass.
pub fn apply_seeds(image: &mut Image, seeds: &[Coordinate]) {
    if seeds.is_empty() {
        return;
    }
    let source = image.clone();
    for row in 0..image.height() {
        for column in 0..image.width() {
            let nearest = nearest_seed(seeds, &Coordinate::new(row, column));
            image.set_dot(row, column, source.dot(nearest.row, nearest.column));
        }
    }
}

fn nearest_seed<'a>(seeds: &'a [Coordinate], dot: &Coordinate) -> &'a Coordinate {
    let mut closest = &seeds[0];
    let mut distance = closest.squared_distance(dot);
    for seed in &seeds[1..] {
        let current_distance = seed.squared_distance(dot);
        if current_distance < distance {
            distance = current_distance;
            closest = seed;
        }
    }
    closest
}
