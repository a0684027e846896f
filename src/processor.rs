use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::RGBColor;
use crate::error::Error;
use crate::image::reader::ppm::PPMImageReader;
use crate::image::writer::ppm::PPMImageWriter;
use crate::image::{Image, ImageReader, ImageWriter};
use crate::observer::{ImageObserver, ObserverList};

pub mod checkerboard;
pub mod dither;
pub mod filter;
pub mod mosaic;
pub mod stripes;
pub mod transform;

use mosaic::Coordinate;
use stripes::Orientation;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "res";

const BLURRED_NOTICE: &str = "blurred image";
const SHARPENED_NOTICE: &str = "sharpened image";
const SEPIA_NOTICE: &str = "transformed image to sepia color";
const GREYSCALE_NOTICE: &str = "transformed image to greyscale color";
const DITHER_NOTICE: &str = "added dither effect to image";
const HORIZONTAL_RAINBOW_NOTICE: &str = "created horizontal rainbow";
const VERTICAL_RAINBOW_NOTICE: &str = "created vertical rainbow";
const CHECKERBOARD_NOTICE: &str = "created checkerboard";
const MOSAIC_NOTICE: &str = "added mosaic effect to image";

/// Holds the current image and applies filters, color transformations and
/// generators to it.
///
/// After every operation that changes the image, all registered observers
/// receive a short notice describing it. Failed operations leave the image
/// untouched and do not notify.
pub struct ImageProcessor<R = StdRng> {
    image: Image,
    observers: ObserverList,
    output_directory: PathBuf,
    rng: R,
}

impl ImageProcessor<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A processor whose mosaic seeds are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ImageProcessor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ImageProcessor<R> {
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn set_output_directory<P: Into<PathBuf>>(&mut self, output_directory: P) {
        self.output_directory = output_directory.into();
    }

    pub fn register_observer(&mut self, observer: Rc<dyn ImageObserver>) {
        self.observers.register(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn ImageObserver>) {
        self.observers.remove(observer);
    }

    fn notify(&self, completed_action: &str) {
        self.observers.notify(completed_action);
    }

    fn require_image(&self) -> crate::Result<()> {
        if self.image.is_empty() {
            return Err(Error::NoImageLoaded);
        }
        Ok(())
    }
}

impl<R: Rng> ImageProcessor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            image: Image::default(),
            observers: ObserverList::new(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            rng,
        }
    }

    pub fn blur(&mut self) -> crate::Result<()> {
        self.filter(&filter::BLUR, BLURRED_NOTICE)
    }

    pub fn sharpen(&mut self) -> crate::Result<()> {
        self.filter(&filter::SHARPEN, SHARPENED_NOTICE)
    }

    pub fn sepia(&mut self) -> crate::Result<()> {
        self.transform(&transform::SEPIA, SEPIA_NOTICE)
    }

    pub fn greyscale(&mut self) -> crate::Result<()> {
        self.transform(&transform::GREYSCALE, GREYSCALE_NOTICE)
    }

    /// Converts the image to greyscale and dithers it to black and white
    pub fn dither(&mut self) -> crate::Result<()> {
        self.require_image()?;
        transform::apply_color_matrix(&mut self.image, &transform::GREYSCALE);
        dither::apply_error_diffusion(&mut self.image);
        self.notify(DITHER_NOTICE);
        Ok(())
    }

    /// Replaces the image with `colors` as equally thick stripes
    pub fn rainbow(
        &mut self,
        height: usize,
        width: usize,
        colors: &[RGBColor],
        orientation: Orientation,
    ) -> crate::Result<()> {
        self.image = stripes::draw_stripes(height, width, colors, orientation)?;
        self.notify(match orientation {
            Orientation::Horizontal => HORIZONTAL_RAINBOW_NOTICE,
            Orientation::Vertical => VERTICAL_RAINBOW_NOTICE,
        });
        Ok(())
    }

    pub fn checkerboard(
        &mut self,
        square_size: usize,
        primary: RGBColor,
        secondary: RGBColor,
    ) -> crate::Result<()> {
        self.image = checkerboard::draw_checkerboard(square_size, primary, secondary)?;
        self.notify(CHECKERBOARD_NOTICE);
        Ok(())
    }

    /// Splits the image into `seeds` regions around randomly picked dots
    pub fn mosaic(&mut self, seeds: usize) -> crate::Result<()> {
        self.require_image()?;
        let seeds = mosaic::sample_seeds(&mut self.rng, &self.image, seeds)?;
        log::debug!("Sampled {} mosaic seeds", seeds.len());
        self.apply_mosaic(&seeds)
    }

    /// Mosaic with explicitly chosen seeds instead of random ones
    pub fn mosaic_with_seeds(&mut self, seeds: &[Coordinate]) -> crate::Result<()> {
        self.require_image()?;
        mosaic::check_number_of_seeds(&self.image, seeds.len())?;
        if let Some(seed) = seeds
            .iter()
            .find(|seed| self.image.get(seed.row, seed.column).is_none())
        {
            return Err(Error::SeedOutsideOfImage {
                row: seed.row,
                column: seed.column,
            });
        }
        self.apply_mosaic(seeds)
    }

    fn apply_mosaic(&mut self, seeds: &[Coordinate]) -> crate::Result<()> {
        mosaic::apply_seeds(&mut self.image, seeds);
        self.notify(MOSAIC_NOTICE);
        Ok(())
    }

    /// Replaces the image with the content of a plain PPM file
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let file = open_input_file(path)?;
        let image = PPMImageReader::new(BufReader::new(file))
            .read_image()
            .map_err(|e| Error::UnableToLoadImage(path.display().to_string(), Box::new(e)))?;
        log::debug!(
            "Loaded {}x{} image from '{}'",
            image.width(),
            image.height(),
            path.display()
        );
        self.image = image;
        Ok(())
    }

    /// Writes the image into the output directory.
    ///
    /// Success and failure are both reported to the observers; the returned
    /// error carries the same information for callers that need it.
    pub fn save(&mut self, filename: &str) -> crate::Result<()> {
        match self.write_to_output_directory(filename) {
            Ok(()) => {
                self.notify(&format!("saved file '{}'", filename));
                Ok(())
            }
            Err(e) => {
                log::warn!("Saving '{}' failed: {}", filename, e);
                self.notify(&format!("unable to write file: {}", e));
                Err(e)
            }
        }
    }

    fn write_to_output_directory(&self, filename: &str) -> crate::Result<()> {
        self.require_image()?;
        let path = self.output_directory.join(filename);
        fs::create_dir_all(&self.output_directory).map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(path.display().to_string(), e)
        })?;
        let file = open_output_file(&path)?;
        PPMImageWriter::new(BufWriter::new(file), &self.image).write_image()
    }

    fn filter(&mut self, kernel: &filter::Kernel, notice: &str) -> crate::Result<()> {
        self.require_image()?;
        self.image = filter::apply_kernel(&self.image, kernel);
        self.notify(notice);
        Ok(())
    }

    fn transform(&mut self, matrix: &transform::ColorMatrix, notice: &str) -> crate::Result<()> {
        self.require_image()?;
        transform::apply_color_matrix(&mut self.image, matrix);
        self.notify(notice);
        Ok(())
    }
}

fn open_input_file(file_path: &Path) -> crate::Result<File> {
    File::open(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::ImageNotFound(file_path.display().to_string()),
        _ => Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e),
    })
}

fn open_output_file(file_path: &Path) -> crate::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}
