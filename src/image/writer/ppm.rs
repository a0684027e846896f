use std::io::Write;

use crate::error::Error;
use crate::image::{Image, ImageWriter};

const P3_HEADER: &str = "P3";
const MAX_VALUE: u8 = 255;

/// Writes an image as plain text PPM, one image row per line
pub struct PPMImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
}

impl<'a, T: Write> PPMImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image) -> Self {
        Self { writer, image }
    }

    fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "{}", P3_HEADER)?;
        writeln!(self.writer, "{} {}", self.image.width(), self.image.height())?;
        writeln!(self.writer, "{}", MAX_VALUE)
    }

    fn write_dots(&mut self) -> std::io::Result<()> {
        for row in self.image.rows() {
            let line = row
                .iter()
                .map(|dot| format!("{} {} {}", dot.red, dot.green, dot.blue))
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }
}

impl<T: Write> ImageWriter for PPMImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        if self.image.is_empty() {
            return Err(Error::NoImageLoaded);
        }
        self.write_header().map_err(Error::FailedToWriteImage)?;
        self.write_dots().map_err(Error::FailedToWriteImage)?;
        self.writer.flush().map_err(Error::FailedToWriteImage)
    }
}
