use std::io::Read;

use super::super::Image;
use super::super::ImageReader;
use crate::color::{RGBColor, RangeColorFormat};
use crate::error::Error;
use crate::tokenizer::Tokenizer;

const P3_HEADER_TOKEN: &str = "P3";
const COMPONENTS_PER_DOT: usize = 3;

const P3_HEADER_TOKEN_NAME: &str = "P3 Header";
const WIDTH_HEADER_TOKEN_NAME: &str = "Width Header";
const HEIGHT_HEADER_TOKEN_NAME: &str = "Height Header";
const MAX_VALUE_HEADER_TOKEN_NAME: &str = "Max Value Header";
const COLOR_COMPONENT_VALUE_TOKEN_NAME: &str = "Color Component Value";

/// Reads plain text (`P3`) PPM images and rescales them to 8 bit channels
pub struct PPMImageReader<T: Read> {
    reader: T,
}

impl<T: Read> PPMImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: Read> ImageReader for PPMImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let mut tokenizer = Tokenizer::new(&mut self.reader);
        let image = decode_p3(&mut tokenizer);
        // a failed read looks like a truncated file to the decoder
        match tokenizer.take_error() {
            Some(e) => Err(Error::FailedToReadInput(e)),
            None => image,
        }
    }
}

struct P3Header {
    width: usize,
    height: usize,
    max_value: u16,
}

impl P3Header {
    fn number_of_dots(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

fn decode_p3<I: Iterator<Item = String>>(tokens: &mut I) -> crate::Result<Image> {
    let header = read_header(tokens)?;
    let components = tokens
        .map(|token| parse_token::<u16>(&token, COLOR_COMPONENT_VALUE_TOKEN_NAME))
        .collect::<crate::Result<Vec<u16>>>()?;

    let dots = components.chunks_exact(COMPONENTS_PER_DOT);
    if !dots.remainder().is_empty() {
        return Err(Error::IncompletePixelParsed(dots.remainder().len()));
    }
    if header.number_of_dots() != Some(dots.len()) {
        return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
    }

    let dots = dots
        .map(|dot| RangeColorFormat::new(header.max_value, dot[0], dot[1], dot[2]))
        .map(|color| color.map(RGBColor::from))
        .collect::<crate::Result<Vec<RGBColor>>>()?;
    Image::from_dots(header.width, header.height, dots)
}

fn read_header<I: Iterator<Item = String>>(tokens: &mut I) -> crate::Result<P3Header> {
    let magic = next_token(tokens, P3_HEADER_TOKEN_NAME)?;
    if magic != P3_HEADER_TOKEN {
        return Err(Error::PPMFileDoesNotContainRequiredToken(P3_HEADER_TOKEN_NAME));
    }
    let width = parse_token(&next_token(tokens, WIDTH_HEADER_TOKEN_NAME)?, WIDTH_HEADER_TOKEN_NAME)?;
    let height = parse_token(
        &next_token(tokens, HEIGHT_HEADER_TOKEN_NAME)?,
        HEIGHT_HEADER_TOKEN_NAME,
    )?;
    let max_value = parse_token(
        &next_token(tokens, MAX_VALUE_HEADER_TOKEN_NAME)?,
        MAX_VALUE_HEADER_TOKEN_NAME,
    )?;
    Ok(P3Header {
        width,
        height,
        max_value,
    })
}

fn next_token<I: Iterator<Item = String>>(
    tokens: &mut I,
    token_name: &'static str,
) -> crate::Result<String> {
    tokens
        .next()
        .ok_or(Error::PPMFileDoesNotContainRequiredToken(token_name))
}

fn parse_token<N: std::str::FromStr>(token: &str, token_name: &'static str) -> crate::Result<N> {
    token
        .parse()
        .map_err(|_| Error::ParsingOfTokenFailed(token_name))
}
