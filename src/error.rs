use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    PPMFileDoesNotContainRequiredToken(&'static str),
    ParsingOfTokenFailed(&'static str),
    IncompletePixelParsed(usize),
    MismatchOfSizeBetweenHeaderAndValues,
    InvalidMaxValue(u16),
    ColorValueExceedsMaxValue(u16, u16),
    ImageNotFound(String),
    UnableToLoadImage(String, Box<Error>),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInput(std::io::Error),
    FailedToWriteImage(std::io::Error),
    FailedToWriteStatus(std::io::Error),
    NoImageLoaded,
    InvalidImageDimensions { height: usize, width: usize },
    EmptyColorList,
    UnsupportedOrientation(String),
    InvalidSquareSize(usize),
    InvalidNumberOfSeeds { seeds: usize, pixels: usize },
    SeedOutsideOfImage { row: usize, column: usize },
    UnknownColor(String),
    UnsupportedCommand(String),
    MissingCommandArgument(&'static str),
    CommandFailed(String, Box<Error>),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PPMFileDoesNotContainRequiredToken(token_name) => {
                write!(f, "Expected token '{}' not found in PPM file", token_name)
            }
            Self::ParsingOfTokenFailed(token_name) => {
                write!(f, "Parsing of token '{}' failed", token_name)
            }
            Self::IncompletePixelParsed(number_of_tokens_parsed) => {
                write!(
                    f,
                    "Incomplete pixel parsed. Expected 3 components, but got {}.",
                    number_of_tokens_parsed
                )
            }
            Self::MismatchOfSizeBetweenHeaderAndValues => {
                write!(
                    f,
                    "Number of pixels does not match the size provided in header"
                )
            }
            Self::InvalidMaxValue(max_value) => {
                write!(f, "Max value {} in PPM header is not allowed", max_value)
            }
            Self::ColorValueExceedsMaxValue(value, max_value) => {
                write!(
                    f,
                    "Color value {} is greater than max value of {}",
                    value, max_value
                )
            }
            Self::ImageNotFound(path) => {
                write!(f, "Image file '{}' not found", path)
            }
            Self::UnableToLoadImage(path, cause) => {
                write!(f, "Could not load image '{}': {}", path, cause)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInput(error) => write!(f, "Failed to read input data: {}", error),
            Self::FailedToWriteImage(error) => write!(f, "Failed to write image data: {}", error),
            Self::FailedToWriteStatus(error) => write!(f, "Failed to write status: {}", error),
            Self::NoImageLoaded => write!(f, "No image loaded"),
            Self::InvalidImageDimensions { height, width } => {
                write!(
                    f,
                    "Image size {}x{} (height x width) is not supported",
                    height, width
                )
            }
            Self::EmptyColorList => write!(f, "At least one color must be specified"),
            Self::UnsupportedOrientation(orientation) => {
                write!(f, "Unsupported orientation '{}'", orientation)
            }
            Self::InvalidSquareSize(square_size) => {
                write!(f, "Square size {} is not allowed", square_size)
            }
            Self::InvalidNumberOfSeeds { seeds, pixels } => {
                write!(
                    f,
                    "Number of seeds must be between 1 and {}, but was {}",
                    pixels, seeds
                )
            }
            Self::SeedOutsideOfImage { row, column } => {
                write!(f, "Seed ({}, {}) lies outside of the image", row, column)
            }
            Self::UnknownColor(color) => write!(f, "Unsupported color '{}'", color),
            Self::UnsupportedCommand(command) => write!(f, "Unsupported command '{}'", command),
            Self::MissingCommandArgument(argument_name) => {
                write!(f, "Expected argument '{}' is missing", argument_name)
            }
            Self::CommandFailed(command, cause) => {
                write!(
                    f,
                    "Unable to parse command '{}' in input script: {}",
                    command, cause
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToLoadImage(_, cause) | Self::CommandFailed(_, cause) => Some(cause.as_ref()),
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToReadInput(error)
            | Self::FailedToWriteImage(error)
            | Self::FailedToWriteStatus(error) => Some(error),
            _ => None,
        }
    }
}
