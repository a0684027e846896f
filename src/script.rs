use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use rand::Rng;

use crate::color::RGBColor;
use crate::error::Error;
use crate::observer::{ImageObserver, StatusObserver};
use crate::processor::stripes::Orientation;
use crate::processor::ImageProcessor;

const FILENAME_ARGUMENT_NAME: &str = "filename";
const ORIENTATION_ARGUMENT_NAME: &str = "orientation";
const HEIGHT_ARGUMENT_NAME: &str = "height";
const WIDTH_ARGUMENT_NAME: &str = "width";
const COLORS_ARGUMENT_NAME: &str = "colors";
const SQUARE_SIZE_ARGUMENT_NAME: &str = "square size";
const PRIMARY_COLOR_ARGUMENT_NAME: &str = "primary color";
const SECONDARY_COLOR_ARGUMENT_NAME: &str = "secondary color";
const SEEDS_ARGUMENT_NAME: &str = "seeds";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Load(String),
    Save(String),
    Blur,
    Sharpen,
    Sepia,
    Greyscale,
    Rainbow {
        orientation: Orientation,
        height: usize,
        width: usize,
        colors: Vec<RGBColor>,
    },
    Checkerboard {
        square_size: usize,
        primary: RGBColor,
        secondary: RGBColor,
    },
    Dither,
    Mosaic(usize),
}

impl Command {
    /// The keyword the command is written with in a script
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Save(_) => "save",
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::Sepia => "sepia",
            Self::Greyscale => "greyscale",
            Self::Rainbow { .. } => "rainbow",
            Self::Checkerboard { .. } => "checkerboard",
            Self::Dither => "dither",
            Self::Mosaic(_) => "mosaic",
        }
    }
}

/// Turns script tokens into commands. An error carries the name of the
/// command that could not be parsed.
pub struct CommandParser<T> {
    tokens: T,
}

impl<T> CommandParser<T>
where
    T: Iterator<Item = String>,
{
    pub fn new(tokens: T) -> Self {
        Self { tokens }
    }

    fn parse_command(&mut self, name: &str) -> crate::Result<Command> {
        let command = match name.to_ascii_lowercase().as_str() {
            "load" => Command::Load(self.next_argument(FILENAME_ARGUMENT_NAME)?),
            "save" => Command::Save(self.next_argument(FILENAME_ARGUMENT_NAME)?),
            "blur" => Command::Blur,
            "sharpen" => Command::Sharpen,
            "sepia" => Command::Sepia,
            "greyscale" => Command::Greyscale,
            "dither" => Command::Dither,
            "rainbow" => Command::Rainbow {
                orientation: self.parse_argument(ORIENTATION_ARGUMENT_NAME)?,
                height: self.parse_argument(HEIGHT_ARGUMENT_NAME)?,
                width: self.parse_argument(WIDTH_ARGUMENT_NAME)?,
                colors: self.parse_colors()?,
            },
            "checkerboard" => Command::Checkerboard {
                square_size: self.parse_argument(SQUARE_SIZE_ARGUMENT_NAME)?,
                primary: self.parse_argument(PRIMARY_COLOR_ARGUMENT_NAME)?,
                secondary: self.parse_argument(SECONDARY_COLOR_ARGUMENT_NAME)?,
            },
            "mosaic" => Command::Mosaic(self.parse_argument(SEEDS_ARGUMENT_NAME)?),
            _ => return Err(Error::UnsupportedCommand(name.to_owned())),
        };
        Ok(command)
    }

    fn next_argument(&mut self, argument_name: &'static str) -> crate::Result<String> {
        self.tokens
            .next()
            .ok_or(Error::MissingCommandArgument(argument_name))
    }

    fn parse_argument<A: ScriptArgument>(&mut self, argument_name: &'static str) -> crate::Result<A> {
        let token = self.next_argument(argument_name)?;
        A::parse_argument(&token, argument_name)
    }

    fn parse_colors(&mut self) -> crate::Result<Vec<RGBColor>> {
        self.next_argument(COLORS_ARGUMENT_NAME)?
            .split(',')
            .filter(|name| !name.is_empty())
            .map(RGBColor::from_str)
            .collect()
    }
}

impl<T> Iterator for CommandParser<T>
where
    T: Iterator<Item = String>,
{
    type Item = crate::Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.tokens.next()?;
        Some(
            self.parse_command(&name)
                .map_err(|e| Error::CommandFailed(name, Box::new(e))),
        )
    }
}

/// A single script argument, parsed from its token
trait ScriptArgument: Sized {
    fn parse_argument(token: &str, argument_name: &'static str) -> crate::Result<Self>;
}

impl ScriptArgument for usize {
    fn parse_argument(token: &str, argument_name: &'static str) -> crate::Result<Self> {
        token
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(argument_name))
    }
}

impl ScriptArgument for RGBColor {
    fn parse_argument(token: &str, _: &'static str) -> crate::Result<Self> {
        token.parse()
    }
}

impl ScriptArgument for Orientation {
    fn parse_argument(token: &str, _: &'static str) -> crate::Result<Self> {
        token.parse()
    }
}

/// Runs script commands against an image processor and writes the status
/// after each command. Commands without a notice, like `load`, print nothing.
pub struct ScriptRunner<'a, R> {
    processor: &'a mut ImageProcessor<R>,
    status: Rc<StatusObserver>,
}

impl<'a, R: Rng> ScriptRunner<'a, R> {
    pub fn new(processor: &'a mut ImageProcessor<R>) -> Self {
        let status = Rc::new(StatusObserver::new());
        processor.register_observer(status.clone());
        Self { processor, status }
    }

    /// Stops at the first command that cannot be parsed or fails.
    ///
    /// A status line is written only for commands that emitted a notice, so
    /// `load` leaves no line behind.
    pub fn run<T, W>(&mut self, tokens: T, output: &mut W) -> crate::Result<()>
    where
        T: Iterator<Item = String>,
        W: Write,
    {
        for command in CommandParser::new(tokens) {
            let command = command?;
            let name = command.name();
            self.execute(command)
                .map_err(|e| Error::CommandFailed(name.to_owned(), Box::new(e)))?;
            if let Some(status) = self.status.take_status() {
                writeln!(output, "{}", status).map_err(Error::FailedToWriteStatus)?;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> crate::Result<()> {
        log::debug!("Executing {:?}", command);
        match command {
            Command::Load(filename) => self.processor.load(filename),
            Command::Save(filename) => {
                // the failure already reached the status observer
                if let Err(e) = self.processor.save(&filename) {
                    log::debug!("Continuing after failed save: {}", e);
                }
                Ok(())
            }
            Command::Blur => self.processor.blur(),
            Command::Sharpen => self.processor.sharpen(),
            Command::Sepia => self.processor.sepia(),
            Command::Greyscale => self.processor.greyscale(),
            Command::Rainbow {
                orientation,
                height,
                width,
                colors,
            } => self.processor.rainbow(height, width, &colors, orientation),
            Command::Checkerboard {
                square_size,
                primary,
                secondary,
            } => self.processor.checkerboard(square_size, primary, secondary),
            Command::Dither => self.processor.dither(),
            Command::Mosaic(seeds) => self.processor.mosaic(seeds),
        }
    }

    pub fn status(&self) -> String {
        self.status.status()
    }
}

impl<R> Drop for ScriptRunner<'_, R> {
    fn drop(&mut self) {
        let status: Rc<dyn ImageObserver> = self.status.clone();
        self.processor.remove_observer(&status);
    }
}
