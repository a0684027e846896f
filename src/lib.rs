use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use rand::{rngs::StdRng, SeedableRng};

pub use cli::CLIParser;
pub use color::RGBColor;
pub use error::Error;
pub use image::Image;
pub use observer::{ImageObserver, StatusObserver};
pub use processor::{mosaic::Coordinate, stripes::Orientation, ImageProcessor};
pub use script::{Command, CommandParser, ScriptRunner};
use tokenizer::Tokenizer;

mod cli;
pub mod color;
mod error;
pub mod image;
mod logger;
pub mod observer;
pub mod processor;
pub mod script;
mod tokenizer;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    script_file: PathBuf,
    output_directory: PathBuf,
    seed: Option<u64>,
}

impl Arguments {
    pub fn new(script_file: PathBuf, output_directory: PathBuf, seed: Option<u64>) -> Self {
        Self {
            script_file,
            output_directory,
            seed,
        }
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

/// Executes the script file and writes one status line per completed command
pub fn run_script<W: Write>(arguments: &Arguments, output: &mut W) -> Result<()> {
    let script_file = open_input_file(&arguments.script_file)?;
    let rng = match arguments.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut processor = ImageProcessor::with_rng(rng);
    processor.set_output_directory(&arguments.output_directory);
    log::info!(
        "Running script '{}' with output directory '{}'",
        arguments.script_file.display(),
        arguments.output_directory.display()
    );
    let mut tokens = Tokenizer::new(BufReader::new(script_file));
    let result = ScriptRunner::new(&mut processor).run(&mut tokens, output);
    match tokens.take_error() {
        Some(e) => Err(Error::FailedToReadInput(e)),
        None => result,
    }
}

/// Executes the script file, printing the status lines on stdout
pub fn run(arguments: &Arguments) -> Result<()> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run_script(arguments, &mut output)
}
