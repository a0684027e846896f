use crate::processor::DEFAULT_OUTPUT_DIRECTORY;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_script_file_argument(command);
        let command = Self::register_output_directory_argument(command);
        Self::register_seed_argument(command)
    }

    fn register_script_file_argument(command: Command) -> Command {
        command.arg(Self::create_script_file_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_seed_argument(command: Command) -> Command {
        command.arg(Self::create_seed_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_script_file_argument() -> Arg {
        Arg::new("script_file")
            .help("Path to the script with the image commands")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIRECTORY> "Directory saved images are written to")
            .default_value(DEFAULT_OUTPUT_DIRECTORY)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_seed_argument() -> Arg {
        arg!(-s --seed <SEED> "Seed for the random mosaic seeds, random if omitted")
            .required(false)
            .value_parser(value_parser!(u64))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            script_file: Self::extract_script_file_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            seed: Self::extract_seed_argument(matches),
        }
    }

    fn extract_script_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("script_file")
            .expect("Required argument script_file not provided")
            .clone()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_seed_argument(matches: &ArgMatches) -> Option<u64> {
        matches.get_one::<u64>("seed").copied()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
