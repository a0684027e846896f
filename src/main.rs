use std::env::args_os;

use dmmt_image_processor::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => println!("Script finished"),
        Err(e) => eprintln!("Script failed because of: {}", e),
    }
}
