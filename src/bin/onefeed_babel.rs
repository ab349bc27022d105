//! Command-line front end for the babel engine
//!
//! Reads a caption from a file or stdin, converts it between dialects,
//! and prints the result. `--ir` dumps the parsed intermediate
//! representation as JSON instead of rendering, which is the quickest way
//! to see what the parser recovered from a platform's markup.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use onefeed_babel::{parse, render, MarkupLanguage};

#[derive(Parser)]
#[command(
    name = "onefeed-babel",
    version,
    about = "Convert feed captions between markup dialects"
)]
struct Cli {
    /// Source dialect the input is written in
    #[arg(long, value_parser = language_name)]
    from: MarkupLanguage,

    /// Target dialect to render into
    #[arg(long, value_parser = language_name)]
    to: MarkupLanguage,

    /// Dump the parsed intermediate representation as JSON
    #[arg(long)]
    ir: bool,

    /// Input file; stdin when omitted
    file: Option<PathBuf>,
}

fn language_name(raw: &str) -> Result<MarkupLanguage, String> {
    raw.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("onefeed-babel: {err}");
            return ExitCode::FAILURE;
        }
    };

    let kit = parse(&input, cli.from);

    if cli.ir {
        match serde_json::to_string_pretty(&kit) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("onefeed-babel: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    let rendered = render(&kit, cli.to);
    print!("{}", rendered.text());
    if !rendered.satisfies(cli.to) {
        eprintln!(
            "onefeed-babel: partial rendering, employed {:?}",
            rendered.languages()
        );
    }
    ExitCode::SUCCESS
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
