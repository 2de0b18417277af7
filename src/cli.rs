//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::generator::{StylesheetGenerator, Summary};

/// Update the image SCSS file from a folder of paired SVG images.
#[derive(Debug, Parser)]
#[command(name = "imagesheet", version, about, long_about = None)]
pub struct Cli {
    /// The path to a folder containing the source SVG images.
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// The path to the website repository; the stylesheet is written to
    /// FrontEnd/styles/images.scss inside it.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

impl Cli {
    /// Runs a generation with the parsed arguments.
    pub fn run(&self) -> Result<Summary> {
        StylesheetGenerator::new(&self.input, &self.output).generate()
    }
}
