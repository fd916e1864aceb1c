use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use glsl_demod::{demodernize, ShaderStage};

#[derive(Debug, Parser)]
#[command(name = "glsl-demod")]
#[command(about = "Rewrites GLSL ES 3.00 shader source into GLSL ES 1.00")]
struct Cli {
    /// Shader source file, or '-' to read from stdin.
    input: PathBuf,

    /// Pipeline stage the shader targets: 'vertex' or 'fragment'.
    #[arg(short = 's', long = "stage")]
    stage: String,

    /// Write the rewritten source here instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stage = ShaderStage::from_keyword(&cli.stage)?;

    let source = if cli.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read shader source from stdin")?;
        buffer
    } else {
        fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to read shader source {}", cli.input.display()))?
    };

    let rewritten = demodernize(&source, stage);

    match cli.output {
        Some(path) => fs::write(&path, rewritten)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rewritten}"),
    }

    Ok(())
}
