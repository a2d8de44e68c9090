use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn convert(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read FB2 file: {}", cli.input.display()))?;
    log::debug!("read {} bytes from {}", source.len(), cli.input.display());

    let text = fb2txt::convert(&source, cli.format.mode())
        .with_context(|| format!("Could not read this document: {}", cli.input.display()))?;

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let output_path = resolve_output_path(cli)?;
    write_output(&output_path, &text)?;

    eprintln!(
        "Converted {} to {} ({})",
        cli.input.display(),
        output_path.display(),
        cli.format.extension().to_uppercase()
    );

    Ok(())
}

fn resolve_output_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(ref path) = cli.output {
        return Ok(path.clone());
    }

    if cli.input.file_stem().is_none() {
        bail!("Input file has no name: {}", cli.input.display());
    }

    let path = cli.input.with_extension(cli.format.extension());
    if path == cli.input {
        bail!(
            "Refusing to overwrite the input file {}; pass an output path",
            cli.input.display()
        );
    }

    Ok(path)
}

fn write_output(output_path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(output_path, content)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    Ok(())
}
