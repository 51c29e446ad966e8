use anyhow::{bail, Context, Result};
use launchpad_specs::{build_fill_grid, build_specs_from_grid, InputGrid};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
enum Source {
    File(PathBuf),
    Fill(i64),
}

/// Parse arguments after the program name.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Source> {
    let mut args = args.into_iter();
    let source = match args.next().as_deref() {
        None => Source::Fill(0),
        Some("--fill") => {
            let value = args.next().context("--fill needs a color value")?;
            let color = value
                .parse()
                .with_context(|| format!("Invalid fill color {:?}", value))?;
            Source::Fill(color)
        }
        Some(flag) if flag.starts_with("--") => bail!("Unknown option {}", flag),
        Some(path) => Source::File(PathBuf::from(path)),
    };

    if let Some(extra) = args.next() {
        bail!("Unexpected argument {}", extra);
    }
    Ok(source)
}

fn load_grid(source: &Source) -> Result<InputGrid> {
    match source {
        Source::Fill(color) => {
            debug!("[GRID] Using fill grid with color {}", color);
            Ok(build_fill_grid(*color))
        }
        Source::File(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid file {:?}", path))?;
            InputGrid::from_json(&json)
                .with_context(|| format!("Failed to parse grid file {:?}", path))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let source = parse_args(std::env::args().skip(1))?;
    let grid = load_grid(&source)?;
    let specs = build_specs_from_grid(&grid);
    info!("[SPECS] {} specs ready for transmission", specs.len());

    println!("{}", serde_json::to_string(&specs)?);
    Ok(())
}
