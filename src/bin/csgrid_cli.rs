//! CLI tool for csgrid - renders grid options JSON to static HTML
//!
//! Usage:
//!   csgrid_cli <options.json>                    # HTML to stdout
//!   csgrid_cli <options.json> -o grid.html       # HTML to file
//!   csgrid_cli <options.json> --data rows.json   # replace the local data
//!   csgrid_cli <options.json> --width 800 --page 2 --verbose

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use csgrid::{Grid, GridOptions, HtmlSurface, LoadStatus, OptionsPatch};
use simplelog::{Config, LevelFilter, WriteLogger};

const USAGE: &str = "Usage: csgrid_cli <options.json> [--width px] [--data rows.json] \
                     [--page n] [-o output.html] [--verbose]";

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        fail(USAGE);
    }

    let input_path = &args[1];
    let mut width: i64 = 800;
    let mut data_path: Option<&String> = None;
    let mut page: Option<u32> = None;
    let mut output_path: Option<&String> = None;
    let mut verbose = false;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--width" => {
                width = rest
                    .next()
                    .and_then(|w| w.parse().ok())
                    .unwrap_or_else(|| fail("--width expects a number of pixels"));
            }
            "--data" => data_path = rest.next(),
            "--page" => {
                page = rest.next().and_then(|p| p.parse().ok());
                if page.is_none() {
                    fail("--page expects a page number");
                }
            }
            "-o" => output_path = rest.next(),
            "--verbose" | "-v" => verbose = true,
            other => fail(&format!("Unknown argument: {other}\n{USAGE}")),
        }
    }

    if verbose {
        WriteLogger::init(LevelFilter::Trace, Config::default(), io::stderr()).unwrap();
    }

    let json = match fs::read_to_string(input_path) {
        Ok(j) => j,
        Err(e) => fail(&format!("Error reading {input_path}: {e}")),
    };
    let options = match GridOptions::from_json(&json) {
        Ok(o) => o,
        Err(e) => fail(&format!("Error parsing options: {e}")),
    };

    let mut grid = Grid::new(HtmlSurface::new(width), options);
    let mut status = grid
        .init()
        .unwrap_or_else(|e| fail(&format!("Error building grid: {e}")));
    if status == LoadStatus::Skipped {
        fail("No columns configured");
    }

    let mut patch = OptionsPatch::default();
    if let Some(path) = data_path {
        let raw = fs::read_to_string(path)
            .unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")));
        patch.data = Some(
            serde_json::from_str(&raw)
                .unwrap_or_else(|e| fail(&format!("Error parsing {path}: {e}"))),
        );
    }
    patch.page_number = page;
    if patch.data.is_some() || patch.page_number.is_some() {
        status = grid
            .reload(patch)
            .unwrap_or_else(|e| fail(&format!("Error reloading grid: {e}")));
    }

    if let LoadStatus::Pending(request) = &status {
        eprintln!(
            "Remote data is not fetched; request would be POST {} {}",
            request.url,
            request.form_body()
        );
    }

    let html = grid.surface().to_html();
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(html.as_bytes()).unwrap();
            println!();
        }
    }
}
