//! Analyze a PDF and print its vocabulary statistics as JSON.
//!
//! Usage: lexstat <file.pdf> [--ocr] [--columns] [--lang <code>]
//!
//! The optical path shells out to the `tesseract` binary, so forced or
//! fallback OCR requires tesseract on PATH with the requested language data
//! installed.

use std::process::Command;

use image::DynamicImage;
use pdf_lexstat::source::pdfium::PdfiumSource;
use pdf_lexstat::source::OcrEngine;
use pdf_lexstat::{analyze, AnalysisConfig, Error, Result};

/// OCR engine backed by the tesseract command-line tool.
struct TesseractCli;

impl OcrEngine for TesseractCli {
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let png = dir.path().join("page.png");
        image
            .save(&png)
            .map_err(|e| Error::Ocr(format!("failed to write page raster: {e}")))?;

        let output = Command::new("tesseract")
            .arg(&png)
            .arg("stdout")
            .args(["-l", language])
            .output()?;
        if !output.status.success() {
            return Err(Error::Ocr(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn parse_args() -> Result<(String, AnalysisConfig)> {
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or(Error::MissingInput)?;

    let mut config = AnalysisConfig::new();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--ocr" => config = config.with_force_ocr(true),
            "--columns" => config = config.with_split_columns(true),
            "--lang" => {
                let code = args.next().ok_or(Error::MissingInput)?;
                config = config.with_ocr_language(code);
            },
            other => {
                eprintln!("unknown option: {other}");
                return Err(Error::MissingInput);
            },
        }
    }
    Ok((path, config))
}

fn run() -> Result<()> {
    let (path, config) = parse_args()?;
    let mut source = PdfiumSource::open(&path)?;
    let report = analyze(&mut source, &TesseractCli, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        if matches!(e, Error::MissingInput) {
            eprintln!("usage: lexstat <file.pdf> [--ocr] [--columns] [--lang <code>]");
        }
        std::process::exit(1);
    }
}
