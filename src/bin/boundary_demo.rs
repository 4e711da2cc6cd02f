use boundary_detector::config::load_config;
use boundary_detector::image::io::{load_grayscale_image, load_rgb_image};
use boundary_detector::pairing::pair_annotation_files;
use boundary_detector::BoundaryAnalyzer;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct PairSummary<'a> {
    annotation: &'a str,
    original: &'a str,
    cluster_count: usize,
    boundary_len: usize,
    retained_windows: usize,
    latency_ms: f64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let analyzer = BoundaryAnalyzer::new(config.analyzer);

    let mut names = Vec::new();
    let entries = fs::read_dir(&config.image_dir)
        .map_err(|e| format!("Failed to list {}: {e}", config.image_dir.display()))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {e}"))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let pairs = pair_annotation_files(&names);
    if pairs.is_empty() {
        return Err(format!(
            "No annotation/original pairs found in {}",
            config.image_dir.display()
        ));
    }

    for pair in &pairs {
        // The annotation file is expected to already be a binary edge map
        // from an external edge detector.
        let edges = load_grayscale_image(&config.image_dir.join(&pair.annotation))?;
        let color = load_rgb_image(&config.image_dir.join(&pair.original))?;

        let report = analyzer
            .process(edges.as_view(), color.as_view())
            .map_err(|e| format!("Analysis of {} failed: {e}", pair.annotation))?;

        let summary = PairSummary {
            annotation: &pair.annotation,
            original: &pair.original,
            cluster_count: report.result.cluster_count,
            boundary_len: report.result.boundary_len,
            retained_windows: report.result.retained_windows,
            latency_ms: report.result.latency_ms,
        };
        let line = serde_json::to_string(&summary)
            .map_err(|e| format!("Failed to serialize summary: {e}"))?;
        println!("{line}");
    }

    Ok(())
}

fn usage() -> String {
    "Usage: boundary_demo <config.json>".to_string()
}
