use grid_remover::config::degrid::{self, DegridToolConfig};
use grid_remover::image::io::{load_grayscale_image, save_grayscale_f64, write_json_file};
use grid_remover::spectrum::display::{log_magnitude_image, phase_image};
use grid_remover::spectrum::Spectrum;
use grid_remover::{GridRemover, PipelineState};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = degrid::load_config(Path::new(&config_path))?;

    let image = load_grayscale_image(&config.input, config.invert)?;
    println!(
        "Loaded {} ({}x{})",
        config.input.display(),
        image.w,
        image.h
    );

    let mut state = PipelineState::new(image);
    let remover = GridRemover::new(config.params.clone());
    let outcome = remover.process_into(&mut state).map(|res| res.report());

    save_spectra(&config, &state)?;

    let report = match outcome {
        Ok(report) => report,
        Err(err) if err.is_no_grid() => {
            println!("No grid detected: {err}");
            println!("Try a lower fraction (now {:.2})", config.params.fraction);
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    for (i, line) in report.lines.iter().enumerate() {
        println!(
            "  line {}: angle={:.2} deg distance={:.2}",
            i + 1,
            line.angle_deg,
            line.distance
        );
    }
    println!(
        "  threshold={:.3} survivors={} flagged_pixels={}",
        report.threshold, report.survivor_count, report.flagged_pixels
    );

    if let Some(result) = state.result_image() {
        let path = config.output.resolve(&config.output.result_image);
        save_grayscale_f64(result, &path, config.invert)?;
        println!("Saved result image to {}", path.display());
    }
    if let (Some(path), Some(grid)) = (&config.output.grid_image, state.grid_image()) {
        let path = config.output.resolve(path);
        save_grayscale_f64(grid, &path, false)?;
        println!("Saved grid image to {}", path.display());
    }
    if let Some(path) = &config.output.report_json {
        let path = config.output.resolve(path);
        let summary = RunSummary {
            input: config.input.display().to_string(),
            report: &report,
            trace: state.trace.as_ref(),
        };
        write_json_file(&path, &summary)?;
        println!("Saved JSON report to {}", path.display());
    }

    Ok(())
}

fn save_spectra(config: &DegridToolConfig, state: &PipelineState) -> Result<(), String> {
    let targets = [
        (&config.output.spectrum_image, state.spectrum.as_ref()),
        (&config.output.masked_spectrum_image, state.masked_spectrum.as_ref()),
    ];
    for (path, spectrum) in targets {
        if let (Some(path), Some(spectrum)) = (path, spectrum) {
            let path = config.output.resolve(path);
            save_grayscale_f64(&render(spectrum, config.output.phase), &path, false)?;
            println!("Saved spectrum image to {}", path.display());
        }
    }
    Ok(())
}

fn render(spectrum: &Spectrum, phase: bool) -> grid_remover::image::ImageF64 {
    if phase {
        phase_image(spectrum)
    } else {
        log_magnitude_image(spectrum)
    }
}

fn usage() -> String {
    "Usage: degrid_demo <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary<'a> {
    input: String,
    report: &'a grid_remover::LineReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a grid_remover::diagnostics::PipelineTrace>,
}
