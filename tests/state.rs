mod common;

use common::synthetic_image::grid_f64;
use grid_remover::image::io::to_gray_u8;
use grid_remover::spectrum::display::log_magnitude_image;
use grid_remover::{GridRemover, PipelineState, RemoverParams};

#[test]
fn state_holds_every_grid_for_display() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut state = PipelineState::new(grid_f64(64, 8, 10.0));
    let remover = GridRemover::new(RemoverParams::default());
    let report = remover.process_into(&mut state).unwrap().report();

    assert_eq!((report.width, report.height), (64, 64));
    assert_eq!(report.flagged_pixels, 64 * 16 - 64);

    let spectrum = state.spectrum.as_ref().unwrap();
    let masked = state.masked_spectrum.as_ref().unwrap();
    assert_eq!((spectrum.w, spectrum.h), (64, 64));
    assert_eq!(masked.nonzero_count(), report.survivor_count);

    // DC ends up in the centre of the rendering and is its brightest pixel
    let rendering = to_gray_u8(&log_magnitude_image(spectrum), false);
    let brightest = rendering.pixels().map(|p| p[0]).max();
    assert_eq!(brightest, Some(rendering.get_pixel(32, 32)[0]));
    assert!(rendering.get_pixel(32, 32)[0] >= 254);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    assert!(json["lines"][0]["angleDeg"].is_number());
    assert!(json["survivorCount"].is_number());
}
