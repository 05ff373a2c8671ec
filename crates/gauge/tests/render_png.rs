//! Integration tests for gauge rendering output.

use gauge::{HEIGHT, WIDTH};
use health::Bmi;
use tiny_skia::Pixmap;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

#[test]
fn renders_well_formed_png() {
    let bytes = gauge::render(Bmi::new(22.9)).unwrap();

    assert!(bytes.len() > PNG_MAGIC.len());
    assert_eq!(&bytes[..8], &PNG_MAGIC);

    let pixmap = Pixmap::decode_png(&bytes).unwrap();
    assert_eq!(pixmap.width(), WIDTH);
    assert_eq!(pixmap.height(), HEIGHT);
}

#[test]
fn renders_for_every_band() {
    for bmi in [15.0, 21.0, 27.0, 35.0] {
        let bytes = gauge::render(Bmi::new(bmi)).unwrap();
        assert!(Pixmap::decode_png(&bytes).is_ok(), "bmi {bmi} did not render");
    }
}

#[test]
fn out_of_domain_values_still_render() {
    // The needle extrapolates past the arc instead of failing.
    assert!(gauge::render(Bmi::new(5.0)).is_ok());
    assert!(gauge::render(Bmi::new(55.0)).is_ok());
}

#[test]
fn needle_position_changes_the_image() {
    let low = gauge::render(Bmi::new(12.0)).unwrap();
    let high = gauge::render(Bmi::new(38.0)).unwrap();
    assert_ne!(low, high);
}
