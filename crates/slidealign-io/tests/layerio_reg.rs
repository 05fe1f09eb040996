//! Layer I/O regression test
//!
//! Writes synthetic captcha layers to disk, reads them back through the
//! public loaders and checks that pixels survive unchanged.
//!
//! Run with:
//! ```
//! cargo test -p slidealign-io --test layerio_reg
//! ```

use slidealign_io::{IoError, load_assets, read_layer, read_layer_mem, write_png_file, write_png_mem};
use slidealign_test::{DARK, LIGHT, LayerBuilder, RegParams, TRANSPARENT};
use std::fs;

#[test]
fn layerio_reg() {
    let mut rp = RegParams::new("layerio");
    let dir = tempfile::tempdir().expect("tempdir");

    let fg = LayerBuilder::new(12, 20)
        .rect(2, 4, 8, 3, DARK)
        .pixel(0, 0, 0x7F336699)
        .build_buffer();
    let bg = LayerBuilder::filled(30, 20, LIGHT)
        .speckle(11, 0.1, DARK)
        .build_buffer();

    let fg_path = dir.path().join("fg.png");
    let bg_path = dir.path().join("bg.png");
    write_png_file(&fg, &fg_path).expect("write fg");
    write_png_file(&bg, &bg_path).expect("write bg");

    // Test 1: file round trip keeps every ARGB value, alpha included
    let fg_back = read_layer(&fg_path).expect("read fg");
    rp.compare_buffers(&fg, fg_back.buffer());
    rp.compare_values(TRANSPARENT as f64, fg_back.get(11, 19).unwrap_or(1) as f64, 0.0);

    // Test 2: load_assets with and without a background
    let assets = load_assets(&fg_path, Some(&bg_path)).expect("load both");
    rp.compare_values(30.0, assets.background_width() as f64, 0.0);
    rp.check(assets.foreground().is_ok(), "foreground present");

    let fg_only = load_assets(&fg_path, None).expect("load fg only");
    rp.check(fg_only.background().is_none(), "no background");

    // Test 3: in-memory encode/decode agrees with the file path
    let bytes = write_png_mem(&bg).expect("encode bg");
    let on_disk = fs::read(&bg_path).expect("read bg bytes");
    rp.check(bytes == on_disk, "memory and file encodings match");
    let bg_back = read_layer_mem(&bytes).expect("decode bg");
    rp.compare_buffers(&bg, bg_back.buffer());

    // Test 4: wrong formats and missing files are errors, not panics
    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0];
    rp.check(
        matches!(read_layer_mem(&jpeg), Err(IoError::UnsupportedFormat(_))),
        "jpeg rejected as unsupported",
    );
    rp.check(
        matches!(read_layer(dir.path().join("missing.png")), Err(IoError::Io(_))),
        "missing file is an I/O error",
    );

    rp.write_buffer(&bg, "background").expect("display output");
    assert!(rp.cleanup(), "layerio regression test failed");
}
