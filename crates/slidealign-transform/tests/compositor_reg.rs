//! Compositor regression test
//!
//! Uses the real captcha geometry with a 16x80 foreground: scale 1,
//! canvas 80x48, `half_diff` 16. Foreground column `c` lands on device
//! row `16 + c`, layer row `r` on device column `r`, and the 16-row
//! margins at both ends are always refilled.
//!
//! Run with:
//! ```
//! cargo test -p slidealign-transform --test compositor_reg
//! ```

use slidealign_core::{CaptchaGeometry, PixelBuffer, color};
use slidealign_test::{DARK, LIGHT, LayerBuilder, RegParams};
use slidealign_transform::{Compositor, TransformError};

const BLUE: u32 = 0xFF0000FF;
const RED: u32 = 0xFFFF0000;

fn expected_with_band(rows: std::ops::Range<u32>, argb: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(80, 48, LIGHT).expect("expected buffer");
    for y in rows {
        for x in 0..80 {
            buf.set(x, y, argb).expect("in bounds");
        }
    }
    buf
}

#[test]
fn compositor_reg() {
    let mut rp = RegParams::new("compositor");

    let fg = LayerBuilder::new(16, 80).pixel(3, 10, DARK).build();
    // 40 columns: clip width 40 - 32 = 8
    let bg = LayerBuilder::filled(40, 80, BLUE).pixel(6, 50, RED).build();

    let geometry = CaptchaGeometry::for_foreground(16, 80).expect("geometry");
    rp.compare_values(8.0, geometry.background_clip_width(40) as f64, 0.0);
    let mut comp = Compositor::new(geometry, color::CAPTCHA_BG).expect("compositor");

    // --- Test 1: foreground alone, transposed between the margins ---
    let out = comp.composite(None, &fg, 0).expect("fg only").clone();
    let mut expected = expected_with_band(0..0, LIGHT);
    expected.set(10, 19, DARK).expect("in bounds");
    rp.compare_buffers(&expected, &out);

    // --- Test 2: background clipped to 8 columns at offset 0 ---
    let out = comp.composite(Some(&bg), &fg, 0).expect("offset 0").clone();
    let mut expected = expected_with_band(16..24, BLUE);
    expected.set(10, 19, DARK).expect("in bounds");
    expected.set(50, 22, RED).expect("in bounds");
    rp.compare_buffers(&expected, &out);
    rp.write_buffer(&out, "offset0").expect("display output");

    // --- Test 3: a negative offset pulls later columns into view ---
    let out = comp.composite(Some(&bg), &fg, -3).expect("offset -3").clone();
    let mut expected = expected_with_band(16..21, BLUE);
    expected.set(10, 19, DARK).expect("in bounds");
    expected.set(50, 19, RED).expect("in bounds");
    rp.compare_buffers(&expected, &out);

    // --- Test 4: margins never show layer pixels ---
    let dark_bg = LayerBuilder::filled(80, 80, DARK).build();
    let dark_fg = LayerBuilder::filled(16, 80, DARK).build();
    let out = comp.composite(Some(&dark_bg), &dark_fg, -10).expect("dark").clone();
    rp.compare_buffers(&expected_with_band(16..32, DARK), &out);

    // --- Test 5: no state leaks between trials ---
    let again = comp.composite(None, &fg, 0).expect("fg only again").clone();
    let mut expected = expected_with_band(0..0, LIGHT);
    expected.set(10, 19, DARK).expect("in bounds");
    rp.compare_buffers(&expected, &again);

    // --- Test 6: foreground of the wrong size ---
    let wrong = LayerBuilder::new(17, 80).build();
    rp.check(
        matches!(
            comp.composite(None, &wrong, 0),
            Err(TransformError::LayerMismatch { .. })
        ),
        "layer mismatch reported",
    );

    assert!(rp.cleanup(), "compositor regression test failed");
}
