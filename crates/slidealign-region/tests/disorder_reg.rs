//! Disorder regression test
//!
//! Scores hand-built composites whose component structure and vertical
//! transitions can be counted by hand.
//!
//! Run with:
//! ```
//! cargo test -p slidealign-region --test disorder_reg
//! ```

use slidealign_region::{DisorderScorer, ScoreParams, disorder_score, find_dark_components};
use slidealign_test::{DARK, LIGHT, LayerBuilder, RegParams};

#[test]
fn disorder_reg() {
    let mut rp = RegParams::new("disorder");
    let mut scorer = DisorderScorer::new();

    // --- Test 1: empty signal falls back to a zero score ---
    let blank = LayerBuilder::filled(80, 48, LIGHT).build_buffer();
    rp.compare_values(0.0, disorder_score(&blank) as f64, 0.0);

    // --- Test 2: a solid stroke beats the same stroke with a gap ---
    // 3 wide, 16 tall: 6 transitions over 48 signal pixels
    let solid = LayerBuilder::filled(10, 20, LIGHT)
        .rect(3, 2, 3, 16, DARK)
        .build_buffer();
    let solid_score = scorer.score(&solid);
    rp.compare_values(0.125, solid_score as f64, 1e-6);

    // two 3x8 halves separated by one light row: 12 transitions over 48
    let broken = LayerBuilder::filled(10, 21, LIGHT)
        .rect(3, 2, 3, 8, DARK)
        .rect(3, 11, 3, 8, DARK)
        .build_buffer();
    let broken_score = scorer.score(&broken);
    rp.compare_values(0.25, broken_score as f64, 1e-6);
    rp.check(solid_score < broken_score, "solid stroke scores lower");

    // --- Test 3: noise components do not count ---
    let noisy = LayerBuilder::filled(10, 20, LIGHT)
        .rect(3, 2, 3, 16, DARK)
        .pixel(0, 0, DARK)
        .pixel(8, 10, DARK)
        .rect(8, 15, 2, 2, DARK)
        .build_buffer();
    let report = scorer.analyze(&noisy);
    rp.compare_values(1.0, report.signal_components as f64, 0.0);
    rp.compare_values(3.0, report.noise_components as f64, 0.0);
    rp.compare_values(solid_score as f64, report.score as f64, 0.0);

    // --- Test 4: dark threshold is on the red channel, exclusive ---
    let edge = LayerBuilder::filled(30, 3, LIGHT)
        .run(1, 0, 24, 0xFF3FFFFF)
        .build_buffer();
    let comps = find_dark_components(edge.pixels(), 30, 64);
    rp.compare_values(1.0, comps.len() as f64, 0.0);
    rp.compare_values(24.0, comps[0].pixel_count() as f64, 0.0);

    let not_dark = LayerBuilder::filled(30, 3, LIGHT)
        .run(1, 0, 24, 0xFF400000)
        .build_buffer();
    rp.compare_values(
        0.0,
        find_dark_components(not_dark.pixels(), 30, 64).len() as f64,
        0.0,
    );

    // --- Test 5: a one-pixel-tall line, and the last row ---
    // 26 transitions above and 26 below, over 26 pixels
    let line = LayerBuilder::filled(30, 3, LIGHT).run(1, 2, 28, DARK).build_buffer();
    rp.compare_values(2.0, scorer.score(&line) as f64, 1e-6);

    // moved to the last row it still makes 26 transitions, but none of its
    // pixels count toward the denominator
    let bottom = LayerBuilder::filled(30, 3, LIGHT).run(2, 2, 28, DARK).build_buffer();
    let report = scorer.analyze(&bottom);
    rp.compare_values(26.0, report.transitions as f64, 0.0);
    rp.compare_values(0.0, report.signal_pixels as f64, 0.0);
    rp.compare_values(26.0, report.score as f64, 1e-6);

    // --- Test 6: parameters are honoured ---
    let mut loose = DisorderScorer::with_params(ScoreParams {
        min_component_size: 4,
        ..ScoreParams::default()
    });
    let dots = LayerBuilder::filled(10, 10, LIGHT).rect(2, 2, 2, 2, DARK).build_buffer();
    rp.compare_values(0.0, scorer.score(&dots) as f64, 0.0);
    // 2x2 block: 2 transitions above, 2 below, 4 pixels
    rp.compare_values(1.0, loose.score(&dots) as f64, 1e-6);

    // --- Test 7: scoring is deterministic across scorer reuse ---
    let first = scorer.score(&broken);
    scorer.score(&noisy);
    rp.compare_values(first as f64, scorer.score(&broken) as f64, 0.0);

    assert!(rp.cleanup(), "disorder regression test failed");
}
