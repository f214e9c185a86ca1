use rand::rngs::StdRng;
use rand::SeedableRng;

use starfield::config::StarfieldConfig;
use starfield::field::ParticleField;

fn seeded_field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::generate(&StarfieldConfig::default(), &mut rng)
}

#[test]
fn buffers_have_exact_lengths() {
    let field = seeded_field(0);
    assert_eq!(field.positions().len(), 3 * 3000);
    assert_eq!(field.colors().len(), 3 * 3000);
    assert_eq!(field.count(), 3000);
}

#[test]
fn every_position_lies_in_the_cube() {
    let field = seeded_field(1);
    for &p in field.positions() {
        assert!(
            (-7.5..=7.5).contains(&p),
            "position component {} escapes the cube",
            p
        );
    }
}

#[test]
fn every_color_lies_in_upper_brightness_range() {
    let field = seeded_field(1);
    for &c in field.colors() {
        assert!(
            (0.5..=1.0).contains(&c),
            "color component {} outside [0.5, 1.0]",
            c
        );
    }
}

#[test]
fn positions_are_roughly_centered() {
    // Uniform over [-7.5, 7.5]: the sample mean of 9000 components should
    // sit near zero. The bound is ~6 sigma, loose enough to never flake.
    let field = seeded_field(2);
    let mean: f32 = field.positions().iter().sum::<f32>() / field.positions().len() as f32;
    assert!(mean.abs() < 0.3, "position mean {} too far from 0", mean);
}

#[test]
fn positions_reach_both_cube_halves() {
    let field = seeded_field(3);
    let min = field.positions().iter().cloned().fold(f32::MAX, f32::min);
    let max = field.positions().iter().cloned().fold(f32::MIN, f32::max);
    assert!(min < -7.0, "no samples near the low cube face (min {})", min);
    assert!(max > 7.0, "no samples near the high cube face (max {})", max);
}

#[test]
fn colors_are_roughly_centered_on_three_quarters() {
    let field = seeded_field(4);
    let mean: f32 = field.colors().iter().sum::<f32>() / field.colors().len() as f32;
    assert!(
        (mean - 0.75).abs() < 0.05,
        "color mean {} too far from 0.75",
        mean
    );
}

#[test]
fn channels_vary_independently() {
    // If channels were correlated, per-point channel spreads would collapse.
    let field = seeded_field(5);
    let spread_out = field
        .colors()
        .chunks_exact(3)
        .filter(|c| {
            let lo = c[0].min(c[1]).min(c[2]);
            let hi = c[0].max(c[1]).max(c[2]);
            hi - lo > 0.1
        })
        .count();
    assert!(
        spread_out > field.count() / 2,
        "only {} of {} points show independent channels",
        spread_out,
        field.count()
    );
}

#[test]
fn unseeded_source_is_the_production_default() {
    // Statistically identical but visually different per run; only the
    // invariants are stable.
    let mut rng = rand::thread_rng();
    let field = ParticleField::generate(&StarfieldConfig::default(), &mut rng);
    assert_eq!(field.positions().len(), 3 * 3000);
    assert!(field.positions().iter().all(|p| (-7.5..=7.5).contains(p)));
    assert!(field.colors().iter().all(|c| (0.5..=1.0).contains(c)));
}
