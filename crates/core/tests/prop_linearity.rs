//! Property-based tests for the radiolysis formulas.
//!
//! Covers: first-order scaling in every numeric input, for the fixed factors
//! 0.5, 2 and 10 and for arbitrary positive factors.

use approx::relative_eq;
use moderator_chem_core::physics::{
    dose_rate_to_mev_per_second, g_value_to_molecules_per_mev, hydrogen_volume_rate_evans,
    hydrogen_volume_rate_from_energy, mev_per_gram_per_second_to_mgy_per_second,
    molecular_weight, moles_per_mgy_per_gram, polymer_formation_rate, radicals_per_mgy_per_gram,
};
use proptest::prelude::*;

const SCALE_FACTORS: [f64; 3] = [0.5, 2.0, 10.0];

fn scales_linearly(base: f64, scaled: f64, k: f64) -> bool {
    relative_eq!(scaled, base * k, max_relative = 1e-12)
}

/// Apply `k` to argument `arg` of a four-argument formula
fn scale_arg(args: [f64; 4], arg: usize, k: f64) -> [f64; 4] {
    let mut scaled = args;
    scaled[arg] *= k;
    scaled
}

// ── Fixed scale factors ──────────────────────────────────────────────

#[test]
fn single_argument_formulas_scale_linearly() {
    let formulas: [(&str, fn(f64) -> f64, f64); 4] = [
        ("moles_per_mgy_per_gram", moles_per_mgy_per_gram, 0.66e-6),
        ("radicals_per_mgy_per_gram", radicals_per_mgy_per_gram, 6.6e-4),
        ("g_value_to_molecules_per_mev", g_value_to_molecules_per_mev, 0.66e-6),
        (
            "mev_per_gram_per_second_to_mgy_per_second",
            mev_per_gram_per_second_to_mgy_per_second,
            1e14,
        ),
    ];

    for (name, f, x) in formulas {
        for k in SCALE_FACTORS {
            assert!(scales_linearly(f(x), f(x * k), k), "{name} with k = {k}");
        }
    }
}

#[test]
fn two_argument_formulas_scale_linearly() {
    let formulas: [(&str, fn(f64, f64) -> f64, [f64; 2]); 2] = [
        ("dose_rate_to_mev_per_second", dose_rate_to_mev_per_second, [0.01, 0.1696]),
        (
            "hydrogen_volume_rate_from_energy",
            hydrogen_volume_rate_from_energy,
            [1.0586432e16, 6.3685e4],
        ),
    ];

    for (name, f, [a, b]) in formulas {
        let base = f(a, b);
        for k in SCALE_FACTORS {
            assert!(scales_linearly(base, f(a * k, b), k), "{name} arg 0, k = {k}");
            assert!(scales_linearly(base, f(a, b * k), k), "{name} arg 1, k = {k}");
        }
    }
}

#[test]
fn four_argument_formulas_scale_linearly() {
    let formulas: [(&str, fn(f64, f64, f64, f64) -> f64, [f64; 4]); 2] = [
        ("hydrogen_volume_rate_evans", hydrogen_volume_rate_evans, [6.6e-4, 400.0, 0.01, 0.43]),
        ("polymer_formation_rate", polymer_formation_rate, [0.22e-6, 300.0, 0.01, 169.6]),
    ];

    for (name, f, args) in formulas {
        let base = f(args[0], args[1], args[2], args[3]);
        for arg in 0..4 {
            for k in SCALE_FACTORS {
                let s = scale_arg(args, arg, k);
                assert!(
                    scales_linearly(base, f(s[0], s[1], s[2], s[3]), k),
                    "{name} arg {arg}, k = {k}"
                );
            }
        }
    }
}

#[test]
fn molecular_weight_scales_with_chain_length() {
    for n in [1u32, 5, 20] {
        // Integer chain lengths: the fractional factor 0.5 applies to even n only
        assert_eq!(molecular_weight(2 * n), 2.0 * molecular_weight(n));
        assert_eq!(molecular_weight(10 * n), 10.0 * molecular_weight(n));
        assert_eq!(molecular_weight(2 * n / 2), 0.5 * molecular_weight(2 * n));
    }
}

// ── Arbitrary scale factors ──────────────────────────────────────────

proptest! {
    /// Evans hydrogen rate is first order in each argument.
    #[test]
    fn evans_first_order(
        moles in 1e-12f64..1e-2,
        volume in 1.0f64..1e4,
        dose in 1e-6f64..1.0,
        sg in 0.1f64..1.0,
        k in 0.01f64..100.0,
        arg in 0usize..4,
    ) {
        let args = [moles, volume, dose, sg];
        let base = hydrogen_volume_rate_evans(args[0], args[1], args[2], args[3]);
        let s = scale_arg(args, arg, k);
        let scaled = hydrogen_volume_rate_evans(s[0], s[1], s[2], s[3]);
        prop_assert!(scales_linearly(base, scaled, k));
    }

    /// Polymer formation rate is first order in each argument.
    #[test]
    fn polymer_first_order(
        g in 1e-9f64..1e-5,
        mr in 14.0f64..1e3,
        dose in 1e-6f64..1.0,
        mass in 1.0f64..1e3,
        k in 0.01f64..100.0,
        arg in 0usize..4,
    ) {
        let args = [g, mr, dose, mass];
        let base = polymer_formation_rate(args[0], args[1], args[2], args[3]);
        let s = scale_arg(args, arg, k);
        let scaled = polymer_formation_rate(s[0], s[1], s[2], s[3]);
        prop_assert!(scales_linearly(base, scaled, k));
    }

    /// Both hydrogen methods agree whenever the charge mass equals volume × SG.
    #[test]
    fn hydrogen_methods_agree_on_consistent_mass(
        g in 1e-8f64..1e-5,
        volume in 10.0f64..1e4,
        sg in 0.1f64..1.0,
        dose in 1e-4f64..1.0,
    ) {
        let evans = hydrogen_volume_rate_evans(moles_per_mgy_per_gram(g), volume, dose, sg);
        let mass_kg = volume * sg / 1000.0;
        let energy = hydrogen_volume_rate_from_energy(
            dose_rate_to_mev_per_second(dose, mass_kg),
            g_value_to_molecules_per_mev(g),
        );
        prop_assert!(relative_eq!(evans, energy, max_relative = 1e-9));
    }

    /// Mr(n) = 14n for every chain length.
    #[test]
    fn molecular_weight_is_14n(n in 0u32..1_000_000) {
        prop_assert_eq!(molecular_weight(n), 14.0 * f64::from(n));
    }
}
