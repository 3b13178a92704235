//! Integration tests: waveform properties across every line code
//!
//! These check the invariants the generators promise regardless of scheme:
//! sample counts, voltage sets, monotonic time, idempotence and the
//! reference patterns for each code.

use std::sync::Arc;
use std::thread;

use linescope_lib::domain::{EncodingConfig, Levels, Scheme, Waveform};
use linescope_lib::encoding::hex::hex_to_bits;
use linescope_lib::WaveformGenerator;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bits(pattern: &str) -> Vec<bool> {
    pattern.chars().map(|c| c == '1').collect()
}

fn generator(pattern: &str) -> WaveformGenerator {
    WaveformGenerator::new(EncodingConfig::new(bits(pattern)))
}

/// Voltage of each bit for schemes holding one level per bit
fn per_bit(wf: &Waveform) -> Vec<f64> {
    wf.samples.iter().step_by(2).map(|s| s.voltage).collect()
}

#[test]
fn sample_counts_follow_samples_per_bit() {
    init();
    let pattern = "1011001110";
    let gen = generator(pattern);
    let n = pattern.len();

    assert_eq!(gen.clock().len(), 4 * n);
    for scheme in Scheme::ALL {
        let wf = gen.generate(scheme);
        let expected = match scheme {
            // Ends in 0: one trailing sample
            Scheme::DifferentialManchester => 4 * n + 1,
            other => other.samples_per_bit() * n,
        };
        assert_eq!(wf.len(), expected, "{scheme}");
    }
}

#[test]
fn differential_manchester_length_depends_on_last_bit() {
    assert_eq!(generator("10").differential_manchester().len(), 9);
    assert_eq!(generator("01").differential_manchester().len(), 8);
    assert_eq!(generator("0").differential_manchester().len(), 5);
}

#[test]
fn time_never_decreases_and_ends_at_time_max() {
    let gen = WaveformGenerator::new(
        EncodingConfig::new(bits("110100101")).with_symbol_rate(3.0),
    );
    let mut waveforms = vec![gen.clock()];
    waveforms.extend(Scheme::ALL.iter().map(|&s| gen.generate(s)));

    for wf in &waveforms {
        assert!(wf.samples.windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(wf.samples[0].time, 0.0);
        let last = wf.samples.last().unwrap();
        assert!((last.time - wf.time_max).abs() < 1e-12);
        assert!((wf.time_max - 3.0).abs() < 1e-12);
    }
}

#[test]
fn voltages_stay_on_allowed_levels() {
    let amplitude = 5.0;
    let gen = generator("1100101110001");
    for scheme in Scheme::ALL {
        if let Scheme::Multilevel(_) = scheme {
            continue;
        }
        let wf = gen.generate(scheme);
        for v in wf.voltages() {
            assert!(
                v == 0.0 || v == amplitude || v == -amplitude,
                "{scheme} produced {v}"
            );
        }
    }
}

#[test]
fn segments_are_flat() {
    let gen = generator("1001101");
    for scheme in Scheme::ALL {
        let wf = gen.generate(scheme);
        let body = wf.len() - wf.len() % 2;
        for pair in wf.samples[..body].chunks(2) {
            assert_eq!(pair[0].voltage, pair[1].voltage, "{scheme}");
        }
    }
}

#[test]
fn ttl_reference_pattern() {
    let wf = generator("1011").ttl();
    assert_eq!(
        wf.to_points(),
        vec![
            (0.0, 5.0),
            (1.0, 5.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 5.0),
            (3.0, 5.0),
            (3.0, 5.0),
            (4.0, 5.0)
        ]
    );
}

#[test]
fn nrzi_reference_pattern() {
    let wf = generator("1101").nrzi();
    assert_eq!(
        wf.voltages().collect::<Vec<_>>(),
        vec![5.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, 5.0]
    );
}

#[test]
fn bipolar_reference_pattern() {
    assert_eq!(per_bit(&generator("1011").bipolar()), vec![5.0, 0.0, -5.0, 5.0]);
}

#[test]
fn bipolar_and_pseudoternary_mirror_each_other() {
    let pattern = "1100101";
    let inverted: String = pattern
        .chars()
        .map(|c| if c == '1' { '0' } else { '1' })
        .collect();
    assert_eq!(
        generator(pattern).bipolar(),
        generator(&inverted).pseudoternary()
    );
}

#[test]
fn polarity_restarts_on_every_call() {
    let gen = generator("1");
    assert_eq!(per_bit(&gen.bipolar()), vec![5.0]);
    assert_eq!(per_bit(&gen.bipolar()), vec![5.0]);
    assert_eq!(per_bit(&gen.pseudoternary()), vec![0.0]);
}

#[test]
fn differential_manchester_all_zeros_alternates() {
    let wf = generator("00").differential_manchester();
    let halves: Vec<f64> = wf.samples[..8].iter().step_by(2).map(|s| s.voltage).collect();
    assert!(halves.windows(2).all(|w| w[0] == -w[1]));
    assert_eq!(wf.len(), 9);
}

#[test]
fn differential_manchester_transitions_mid_bit_always() {
    let wf = generator("1101001").differential_manchester();
    for bit in wf.samples.chunks(4).filter(|c| c.len() == 4) {
        assert_eq!(bit[1].time, bit[2].time);
        assert_eq!(bit[1].voltage, -bit[2].voltage);
    }
}

#[test]
fn multilevel_reference_pattern() {
    let gen = WaveformGenerator::new(EncodingConfig::new(bits("11111")).with_amplitude(6.0));
    assert_eq!(per_bit(&gen.multilevel(4)), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
}

#[test]
fn multilevel_ones_bounce_just_below_the_top() {
    let gen = WaveformGenerator::new(EncodingConfig::new(vec![true; 10]).with_amplitude(6.0));
    let levels = per_bit(&gen.multilevel(4));
    // Climb to the top, then alternate between it and the step below
    assert_eq!(
        levels,
        vec![-4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 4.0, 6.0, 4.0, 6.0]
    );
}

#[test]
fn multilevel_voltages_stay_on_the_grid() {
    let amplitude = 5.0;
    let mut pattern = vec![true; 40];
    pattern.extend([false, true, false, true, true]);
    let gen = WaveformGenerator::new(EncodingConfig::new(pattern).with_amplitude(amplitude));

    for levels in Levels::ALL {
        let step = amplitude / (levels.count() as f64 - 1.0);
        let wf = gen.generate(Scheme::Multilevel(levels));
        for v in wf.voltages() {
            assert!(
                (-amplitude..=amplitude).contains(&v),
                "{levels:?} produced {v} outside the rails"
            );
            let k = ((v + amplitude) / step).round();
            assert!(
                (v - (-amplitude + k * step)).abs() < 1e-12,
                "{levels:?} produced off-grid level {v}"
            );
        }
        let max = wf.voltages().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max, amplitude, "{levels:?} never reached the top exactly");
    }
}

#[test]
fn multilevel_reports_time_max() {
    let gen = WaveformGenerator::new(EncodingConfig::new(bits("101")).with_symbol_rate(2.0));
    assert_eq!(gen.generate(Scheme::Multilevel(Levels::Two)).time_max, 1.5);
}

#[test]
fn generation_is_idempotent() {
    let gen = WaveformGenerator::new(EncodingConfig::new(hex_to_bits("C0FFEE").unwrap()));
    let before = gen.config().clone();
    for scheme in Scheme::ALL {
        assert_eq!(gen.generate(scheme), gen.generate(scheme), "{scheme}");
    }
    assert_eq!(gen.clock(), gen.clock());
    assert_eq!(gen.config(), &before);
}

#[test]
fn empty_message_yields_empty_waveforms() {
    let gen = generator("");
    assert!(gen.clock().is_empty());
    for scheme in Scheme::ALL {
        assert!(gen.generate(scheme).is_empty(), "{scheme}");
    }
}

#[test]
fn concurrent_generation_from_shared_generator() {
    init();
    let gen = Arc::new(WaveformGenerator::new(EncodingConfig::new(
        hex_to_bits("DEADBEEF").unwrap(),
    )));
    let expected: Vec<Waveform> = Scheme::ALL.iter().map(|&s| gen.generate(s)).collect();

    let handles: Vec<_> = Scheme::ALL
        .iter()
        .map(|&scheme| {
            let gen = Arc::clone(&gen);
            thread::spawn(move || gen.generate(scheme))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
