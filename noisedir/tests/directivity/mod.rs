use std::{
    f64::consts::{FRAC_PI_2, FRAC_PI_4},
    sync::Arc,
};

use itertools::Itertools;
use noisedir::prelude::*;
use rand::prelude::*;

const FREQUENCIES: [f64; 3] = [100., 200., 400.];

fn quarter_sphere(attenuation: impl Fn(f64, f64) -> [f64; 3]) -> DiscreteDirectivity {
    let mut directivity = DiscreteDirectivity::new(0, FREQUENCIES).unwrap();
    [0., FRAC_PI_2]
        .into_iter()
        .cartesian_product([0., FRAC_PI_2])
        .for_each(|(theta, phi)| {
            directivity
                .insert_record(theta, phi, attenuation(theta, phi))
                .unwrap();
        });
    directivity
}

/// Grid every 15° over the upper hemisphere with a cardioid-like pattern.
fn hemisphere() -> DiscreteDirectivity {
    let mut directivity = DiscreteDirectivity::new(7, FREQUENCIES).unwrap();
    directivity
        .insert_records(
            (0..=6)
                .map(|i| (i as f64 * 15.) * deg)
                .cartesian_product((0..24).map(|j| (j as f64 * 15.) * deg))
                .map(|(theta, phi)| {
                    let base = -10. * (1. - phi.radian().cos()) / 2.;
                    DirectivityRecord::from_angles(
                        theta,
                        phi,
                        [base, 2. * base, 3. * base - theta.degree() / 30.],
                    )
                }),
        )
        .unwrap();
    directivity
}

#[test]
fn constant_cell_bilinear() {
    let directivity = quarter_sphere(|_, _| [10.; 3]);
    approx::assert_abs_diff_eq!(
        10.,
        directivity.attenuation(200., FRAC_PI_4, FRAC_PI_4),
        epsilon = 1e-6
    );
}

#[rstest::rstest]
#[case(0, 150.)]
#[case(0, 100.)]
#[case(1, 160.)]
#[case(1, 200.)]
#[case(2, 350.)]
#[case(2, 16000.)]
fn frequency_column(#[case] expected: usize, #[case] frequency: f64) {
    let directivity = quarter_sphere(|_, _| [1., 2., 3.]);
    directivity.records_theta().for_each(|r| {
        assert_eq!(
            (expected + 1) as f64,
            directivity
                .record(r.theta(), r.phi(), InterpolationMethod::Nearest)
                .attenuation()[directivity.frequency_axis().index_of(frequency)]
        );
    });
    assert_eq!(expected, directivity.frequency_axis().index_of(frequency));
}

#[test]
fn no_cell_is_silent() -> anyhow::Result<()> {
    let mut directivity = DiscreteDirectivity::new(0, FREQUENCIES)?;
    directivity.insert_record(0., 0., [5.; 3])?;
    directivity.insert_record(0.5, 1., [5.; 3])?;
    directivity.insert_record(1., 2., [5.; 3])?;

    let attenuation = directivity.attenuation_array(&FREQUENCIES, 0.6, 0.3);
    assert_eq!(vec![0.; FREQUENCIES.len()], attenuation);
    assert_eq!(0., directivity.attenuation(400., 0.6, 0.3));
    Ok(())
}

#[test]
fn nearest_round_trip() {
    let mut directivity = hemisphere();
    directivity.set_interpolation_method(InterpolationMethod::Nearest);
    directivity.records_theta().for_each(|r| {
        assert_eq!(
            r.attenuation().to_vec(),
            directivity.attenuation_array(&FREQUENCIES, r.phi(), r.theta())
        );
    });
}

#[test]
fn bilinear_at_samples() {
    let directivity = hemisphere();
    directivity.records_phi().for_each(|r| {
        directivity
            .attenuation_array(&FREQUENCIES, r.phi(), r.theta())
            .iter()
            .zip(r.attenuation())
            .for_each(|(&a, &e)| approx::assert_abs_diff_eq!(e, a, epsilon = 1e-9));
    });
}

#[test]
fn duplicate_keeps_first() -> anyhow::Result<()> {
    let mut directivity = quarter_sphere(|_, _| [1.; 3]);
    directivity.set_interpolation_method(InterpolationMethod::Nearest);
    directivity.insert_record(0., 0., [9.; 3])?;
    assert_eq!(4, directivity.len());
    assert_eq!(1., directivity.attenuation(100., 0., 0.));
    Ok(())
}

#[test]
fn orderings_agree() {
    let directivity = hemisphere();
    let mut by_theta = directivity.records_theta().cloned().collect::<Vec<_>>();
    let by_phi = directivity.records_phi().cloned().collect::<Vec<_>>();
    assert_eq!(7 * 24, by_theta.len());

    assert!(by_theta
        .iter()
        .tuple_windows()
        .all(|(a, b)| (a.theta(), a.phi()) < (b.theta(), b.phi())));
    assert!(by_phi
        .iter()
        .tuple_windows()
        .all(|(a, b)| (a.phi(), a.theta()) < (b.phi(), b.theta())));

    by_theta.sort_by(|a, b| a.phi().total_cmp(&b.phi()).then(a.theta().total_cmp(&b.theta())));
    assert_eq!(by_phi, by_theta);
}

#[test]
fn shared_between_threads() {
    let directivity = Arc::new(hemisphere());

    let mut rng = rand::rng();
    let queries = (0..4000)
        .map(|_| {
            (
                rng.random_range(0.0..std::f64::consts::TAU),
                rng.random_range(0.0..FRAC_PI_2),
            )
        })
        .collect::<Vec<_>>();
    let expected = queries
        .iter()
        .map(|&(phi, theta)| directivity.attenuation_array(&FREQUENCIES, phi, theta))
        .collect::<Vec<_>>();

    let handles = queries
        .chunks(500)
        .map(|chunk| {
            let directivity = Arc::clone(&directivity);
            let chunk = chunk.to_vec();
            std::thread::spawn(move || {
                chunk
                    .into_iter()
                    .map(|(phi, theta)| directivity.attenuation_array(&FREQUENCIES, phi, theta))
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();
    let actual = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(expected, actual);
    assert_eq!(expected, directivity.attenuation_batch(&FREQUENCIES, &queries));
}

#[test]
fn interpolation_code() -> anyhow::Result<()> {
    let option = DirectivityOption {
        interpolation: InterpolationMethod::try_from(0u8)?,
    };
    let directivity = DiscreteDirectivity::with_option(0, FREQUENCIES, option)?;
    assert_eq!(
        InterpolationMethod::Nearest,
        directivity.interpolation_method()
    );
    assert_eq!(
        Err(DirectivityError::UnknownInterpolationMethod(3)),
        InterpolationMethod::try_from(3u8)
    );
    Ok(())
}
