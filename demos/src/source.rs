use noisedir::prelude::*;

pub const FREQUENCIES: [f64; 8] = [63., 125., 250., 500., 1000., 2000., 4000., 8000.];

/// Directivity of a source radiating mostly to the front, sampled every 15°.
///
/// The rear attenuation grows with frequency, and looking down towards the ground attenuates by
/// another 3 dB.
pub fn train_directivity() -> anyhow::Result<DiscreteDirectivity> {
    let mut directivity = DiscreteDirectivity::new(1, FREQUENCIES)?;
    directivity.insert_records((-5..=6).flat_map(|i| {
        let theta = (i * 15) as f64 * deg;
        (0..24).map(move |j| {
            let phi = (j * 15) as f64 * deg;
            let rear = (1. - phi.radian().cos()) / 2.;
            let ground = if theta.radian() < 0. { -3. } else { 0. };
            DirectivityRecord::from_angles(
                theta,
                phi,
                FREQUENCIES.map(|f| ground - rear * 4. * (f / 63.).log2()),
            )
        })
    }))?;
    tracing::info!(
        "Directivity {} loaded with {} records.",
        directivity.direction_identifier(),
        directivity.len()
    );
    Ok(directivity)
}
