mod source;

use anyhow::Result;

use noisedir::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut directivity = source::train_directivity()?;

    [InterpolationMethod::Nearest, InterpolationMethod::Bilinear]
        .into_iter()
        .for_each(|method| {
            directivity.set_interpolation_method(method);
            println!("{method:?}");
            println!(
                "{:>8} {}",
                "phi",
                source::FREQUENCIES
                    .iter()
                    .map(|f| format!("{:>8}", format!("{f}Hz")))
                    .collect::<String>()
            );
            (0..=36).map(|i| (i * 5) as f64 * deg).for_each(|phi| {
                let attenuation =
                    directivity.attenuation_array(&source::FREQUENCIES, phi.radian(), 0.2);
                println!(
                    "{:>7.0}° {}",
                    phi.degree(),
                    attenuation
                        .iter()
                        .map(|a| format!("{a:>8.2}"))
                        .collect::<String>()
                );
            });
        });

    let record = directivity.resolve((7.5 * deg).radian(), (100. * deg).radian());
    println!("{}", record.as_ref());

    Ok(())
}
