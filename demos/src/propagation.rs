mod source;

use std::time::Instant;

use anyhow::Result;

use noisedir::prelude::*;

const RECEIVERS: usize = 360;
const WORKERS: usize = 4;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let directivity = source::train_directivity()?;
    let omnidirectional = Omnidirectional::default();
    let sources: [&dyn DirectionAttributes; 2] = [&omnidirectional, &directivity];
    let out = PropagationProcessOut::new();

    std::thread::scope(|s| {
        (0..WORKERS).for_each(|w| {
            let out = &out;
            let sources = &sources;
            s.spawn(move || {
                (w..RECEIVERS).step_by(WORKERS).for_each(|row| {
                    let start = Instant::now();
                    let phi = (row as f64 * deg).radian();
                    let distance = 25. + row as f64 / 10.;
                    let level = w_to_db(
                        sources
                            .iter()
                            .map(|s| {
                                db_to_w(
                                    90. - 20. * distance.log10()
                                        + s.attenuation(source::FREQUENCIES[4], phi, 0.05),
                                )
                            })
                            .sum(),
                    );
                    out.record_result(PropagationResultPtRecord::new(row, w, level));
                    out.append_source_count(sources.len() as u64);
                    let elapsed = start.elapsed();
                    out.add_sum_receiver_computation_time(elapsed);
                    out.update_minimal_receiver_computation_time(elapsed);
                    out.update_maximal_receiver_computation_time(elapsed);
                });
                out.append_cell_computed();
                out.log(&format!("Worker {w} done."));
            });
        });
    });

    let mut records = out.take_point_records();
    records.sort_by_key(|r| r.receiver_record_row());
    records.iter().step_by(30).for_each(|r| {
        println!(
            "receiver {:>3}: {:>6.2} dB",
            r.receiver_record_row(),
            r.receiver_level()
        );
    });
    println!(
        "{} couples in {} cells, receiver time min {:?} / max {:?} / total {:?}",
        out.nb_couple_receiver_src(),
        out.cell_computed(),
        out.minimal_receiver_computation_time(),
        out.maximal_receiver_computation_time(),
        out.sum_receiver_computation_time()
    );

    Ok(())
}
