use std::{f64::consts::FRAC_PI_2, time::Duration};

use noisedir::prelude::*;

fn receiver_level<S: ResultSink<PropagationResultPtRecord> + ?Sized>(
    sink: &S,
    source: &dyn DirectionAttributes,
    row: usize,
    phi: f64,
) {
    let level = 80. + source.attenuation(200., phi, FRAC_PI_2 / 2.);
    sink.record_result(PropagationResultPtRecord::new(row, 0, level));
}

#[test]
fn directivity_into_sink() -> anyhow::Result<()> {
    let mut directivity = DiscreteDirectivity::new(0, [100., 200., 400.])?;
    directivity.insert_records(
        [0., 90.]
            .into_iter()
            .flat_map(|t| [0., 90., 180., 270.].map(|p| (t, p)))
            .map(|(t, p)| DirectivityRecord::from_angles(t * deg, p * deg, [-6.; 3])),
    )?;

    let out = PropagationProcessOut::new();
    std::thread::scope(|s| {
        (0..4).for_each(|w| {
            let out = &out;
            let directivity = &directivity;
            s.spawn(move || {
                (0..10).for_each(|i| {
                    receiver_level(out, directivity, w * 10 + i, (w * 10 + i) as f64 * 0.1);
                    out.append_source_count(1);
                    out.update_maximal_receiver_computation_time(Duration::from_millis(i as u64));
                });
            });
        });
    });

    let mut records = out.take_point_records();
    assert_eq!(40, records.len());
    assert_eq!(40, out.nb_couple_receiver_src());
    assert_eq!(None, out.minimal_receiver_computation_time());
    assert_eq!(
        Duration::from_millis(9),
        out.maximal_receiver_computation_time()
    );

    records.sort_by_key(|r| r.receiver_record_row());
    records.iter().enumerate().for_each(|(i, r)| {
        assert_eq!(i, r.receiver_record_row());
        approx::assert_abs_diff_eq!(74., r.receiver_level(), epsilon = 1e-9);
    });
    Ok(())
}

#[test]
fn triangle_sink_object() {
    let out = PropagationProcessOut::default();
    let sink: &dyn ResultSink<PropagationResultTriRecord> = &out;
    sink.record_result(PropagationResultTriRecord::new([0, 1, 2], [40., 41., 42.], 7));
    sink.record_result(PropagationResultTriRecord::new([2, 1, 3], [42., 41., 43.], 8));

    let records = out.take_triangle_records();
    assert_eq!(
        vec![7, 8],
        records.iter().map(|r| r.triangle_id()).collect::<Vec<_>>()
    );
    assert_eq!(&[2, 1, 3], records[1].nodes());
    assert!(out.take_point_records().is_empty());
}
