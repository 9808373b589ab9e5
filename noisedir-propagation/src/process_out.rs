use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, PoisonError,
    },
    time::Duration,
};

use crate::{PropagationResultPtRecord, PropagationResultTriRecord, ResultSink};

/// Minimal computation time before any report.
const UNSET: u64 = u64::MAX;

fn as_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).map_or(UNSET - 1, |v| v.min(UNSET - 1))
}

/// Thread-safe accumulator of propagation results and statistics.
///
/// Every method takes `&self` and is atomic with respect to the others, so a single instance can be
/// shared between all workers of a computation.
#[derive(Debug)]
pub struct PropagationProcessOut {
    tri_to_driver: Mutex<Vec<PropagationResultTriRecord>>,
    pt_to_driver: Mutex<Vec<PropagationResultPtRecord>>,
    nb_couple_receiver_src: AtomicU64,
    nb_obstr_test: AtomicU64,
    nb_image_receiver: AtomicU64,
    nb_reflexion_path: AtomicU64,
    nb_diffraction_path: AtomicU64,
    cell_computed: AtomicU64,
    minimal_receiver_computation_time: AtomicU64,
    maximal_receiver_computation_time: AtomicU64,
    sum_receiver_computation_time: AtomicU64,
}

impl Default for PropagationProcessOut {
    fn default() -> Self {
        Self::new()
    }
}

impl PropagationProcessOut {
    /// Creates a new empty [`PropagationProcessOut`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tri_to_driver: Mutex::new(Vec::new()),
            pt_to_driver: Mutex::new(Vec::new()),
            nb_couple_receiver_src: AtomicU64::new(0),
            nb_obstr_test: AtomicU64::new(0),
            nb_image_receiver: AtomicU64::new(0),
            nb_reflexion_path: AtomicU64::new(0),
            nb_diffraction_path: AtomicU64::new(0),
            cell_computed: AtomicU64::new(0),
            minimal_receiver_computation_time: AtomicU64::new(UNSET),
            maximal_receiver_computation_time: AtomicU64::new(0),
            sum_receiver_computation_time: AtomicU64::new(0),
        }
    }

    /// Removes and returns the collected point records, in the order they were recorded.
    pub fn take_point_records(&self) -> Vec<PropagationResultPtRecord> {
        let records = std::mem::take(
            &mut *self
                .pt_to_driver
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        tracing::debug!("{} point records taken.", records.len());
        records
    }

    /// Removes and returns the collected triangle records, in the order they were recorded.
    pub fn take_triangle_records(&self) -> Vec<PropagationResultTriRecord> {
        let records = std::mem::take(
            &mut *self
                .tri_to_driver
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        tracing::debug!("{} triangle records taken.", records.len());
        records
    }

    /// Forwards a message of a worker to the `tracing` subscriber.
    pub fn log(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    /// Adds `count` receiver-source couples.
    pub fn append_source_count(&self, count: u64) {
        self.nb_couple_receiver_src
            .fetch_add(count, Ordering::Relaxed);
    }

    /// Returns the number of receiver-source couples.
    #[must_use]
    pub fn nb_couple_receiver_src(&self) -> u64 {
        self.nb_couple_receiver_src.load(Ordering::Relaxed)
    }

    /// Adds `count` free field tests.
    pub fn append_free_field_test_count(&self, count: u64) {
        self.nb_obstr_test.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns the number of free field (obstruction) tests.
    #[must_use]
    pub fn nb_obstr_test(&self) -> u64 {
        self.nb_obstr_test.load(Ordering::Relaxed)
    }

    /// Adds `count` image receivers.
    pub fn append_image_receiver(&self, count: u64) {
        self.nb_image_receiver.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns the number of image receivers.
    #[must_use]
    pub fn nb_image_receiver(&self) -> u64 {
        self.nb_image_receiver.load(Ordering::Relaxed)
    }

    /// Adds `count` reflection paths.
    pub fn append_reflexion_path(&self, count: u64) {
        self.nb_reflexion_path.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns the number of reflection paths.
    #[must_use]
    pub fn nb_reflexion_path(&self) -> u64 {
        self.nb_reflexion_path.load(Ordering::Relaxed)
    }

    /// Adds `count` diffraction paths.
    pub fn append_diffraction_path(&self, count: u64) {
        self.nb_diffraction_path.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns the number of diffraction paths.
    #[must_use]
    pub fn nb_diffraction_path(&self) -> u64 {
        self.nb_diffraction_path.load(Ordering::Relaxed)
    }

    /// Increments the computed cell counter by 1.
    pub fn append_cell_computed(&self) {
        self.cell_computed.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of computed cells.
    #[must_use]
    pub fn cell_computed(&self) -> u64 {
        self.cell_computed.load(Ordering::Relaxed)
    }

    /// Adds `time` to the total receiver computation time, saturating on overflow.
    pub fn add_sum_receiver_computation_time(&self, time: Duration) {
        let time = as_nanos(time);
        let _ = self.sum_receiver_computation_time.fetch_update(
            Ordering::Relaxed,
            Ordering::Relaxed,
            |sum| Some(sum.saturating_add(time)),
        );
    }

    /// Returns the total receiver computation time.
    #[must_use]
    pub fn sum_receiver_computation_time(&self) -> Duration {
        Duration::from_nanos(self.sum_receiver_computation_time.load(Ordering::Relaxed))
    }

    /// Lowers the minimal receiver computation time to `time` if it is shorter.
    pub fn update_minimal_receiver_computation_time(&self, time: Duration) {
        self.minimal_receiver_computation_time
            .fetch_min(as_nanos(time), Ordering::Relaxed);
    }

    /// Returns the minimal receiver computation time, or `None` if none has been reported.
    #[must_use]
    pub fn minimal_receiver_computation_time(&self) -> Option<Duration> {
        match self.minimal_receiver_computation_time.load(Ordering::Relaxed) {
            UNSET => None,
            v => Some(Duration::from_nanos(v)),
        }
    }

    /// Raises the maximal receiver computation time to `time` if it is longer.
    pub fn update_maximal_receiver_computation_time(&self, time: Duration) {
        self.maximal_receiver_computation_time
            .fetch_max(as_nanos(time), Ordering::Relaxed);
    }

    /// Returns the maximal receiver computation time.
    #[must_use]
    pub fn maximal_receiver_computation_time(&self) -> Duration {
        Duration::from_nanos(self.maximal_receiver_computation_time.load(Ordering::Relaxed))
    }
}

impl ResultSink<PropagationResultPtRecord> for PropagationProcessOut {
    fn record_result(&self, record: PropagationResultPtRecord) {
        self.pt_to_driver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl ResultSink<PropagationResultTriRecord> for PropagationProcessOut {
    fn record_result(&self, record: PropagationResultTriRecord) {
        self.tri_to_driver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
