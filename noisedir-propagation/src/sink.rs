/// A destination for results computed concurrently by propagation workers.
///
/// Implementations must be safe to call from any number of threads at once.
pub trait ResultSink<R>: Send + Sync {
    /// Stores `record`.
    fn record_result(&self, record: R);
}
