//! Transaction pool and fee estimation.

pub trait TransactionPool: Send + Sync {
    /// Number of transactions in the pool.
    fn size(&self) -> usize;

    /// Sum of the serialized sizes of every pooled transaction.
    fn total_bytes(&self) -> usize;
}

pub trait FeeEstimator: Send + Sync {
    /// Write the estimator state to disk.
    fn flush(&self);
}
