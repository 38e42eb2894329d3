/// Background task scheduler shared by every subsystem that needs deferred or
/// periodic work.
pub trait Scheduler: Send + Sync {
    /// Number of tasks queued and not yet run.
    fn pending_tasks(&self) -> usize;

    /// Stop the service thread. Queued tasks are discarded.
    fn stop(&self);
}
