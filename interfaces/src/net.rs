//! Networking subsystems: address book, connection manager, peer manager and
//! ban list.

/// Address-book manager (known peer addresses).
pub trait AddressBook: Send + Sync {
    /// Number of addresses currently known.
    fn size(&self) -> usize;
}

/// Owns sockets and the connection threads.
pub trait ConnectionManager: Send + Sync {
    /// Number of currently connected peers.
    fn node_count(&self) -> usize;

    /// Ask the network threads to wind down. Must not block.
    fn interrupt(&self);

    /// Join the network threads and close every connection.
    fn stop(&self);
}

/// Message processing for connected peers.
pub trait PeerManager: Send + Sync {
    fn interrupt(&self);
}

pub trait BanManager: Send + Sync {
    fn banned_count(&self) -> usize;

    /// Persist the ban list.
    fn dump(&self);
}
