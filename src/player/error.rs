use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("d-bus error: {0}")]
    DBus(#[from] zbus::Error),

    #[error("d-bus call failed: {0}")]
    Call(#[from] zbus::fdo::Error),

    #[error("invalid d-bus name: {0}")]
    Name(#[from] zbus::names::Error),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    /// the metadata property could not be read, the player has probably gone away
    #[error("metadata property unavailable: {0}")]
    PropertyUnavailable(#[source] BusError),
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("failed to list d-bus names: {0}")]
    ListNames(#[source] BusError),

    #[error("player search cancelled")]
    Cancelled,
}
