use std::time::Duration;

use crate::{
    clock::{Shutdown, Sleeper},
    player::{bus::PlayerBus, error::LocateError},
};

pub const PLAYER_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// first registered name in the media player namespace, if any
pub fn find_player(names: &[String]) -> Option<&str> {
    names
        .iter()
        .map(String::as_str)
        .find(|name| name.starts_with(PLAYER_PREFIX))
}

/// Looks up a media player on the bus, retrying until one shows up.
pub struct PlayerLocator {
    retry_interval: Duration,
}

impl PlayerLocator {
    pub fn new(retry_interval: Duration) -> Self {
        Self { retry_interval }
    }

    /// Blocks until a media player is registered.
    ///
    /// Listing failures are not retried. Returns `Cancelled` once `shutdown`
    /// is triggered.
    pub fn locate<B, S>(
        &self,
        bus: &B,
        sleeper: &S,
        shutdown: &Shutdown,
    ) -> Result<String, LocateError>
    where
        B: PlayerBus + ?Sized,
        S: Sleeper + ?Sized,
    {
        loop {
            if shutdown.is_triggered() {
                return Err(LocateError::Cancelled);
            }

            let names = bus.list_names().map_err(LocateError::ListNames)?;
            if let Some(player) = find_player(&names) {
                log::info!("Found media player with name {player}");
                return Ok(player.to_string());
            }

            log::info!(
                "Didn't find a media player, retrying in {} seconds",
                self.retry_interval.as_secs()
            );
            sleeper.sleep(self.retry_interval);
        }
    }
}
