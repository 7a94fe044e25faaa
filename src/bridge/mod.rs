//! The poll, diff and forward loop

use std::time::Duration;

use thiserror::Error;

use crate::{
    clock::{Shutdown, Sleeper},
    domain::track::Track,
    lastfm::{client::TrackInfoSource, resolver::ArtworkResolver},
    osc::{client::OscSink, forward::forward},
    player::{
        bus::PlayerBus,
        error::{ExtractError, LocateError},
        locator::PlayerLocator,
        snapshot::extract,
    },
};

pub mod tracker;

use tracker::ChangeTracker;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Locate(#[from] LocateError),
}

/// What a single tick did
#[derive(Debug, PartialEq)]
pub enum Tick {
    /// the track was sent to the receiver
    Forwarded { changed: bool, track: Track },
    /// the player stopped answering and has to be looked up again
    PlayerLost,
}

/// Owns every collaborator and the state carried between ticks
pub struct Bridge<B, S, O, C> {
    bus: B,
    resolver: Option<ArtworkResolver<S>>,
    sink: O,
    sleeper: C,
    locator: PlayerLocator,
    update_rate: Duration,
    player: Option<String>,
    tracker: ChangeTracker,
}

impl<B, S, O, C> Bridge<B, S, O, C>
where
    B: PlayerBus,
    S: TrackInfoSource,
    O: OscSink,
    C: Sleeper,
{
    /// `resolver` is `None` when artwork lookup is disabled
    pub fn new(
        bus: B,
        resolver: Option<ArtworkResolver<S>>,
        sink: O,
        sleeper: C,
        locator: PlayerLocator,
        update_rate: Duration,
    ) -> Self {
        Self {
            bus,
            resolver,
            sink,
            sleeper,
            locator,
            update_rate,
            player: None,
            tracker: ChangeTracker::new(),
        }
    }

    /// Runs until `shutdown` is triggered.
    ///
    /// Only a failure to list bus names ends the loop with an error.
    pub fn run(&mut self, shutdown: &Shutdown) -> Result<(), BridgeError> {
        loop {
            if shutdown.is_triggered() {
                log::info!("Shutting down");
                return Ok(());
            }

            let player = match self.player.clone() {
                Some(player) => player,
                None => match self.locator.locate(&self.bus, &self.sleeper, shutdown) {
                    Ok(player) => {
                        self.player = Some(player.clone());
                        player
                    }
                    Err(LocateError::Cancelled) => {
                        log::info!("Shutting down while looking for a media player");
                        return Ok(());
                    }
                    Err(e) => return Err(e.into()),
                },
            };

            // a lost player is relocated on the next pass, after the usual pause
            self.tick(&player);
            self.sleeper.sleep(self.update_rate);
        }
    }

    /// One poll of the player: snapshot, diff, optional lookup, forward.
    pub fn tick(&mut self, player: &str) -> Tick {
        let snapshot = match extract(&self.bus, player) {
            Ok(track) => track,
            Err(ExtractError::PropertyUnavailable(e)) => {
                log::info!("Failed getting current track, {player} has probably been closed: {e}");
                self.player = None;
                self.tracker.reset();
                return Tick::PlayerLost;
            }
        };

        let (changed, mut current) = self.tracker.observe(snapshot);

        if changed {
            log::info!("Track changed: {current}");
            self.lookup_artwork(&mut current);
        }

        forward(&current, &self.sink);
        log::debug!(
            "Forwarded {} at {}/{} ms",
            current.title,
            current.position_ms,
            current.duration_ms
        );

        self.tracker.commit(current.clone());
        Tick::Forwarded {
            changed,
            track: current,
        }
    }

    fn lookup_artwork(&self, track: &mut Track) {
        let Some(resolver) = &self.resolver else {
            return;
        };
        if track.title.is_empty() {
            log::debug!("Nothing is playing, skipping artwork lookup");
            return;
        }

        let resolved = resolver.resolve(&track.title, &track.album, &track.artist);
        if resolved.artwork_url.is_empty() {
            log::info!("No artwork found for {}", track.title);
        } else {
            log::info!("Updated artwork to {}", resolved.artwork_url);
        }
        track.artwork_url = resolved.artwork_url;
        track.track_url = resolved.track_url;
    }
}
