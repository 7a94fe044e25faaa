use rosc::OscType;

use crate::{domain::track::Track, osc::client::OscSink};

pub const TRACK_TITLE: &str = "/squeaknp/track_title";
pub const TRACK_ALBUM: &str = "/squeaknp/track_album";
pub const TRACK_ARTIST: &str = "/squeaknp/track_artist";
pub const ALBUM_ART: &str = "/squeaknp/lastfm_album_art";
pub const TRACK_URL: &str = "/squeaknp/lastfm_url";
pub const END_TIME: &str = "/squeaknp/timeline_end_time";
pub const POSITION: &str = "/squeaknp/timeline_position";

/// the messages describing `track`, in the order they are sent
pub fn track_messages(track: &Track) -> [(&'static str, OscType); 7] {
    [
        (TRACK_TITLE, OscType::String(track.title.clone())),
        (TRACK_ALBUM, OscType::String(track.album.clone())),
        (TRACK_ARTIST, OscType::String(track.artist.clone())),
        (ALBUM_ART, OscType::String(track.artwork_url.clone())),
        (TRACK_URL, OscType::String(track.track_url.clone())),
        (END_TIME, OscType::Float(track.duration_ms as f32)),
        (POSITION, OscType::Float(track.position_ms as f32)),
    ]
}

/// Sends the whole track. Failed sends are logged and skipped.
pub fn forward<O: OscSink + ?Sized>(track: &Track, sink: &O) {
    for (address, arg) in track_messages(track) {
        if let Err(e) = sink.send(address, arg) {
            log::debug!("Failed sending {address}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::osc::error::SendError;

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<(String, OscType)>>,
        fail_on: Option<&'static str>,
    }

    impl OscSink for RecordingSink {
        fn send(&self, address: &str, arg: OscType) -> Result<(), SendError> {
            if self.fail_on == Some(address) {
                return Err(SendError::Socket(std::io::Error::other("refused")));
            }
            self.sent.borrow_mut().push((address.to_string(), arg));
            Ok(())
        }
    }

    fn mock_track() -> Track {
        Track {
            title: "Song A".into(),
            album: "Album A".into(),
            artist: "Artist 1".into(),
            artwork_url: "https://img/a.png".into(),
            track_url: "https://last.fm/a".into(),
            duration_ms: 180_000,
            position_ms: 1234,
        }
    }

    #[test]
    fn test_forward_sends_all_messages_in_order() {
        let sink = RecordingSink::default();

        forward(&mock_track(), &sink);

        let sent = sink.sent.borrow();
        let addresses: Vec<_> = sent.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(
            addresses,
            vec![
                TRACK_TITLE,
                TRACK_ALBUM,
                TRACK_ARTIST,
                ALBUM_ART,
                TRACK_URL,
                END_TIME,
                POSITION
            ]
        );
        assert_eq!(sent[0].1, OscType::String("Song A".into()));
        assert_eq!(sent[3].1, OscType::String("https://img/a.png".into()));
        assert_eq!(sent[5].1, OscType::Float(180_000.0));
        assert_eq!(sent[6].1, OscType::Float(1234.0));
    }

    #[test]
    fn test_forward_sends_empty_track() {
        let sink = RecordingSink::default();

        forward(&Track::default(), &sink);

        let sent = sink.sent.borrow();
        assert_eq!(sent.len(), 7);
        assert_eq!(sent[1].1, OscType::String(String::new()));
        assert_eq!(sent[6].1, OscType::Float(0.0));
    }

    #[test]
    fn test_forward_continues_after_failed_send() {
        let sink = RecordingSink {
            fail_on: Some(ALBUM_ART),
            ..Default::default()
        };

        forward(&mock_track(), &sink);

        let sent = sink.sent.borrow();
        assert_eq!(sent.len(), 6);
        assert!(sent.iter().all(|(a, _)| a != ALBUM_ART));
        assert_eq!(sent.last().map(|(a, _)| a.as_str()), Some(POSITION));
    }
}
