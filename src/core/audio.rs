//! # Audio Transport
//!
//! Seam for future audio playback. Some cards will ship with a guided
//! audio clip; screen code only ever talks to the `AudioTransport` trait,
//! so a real backend can be dropped in without touching the UI.
//!
//! The only implementation today is `NullAudio`, which logs and does
//! nothing.

use log::debug;

pub trait AudioTransport: Send + Sync {
    /// Returns the name of the transport.
    fn name(&self) -> &str;

    /// Start playing the given clip from the beginning.
    /// Must not block; real backends should queue the work.
    fn play(&self, clip_id: &str);

    /// Pause the current clip, keeping its position.
    fn pause(&self);

    /// Jump to `position_secs` within the current clip.
    fn seek(&self, position_secs: u32);
}

/// No-op transport used until a real audio backend exists.
pub struct NullAudio;

impl AudioTransport for NullAudio {
    fn name(&self) -> &str {
        "null"
    }

    fn play(&self, clip_id: &str) {
        debug!("Audio play requested (no backend): {clip_id}");
    }

    fn pause(&self) {
        debug!("Audio pause requested (no backend)");
    }

    fn seek(&self, position_secs: u32) {
        debug!("Audio seek requested (no backend): {position_secs}s");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_null_audio_is_object_safe() {
        let audio: Arc<dyn AudioTransport> = Arc::new(NullAudio);
        assert_eq!(audio.name(), "null");
        audio.play("blau-1-intro");
        audio.pause();
        audio.seek(30);
    }
}
