//! Audio playback state.

use crate::format::format_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub playing: bool,
    /// Seconds.
    pub current_time: f64,
    /// Seconds; 0 until metadata loads.
    pub duration: f64,
    /// 0.0 to 1.0.
    pub volume: f64,
    pub muted: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
        }
    }
}

impl Playback {
    /// Flip between playing and paused; returns the new state.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn time_update(&mut self, seconds: f64) {
        self.current_time = seconds.max(0.0);
    }

    pub fn loaded_metadata(&mut self, duration: f64) {
        self.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
    }

    /// Playback reached the end: stop and rewind.
    pub fn ended(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
    }

    pub fn seek(&mut self, seconds: f64) {
        self.current_time = seconds.clamp(0.0, self.duration.max(0.0));
    }

    /// Setting the volume to zero counts as muting.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.muted = self.volume == 0.0;
    }

    /// Muting drops the volume to zero; unmuting restores full volume.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.volume = if self.muted { 0.0 } else { 1.0 };
    }

    pub fn volume_level(&self) -> VolumeLevel {
        if self.muted || self.volume == 0.0 {
            VolumeLevel::Muted
        } else if self.volume < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }

    /// Source changed: stop and forget position and duration. Volume stays.
    pub fn reset(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
    }

    pub fn elapsed_label(&self) -> String {
        format_duration(Some(self.current_time))
    }

    pub fn duration_label(&self) -> String {
        format_duration(Some(self.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_pause_and_end() {
        let mut p = Playback::default();
        assert!(p.toggle_play());
        p.loaded_metadata(90.0);
        p.time_update(42.0);
        assert_eq!(p.elapsed_label(), "0:42");
        assert_eq!(p.duration_label(), "1:30");
        p.ended();
        assert!(!p.playing);
        assert_eq!(p.current_time, 0.0);
        assert_eq!(p.elapsed_label(), "");
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let mut p = Playback::default();
        p.loaded_metadata(30.0);
        p.seek(45.0);
        assert_eq!(p.current_time, 30.0);
        p.seek(-3.0);
        assert_eq!(p.current_time, 0.0);
    }

    #[test]
    fn volume_and_mute() {
        let mut p = Playback::default();
        assert_eq!(p.volume_level(), VolumeLevel::High);
        p.set_volume(0.3);
        assert_eq!(p.volume_level(), VolumeLevel::Low);
        p.set_volume(0.0);
        assert!(p.muted);
        assert_eq!(p.volume_level(), VolumeLevel::Muted);

        p.toggle_mute();
        assert!(!p.muted);
        assert_eq!(p.volume, 1.0);
        p.toggle_mute();
        assert_eq!(p.volume, 0.0);
    }

    #[test]
    fn reset_keeps_volume() {
        let mut p = Playback::default();
        p.set_volume(0.4);
        p.toggle_play();
        p.loaded_metadata(10.0);
        p.time_update(5.0);
        p.reset();
        assert_eq!(p, Playback { volume: 0.4, ..Playback::default() });
    }

    #[test]
    fn infinite_duration_is_unknown() {
        let mut p = Playback::default();
        p.loaded_metadata(f64::INFINITY);
        assert_eq!(p.duration, 0.0);
    }
}
