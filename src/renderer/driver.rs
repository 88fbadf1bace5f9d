use std::time::{Duration, Instant};

use tracing::debug;

use crate::types::playback::PlaybackState;
use crate::types::sprite::FrameSequence;

/// Drives a frame sequence from wall-clock time.
///
/// The UI polls `update` with the current instant; every whole tick
/// interval that has elapsed becomes one frame advance, and the
/// remainder is banked toward the next tick. Arming and disarming the
/// tick clock is the entire start/stop story; everything runs on the UI
/// thread.
pub struct SpriteDriver {
    frames: FrameSequence,
    playback: PlaybackState,
    last_tick: Option<Instant>,
}

impl SpriteDriver {
    pub fn new(frames: FrameSequence, fps: u32) -> Self {
        SpriteDriver {
            frames,
            playback: PlaybackState::new(fps),
            last_tick: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing
    }

    pub fn fps(&self) -> u32 {
        self.playback.fps
    }

    pub fn current_frame(&self) -> usize {
        self.playback.current_frame
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    pub fn play(&mut self, now: Instant) {
        if self.playback.is_playing {
            return;
        }
        self.playback.is_playing = true;
        self.last_tick = Some(now);
        debug!(fps = self.playback.fps, "playback started");
    }

    /// Stops ticking. The current frame stays where it is, so resuming
    /// picks up mid-cycle.
    pub fn pause(&mut self) {
        if !self.playback.is_playing {
            return;
        }
        self.playback.is_playing = false;
        self.last_tick = None;
        debug!(frame = self.playback.current_frame, "playback paused");
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.playback.is_playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Changes the playback rate. Later ticks use the new interval; the
    /// current frame is untouched.
    pub fn set_fps(&mut self, fps: u32) {
        self.playback.set_fps(fps);
    }

    /// Swaps in a freshly loaded sequence. Playback stops and the next
    /// run starts from the first frame.
    pub fn replace_frames(&mut self, frames: FrameSequence) {
        self.pause();
        self.playback.current_frame = 0;
        self.frames = frames;
    }

    /// Advances once per whole interval elapsed since the last tick.
    /// Returns the number of steps taken.
    pub fn update(&mut self, now: Instant) -> usize {
        if !self.playback.is_playing {
            return 0;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return 0;
        };

        let interval = self.playback.interval();
        let mut tick_time = last;
        let mut ticks = 0;
        while now.duration_since(tick_time) >= interval {
            tick_time += interval;
            self.playback.advance(self.frames.len());
            ticks += 1;
        }
        if ticks > 0 {
            self.last_tick = Some(tick_time);
        }
        ticks
    }

    /// Time until the next frame is due. `None` while stopped.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        if !self.playback.is_playing {
            return None;
        }
        let last = self.last_tick?;
        let deadline = last + self.playback.interval();
        Some(deadline.saturating_duration_since(now))
    }
}
