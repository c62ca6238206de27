//! Interactive point-and-click sampling
//!
//! The picker is an explicit state machine fed with [`PickerEvent`] values,
//! so the whole session logic runs and tests without a live window. The
//! display layer (see [`crate::display`]) owns the window and translates
//! real input into these events.
//!
//! A session starts `Active` and ends in one of two terminal states:
//! saved (the accumulated samples are the output, possibly zero of them)
//! or cancelled (no output at all). Events arriving after a terminal
//! state are ignored.
//!
//! Clicks always sample the pristine card image. Markers shown over
//! previous clicks live only in the display layer's presentation buffer
//! and can never bleed into a sample.

use tracing::{debug, info};

use crate::card::CardImage;
use crate::error::{ExtractionError, Result};
use crate::sampling::{RawSample, SamplePosition};

/// One unit of user input delivered to a [`PickerSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Left click at image coordinates
    Click { x: u32, y: u32 },
    /// Finish the session and keep the accumulated samples
    Save,
    /// Finish the session and discard everything
    Cancel,
    /// Discard the accumulated samples, stay active
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Saved,
    Cancelled,
}

/// An in-progress manual sampling session over one card image
pub struct PickerSession<'a> {
    image: &'a CardImage,
    half_width: u32,
    samples: Vec<RawSample>,
    markers: Vec<(u32, u32)>,
    state: SessionState,
}

impl<'a> PickerSession<'a> {
    /// Start a session over `image`
    ///
    /// # Arguments
    ///
    /// * `image` - Card to sample; never mutated
    /// * `half_width` - Half-width of the square averaging window around
    ///   each click, in pixels
    pub fn new(image: &'a CardImage, half_width: u32) -> Self {
        Self {
            image,
            half_width,
            samples: Vec::new(),
            markers: Vec::new(),
            state: SessionState::Active,
        }
    }

    /// Feed one event into the session
    ///
    /// Clicks append a sample, `Reset` clears the accumulator, `Save` and
    /// `Cancel` finish the session. In a terminal state every event is a
    /// no-op.
    pub fn handle_event(&mut self, event: PickerEvent) {
        if self.state != SessionState::Active {
            debug!("Ignoring {:?} after session end", event);
            return;
        }
        match event {
            PickerEvent::Click { x, y } => self.record_click(x, y),
            PickerEvent::Save => {
                info!("Saving {} picked colors", self.samples.len());
                self.state = SessionState::Saved;
            }
            PickerEvent::Cancel => {
                info!("Picking cancelled, discarding {} colors", self.samples.len());
                self.state = SessionState::Cancelled;
            }
            PickerEvent::Reset => {
                info!("Reset, discarding {} colors", self.samples.len());
                self.samples.clear();
                self.markers.clear();
            }
        }
    }

    fn record_click(&mut self, x: u32, y: u32) {
        let x1 = x.saturating_sub(self.half_width);
        let y1 = y.saturating_sub(self.half_width);
        let x2 = x.saturating_add(self.half_width).min(self.image.width());
        let y2 = y.saturating_add(self.half_width).min(self.image.height());

        // A click outside the image has no window to average
        let Some(mean) = self.image.mean_rgb(x1, y1, x2, y2) else {
            debug!("Ignoring click at ({}, {}) outside the image", x, y);
            return;
        };

        info!(
            "Picked color {}: RGB({:.0}, {:.0}, {:.0})",
            self.samples.len() + 1,
            mean[0],
            mean[1],
            mean[2]
        );
        self.markers.push((x, y));
        self.samples.push(RawSample {
            position: SamplePosition::Point { x, y },
            red: mean[0],
            green: mean[1],
            blue: mean[2],
        });
    }

    /// Click positions to draw markers at, in click order
    pub fn markers(&self) -> &[(u32, u32)] {
        &self.markers
    }

    /// Number of samples accumulated so far
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Whether the session reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.state != SessionState::Active
    }

    /// Consume the session and return the saved samples
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::PickerCancelled`] unless the session was
    /// saved. A session abandoned while still active saved nothing and is
    /// treated the same as a cancelled one. An empty saved session is a
    /// success with zero samples, not a cancellation.
    pub fn into_samples(self) -> Result<Vec<RawSample>> {
        match self.state {
            SessionState::Saved => Ok(self.samples),
            SessionState::Active | SessionState::Cancelled => {
                Err(ExtractionError::PickerCancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20x20 card, left half red-ish, right half blue-ish
    fn split_card() -> CardImage {
        let mut data = Vec::with_capacity(20 * 20 * 3);
        for _y in 0..20 {
            for x in 0..20 {
                if x < 10 {
                    data.extend_from_slice(&[250, 10, 10]);
                } else {
                    data.extend_from_slice(&[10, 10, 250]);
                }
            }
        }
        CardImage::from_raw(data, 20, 20).unwrap()
    }

    #[test]
    fn test_clicks_accumulate_in_order() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);

        session.handle_event(PickerEvent::Click { x: 5, y: 10 });
        session.handle_event(PickerEvent::Click { x: 15, y: 10 });
        session.handle_event(PickerEvent::Save);

        let samples = session.into_samples().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].channels(), [250.0, 10.0, 10.0]);
        assert_eq!(samples[1].channels(), [10.0, 10.0, 250.0]);
        assert_eq!(samples[0].position, SamplePosition::Point { x: 5, y: 10 });
    }

    #[test]
    fn test_corner_click_clips_window() {
        let image = CardImage::filled(10, 10, [33, 66, 99]);
        let mut session = PickerSession::new(&image, 10);

        session.handle_event(PickerEvent::Click { x: 0, y: 0 });
        session.handle_event(PickerEvent::Save);

        let samples = session.into_samples().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].channels(), [33.0, 66.0, 99.0]);
    }

    #[test]
    fn test_save_without_clicks_is_empty_success() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 10);
        session.handle_event(PickerEvent::Save);

        let samples = session.into_samples().unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_cancel_discards_clicks() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);
        session.handle_event(PickerEvent::Click { x: 5, y: 5 });
        session.handle_event(PickerEvent::Cancel);

        assert!(matches!(
            session.into_samples(),
            Err(ExtractionError::PickerCancelled)
        ));
    }

    #[test]
    fn test_reset_then_click_keeps_only_later_clicks() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);

        session.handle_event(PickerEvent::Click { x: 5, y: 5 });
        session.handle_event(PickerEvent::Click { x: 15, y: 5 });
        session.handle_event(PickerEvent::Reset);
        assert_eq!(session.sample_count(), 0);
        assert!(session.markers().is_empty());

        session.handle_event(PickerEvent::Click { x: 15, y: 15 });
        session.handle_event(PickerEvent::Save);

        let samples = session.into_samples().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].channels(), [10.0, 10.0, 250.0]);
    }

    #[test]
    fn test_terminal_states_ignore_events() {
        let image = split_card();

        let mut saved = PickerSession::new(&image, 2);
        saved.handle_event(PickerEvent::Click { x: 5, y: 5 });
        saved.handle_event(PickerEvent::Save);
        saved.handle_event(PickerEvent::Click { x: 15, y: 5 });
        saved.handle_event(PickerEvent::Cancel);
        assert_eq!(saved.into_samples().unwrap().len(), 1);

        let mut cancelled = PickerSession::new(&image, 2);
        cancelled.handle_event(PickerEvent::Cancel);
        cancelled.handle_event(PickerEvent::Save);
        assert!(cancelled.into_samples().is_err());
    }

    #[test]
    fn test_unfinished_session_saves_nothing() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);
        session.handle_event(PickerEvent::Click { x: 5, y: 5 });

        assert!(!session.is_finished());
        assert!(matches!(
            session.into_samples(),
            Err(ExtractionError::PickerCancelled)
        ));
    }

    #[test]
    fn test_out_of_bounds_click_is_ignored() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);
        session.handle_event(PickerEvent::Click { x: 500, y: 5 });
        assert_eq!(session.sample_count(), 0);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_repeated_clicks_make_repeated_samples() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);
        session.handle_event(PickerEvent::Click { x: 5, y: 5 });
        session.handle_event(PickerEvent::Click { x: 5, y: 5 });
        session.handle_event(PickerEvent::Save);

        let samples = session.into_samples().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], samples[1]);
    }

    #[test]
    fn test_markers_track_click_positions() {
        let image = split_card();
        let mut session = PickerSession::new(&image, 2);
        session.handle_event(PickerEvent::Click { x: 5, y: 5 });
        session.handle_event(PickerEvent::Click { x: 15, y: 10 });

        assert_eq!(session.markers(), &[(5, 5), (15, 10)]);
    }
}
