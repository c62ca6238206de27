//! Card window for the interactive picker
//!
//! Owns the `minifb` window, renders the card with click markers, and
//! translates raw input into [`PickerEvent`] values. At most one event is
//! delivered per poll so a terminal event can never overtake a click from
//! the same iteration; when both arrive together the click is delivered
//! first and the key is picked up on the next poll.
//!
//! Markers are composited into a presentation buffer rebuilt every frame.
//! The [`CardImage`] itself stays untouched, which is what lets the picker
//! sample pristine pixels under a marker.
//!
//! Bindings: left click = pick, `S` = save, `Q` = cancel, `R` = reset,
//! closing the window = cancel.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::card::CardImage;
use crate::constants::picker::{MARKER_RADIUS, MARKER_RGB, TARGET_FPS};
use crate::error::{ExtractionError, Result};
use crate::sampling::{PickerEvent, PickerSession, RawSample};

/// Render the card plus a filled circle marker per click position
///
/// Pure function into a fresh 0RGB buffer; marker circles are clipped at
/// the image edges.
pub fn compose_frame(image: &CardImage, markers: &[(u32, u32)]) -> Vec<u32> {
    let mut frame = image.to_display_buffer();
    let color = (u32::from(MARKER_RGB.0) << 16)
        | (u32::from(MARKER_RGB.1) << 8)
        | u32::from(MARKER_RGB.2);
    let radius = i64::from(MARKER_RADIUS);

    for &(mx, my) in markers {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let x = i64::from(mx) + dx;
                let y = i64::from(my) + dy;
                if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height())
                {
                    continue;
                }
                frame[y as usize * image.width() as usize + x as usize] = color;
            }
        }
    }

    frame
}

/// A `minifb` window sized 1:1 to the card, with edge-triggered clicks
pub struct CardWindow {
    window: Window,
    width: usize,
    height: usize,
    mouse_was_down: bool,
}

impl CardWindow {
    /// Open a window matching the card dimensions
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Display`] when no window can be created,
    /// typically on a headless machine.
    pub fn open(title: &str, image: &CardImage) -> Result<Self> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| ExtractionError::display("Could not open the card window", e))?;
        window.set_target_fps(TARGET_FPS);

        Ok(Self {
            window,
            width,
            height,
            mouse_was_down: false,
        })
    }

    /// Push one composed frame to the screen
    ///
    /// This also pumps the window's input state, so it must run every
    /// iteration even when nothing changed.
    pub fn present(&mut self, frame: &[u32]) -> Result<()> {
        self.window
            .update_with_buffer(frame, self.width, self.height)
            .map_err(|e| ExtractionError::display("Could not update the card window", e))
    }

    /// Translate current input into at most one picker event
    ///
    /// Clicks are edge-triggered on the left button and take priority over
    /// keys registered in the same iteration. A closed window reads as
    /// cancel.
    pub fn poll_event(&mut self) -> Option<PickerEvent> {
        if !self.window.is_open() {
            return Some(PickerEvent::Cancel);
        }

        let mouse_down = self.window.get_mouse_down(MouseButton::Left);
        let clicked = mouse_down && !self.mouse_was_down;
        self.mouse_was_down = mouse_down;
        if clicked {
            if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Clamp) {
                return Some(PickerEvent::Click {
                    x: mx as u32,
                    y: my as u32,
                });
            }
        }

        if self.window.is_key_pressed(Key::S, KeyRepeat::No) {
            return Some(PickerEvent::Save);
        }
        if self.window.is_key_pressed(Key::Q, KeyRepeat::No) {
            return Some(PickerEvent::Cancel);
        }
        if self.window.is_key_pressed(Key::R, KeyRepeat::No) {
            return Some(PickerEvent::Reset);
        }

        None
    }
}

/// Run a full interactive picking session over `image`
///
/// Blocks the calling thread until the user saves, cancels, or closes the
/// window.
///
/// # Errors
///
/// - [`ExtractionError::Display`] if the window cannot be created or updated
/// - [`ExtractionError::PickerCancelled`] if the session ends without a save
pub fn run_picker(image: &CardImage, half_width: u32) -> Result<Vec<RawSample>> {
    let mut session = PickerSession::new(image, half_width);
    let mut window = CardWindow::open("Color Card", image)?;

    while !session.is_finished() {
        let frame = compose_frame(image, session.markers());
        window.present(&frame)?;
        if let Some(event) = window.poll_event() {
            session.handle_event(event);
        }
    }

    session.into_samples()
}
