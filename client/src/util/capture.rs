//! Capture plans and the frame set they produce.
//!
//! DESIGN
//! ======
//! A `CapturePlan` fixes everything about one capture pass: the resolution
//! requested from the camera, the warm-up delay, how many frames to grab,
//! the spacing between grabs, and the JPEG encoding. The browser-side
//! sequencing lives in `util::camera`; this module stays pure so frame
//! counts and data-URL handling are testable off the browser.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use serde::{Deserialize, Serialize};

/// Output size of a captured frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSize {
    /// Use the video element's intrinsic size.
    Native,
    /// Scale each frame into a fixed square/rectangle.
    Fixed { width: u32, height: u32 },
}

/// Parameters of one capture pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapturePlan {
    pub request_width: u32,
    pub request_height: u32,
    pub warmup_ms: u32,
    pub count: usize,
    pub interval_ms: u32,
    pub frame_size: FrameSize,
    pub jpeg_quality: f64,
}

impl CapturePlan {
    /// Voter (and admin) enrollment: 30 frames, 260px, 120ms apart.
    pub const REGISTRATION: Self = Self {
        request_width: 640,
        request_height: 480,
        warmup_ms: 2000,
        count: 30,
        interval_ms: 120,
        frame_size: FrameSize::Fixed { width: 260, height: 260 },
        jpeg_quality: 0.8,
    };

    /// Voter face login: 5 native-size frames, 300ms apart.
    pub const AUTHENTICATION: Self = Self {
        request_width: 320,
        request_height: 320,
        warmup_ms: 1500,
        count: 5,
        interval_ms: 300,
        frame_size: FrameSize::Native,
        jpeg_quality: 0.9,
    };

    /// Lower bound on the time spent capturing, excluding the warm-up.
    pub fn capture_duration_ms(&self) -> u64 {
        self.count as u64 * u64::from(self.interval_ms)
    }
}

/// Live preview redraw rate.
pub const PREVIEW_FPS: u32 = 15;

/// Milliseconds between preview redraws.
pub fn preview_interval_ms() -> u32 {
    1000 / PREVIEW_FPS
}

/// Ordered JPEG data URLs from one capture pass.
///
/// Serializes as a plain JSON array so it can be dropped straight into a
/// request payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSet(Vec<String>);

impl FrameSet {
    pub fn with_capacity(count: usize) -> Self {
        Self(Vec::with_capacity(count))
    }

    pub fn push(&mut self, frame: String) {
        self.0.push(frame);
    }

    /// Drop every frame. Called before each capture pass.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Whether the pass produced exactly what `plan` asked for.
    pub fn is_complete(&self, plan: &CapturePlan) -> bool {
        self.0.len() == plan.count
    }
}

/// Split a `data:<mime>;base64,<payload>` URL into mime type and payload.
pub fn split_data_url(url: &str) -> Option<(&str, &str)> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    if mime.is_empty() || payload.is_empty() {
        return None;
    }
    Some((mime, payload))
}

/// A resource that must be released exactly once, such as a camera stream.
pub trait Release {
    fn release(&self);
}

/// Releases the wrapped resource when dropped, so every exit path of a
/// capture flow (success, rejection, or an early `?`) stops the camera.
pub struct ReleaseGuard<T: Release> {
    inner: Option<T>,
}

impl<T: Release> ReleaseGuard<T> {
    pub fn new(inner: T) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut()
    }

    /// Release now instead of at end of scope.
    pub fn release(mut self) {
        if let Some(inner) = self.inner.take() {
            inner.release();
        }
    }
}

impl<T: Release> Drop for ReleaseGuard<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.release();
        }
    }
}
