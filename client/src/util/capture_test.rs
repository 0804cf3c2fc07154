use super::*;

#[test]
fn registration_plan_matches_enrollment_capture() {
    let plan = CapturePlan::REGISTRATION;
    assert_eq!(plan.count, 30);
    assert_eq!(plan.interval_ms, 120);
    assert_eq!(plan.warmup_ms, 2000);
    assert_eq!(plan.frame_size, FrameSize::Fixed { width: 260, height: 260 });
    assert_eq!(plan.capture_duration_ms(), 3600);
}

#[test]
fn authentication_plan_captures_five_native_frames() {
    let plan = CapturePlan::AUTHENTICATION;
    assert_eq!(plan.count, 5);
    assert_eq!(plan.frame_size, FrameSize::Native);
    assert_eq!(plan.capture_duration_ms(), 1500);
}

#[test]
fn preview_redraws_at_fifteen_fps() {
    assert_eq!(preview_interval_ms(), 66);
}

#[test]
fn frame_set_completeness_tracks_plan_count() {
    let plan = CapturePlan::AUTHENTICATION;
    let mut frames = FrameSet::with_capacity(plan.count);
    for i in 0..plan.count - 1 {
        frames.push(format!("data:image/jpeg;base64,F{i}"));
    }
    assert!(!frames.is_complete(&plan));
    frames.push("data:image/jpeg;base64,last".to_owned());
    assert!(frames.is_complete(&plan));
    assert_eq!(frames.first(), Some("data:image/jpeg;base64,F0"));
}

#[test]
fn frame_set_clear_empties_previous_pass() {
    let mut frames = FrameSet::default();
    frames.push("data:image/jpeg;base64,A".to_owned());
    frames.clear();
    assert!(frames.is_empty());
    assert_eq!(frames.first(), None);
}

#[test]
fn frame_set_serializes_as_plain_array() {
    let mut frames = FrameSet::default();
    frames.push("a".to_owned());
    frames.push("b".to_owned());
    assert_eq!(serde_json::to_value(&frames).unwrap(), serde_json::json!(["a", "b"]));
}

#[test]
fn split_data_url_extracts_mime_and_payload() {
    assert_eq!(
        split_data_url("data:image/jpeg;base64,/9j/4AAQ"),
        Some(("image/jpeg", "/9j/4AAQ"))
    );
}

#[test]
fn split_data_url_rejects_malformed_urls() {
    assert_eq!(split_data_url("image/jpeg;base64,abc"), None);
    assert_eq!(split_data_url("data:image/jpeg,abc"), None);
    assert_eq!(split_data_url("data:;base64,abc"), None);
    assert_eq!(split_data_url("data:image/png;base64,"), None);
}

// =============================================================
// ReleaseGuard
// =============================================================

#[derive(Clone, Default)]
struct CountingTrack {
    stops: std::rc::Rc<std::cell::Cell<u32>>,
}

impl Release for CountingTrack {
    fn release(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}

fn failing_capture(guard: &ReleaseGuard<CountingTrack>) -> Result<FrameSet, &'static str> {
    assert!(guard.get().is_some());
    Err("server error")
}

#[test]
fn release_guard_stops_on_drop() {
    let track = CountingTrack::default();
    {
        let _guard = ReleaseGuard::new(track.clone());
    }
    assert_eq!(track.stops.get(), 1);
}

#[test]
fn release_guard_stops_once_when_released_early() {
    let track = CountingTrack::default();
    let guard = ReleaseGuard::new(track.clone());
    guard.release();
    assert_eq!(track.stops.get(), 1);
}

#[test]
fn release_guard_stops_on_error_path() {
    let track = CountingTrack::default();
    let run = || -> Result<FrameSet, &'static str> {
        let guard = ReleaseGuard::new(track.clone());
        let frames = failing_capture(&guard)?;
        Ok(frames)
    };
    assert!(run().is_err());
    assert_eq!(track.stops.get(), 1);
}
