use super::*;

#[test]
fn default_status_is_empty_info() {
    let status = StatusMessage::default();
    assert!(status.is_empty());
    assert_eq!(status.tone, Tone::Info);
}

#[test]
fn constructors_set_tone() {
    assert_eq!(StatusMessage::success("ok").tone, Tone::Success);
    assert_eq!(StatusMessage::warning("hm").tone, Tone::Warning);
    assert_eq!(StatusMessage::error("no").tone, Tone::Error);
}

#[test]
fn css_class_is_tone_specific() {
    assert_eq!(Tone::Error.css_class(), "status status--error");
    assert_ne!(Tone::Info.css_class(), Tone::Success.css_class());
}
