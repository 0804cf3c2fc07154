use super::*;

#[test]
fn permission_rejections_map_to_denied() {
    assert_eq!(classify_media_error("NotAllowedError", "Permission denied"), CameraError::Denied);
    assert_eq!(classify_media_error("SecurityError", ""), CameraError::Denied);
}

#[test]
fn other_rejections_keep_detail() {
    assert_eq!(
        classify_media_error("NotFoundError", "Requested device not found"),
        CameraError::Unavailable("Requested device not found".to_owned())
    );
    assert_eq!(
        classify_media_error("NotReadableError", ""),
        CameraError::Unavailable("NotReadableError".to_owned())
    );
}

#[test]
fn denied_message_is_user_facing() {
    assert_eq!(CameraError::Denied.to_string(), "Camera access denied");
}
