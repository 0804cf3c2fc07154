//! Browser camera access, live circular preview, and timed frame capture.
//!
//! SYSTEM CONTEXT
//! ==============
//! Face registration and face login both run the same sequence: open the
//! camera, show a mirrored circular preview, wait for exposure to settle,
//! then grab a fixed number of JPEG frames at a fixed interval. The stream
//! is held by a `ReleaseGuard`, so tracks are stopped and the preview loop
//! cancelled whenever the capture future finishes, on success or failure.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use super::capture::{CapturePlan, FrameSet, FrameSize, Release, ReleaseGuard};

/// Failure to open the camera or read frames from it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("Camera access denied")]
    Denied,
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("frame capture failed: {0}")]
    Capture(String),
}

/// Map a `getUserMedia` rejection name to a camera error.
pub fn classify_media_error(name: &str, detail: &str) -> CameraError {
    match name {
        "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => CameraError::Denied,
        _ => CameraError::Unavailable(if detail.is_empty() { name.to_owned() } else { detail.to_owned() }),
    }
}

/// Open the camera, preview it, and capture `plan.count` frames.
///
/// `preview` is redrawn as a mirrored circle at `PREVIEW_FPS` while the
/// camera is open. The stream is stopped before this returns.
///
/// # Errors
///
/// Returns `CameraError::Denied` when the user refuses camera access and
/// `Capture` when a frame cannot be encoded.
#[cfg(feature = "hydrate")]
pub async fn capture_faces(
    video: web_sys::HtmlVideoElement,
    preview: Option<web_sys::HtmlCanvasElement>,
    plan: &CapturePlan,
) -> Result<FrameSet, CameraError> {
    let session = CameraStream::open(video, preview, plan).await?;
    let Some(stream) = session.get() else {
        return Err(CameraError::Unavailable("camera closed".to_owned()));
    };

    sleep_ms(plan.warmup_ms).await;
    leptos::logging::log!("capturing {} frames over {}ms", plan.count, plan.capture_duration_ms());

    let mut frames = FrameSet::with_capacity(plan.count);
    stream.capture_into(plan, &mut frames).await?;
    session.release();
    if !frames.is_complete(plan) {
        return Err(CameraError::Capture(format!("captured {} of {} frames", frames.len(), plan.count)));
    }
    leptos::logging::log!("captured {} frames", frames.len());
    Ok(frames)
}

/// Convert a captured data URL back to a binary `Blob` for multipart upload.
///
/// # Errors
///
/// Returns `Capture` for malformed data URLs or when the browser cannot
/// decode the payload.
#[cfg(feature = "hydrate")]
pub async fn frame_to_blob(frame: &str) -> Result<web_sys::Blob, CameraError> {
    let Some((mime, _)) = super::capture::split_data_url(frame) else {
        return Err(CameraError::Capture("malformed frame".to_owned()));
    };
    let resp = gloo_net::http::Request::get(frame)
        .send()
        .await
        .map_err(|e| CameraError::Capture(e.to_string()))?;
    let bytes = resp
        .binary()
        .await
        .map_err(|e| CameraError::Capture(e.to_string()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|e| capture_error(&e))
}

#[cfg(feature = "hydrate")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(feature = "hydrate")]
fn capture_error(err: &wasm_bindgen::JsValue) -> CameraError {
    CameraError::Capture(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn media_error(err: &wasm_bindgen::JsValue) -> CameraError {
    let field = |key: &str| {
        js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    classify_media_error(&field("name"), &field("message"))
}

#[cfg(feature = "hydrate")]
fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Result<web_sys::CanvasRenderingContext2d, CameraError> {
    canvas
        .get_context("2d")
        .map_err(|e| capture_error(&e))?
        .ok_or_else(|| CameraError::Capture("no 2d context".to_owned()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|e| capture_error(&e))
}

/// An open camera stream attached to a `<video>` element.
#[cfg(feature = "hydrate")]
struct CameraStream {
    stream: web_sys::MediaStream,
    video: web_sys::HtmlVideoElement,
    preview: Option<(web_sys::HtmlCanvasElement, gloo_timers::callback::Interval)>,
}

#[cfg(feature = "hydrate")]
impl CameraStream {
    async fn open(
        video: web_sys::HtmlVideoElement,
        preview: Option<web_sys::HtmlCanvasElement>,
        plan: &CapturePlan,
    ) -> Result<ReleaseGuard<Self>, CameraError> {
        let window = web_sys::window().ok_or_else(|| CameraError::Unavailable("no window".to_owned()))?;
        let devices = window.navigator().media_devices().map_err(|e| media_error(&e))?;

        let video_constraints = js_sys::Object::new();
        let set = |key: &str, value: u32| {
            let _ = js_sys::Reflect::set(&video_constraints, &key.into(), &f64::from(value).into());
        };
        set("width", plan.request_width);
        set("height", plan.request_height);
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_video(&video_constraints);
        constraints.set_audio(&wasm_bindgen::JsValue::FALSE);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| media_error(&e))?;
        let stream = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| media_error(&e))?
            .dyn_into::<web_sys::MediaStream>()
            .map_err(|e| media_error(&e))?;

        video.set_src_object(Some(&stream));
        // From here on, any early return drops the guard and stops the tracks.
        let mut guard = ReleaseGuard::new(Self { stream, video: video.clone(), preview: None });

        let play = video.play().map_err(|e| media_error(&e))?;
        wasm_bindgen_futures::JsFuture::from(play)
            .await
            .map_err(|e| media_error(&e))?;

        if let Some(canvas) = preview {
            let ctx = context_2d(&canvas)?;
            let tick_canvas = canvas.clone();
            let interval = gloo_timers::callback::Interval::new(super::capture::preview_interval_ms(), move || {
                draw_circle_preview(&ctx, &tick_canvas, &video);
            });
            if let Some(opened) = guard.get_mut() {
                opened.preview = Some((canvas, interval));
            }
        }
        Ok(guard)
    }

    async fn capture_into(&self, plan: &CapturePlan, frames: &mut FrameSet) -> Result<(), CameraError> {
        frames.clear();
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CameraError::Unavailable("no document".to_owned()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| capture_error(&e))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|e| capture_error(&e))?;
        let (width, height) = match plan.frame_size {
            FrameSize::Native => (self.video.video_width().max(1), self.video.video_height().max(1)),
            FrameSize::Fixed { width, height } => (width, height),
        };
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = context_2d(&canvas)?;
        let quality = wasm_bindgen::JsValue::from_f64(plan.jpeg_quality);

        for _ in 0..plan.count {
            ctx.draw_image_with_html_video_element_and_dw_and_dh(
                &self.video,
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            )
            .map_err(|e| capture_error(&e))?;
            let frame = canvas
                .to_data_url_with_type_and_encoder_options("image/jpeg", &quality)
                .map_err(|e| capture_error(&e))?;
            frames.push(frame);
            sleep_ms(plan.interval_ms).await;
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
impl Release for CameraStream {
    fn release(&self) {
        let tracks = self.stream.get_tracks();
        for track in tracks.iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
        self.video.set_src_object(None);
        if let Some((canvas, _)) = &self.preview {
            if let Ok(ctx) = context_2d(canvas) {
                ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
            }
        }
        leptos::logging::log!("camera stopped");
    }
}

/// Draw the current video frame mirrored and clipped to a centered circle.
#[cfg(feature = "hydrate")]
fn draw_circle_preview(
    ctx: &web_sys::CanvasRenderingContext2d,
    canvas: &web_sys::HtmlCanvasElement,
    video: &web_sys::HtmlVideoElement,
) {
    let w = f64::from(canvas.width());
    let h = f64::from(canvas.height());
    ctx.save();
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.begin_path();
    let _ = ctx.arc(w / 2.0, h / 2.0, w / 2.0, 0.0, std::f64::consts::TAU);
    ctx.close_path();
    ctx.clip();
    let _ = ctx.translate(w, 0.0);
    let _ = ctx.scale(-1.0, 1.0);
    let _ = ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, w, h);
    ctx.restore();
}
