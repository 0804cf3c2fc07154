//! Hidden `<video>` source plus the circular preview canvas it is drawn into.
//!
//! The page owns both node refs and hands them to `util::camera` when a
//! capture starts.

use leptos::html;
use leptos::prelude::*;

pub const PREVIEW_SIZE: u32 = 260;

#[component]
pub fn CameraPreview(video_ref: NodeRef<html::Video>, canvas_ref: NodeRef<html::Canvas>) -> impl IntoView {
    view! {
        <div class="camera-preview">
            <video class="camera-preview__source" node_ref=video_ref autoplay=true muted=true playsinline=true></video>
            <canvas
                class="camera-preview__circle"
                node_ref=canvas_ref
                width=PREVIEW_SIZE.to_string()
                height=PREVIEW_SIZE.to_string()
            ></canvas>
        </div>
    }
}
