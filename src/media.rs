use std::fmt;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlVideoElement;
use yew::NodeRef;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform refused to play (autoplay policy, bad source, ...).
    Rejected(String),
    /// The video element is not mounted.
    MissingElement,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Rejected(reason) => write!(f, "playback rejected: {}", reason),
            PlaybackError::MissingElement => write!(f, "video element not mounted"),
        }
    }
}

impl std::error::Error for PlaybackError {}

impl PlaybackError {
    fn from_js(err: JsValue) -> Self {
        let reason = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| format!("{}: {}", String::from(e.name()), String::from(e.message())))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "unknown".to_string());
        PlaybackError::Rejected(reason)
    }
}

pub trait MediaPlayer {
    /// Start playback. `on_rejected` runs (possibly later) if the platform refuses.
    fn play(&self, on_rejected: Box<dyn FnOnce(PlaybackError)>);
    fn pause(&self);
    fn seek(&self, time: f64);
}

/// A `<video>` element behind a yew `NodeRef`.
#[derive(Clone, Default, PartialEq)]
pub struct VideoHandle {
    node: NodeRef,
}

impl VideoHandle {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }

    fn element(&self) -> Option<HtmlVideoElement> {
        self.node.cast::<HtmlVideoElement>()
    }

    /// Non-interactive, with sound. Inline playback comes from the markup.
    pub fn prepare(&self) {
        if let Some(video) = self.element() {
            video.set_controls(false);
            video.set_muted(false);
        }
    }

    pub fn load(&self, src: &str) {
        if let Some(video) = self.element() {
            video.set_src(src);
            self.prepare();
            video.load();
        }
    }

    /// Pause and rewind to the start.
    pub fn stop(&self) {
        self.pause();
        self.seek(0.0);
    }

    /// Seek to just before the end so `ended` fires naturally. Waits for
    /// metadata when the duration is not known yet.
    pub fn skip_to_end(&self) {
        let Some(video) = self.element() else {
            return;
        };
        fn jump(video: &HtmlVideoElement) {
            let d = video.duration();
            if d.is_finite() {
                video.set_current_time((d - 0.1).max(0.0));
            }
        }
        if video.ready_state() >= 1 && video.duration().is_finite() {
            jump(&video);
        } else {
            let target = video.clone();
            EventListener::once(&video, "loadedmetadata", move |_| jump(&target)).forget();
        }
    }
}

impl MediaPlayer for VideoHandle {
    fn play(&self, on_rejected: Box<dyn FnOnce(PlaybackError)>) {
        let Some(video) = self.element() else {
            on_rejected(PlaybackError::MissingElement);
            return;
        };
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    on_rejected(PlaybackError::from_js(err));
                }
            }),
            Err(err) => on_rejected(PlaybackError::from_js(err)),
        }
    }

    fn pause(&self) {
        if let Some(video) = self.element() {
            let _ = video.pause();
        }
    }

    fn seek(&self, time: f64) {
        if let Some(video) = self.element() {
            video.set_current_time(time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(
            PlaybackError::Rejected("NotAllowedError".into()).to_string(),
            "playback rejected: NotAllowedError"
        );
        assert_eq!(
            PlaybackError::MissingElement.to_string(),
            "video element not mounted"
        );
    }
}
