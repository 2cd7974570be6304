//! Transient success and error banners.
//!
//! Pages keep one flash signal; showing a new message replaces the old one
//! and schedules an auto-dismiss. Each message carries a sequence number so
//! the dismiss timer of a replaced message cannot clear its successor.

use std::time::Duration;

use dioxus::prelude::*;

const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
    seq: u64,
}

pub fn use_flash() -> Signal<Option<FlashMessage>> {
    use_signal(|| None)
}

pub fn show_flash(
    mut flash: Signal<Option<FlashMessage>>,
    level: FlashLevel,
    text: impl Into<String>,
) {
    let seq = flash
        .peek()
        .as_ref()
        .map(|message| message.seq.wrapping_add(1))
        .unwrap_or(0);
    flash.set(Some(FlashMessage {
        level,
        text: text.into(),
        seq,
    }));
    spawn(async move {
        sleep(DISMISS_AFTER).await;
        let current = flash.peek().as_ref().map(|message| message.seq);
        if current == Some(seq) {
            flash.set(None);
        }
    });
}

pub fn show_success(flash: Signal<Option<FlashMessage>>, text: impl Into<String>) {
    show_flash(flash, FlashLevel::Success, text);
}

pub fn show_error(flash: Signal<Option<FlashMessage>>, text: impl Into<String>) {
    show_flash(flash, FlashLevel::Error, text);
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn FlashBanner(mut flash: Signal<Option<FlashMessage>>) -> Element {
    let Some(message) = flash() else {
        return rsx! {};
    };
    let class = match message.level {
        FlashLevel::Success => "flash flash-success",
        FlashLevel::Error => "flash flash-error",
    };

    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div {
            class: "{class}",
            span { class: "flash-text", "{message.text}" }
            button {
                class: "flash-dismiss",
                onclick: move |_| flash.set(None),
                "\u{00d7}"
            }
        }
    }
}
