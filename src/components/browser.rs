//! Main browser component.
//!
//! A single card with the header, the image viewer (while an image is shown
//! or loading), inline messages, and the listing of the current folder.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::file_list::FileList;
use super::viewer::Viewer;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::ListingState;

stylance::import_crate_style!(css, "src/components/browser.module.css");

/// Folder browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_preview = Signal::derive(move || ctx.session.with(|s| s.has_preview()));
    let notice = Signal::derive(move || ctx.session.with(|s| s.notice().map(str::to_string)));
    let downloading = Signal::derive(move || ctx.session.with(|s| s.downloads_in_flight() > 0));

    view! {
        <main class=css::browser>
            <Header />

            <Show when=move || has_preview.get()>
                <Viewer />
            </Show>

            {move || notice.get().map(|message| view! {
                <div class=css::notice role="alert">
                    <span class=css::noticeText>{message}</span>
                    <button
                        class=css::noticeClose
                        on:click=move |_| ctx.dismiss_notice()
                        title="Dismiss"
                        aria-label="Dismiss message"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            })}

            <Show when=move || downloading.get()>
                <div class=css::status role="status">"Downloading..."</div>
            </Show>

            <Listing />
        </main>
    }
}

/// App title and current folder.
#[component]
fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = Memo::new(move |_| ctx.session.with(|s| s.path().to_string()));
    let logo_class = move || {
        if ctx.color_scheme.get().is_dark() {
            format!("{} {}", css::logo, css::logoDark)
        } else {
            css::logo.to_string()
        }
    };

    view! {
        <header class=css::header>
            <span class=logo_class aria-hidden="true"><Icon icon=ic::LOGO /></span>
            <h1 class=css::title>{APP_NAME}</h1>
            <span class=css::path title="Current folder">{move || path.get()}</span>
        </header>
    }
}

#[derive(Clone, PartialEq)]
enum ListingView {
    Loading,
    Failed(String),
    Ready,
}

/// Listing area: loading state, fetch error, or the sorted entries.
#[component]
fn Listing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = Memo::new(move |_| {
        ctx.session.with(|s| match s.listing_state() {
            ListingState::Pending => ListingView::Loading,
            ListingState::Failed(message) => ListingView::Failed(message.clone()),
            ListingState::Ready(_) => ListingView::Ready,
        })
    });

    move || match state.get() {
        ListingView::Loading => {
            view! { <div class=css::status role="status">"Loading..."</div> }.into_any()
        }
        ListingView::Failed(message) => {
            view! { <div class=css::error role="alert">{message}</div> }.into_any()
        }
        ListingView::Ready => view! { <FileList /> }.into_any(),
    }
}
