//! Image viewer component.
//!
//! Shows the active preview with its caption, carousel controls, and a
//! button to reload the image at full resolution.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Direction;

stylance::import_crate_style!(css, "src/components/viewer.module.css");

#[component]
pub fn Viewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let src = Memo::new(move |_| ctx.session.with(|s| s.preview().map(|r| r.handle.clone())));
    let caption = Memo::new(move |_| ctx.session.with(|s| s.caption()));
    let loading = Memo::new(move |_| ctx.session.with(|s| s.is_preview_loading()));
    let can_upgrade = Memo::new(move |_| {
        ctx.session
            .with(|s| s.preview().is_some_and(|r| !r.full_resolution))
    });

    // "3 / 12" while the shown image is part of the carousel
    let position = Memo::new(move |_| {
        ctx.session.with(|s| {
            let carousel = s.carousel();
            carousel
                .current_index()
                .map(|i| format!("{} / {}", i + 1, carousel.images().len()))
        })
    });
    let has_siblings = Memo::new(move |_| ctx.session.with(|s| s.carousel().images().len() > 1));

    view! {
        <section class=css::viewer aria-label="Image viewer">
            <div class=css::stage>
                <button
                    class=format!("{} {}", css::navButton, css::navPrevious)
                    on:click=move |_| ctx.navigate(Direction::Previous)
                    disabled=move || !has_siblings.get()
                    title="Previous image"
                    aria-label="Previous image"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>

                <figure class=css::figure>
                    {move || src.get().map(|url| view! {
                        <img
                            class=css::image
                            src=url
                            alt=move || caption.get().unwrap_or_default()
                        />
                    })}
                    <Show when=move || loading.get()>
                        <div class=css::spinner role="status" aria-label="Loading image"></div>
                    </Show>
                    <figcaption class=css::caption>{move || caption.get()}</figcaption>
                </figure>

                <button
                    class=format!("{} {}", css::navButton, css::navNext)
                    on:click=move |_| ctx.navigate(Direction::Next)
                    disabled=move || !has_siblings.get()
                    title="Next image"
                    aria-label="Next image"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>

            <footer class=css::toolbar>
                <span class=css::position>{move || position.get()}</span>
                <Show when=move || can_upgrade.get()>
                    <button
                        class=css::fullSizeButton
                        on:click=move |_| ctx.load_full_resolution()
                        disabled=move || loading.get()
                        title="Reload at full resolution"
                    >
                        <Icon icon=ic::FULL_SIZE />
                        <span>"View Full Size"</span>
                    </button>
                </Show>
            </footer>
        </section>
    }
}
