//! File list component.
//!
//! Displays the entries of the current folder in their sorted order, with a
//! parent row when the folder is not the root.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::HIDDEN_ENTRY_POLICY;
use crate::models::{EntryKind, FileEntry, HiddenPolicy};

stylance::import_crate_style!(css, "src/components/file_list.module.css");

fn get_icon(kind: EntryKind) -> IconData {
    match kind {
        EntryKind::Directory => ic::FOLDER,
        EntryKind::Image => ic::FILE_IMAGE,
        EntryKind::Other => ic::FILE,
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| {
        ctx.session
            .with(|s| s.listing().map(|l| l.entries().to_vec()).unwrap_or_default())
    });
    let at_root = Memo::new(move |_| ctx.session.with(|s| s.path().is_root()));

    view! {
        <div class=css::list role="grid" aria-label="Folder contents">
            <Show when=move || !at_root.get()>
                <div
                    class=css::listItem
                    on:click=move |_| ctx.go_back()
                    role="row"
                    tabindex="0"
                    aria-label="Parent folder"
                >
                    <span class=css::icon aria-hidden="true"><Icon icon=ic::PARENT_FOLDER /></span>
                    <span class=format!("{} {}", css::name, css::nameDir)>".."</span>
                </div>
            </Show>
            <For
                each=move || entries.get()
                key=|entry| entry.name.clone()
                children=move |entry| {
                    view! { <FileListItem entry=entry /> }
                }
            />
            <Show when=move || entries.with(Vec::is_empty)>
                <div class=css::empty>"This folder is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let kind = entry.kind();
    let icon = get_icon(kind);
    let is_dir = kind == EntryKind::Directory;
    let marked_hidden = entry.hidden && HIDDEN_ENTRY_POLICY == HiddenPolicy::Mark;

    let name_for_select = entry.name.clone();
    let is_selected = Signal::derive(move || {
        ctx.session
            .with(|s| s.selected() == Some(name_for_select.as_str()))
    });

    let name_for_click = entry.name.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| ctx.activate(&name_for_click);

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else if marked_hidden {
        format!("{} {}", css::name, css::nameHidden)
    } else {
        css::name.to_string()
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::listItem, css::selected)
        } else {
            css::listItem.to_string()
        }
    };

    let suffix = if is_dir { "/" } else { "" };
    let display_name = format!("{}{}", entry.name, suffix);

    let aria_label = match kind {
        EntryKind::Directory => format!("Folder: {}", entry.name),
        EntryKind::Image => format!("Image: {}", entry.name),
        EntryKind::Other => format!("File: {}", entry.name),
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{display_name}</span>
            <span class=css::comment>{entry.comment.clone()}</span>
            <span class=css::action aria-hidden="true">
                {match kind {
                    EntryKind::Directory => Some(view! { <Icon icon=ic::CHEVRON_RIGHT /> }),
                    EntryKind::Other => Some(view! { <Icon icon=ic::DOWNLOAD /> }),
                    EntryKind::Image => None,
                }}
            </span>
        </div>
    }
}
