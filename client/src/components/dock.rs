//! Navigation dock with hover magnification.
//!
//! DESIGN
//! ======
//! The dock renders one link per `NAV_ENTRIES` item and marks the one for
//! the current page active. Pointer enter/leave on any item re-targets the
//! scale of every item through `Magnifier`; the browser build animates with
//! CSS transitions.

use leptos::html;
use leptos::prelude::*;

use crate::state::nav::{NAV_ENTRIES, NavIcon};
#[cfg(feature = "csr")]
use crate::util::animate::CssTransitionAnimator;
#[cfg(feature = "csr")]
use crate::util::magnify::Magnifier;

const DOCK_LEN: usize = NAV_ENTRIES.len();

/// Row of navigation icons. `current_page` is the page file being viewed.
#[component]
pub fn Dock(#[prop(into)] current_page: String) -> impl IntoView {
    let item_refs: [NodeRef<html::A>; DOCK_LEN] = std::array::from_fn(|_| NodeRef::new());

    let items = NAV_ENTRIES
        .iter()
        .zip(item_refs)
        .enumerate()
        .map(|(index, (entry, node_ref))| {
            let active = entry.is_active(&current_page);
            let on_enter = move |_ev: leptos::ev::MouseEvent| magnify(&item_refs, Some(index));
            let on_leave = move |_ev: leptos::ev::MouseEvent| magnify(&item_refs, None);

            view! {
                <a
                    href=entry.href
                    class="dock-item"
                    class:active=active
                    attr:data-magnify=""
                    attr:data-label=entry.label
                    aria-label=entry.label
                    node_ref=node_ref
                    on:mouseenter=on_enter
                    on:mouseleave=on_leave
                >
                    <span class="dock-tooltip">{entry.label}</span>
                    <span class="dock-icon">{dock_icon(entry.icon)}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dock" id="dock">
            {items}
        </div>
    }
}

/// Magnify around `hovered`, or reset every item when `None`.
#[cfg(feature = "csr")]
fn magnify(refs: &[NodeRef<html::A>], hovered: Option<usize>) {
    let items = refs
        .iter()
        .filter_map(|node_ref| node_ref.get_untracked())
        .map(web_sys::HtmlElement::from)
        .collect::<Vec<_>>();
    let magnifier = Magnifier::new(CssTransitionAnimator, items);
    match hovered {
        Some(index) => magnifier.enter(index),
        None => magnifier.leave(),
    }
}

#[cfg(not(feature = "csr"))]
fn magnify(_refs: &[NodeRef<html::A>], _hovered: Option<usize>) {}

fn dock_icon(icon: NavIcon) -> impl IntoView {
    match icon {
        NavIcon::Home => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
                <polyline points="9 22 9 12 15 12 15 22" />
            </svg>
        }
        .into_any(),
        NavIcon::Help => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                <polyline points="22,6 12,13 2,6" />
            </svg>
        }
        .into_any(),
        NavIcon::Gallery => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="3" width="18" height="18" rx="2" />
                <circle cx="8.5" cy="8.5" r="1.5" />
                <path d="M21 15l-5-5L5 21" />
            </svg>
        }
        .into_any(),
        NavIcon::Star => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            </svg>
        }
        .into_any(),
        NavIcon::Team => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </svg>
        }
        .into_any(),
    }
}
