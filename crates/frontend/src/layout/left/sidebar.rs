use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::nav_config::{
    is_entry_active, should_close_after_select, NavEntry, SidebarState, NAV,
};
use crate::shared::config::config;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = RwSignal::new(SidebarState::for_page(&ctx.current_page.get_untracked()));

    let select = move |name: &'static str| {
        ctx.navigate(name);
        if should_close_after_select(viewport_width(), config().mobile_breakpoint_px) {
            ctx.sidebar_open.set(false);
        }
    };

    view! {
        <Show when=move || ctx.sidebar_open.get()>
            <nav class="app-sidebar">
                <div class="app-sidebar__content">
                    {NAV
                        .iter()
                        .map(|entry| view! { <NavItem entry=*entry state=state on_select=select depth=0 /> })
                        .collect_view()}
                </div>
            </nav>
        </Show>
    }
}

#[component]
fn NavItem<F>(entry: NavEntry, state: RwSignal<SidebarState>, on_select: F, depth: u32) -> impl IntoView
where
    F: Fn(&'static str) + Copy + Send + Sync + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let name = entry.name;
    let has_children = entry.has_children();
    let padding = format!("{}px", 12 + depth * 14);

    let on_click = move |_| {
        if has_children {
            state.update(|s| s.toggle(name));
        } else {
            on_select(name);
        }
    };

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.current_page.with(|p| is_entry_active(&entry, p))
                style:padding-left=padding
                on:click=on_click
            >
                <div class="app-sidebar__item-content">
                    {icon(entry.icon)}
                    <span>{move || i18n.t(name)}</span>
                </div>
                {has_children.then(|| view! {
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || state.with(|s| s.is_expanded(name))
                    >
                        {icon("chevron-right")}
                    </div>
                })}
            </div>
            {has_children.then(|| view! {
                <Show when=move || state.with(|s| s.is_expanded(name))>
                    <div class="app-sidebar__children">
                        {entry
                            .children
                            .iter()
                            .map(|child| {
                                view! { <NavChild entry=*child on_select=on_select depth=depth + 1 /> }
                            })
                            .collect_view()}
                    </div>
                </Show>
            })}
        </div>
    }
}

/// Second level; the tree is at most two deep
#[component]
fn NavChild<F>(entry: NavEntry, on_select: F, depth: u32) -> impl IntoView
where
    F: Fn(&'static str) + Copy + Send + Sync + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let name = entry.name;
    let padding = format!("{}px", 12 + depth * 14);

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.current_page.with(|p| p == name)
            style:padding-left=padding
            on:click=move |_| on_select(name)
        >
            <div class="app-sidebar__item-content">
                {icon(entry.icon)}
                <span>{move || i18n.t(name)}</span>
            </div>
        </div>
    }
}
