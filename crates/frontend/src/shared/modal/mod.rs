use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay + centered panel. Renders nothing while `is_open` is false.
///
/// Only a press and release both on the backdrop closes the modal; clicks
/// inside the panel never reach the backdrop handler.
#[component]
pub fn Modal(
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called on backdrop click and on the close button
    on_close: Callback<()>,
    #[prop(into)]
    title: Signal<String>,
    /// Extra class for the panel (`div.modal`)
    #[prop(optional, into)]
    modal_class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);
    let children = StoredValue::new(children);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // The overlay unmounts inside its own click dispatch otherwise
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let panel_class = move || match modal_class.get() {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal-overlay"
                on:mousedown=handle_overlay_mouse_down
                on:click=handle_overlay_click
            >
                <div class=panel_class on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button
                            class="button button--icon modal__close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
