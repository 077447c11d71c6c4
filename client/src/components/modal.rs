//! Modal shell shared by the gate dialogs.

use leptos::prelude::*;

/// Backdrop + titled dialog box. Clicking the backdrop, the close button or
/// pressing Escape runs `on_close`.
#[component]
pub fn Modal(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Tutup">
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
