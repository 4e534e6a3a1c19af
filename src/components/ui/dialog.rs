use icons::X;
use leptos::context::Provider;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};

mod components {
    use super::*;
    clx! {DialogBody, div, "flex flex-col gap-4"}
    clx! {DialogHeader, div, "flex flex-col gap-2 text-center sm:text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

#[allow(unused_imports)]
pub use components::*;

/* ========================================================== */
/*                     ✨ FUNCTIONS ✨                        */
/* ========================================================== */

#[derive(Clone)]
struct DialogContext {
    target_id: String,
    open: RwSignal<bool>,
}

fn data_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Modal whose visibility is owned by the caller's `open` signal.
#[component]
pub fn Dialog(
    children: Children,
    open: RwSignal<bool>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctx = DialogContext {
        target_id: use_random_id_for("dialog"),
        open,
    };

    // Escape closes while open. Listener lives as long as the dialog.
    let key_handle = window_event_listener(ev::keydown, move |e: web_sys::KeyboardEvent| {
        if e.key() == "Escape" && open.get_untracked() {
            e.prevent_default();
            open.set(false);
        }
    });
    on_cleanup(move || key_handle.remove());

    let merged_class = tw_merge!("w-fit", class);

    view! {
        <Provider value=ctx>
            <div class=merged_class data-name="__Dialog">
                {children()}
            </div>
        </Provider>
    }
}

#[component]
pub fn DialogContent(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(into, optional)] hide_close_button: Option<bool>,
    #[prop(default = true)] close_on_backdrop_click: bool,
) -> impl IntoView {
    let ctx = expect_context::<DialogContext>();
    let open = ctx.open;
    let merged_class = tw_merge!(
        "relative bg-background border rounded-2xl shadow-lg p-6 w-full max-w-[calc(100%-2rem)] max-h-[85vh] overflow-y-auto fixed top-[50%] left-[50%] translate-x-[-50%] translate-y-[-50%] z-100 transition-all duration-200 data-[state=closed]:opacity-0 data-[state=closed]:scale-95 data-[state=open]:opacity-100 data-[state=open]:scale-100",
        class
    );

    let backdrop_id = format!("{}_backdrop", ctx.target_id);
    let pointer_events = move || {
        if open.get() {
            "pointer-events: auto;"
        } else {
            "pointer-events: none;"
        }
    };

    let on_backdrop_click = move |_: web_sys::MouseEvent| {
        if close_on_backdrop_click {
            open.set(false);
        }
    };

    view! {
        <div
            data-name="DialogBackdrop"
            id=backdrop_id
            class="fixed inset-0 transition-opacity duration-200 z-60 bg-black/50 data-[state=closed]:opacity-0 data-[state=open]:opacity-100"
            data-state=move || data_state(open.get())
            style=pointer_events
            on:click=on_backdrop_click
        />

        <div
            data-name="DialogContent"
            class=merged_class
            id=ctx.target_id
            role="dialog"
            aria-modal="true"
            data-state=move || data_state(open.get())
            style=pointer_events
        >
            <button
                type="button"
                class=format!(
                    "absolute top-4 right-4 p-1 rounded-sm focus:ring-2 focus:ring-offset-2 focus:outline-none [&_svg:not([class*='size-'])]:size-4 focus:ring-ring{}",
                    if hide_close_button.unwrap_or(false) { " hidden" } else { "" },
                )
                aria-label="Close dialog"
                on:click=move |_| open.set(false)
            >
                <span class="hidden">"Close Dialog"</span>
                <X />
            </button>

            {children()}
        </div>
    }
}

#[component]
pub fn DialogClose(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
) -> impl IntoView {
    let ctx = expect_context::<DialogContext>();
    let open = ctx.open;

    view! {
        <Button
            class=class
            attr:aria-label="Close dialog"
            variant=variant
            size=size
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                open.set(false);
            }
        >
            {children()}
        </Button>
    }
}
