use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm", "border-destructive/30"}
    clx! {AlertDescription, p, "text-destructive text-xs [&_p]:leading-relaxed"}
}

#[allow(unused_imports)]
pub use components::*;
