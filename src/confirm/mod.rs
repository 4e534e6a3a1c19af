pub(crate) const DELETE_WARNING: &str = "Post will be deleted! This cannot be undone.";

/// Ask `prompt` whether the delete may go ahead.
pub(crate) fn confirm_delete_with(prompt: impl FnOnce(&str) -> bool) -> bool {
    prompt(DELETE_WARNING)
}

/// Blocks on the native `window.confirm` prompt.
///
/// Returns `false` when the user declines. A prompt that cannot be shown
/// counts as a decline.
pub(crate) fn confirm_delete() -> bool {
    confirm_delete_with(native_confirm)
}

fn native_confirm(msg: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(msg).ok())
        .unwrap_or(false)
}

/// Suppress `ev`'s default action unless `prompt` affirms the delete.
pub(crate) fn guard_delete_with(ev: &web_sys::Event, prompt: impl FnOnce(&str) -> bool) -> bool {
    let accepted = confirm_delete_with(prompt);
    if !accepted {
        ev.prevent_default();
        debug_log!("delete declined");
    }
    accepted
}

/// [`guard_delete_with`] on the native prompt.
pub(crate) fn guard_delete(ev: &web_sys::Event) -> bool {
    // `confirm_delete` supplies the warning itself.
    guard_delete_with(ev, |_| confirm_delete())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decline_returns_false() {
        assert!(!confirm_delete_with(|_| false));
    }

    #[test]
    fn test_accept_falls_through() {
        assert!(confirm_delete_with(|_| true));
    }

    #[test]
    fn test_prompt_shows_fixed_warning() {
        let mut seen = String::new();
        confirm_delete_with(|msg| {
            seen = msg.to_string();
            true
        });
        assert_eq!(seen, "Post will be deleted! This cannot be undone.");
    }
}
