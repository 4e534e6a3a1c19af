use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Dialog, DialogBody, DialogClose, DialogContent,
    DialogFooter, DialogHeader, DialogTitle,
};
use crate::models::PostDraft;
use leptos::prelude::*;

pub(crate) const LINE_BREAK: &str = "<br />";

/// Replace every `\r\n`, lone `\r` and lone `\n` with [`LINE_BREAK`].
pub(crate) fn render_line_breaks(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                // `\r\n` is one break, not two.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(LINE_BREAK);
            }
            '\n' => out.push_str(LINE_BREAK),
            _ => out.push(c),
        }
    }

    out
}

/// Markup shown in the preview dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PreviewContent {
    pub title_html: String,
    pub content_html: String,
}

impl PreviewContent {
    pub fn from_draft(draft: &PostDraft) -> Self {
        Self {
            title_html: draft.title.clone(),
            content_html: render_line_breaks(&draft.content),
        }
    }
}

/// Preview trigger plus the dialog it fills.
///
/// The dialog body is only written when the trigger is activated, so edits
/// made while the dialog is open do not leak into it.
#[component]
pub fn PreviewDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] content: Signal<String>,
) -> impl IntoView {
    let open: RwSignal<bool> = RwSignal::new(false);
    let preview: RwSignal<PreviewContent> = RwSignal::new(PreviewContent::default());

    let on_open_preview = move |ev: web_sys::MouseEvent| {
        // The trigger lives inside the post form.
        ev.prevent_default();

        let draft = PostDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
        };
        debug_log!("preview: {} chars of content", draft.content.len());
        preview.set(PreviewContent::from_draft(&draft));
        open.set(true);
    };

    view! {
        <Button
            class="open-PreviewDialog"
            variant=ButtonVariant::Outline
            size=ButtonSize::Sm
            on:click=on_open_preview
        >
            "Preview"
        </Button>

        <Dialog open=open>
            <DialogContent class="sm:max-w-[640px]">
                <DialogBody class="modal-body">
                    <DialogHeader>
                        <DialogTitle>
                            <span
                                id="post-title-prev"
                                inner_html=move || preview.get().title_html
                            />
                        </DialogTitle>
                    </DialogHeader>

                    <div
                        id="post-content-prev"
                        class="text-sm leading-relaxed break-words"
                        inner_html=move || preview.get().content_html
                    />

                    <DialogFooter>
                        <DialogClose size=ButtonSize::Sm>"Close"</DialogClose>
                    </DialogFooter>
                </DialogBody>
            </DialogContent>
        </Dialog>
    }
}
