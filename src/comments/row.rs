use crate::error::{UiError, UiResult};
use crate::models::CommentView;
use leptos::html;
use leptos::logging::{error, warn};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Marks inputs created by a save, so a second save replaces rather than
/// duplicates them.
const INJECTED_ATTR: &str = "data-injected";

/// Editability of one comment row. The control label is derived from this,
/// never read back from the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
pub(crate) enum EditState {
    #[default]
    #[strum(serialize = "Edit")]
    ReadOnly,
    #[strum(serialize = "Save")]
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    BeginEdit,
    Save,
}

impl EditState {
    pub fn on_activate(self) -> Transition {
        match self {
            EditState::ReadOnly => Transition::BeginEdit,
            EditState::Editing => Transition::Save,
        }
    }

    pub fn is_editing(self) -> bool {
        self == EditState::Editing
    }
}

impl Transition {
    pub fn next_state(self) -> EditState {
        match self {
            Transition::BeginEdit => EditState::Editing,
            Transition::Save => EditState::ReadOnly,
        }
    }
}

pub(crate) fn comment_field_name(comment_id: &str) -> String {
    format!("comment_{comment_id}")
}

pub(crate) fn comment_form_name(field_name: &str) -> String {
    format!("{field_name}_form")
}

/// Append `<input type="hidden" name=name value=value>` to `form`, replacing
/// an input injected earlier under the same name.
pub(crate) fn inject_hidden_field(
    form: &web_sys::HtmlFormElement,
    name: &str,
    value: &str,
) -> UiResult<web_sys::HtmlInputElement> {
    let document = form
        .owner_document()
        .ok_or_else(|| UiError::missing("document"))?;

    let previous = form
        .query_selector_all(&format!("input[{INJECTED_ATTR}]"))
        .map_err(|e| UiError::dom(e, "query injected inputs"))?;
    for i in 0..previous.length() {
        if let Some(old) = previous
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            if old.name() == name {
                old.remove();
            }
        }
    }

    let input = document
        .create_element("input")
        .map_err(|e| UiError::dom(e, "create hidden input"))?
        .unchecked_into::<web_sys::HtmlInputElement>();
    input.set_type("hidden");
    input.set_name(name);
    input.set_value(value);
    input
        .set_attribute(INJECTED_ATTR, "")
        .map_err(|e| UiError::dom(e, "mark hidden input"))?;

    form.append_child(&input)
        .map_err(|e| UiError::dom(e, "append hidden input"))?;
    Ok(input)
}

/// Make `cell` editable and put the caret in it.
pub(crate) fn begin_edit(cell: &web_sys::HtmlElement) {
    cell.set_content_editable("true");
    if let Err(e) = cell.focus() {
        warn!("{}", UiError::dom(e, "focus comment cell"));
    }
}

/// Lock `cell` again and carry its rendered text into `form`.
pub(crate) fn finish_edit(
    cell: &web_sys::HtmlElement,
    form: &web_sys::HtmlFormElement,
    field_name: &str,
) -> UiResult<web_sys::HtmlInputElement> {
    cell.set_content_editable("false");
    inject_hidden_field(form, field_name, &cell.inner_text())
}

/// View model of one comment row. The row's form is held directly.
#[derive(Clone)]
pub(crate) struct CommentRowVm {
    pub comment_id: String,
    pub field_name: String,
    pub state: RwSignal<EditState>,
    pub cell_ref: NodeRef<html::Td>,
    pub form_ref: NodeRef<html::Form>,
}

impl CommentRowVm {
    pub fn new(comment_id: &str) -> Self {
        Self {
            comment_id: comment_id.to_string(),
            field_name: comment_field_name(comment_id),
            state: RwSignal::new(EditState::ReadOnly),
            cell_ref: NodeRef::new(),
            form_ref: NodeRef::new(),
        }
    }

    pub fn form_name(&self) -> String {
        comment_form_name(&self.field_name)
    }

    /// Handle a click on the row's edit/save control.
    ///
    /// Returns `true` when the event's default action (the form submission)
    /// may proceed.
    pub fn activate(&self, ev: &web_sys::Event) -> bool {
        let transition = self.state.get_untracked().on_activate();
        let proceed = match transition {
            Transition::BeginEdit => {
                ev.prevent_default();
                let Some(cell) = self.cell_ref.get_untracked() else {
                    // Nothing to edit: the row stays read-only and keeps its "Edit" label.
                    warn!("comment {}: {}", self.comment_id, UiError::missing("comment cell"));
                    return false;
                };
                begin_edit(&cell);
                debug_log!("comment {}: editing", self.comment_id);
                false
            }
            Transition::Save => match self.save() {
                Ok(_) => {
                    debug_log!("comment {}: saving", self.comment_id);
                    true
                }
                // The cell is already locked again, so a failed save still
                // returns the row to read-only; only the submission is cancelled.
                Err(e) => {
                    ev.prevent_default();
                    error!("comment {}: {}", self.comment_id, e);
                    false
                }
            },
        };

        // Label follows state on every path that reaches here.
        self.state.set(transition.next_state());
        proceed
    }

    fn save(&self) -> UiResult<web_sys::HtmlInputElement> {
        let cell = self
            .cell_ref
            .get_untracked()
            .ok_or_else(|| UiError::missing("comment cell"))?;
        let form = self
            .form_ref
            .get_untracked()
            .ok_or_else(|| UiError::missing("comment form"))?;
        finish_edit(&cell, &form, &self.field_name)
    }
}

#[component]
pub fn CommentRow(comment: CommentView, #[prop(into)] action_url: String) -> impl IntoView {
    let vm = CommentRowVm::new(&comment.id);
    let state = vm.state;
    let form_name = vm.form_name();
    let field_name = vm.field_name.clone();
    let comment_id = vm.comment_id.clone();
    let control_id = format!("{field_name}_control");
    let cell_ref = vm.cell_ref;
    let form_ref = vm.form_ref;

    let control = comment.can_edit.then(|| {
        let vm = vm.clone();
        view! {
            <form
                method="post"
                action=action_url
                id=form_name.clone()
                name=form_name
                node_ref=form_ref
            >
                <input type="hidden" name="action" value="edit_comment" />
                <input type="hidden" name="comment_id" value=comment_id />
                <button
                    class="text-xs text-primary underline-offset-4 hover:underline"
                    id=control_id
                    value=field_name
                    on:click=move |ev: web_sys::MouseEvent| {
                        vm.activate(&ev);
                    }
                >
                    {move || state.get().to_string()}
                </button>
            </form>
        }
    });

    view! {
        <tr class="border-b align-top">
            <td class="py-2 pr-3 text-xs text-muted-foreground whitespace-nowrap">
                <div>{comment.author}</div>
                <div class="text-[10px]">{comment.created}</div>
            </td>
            <td
                class="py-2 pr-3 text-sm w-full outline-none data-[editing=true]:ring-2 data-[editing=true]:ring-ring/50 rounded-sm"
                data-editing=move || state.get().is_editing().to_string()
                node_ref=cell_ref
            >
                {comment.content}
            </td>
            <td class="py-2 text-right">{control}</td>
        </tr>
    }
}

#[component]
pub fn CommentTable(comments: Vec<CommentView>, #[prop(into)] action_url: String) -> impl IntoView {
    if comments.is_empty() {
        return view! { <div class="text-xs text-muted-foreground">"No comments yet."</div> }
            .into_any();
    }

    view! {
        <table class="w-full border-collapse">
            <tbody>
                {comments
                    .into_iter()
                    .map(|c| view! { <CommentRow comment=c action_url=action_url.clone() /> })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_read_only() {
        assert_eq!(EditState::default(), EditState::ReadOnly);
        assert_eq!(EditState::default().to_string(), "Edit");
    }

    #[test]
    fn test_label_derived_from_state() {
        assert_eq!(EditState::ReadOnly.as_ref(), "Edit");
        assert_eq!(EditState::Editing.as_ref(), "Save");
    }

    #[test]
    fn test_activations_alternate_and_label_tracks_state() {
        let mut state = EditState::ReadOnly;
        let expected = [
            (Transition::BeginEdit, "Save"),
            (Transition::Save, "Edit"),
            (Transition::BeginEdit, "Save"),
            (Transition::Save, "Edit"),
        ];
        for (want, label) in expected {
            let t = state.on_activate();
            assert_eq!(t, want);
            state = t.next_state();
            assert_eq!(state.to_string(), label);
        }
    }

    #[test]
    fn test_field_and_form_names() {
        let field = comment_field_name("42");
        assert_eq!(field, "comment_42");
        assert_eq!(comment_form_name(&field), "comment_42_form");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_row(field_name: &str, text: &str) -> (web_sys::HtmlElement, web_sys::HtmlFormElement) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let body = document.body().expect("body");

        let cell = document
            .create_element("td")
            .expect("td")
            .unchecked_into::<web_sys::HtmlElement>();
        cell.set_inner_text(text);
        body.append_child(&cell).expect("append cell");

        let form = document
            .create_element("form")
            .expect("form")
            .unchecked_into::<web_sys::HtmlFormElement>();
        form.set_name(&comment_form_name(field_name));
        body.append_child(&form).expect("append form");

        (cell, form)
    }

    fn hidden_inputs(form: &web_sys::HtmlFormElement) -> Vec<web_sys::HtmlInputElement> {
        let list = form
            .query_selector_all("input[type=hidden]")
            .expect("query");
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|n| n.unchecked_into::<web_sys::HtmlInputElement>())
            .collect()
    }

    fn cancelable_click() -> web_sys::Event {
        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        web_sys::Event::new_with_event_init_dict("click", &init).expect("event")
    }

    fn active_element() -> Option<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
    }

    /// Render the row's cell (and its form when `with_form`) so the view
    /// model's node refs are loaded.
    fn mount_vm(vm: &CommentRowVm, text: &'static str, with_form: bool) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .expect("body");
        let cell_ref = vm.cell_ref;
        let form_ref = vm.form_ref;
        let form_name = vm.form_name();

        leptos::mount::mount_to(body, move || {
            view! {
                <table>
                    <tbody>
                        <tr>
                            <td node_ref=cell_ref>{text}</td>
                        </tr>
                    </tbody>
                </table>
                {with_form.then(|| view! { <form name=form_name node_ref=form_ref></form> })}
            }
        })
        .forget();
    }

    #[wasm_bindgen_test]
    fn test_activate_edit_then_save_through_control() {
        let vm = CommentRowVm::new("42");
        mount_vm(&vm, "Typo", true);
        let cell = vm.cell_ref.get_untracked().expect("cell mounted");
        let form = vm.form_ref.get_untracked().expect("form mounted");
        assert_eq!(form.name(), "comment_42_form");

        // First activation: editable, focused, click suppressed, nothing injected.
        let ev = cancelable_click();
        assert!(!vm.activate(&ev));
        assert!(ev.default_prevented());
        assert_eq!(vm.state.get_untracked(), EditState::Editing);
        assert_eq!(vm.state.get_untracked().to_string(), "Save");
        assert_eq!(cell.content_editable(), "true");
        let active = active_element().expect("something focused");
        assert!(active.is_same_node(Some(cell.as_ref())));
        assert!(hidden_inputs(&form).is_empty());

        cell.set_inner_text("Fixed typo");

        // Second activation: save proceeds with exactly one hidden field.
        let ev = cancelable_click();
        assert!(vm.activate(&ev));
        assert!(!ev.default_prevented());
        assert_eq!(vm.state.get_untracked(), EditState::ReadOnly);
        assert_eq!(vm.state.get_untracked().to_string(), "Edit");
        assert_eq!(cell.content_editable(), "false");
        let inputs = hidden_inputs(&form);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name(), "comment_42");
        assert_eq!(inputs[0].value(), "Fixed typo");
    }

    #[wasm_bindgen_test]
    fn test_activate_without_cell_stays_read_only() {
        let vm = CommentRowVm::new("5");

        let ev = cancelable_click();
        assert!(!vm.activate(&ev));
        assert!(ev.default_prevented());
        assert_eq!(vm.state.get_untracked(), EditState::ReadOnly);
        assert_eq!(vm.state.get_untracked().to_string(), "Edit");
    }

    #[wasm_bindgen_test]
    fn test_save_without_form_cancels_submit_and_locks_row() {
        let vm = CommentRowVm::new("6");
        mount_vm(&vm, "Draft", false);
        let cell = vm.cell_ref.get_untracked().expect("cell mounted");

        assert!(!vm.activate(&cancelable_click()));
        assert_eq!(vm.state.get_untracked(), EditState::Editing);

        let ev = cancelable_click();
        assert!(!vm.activate(&ev));
        assert!(ev.default_prevented());
        assert_eq!(vm.state.get_untracked(), EditState::ReadOnly);
        assert_eq!(cell.content_editable(), "false");
    }

    #[wasm_bindgen_test]
    fn test_inject_hidden_field_appends_to_form() {
        let (_, form) = mount_row("comment_43", "");
        let input = inject_hidden_field(&form, "comment_43", "Fixed typo").expect("inject");

        assert_eq!(input.type_(), "hidden");
        let parent = input.parent_element().expect("attached");
        assert!(parent.is_same_node(Some(form.as_ref())));
        assert_eq!(input.name(), "comment_43");
        assert_eq!(input.value(), "Fixed typo");
    }

    #[wasm_bindgen_test]
    fn test_begin_edit_focuses_without_hidden_field() {
        let (cell, form) = mount_row("comment_7", "Original");
        begin_edit(&cell);

        assert_eq!(cell.content_editable(), "true");
        let active = active_element().expect("something focused");
        assert!(active.is_same_node(Some(cell.as_ref())));
        assert!(hidden_inputs(&form).is_empty());
    }

    #[wasm_bindgen_test]
    fn test_save_injects_rendered_text() {
        let (cell, form) = mount_row("comment_42", "Typo");
        begin_edit(&cell);
        cell.set_inner_text("Fixed typo");

        finish_edit(&cell, &form, "comment_42").expect("save should inject");

        assert_eq!(cell.content_editable(), "false");
        assert_eq!(form.name(), "comment_42_form");
        let inputs = hidden_inputs(&form);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name(), "comment_42");
        assert_eq!(inputs[0].value(), "Fixed typo");
    }

    #[wasm_bindgen_test]
    fn test_second_save_replaces_injected_field() {
        let (cell, form) = mount_row("comment_9", "one");
        finish_edit(&cell, &form, "comment_9").expect("first save");
        cell.set_inner_text("two");
        finish_edit(&cell, &form, "comment_9").expect("second save");

        let inputs = hidden_inputs(&form);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].value(), "two");
    }

    #[wasm_bindgen_test]
    fn test_row_shows_author_and_created() {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .expect("body");
        let comments = vec![CommentView {
            id: "51".to_string(),
            author: "bob".to_string(),
            content: "Nice".to_string(),
            created: "2016-02-11".to_string(),
            can_edit: false,
        }];
        leptos::mount::mount_to(body.clone(), move || {
            view! { <CommentTable comments=comments action_url="/blog/7" /> }
        })
        .forget();

        let text = body.inner_text();
        assert!(text.contains("bob"));
        assert!(text.contains("2016-02-11"));
        // Not editable by this viewer, so no control form.
        assert!(body.query_selector("form[name=comment_51_form]").expect("query").is_none());
    }
}
