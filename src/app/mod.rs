use crate::pages::{FrontPage, NewPostPage, PostPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let base = state.config.base_path.clone();
    provide_context(AppContext(state));

    // Every route is relative to the configured base path (default `/blog`).
    view! {
        <Router base=base>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("newpost") view=NewPostPage />
                <Route path=path!(":post_id") view=PostPage />
                <Route path=path!("") view=FrontPage />
            </Routes>
        </Router>
    }
}
