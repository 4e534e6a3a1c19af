use crate::comments::CommentTable;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardHeader, CardTitle, Input, Label, Textarea,
};
use crate::confirm::guard_delete;
use crate::models::{PostDraft, PostView};
use crate::preview::PreviewDialog;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct PostRouteParams {
    pub post_id: Option<String>,
}

#[component]
fn PageShell(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let front = app_state.0.config.front_url();
    let user = app_state
        .0
        .page
        .username
        .clone()
        .unwrap_or_else(|| "Login".to_string());

    view! {
        <div class="min-h-screen bg-background">
            <header class="mx-auto flex w-full max-w-2xl items-center justify-between px-4 py-4">
                <a href=front class="text-sm font-medium text-foreground">"Blog"</a>
                <span class="text-xs text-muted-foreground">{user}</span>
            </header>
            <main class="mx-auto w-full max-w-2xl px-4 pb-10">{children()}</main>
        </div>
    }
}

#[component]
fn PageError(error: Option<String>) -> impl IntoView {
    error.filter(|e| !e.trim().is_empty()).map(|e| {
        view! {
            <Alert>
                <AlertDescription>{e}</AlertDescription>
            </Alert>
        }
    })
}

#[component]
fn PostOverview(post: PostView, post_url: String) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-base">
                    <a href=post_url class="hover:underline underline-offset-4">{post.title}</a>
                </CardTitle>
                <CardDescription class="text-xs">
                    {format!("{} · {} · {} likes", post.author, post.created, post.likes)}
                </CardDescription>
            </CardHeader>
            <CardContent>
                <div class="text-sm leading-relaxed whitespace-pre-line break-words line-clamp-6">{post.content}</div>
            </CardContent>
        </Card>
    }
}

/// Front page: every post, newest first.
#[component]
pub fn FrontPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let config = app_state.0.config.clone();
    let page = &app_state.0.page;
    let signed_in = page.username.as_deref().is_some_and(|u| !u.is_empty());
    let posts = page.posts_newest_first();
    let new_post_url = config.new_post_url();

    let list = if posts.is_empty() {
        view! { <div class="px-4 py-8 text-xs text-muted-foreground">"No posts yet."</div> }
            .into_any()
    } else {
        posts
            .into_iter()
            .map(|p| {
                let post_url = config.post_url(&p.id);
                view! { <PostOverview post=p post_url=post_url /> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <PageShell>
            <div class="flex flex-col gap-4">
                {signed_in.then(|| view! {
                    <a href=new_post_url class="self-end text-xs text-primary underline underline-offset-4">"New post"</a>
                })}
                {list}
            </div>
        </PageShell>
    }
}

/// Post form with the preview dialog. Submits natively to `<base>/newpost`.
#[component]
pub fn NewPostPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let page = &app_state.0.page;

    // Re-rendered after a failed submission, the server hands back what the
    // user typed.
    let title: RwSignal<String> = RwSignal::new(page.draft.title.clone());
    let content: RwSignal<String> = RwSignal::new(page.draft.content.clone());
    let error = page.error.clone();
    let action = app_state.0.config.new_post_url();

    view! {
        <PageShell>
            <Card>
                <CardHeader>
                    <CardTitle class="text-lg">"New post"</CardTitle>
                    <CardDescription class="text-xs">"Preview before you publish."</CardDescription>
                </CardHeader>

                <CardContent>
                    <form method="post" action=action class="flex flex-col gap-3">
                        <div class="flex flex-col gap-1.5">
                            <Label html_for="title" class="text-xs">"Title"</Label>
                            <Input id="title" name="title" bind_value=title required=true autofocus=true class="h-8 text-sm" />
                        </div>

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="content" class="text-xs">"Content"</Label>
                            <Textarea id="content" name="content" bind_value=content required=true rows=12 />
                        </div>

                        <PageError error=error />

                        <div class="flex items-center gap-2">
                            <PreviewDialog title=title content=content />
                            <Button size=ButtonSize::Sm>"Publish"</Button>
                        </div>
                    </form>
                </CardContent>
            </Card>
        </PageShell>
    }
}

#[component]
fn PostActions(post_url: String, owns_post: bool) -> impl IntoView {
    view! {
        <form method="post" action=post_url class="flex items-center gap-2">
            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm attr:name="action" attr:value="like">
                "Like"
            </Button>
            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm attr:name="action" attr:value="dislike">
                "Dislike"
            </Button>
            {owns_post.then(|| view! {
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    attr:name="action"
                    attr:value="delete"
                    on:click=move |ev: web_sys::MouseEvent| {
                        guard_delete(&ev);
                    }
                >
                    "Delete"
                </Button>
            })}
        </form>
    }
}

/// Owner-only edit form on the permalink page; posts `action=edit`.
#[component]
fn EditPostForm(post: PostView, post_url: String) -> impl IntoView {
    let draft = PostDraft::from_post(&post);
    let title: RwSignal<String> = RwSignal::new(draft.title);
    let content: RwSignal<String> = RwSignal::new(draft.content);

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-base">"Edit post"</CardTitle>
            </CardHeader>
            <CardContent>
                <form method="post" action=post_url class="flex flex-col gap-3">
                    <input type="hidden" name="action" value="edit" />

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="title" class="text-xs">"Title"</Label>
                        <Input id="title" name="title" bind_value=title required=true class="h-8 text-sm" />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="content" class="text-xs">"Content"</Label>
                        <Textarea id="content" name="content" bind_value=content required=true rows=12 />
                    </div>

                    <div class="flex items-center gap-2">
                        <PreviewDialog title=title content=content />
                        <Button size=ButtonSize::Sm>"Save post"</Button>
                    </div>
                </form>
            </CardContent>
        </Card>
    }
}

#[component]
fn NewCommentForm(post_url: String) -> impl IntoView {
    let text: RwSignal<String> = RwSignal::new(String::new());

    view! {
        <form method="post" action=post_url class="flex flex-col gap-2">
            <input type="hidden" name="action" value="comment" />
            <Label html_for="new-comment" class="text-xs">"Add a comment"</Label>
            <Textarea id="new-comment" name="comment" bind_value=text required=true rows=3 />
            <Button size=ButtonSize::Sm>"Comment"</Button>
        </form>
    }
}

#[component]
fn PostBody(post: PostView, post_url: String, owns_post: bool) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-lg">{post.title}</CardTitle>
                <CardDescription class="text-xs">
                    {format!("{} · {} · {} likes", post.author, post.created, post.likes)}
                </CardDescription>
            </CardHeader>
            <CardContent>
                // Stored text; breaks are kept by CSS so nothing is parsed as markup.
                <div class="text-sm leading-relaxed whitespace-pre-line break-words">{post.content}</div>
            </CardContent>
            <CardFooter class="border-t">
                <PostActions post_url=post_url owns_post=owns_post />
            </CardFooter>
        </Card>
    }
}

/// Permalink page: the post, its actions and its comments.
#[component]
pub fn PostPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = leptos_router::hooks::use_params::<PostRouteParams>();

    let route_id = params
        .get_untracked()
        .ok()
        .and_then(|p| p.post_id)
        .unwrap_or_default();

    let page = app_state.0.page.clone();
    let owns_post = page.owns_post();
    let signed_in = page.username.as_deref().is_some_and(|u| !u.is_empty());

    let Some(post) = page.post.filter(|p| p.id == route_id) else {
        return view! {
            <PageShell>
                <div class="px-4 py-8 text-xs text-muted-foreground">"Post not found"</div>
            </PageShell>
        }
        .into_any();
    };

    let post_url = app_state.0.config.post_url(&post.id);

    view! {
        <PageShell>
            <div class="flex flex-col gap-6">
                <PostBody post=post.clone() post_url=post_url.clone() owns_post=owns_post />

                {owns_post.then(|| view! { <EditPostForm post=post post_url=post_url.clone() /> })}

                <PageError error=page.error />

                <section class="flex flex-col gap-3">
                    <h3 class="text-sm font-semibold">"Comments"</h3>
                    <CommentTable comments=page.comments action_url=post_url.clone() />
                    {signed_in.then(|| view! { <NewCommentForm post_url=post_url /> })}
                </section>
            </div>
        </PageShell>
    }
    .into_any()
}
