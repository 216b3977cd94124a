//! Admin area: login, dashboard with the delete flow, post form.

use maud::{Markup, PreEscaped, html};

use sagepath_core::domain::{
    CONFIRM_PHRASE, DeleteFlow, Post, ValidationErrors, paragraphs, slugify,
};

use super::{admin_layout, short_date_time};
use crate::config::SiteConfig;

/// Teaser length in the dashboard rows.
const DASHBOARD_TEASER_CHARS: usize = 150;

fn field_error(errors: Option<&ValidationErrors>, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.and_then(|e| e.get(field)) {
            p class="field-error" role="alert" { (message) }
        }
    }
}

fn input_class(errors: Option<&ValidationErrors>, field: &str) -> &'static str {
    match errors.and_then(|e| e.get(field)) {
        Some(_) => "invalid",
        None => "",
    }
}

pub fn login(
    site: &SiteConfig,
    email: &str,
    errors: Option<&ValidationErrors>,
    login_error: Option<&str>,
) -> Markup {
    let body = html! {
        section class="section narrow" {
            h1 { "Admin Login" }
            p class="hint" { "Sign in to manage blog posts and content" }
            @if let Some(message) = login_error {
                div class="notice" role="alert" { (message) }
            }
            form class="stack" method="post" action="/me/admin" novalidate {
                label for="email" { "Email Address" }
                input id="email" class=(input_class(errors, "email")) type="email" name="email"
                    value=(email) autocomplete="email" autofocus;
                (field_error(errors, "email"))

                label for="password" { "Password" }
                input id="password" class=(input_class(errors, "password")) type="password"
                    name="password" autocomplete="current-password";
                (field_error(errors, "password"))

                button class="btn btn-primary" type="submit" { "Sign In" }
            }
            p class="fine" {
                "This is a secure admin area. If you don't have access, please contact the site administrator."
            }
        }
    };
    admin_layout(site, "Admin Login", None, body)
}

/// Enables the modal's confirm button only while the typed text matches.
fn confirm_script() -> Markup {
    let script = format!(
        "(function(){{var i=document.getElementById('confirm-delete'),b=document.getElementById('confirm-button');\
         if(!i||!b)return;i.addEventListener('input',function(){{b.disabled=i.value.trim().toLowerCase()!=='{CONFIRM_PHRASE}';}});}})();"
    );
    html! { script { (PreEscaped(script)) } }
}

fn delete_modal(title: &str, error: Option<&str>) -> Markup {
    html! {
        div class="modal-backdrop" {
            div class="modal" role="dialog" aria-modal="true" aria-labelledby="delete-title" {
                h2 id="delete-title" { "Delete Blog Post" }
                p { "You are about to permanently delete the blog post:" }
                p { strong { "\"" (title) "\"" } }
                @if let Some(message) = error {
                    div class="notice" role="alert" { (message) }
                }
                form class="stack" method="post" action="/me/admin/delete/confirm" {
                    label for="confirm-delete" {
                        "Type " span class="phrase" { (CONFIRM_PHRASE) } " to confirm"
                    }
                    input id="confirm-delete" type="text" name="confirmation" autocomplete="off"
                        placeholder=(format!("Type '{CONFIRM_PHRASE}' to confirm")) autofocus;
                    div class="actions" {
                        button id="confirm-button" class="btn btn-danger" type="submit" disabled { "Delete Post" }
                    }
                }
                form method="post" action="/me/admin/delete/cancel" {
                    button class="btn btn-secondary" type="submit" { "Cancel" }
                }
            }
        }
        (confirm_script())
    }
}

fn post_row(post: &Post, flow: &DeleteFlow) -> Markup {
    let armed = flow.is_armed(post.id);
    html! {
        tr {
            td {
                @if let Some(url) = &post.image_url {
                    img src=(url) alt="";
                }
            }
            td {
                a href=(format!("/blog/{}", post.slug)) target="_blank" rel="noopener noreferrer" {
                    strong { (post.title) }
                }
                p class="hint" { (short_date_time(&post.created_at)) }
                p { (post.teaser(DASHBOARD_TEASER_CHARS)) }
            }
            td class="row-actions" {
                a class="btn btn-secondary" href=(format!("/me/admin/edit/{}", post.id)) aria-label=(format!("Edit {}", post.title)) {
                    "Edit"
                }
                " "
                form class="inline-form" method="post" action=(format!("/me/admin/delete/{}", post.id)) {
                    @if armed {
                        button class="btn btn-danger" type="submit" aria-label=(format!("Confirm delete {}", post.title)) { "Confirm" }
                    } @else {
                        button class="btn btn-secondary" type="submit" aria-label=(format!("Delete {}", post.title)) { "Delete" }
                    }
                }
                @if armed {
                    " "
                    form class="inline-form" method="post" action="/me/admin/delete/cancel" {
                        button class="link-button" type="submit" { "Cancel" }
                    }
                }
            }
        }
    }
}

/// `posts` is `None` when the listing could not be loaded.
pub fn dashboard(
    site: &SiteConfig,
    email: &str,
    posts: Option<&[Post]>,
    flow: &DeleteFlow,
    notice: Option<&str>,
) -> Markup {
    let body = html! {
        section class="section" {
            h1 { "Blog Posts" }
            p class="hint" { "Manage your insights and educational content" }
            p { a class="btn btn-primary" href="/me/admin/create" { "Create New Post" } }
            @if let Some(message) = notice {
                div class="notice" role="alert" { (message) }
            }
            @if matches!(flow, DeleteFlow::Deleting { .. }) {
                p class="hint" { "Deleting..." }
            }
            @match posts {
                None => {
                    div class="notice" role="alert" { "Failed to load posts" }
                }
                Some([]) => {
                    div class="empty" {
                        h2 { "No Posts Yet" }
                        p { "Start sharing your insights by creating your first blog post." }
                        a class="btn btn-primary" href="/me/admin/create" { "Create Your First Post" }
                    }
                }
                Some(posts) => {
                    table class="posts" {
                        tbody {
                            @for post in posts {
                                (post_row(post, flow))
                            }
                        }
                    }
                }
            }
        }
        @match flow {
            DeleteFlow::ModalOpen { title, error, .. } => {
                (delete_modal(title, error.as_deref()))
            }
            _ => {}
        }
    };
    admin_layout(site, "Admin Dashboard", Some(email), body)
}

/// Values the post form is rendered with.
pub struct PostFormView<'a> {
    /// The post being edited; `None` when creating.
    pub editing: Option<&'a Post>,
    pub title: &'a str,
    pub content: &'a str,
    pub errors: Option<&'a ValidationErrors>,
    pub error: Option<&'a str>,
    /// Render the draft below the form as it would be published.
    pub preview: bool,
}

fn draft_preview(title: &str, content: &str, image_url: Option<&str>) -> Markup {
    html! {
        section class="section narrow preview" aria-label="Preview" {
            h2 { "Preview" }
            article class="card" {
                h1 {
                    @if title.trim().is_empty() { "Untitled Post" } @else { (title) }
                }
                @if let Some(url) = image_url {
                    img class="feature" src=(url) alt="";
                }
                div class="content" {
                    @for paragraph in paragraphs(content) {
                        p { (paragraph) }
                    }
                }
            }
            p class="hint" { "A newly chosen image is shown once the post is saved." }
        }
    }
}

pub fn post_form(site: &SiteConfig, email: &str, view: &PostFormView<'_>) -> Markup {
    let (heading, action, submit) = match view.editing {
        Some(post) => (
            "Edit Post",
            format!("/me/admin/edit/{}", post.id),
            "Update Post",
        ),
        None => (
            "Create New Post",
            "/me/admin/create".to_string(),
            "Create Post",
        ),
    };
    let slug = slugify(view.title);
    let current_image = view.editing.and_then(|p| p.image_url.as_deref());

    let body = html! {
        section class="section narrow" {
            p { a href="/me/admin/dashboard" { "← Back to Dashboard" } }
            h1 { (heading) }
            @if let Some(message) = view.error {
                div class="notice" role="alert" { (message) }
            }
            form class="stack" method="post" action=(action) enctype="multipart/form-data" novalidate {
                label for="title" { "Post Title" }
                input id="title" class=(input_class(view.errors, "title")) type="text" name="title"
                    value=(view.title) placeholder="Enter a compelling title for your post";
                (field_error(view.errors, "title"))
                @if !slug.is_empty() {
                    p class="hint" { "URL: /blog/" (slug) }
                }

                label for="content" { "Content" }
                textarea id="content" class=(input_class(view.errors, "content")) name="content"
                    placeholder="Write your post content here. Separate paragraphs with a blank line." {
                    (view.content)
                }
                (field_error(view.errors, "content"))
                p class="hint" { (view.content.chars().count()) " characters" }

                label for="image" { "Featured Image" }
                @if let Some(url) = current_image {
                    img src=(url) alt="Current featured image" style="max-width:16rem;border-radius:.5rem";
                    p class="hint" { "Choose a new file to replace the current image." }
                }
                input id="image" type="file" name="image" accept="image/*";
                (field_error(view.errors, "image"))

                div class="actions" {
                    a class="btn btn-secondary" href="/me/admin/dashboard" { "Cancel" }
                    button class="btn btn-secondary" type="submit" name="intent" value="preview" {
                        @if view.preview { "Refresh Preview" } @else { "Show Preview" }
                    }
                    button class="btn btn-primary" type="submit" name="intent" value="save" { (submit) }
                }
            }
        }
        @if view.preview {
            (draft_preview(view.title, view.content, current_image))
        }
    };
    admin_layout(site, heading, Some(email), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post() -> Post {
        Post {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: "Finding Calm".to_string(),
            slug: "finding-calm".to_string(),
            content: "Some content".to_string(),
            image_url: None,
            user_id: Uuid::new_v4(),
            published_at: None,
        }
    }

    #[test]
    fn armed_row_shows_confirm() {
        let site = SiteConfig::default();
        let post = post();
        let flow = DeleteFlow::Armed { post_id: post.id };
        let page = dashboard(&site, "a@b.co", Some(&[post]), &flow, None).into_string();
        assert!(page.contains(">Confirm</button>"));
        assert!(!page.contains("Delete Blog Post"));
    }

    #[test]
    fn modal_starts_with_confirm_disabled() {
        let site = SiteConfig::default();
        let post = post();
        let flow = DeleteFlow::ModalOpen {
            post_id: post.id,
            title: post.title.clone(),
            error: None,
        };
        let page = dashboard(&site, "a@b.co", Some(&[post]), &flow, None).into_string();
        assert!(page.contains("Delete Blog Post"));
        assert!(page.contains(r#"id="confirm-button" class="btn btn-danger" type="submit" disabled"#));
    }

    #[test]
    fn deleting_state_shows_progress_without_modal() {
        let site = SiteConfig::default();
        let post = post();
        let flow = DeleteFlow::Deleting { post_id: post.id };
        let page = dashboard(&site, "a@b.co", Some(&[post]), &flow, None).into_string();
        assert!(page.contains("Deleting..."));
        assert!(!page.contains("Delete Blog Post"));
    }

    #[test]
    fn edit_form_shows_slug() {
        let site = SiteConfig::default();
        let post = post();
        let view = PostFormView {
            editing: Some(&post),
            title: &post.title,
            content: &post.content,
            errors: None,
            error: None,
            preview: false,
        };
        let page = post_form(&site, "a@b.co", &view).into_string();
        assert!(page.contains("/blog/finding-calm"));
        assert!(page.contains("Update Post"));
        assert!(page.contains("Show Preview"));
        assert!(!page.contains(r#"aria-label="Preview""#));
    }

    #[test]
    fn preview_renders_draft_paragraphs_and_current_image() {
        let site = SiteConfig::default();
        let mut post = post();
        post.image_url = Some("memory://images/old.png".to_string());
        let view = PostFormView {
            editing: Some(&post),
            title: "Draft <Title>",
            content: "First part.\n\nSecond part.",
            errors: None,
            error: None,
            preview: true,
        };
        let page = post_form(&site, "a@b.co", &view).into_string();
        assert!(page.contains(r#"aria-label="Preview""#));
        assert!(page.contains("<h1>Draft &lt;Title&gt;</h1>"));
        assert!(page.contains("<p>First part.</p><p>Second part.</p>"));
        assert!(page.contains(r#"<img class="feature" src="memory://images/old.png""#));
        assert!(page.contains("Refresh Preview"));
    }

    #[test]
    fn empty_preview_title_falls_back() {
        let site = SiteConfig::default();
        let view = PostFormView {
            editing: None,
            title: " ",
            content: "",
            errors: None,
            error: None,
            preview: true,
        };
        let page = post_form(&site, "a@b.co", &view).into_string();
        assert!(page.contains("<h1>Untitled Post</h1>"));
    }
}
