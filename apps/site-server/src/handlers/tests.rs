//! Route-level tests against the in-memory adapters.

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::Utc;
use uuid::Uuid;

use sagepath_core::PostService;
use sagepath_core::domain::{ImageUpload, Post, Session, slugify};
use sagepath_core::ports::{ImageStore, PostRepository};
use sagepath_infra::{
    InMemoryAuthService, InMemoryImageStore, InMemoryPostRepository, InMemorySessionStore,
    JwtConfig, JwtSessionTokenService,
};

use super::{configure_routes, not_found};
use crate::config::SiteConfig;
use crate::session::{SESSION_COOKIE, SessionManager};
use crate::state::AppState;

const EMAIL: &str = "admin@example.com";
const PASSWORD: &str = "correct-horse";
const BOUNDARY: &str = "sagepath-test-boundary";

const CONTENT: &str = "Healing is not linear. Some weeks feel like progress and others feel like standing still.\n\nBoth are part of the work.";

struct Fixture {
    posts: Arc<InMemoryPostRepository>,
    images: Arc<InMemoryImageStore>,
    auth: Arc<InMemoryAuthService>,
    state: AppState,
}

impl Fixture {
    fn new() -> Self {
        let posts = Arc::new(InMemoryPostRepository::new());
        let images = Arc::new(InMemoryImageStore::default());
        let auth = Arc::new(InMemoryAuthService::new().with_account(EMAIL, PASSWORD));

        let sessions = SessionManager::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(JwtSessionTokenService::new(JwtConfig::default())),
            Duration::from_secs(3600),
            false,
        );
        let state = AppState::new(
            PostService::new(posts.clone(), images.clone()),
            auth.clone(),
            sessions,
            SiteConfig::default(),
        );

        Self {
            posts,
            images,
            auth,
            state,
        }
    }

    fn session(&self) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            email: EMAIL.to_string(),
            access_token: "token".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        }
    }

    /// Cookie for a freshly established admin session.
    async fn admin_cookie(&self) -> Cookie<'static> {
        self.state.sessions.establish(self.session()).await.unwrap()
    }

    async fn seed(&self, title: &str, image_url: Option<String>) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: title.to_string(),
            slug: slugify(title),
            content: CONTENT.to_string(),
            image_url,
            user_id: Uuid::new_v4(),
            published_at: None,
        };
        self.posts.seed(post.clone()).await;
        post
    }

    async fn stored_image(&self, name: &str) -> String {
        let image = ImageUpload {
            file_name: name.to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        };
        self.images
            .upload(&self.session(), name, &image)
            .await
            .unwrap()
    }
}

macro_rules! app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($fixture.state.clone()))
                .configure(configure_routes)
                .default_service(web::to(not_found)),
        )
        .await
    };
}

fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Hand-built multipart body with text fields and an optional PNG.
fn multipart_request(
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<&[u8]>,
) -> test::TestRequest {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[actix_web::test]
async fn dashboard_redirects_to_login_without_session() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/me/admin/dashboard").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin"));
}

#[actix_web::test]
async fn forged_cookie_is_not_a_session() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(Cookie::new(SESSION_COOKIE, "not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin"));
}

#[actix_web::test]
async fn login_page_redirects_when_signed_in() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = test::TestRequest::get()
        .uri("/me/admin")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin/dashboard"));
}

#[actix_web::test]
async fn login_sets_cookie_and_opens_dashboard() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/me/admin")
        .set_form([("email", EMAIL), ("password", PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin/dashboard"));
    let cookie = session_cookie(&resp).expect("session cookie");
    assert!(cookie.http_only().unwrap_or(false));

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("No Posts Yet"));
    assert!(body.contains(EMAIL));
}

#[actix_web::test]
async fn bad_credentials_are_rejected_without_cookie() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/me/admin")
        .set_form([("email", EMAIL), ("password", "wrong-password")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&resp).is_none());
    let body = body_text(resp).await;
    assert!(body.contains("Invalid login credentials"));
    assert_eq!(fx.auth.sign_in_calls(), 1);
}

#[actix_web::test]
async fn invalid_login_form_never_calls_auth() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/me/admin")
        .set_form([("email", "not-an-email"), ("password", "123")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(resp).await;
    assert!(body.contains("Invalid email address"));
    assert!(body.contains("Password must be at least 6 characters"));
    assert_eq!(fx.auth.sign_in_calls(), 0);
}

#[actix_web::test]
async fn unavailable_auth_shows_generic_error() {
    let fx = Fixture::new();
    fx.auth.set_unavailable(true);
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/me/admin")
        .set_form([("email", EMAIL), ("password", PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(session_cookie(&resp).is_none());
    let body = body_text(resp).await;
    assert!(body.contains("An unexpected error occurred. Please try again."));
}

#[actix_web::test]
async fn logout_invalidates_the_cookie() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/me/admin/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/"));
    let removal = session_cookie(&resp).expect("removal cookie");
    assert!(removal.value().is_empty());

    // The old cookie still verifies but its session is gone.
    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin"));
}

#[actix_web::test]
async fn missing_slug_redirects_to_blog() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/blog/no-such-post").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/blog"));
}

#[actix_web::test]
async fn failed_lookup_redirects_to_blog() {
    let fx = Fixture::new();
    fx.seed("Finding Calm", None).await;
    fx.posts.fail_reads(true);
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/blog/finding-calm").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/blog"));
}

#[actix_web::test]
async fn blog_index_offers_retry_when_listing_fails() {
    let fx = Fixture::new();
    fx.posts.fail_reads(true);
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/blog").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Failed to load blog posts. Please try again later."));
    assert!(body.contains("Try Again"));
}

#[actix_web::test]
async fn home_lists_latest_posts() {
    let fx = Fixture::new();
    fx.seed("Finding Calm", None).await;
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("/blog/finding-calm"));
}

#[actix_web::test]
async fn short_title_is_rejected_before_any_remote_call() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = multipart_request(
        "/me/admin/create",
        &[("title", "Hi"), ("content", CONTENT)],
        Some(&[9, 9, 9]),
    )
    .cookie(cookie)
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(resp).await;
    assert!(body.contains("Title must be at least 3 characters"));
    // Submitted values survive the re-render.
    assert!(body.contains("Healing is not linear."));
    assert_eq!(fx.posts.write_calls(), 0);
    assert!(fx.images.is_empty().await);
}

#[actix_web::test]
async fn preview_renders_the_draft_without_saving() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = multipart_request(
        "/me/admin/create",
        &[
            ("title", "Finding Calm"),
            ("content", CONTENT),
            ("intent", "preview"),
        ],
        Some(&[1, 2, 3]),
    )
    .cookie(cookie)
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(r#"aria-label="Preview""#));
    assert!(body.contains("<p>Both are part of the work.</p>"));
    assert!(body.contains("Refresh Preview"));
    assert_eq!(fx.posts.write_calls(), 0);
    assert!(fx.images.is_empty().await);
}

#[actix_web::test]
async fn save_intent_still_creates_the_post() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = multipart_request(
        "/me/admin/create",
        &[("title", "Finding Calm"), ("content", CONTENT), ("intent", "save")],
        None,
    )
    .cookie(cookie)
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(fx.posts.len().await, 1);
}

#[actix_web::test]
async fn created_post_is_published_with_its_image() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = multipart_request(
        "/me/admin/create",
        &[("title", "Finding Calm, Again!"), ("content", CONTENT)],
        Some(&[1, 2, 3, 4]),
    )
    .cookie(cookie)
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin/dashboard"));
    assert_eq!(fx.posts.len().await, 1);
    assert_eq!(fx.images.len().await, 1);

    let req = test::TestRequest::get()
        .uri("/blog/finding-calm-again")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Finding Calm, Again!"));
    assert!(body.contains("memory://images/"));
    assert!(body.contains("Both are part of the work."));
}

#[actix_web::test]
async fn failed_write_keeps_the_form() {
    let fx = Fixture::new();
    fx.posts.fail_writes(true);
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = multipart_request(
        "/me/admin/create",
        &[("title", "Finding Calm"), ("content", CONTENT)],
        None,
    )
    .cookie(cookie)
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(resp).await;
    assert!(body.contains("Failed to create post"));
    assert!(body.contains("Finding Calm"));
}

#[actix_web::test]
async fn editing_replaces_the_image() {
    let fx = Fixture::new();
    let old_url = fx.stored_image("old.png").await;
    let post = fx.seed("Finding Calm", Some(old_url.clone())).await;
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = test::TestRequest::get()
        .uri(&format!("/me/admin/edit/{}", post.id))
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(&old_url));

    let req = multipart_request(
        &format!("/me/admin/edit/{}", post.id),
        &[("title", "Finding Calm Today"), ("content", CONTENT)],
        Some(&[5, 6, 7]),
    )
    .cookie(cookie)
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let updated = fx.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(updated.slug, "finding-calm-today");
    let new_url = updated.image_url.expect("new image");
    assert_ne!(new_url, old_url);
    assert!(fx.images.contains(&new_url).await);
    assert!(!fx.images.contains(&old_url).await);
}

#[actix_web::test]
async fn editing_unknown_post_is_not_found() {
    let fx = Fixture::new();
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = test::TestRequest::get()
        .uri(&format!("/me/admin/edit/{}", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_needs_two_clicks_and_the_phrase() {
    let fx = Fixture::new();
    let image_url = fx.stored_image("calm.png").await;
    let post = fx.seed("Finding Calm", Some(image_url.clone())).await;
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);
    let click_uri = format!("/me/admin/delete/{}", post.id);

    // First click only arms the row.
    let req = test::TestRequest::post()
        .uri(&click_uri)
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie.clone())
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains(">Confirm</button>"));
    assert!(!body.contains("Delete Blog Post"));
    assert_eq!(fx.posts.len().await, 1);

    // Second click opens the modal.
    let req = test::TestRequest::post()
        .uri(&click_uri)
        .cookie(cookie.clone())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie.clone())
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Delete Blog Post"));
    assert_eq!(fx.posts.len().await, 1);

    let req = test::TestRequest::post()
        .uri("/me/admin/delete/confirm")
        .cookie(cookie.clone())
        .set_form([("confirmation", "  Delete Blogpost ")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/me/admin/dashboard"));

    assert!(fx.posts.is_empty().await);
    assert!(!fx.images.contains(&image_url).await);

    let req = test::TestRequest::get()
        .uri("/blog/finding-calm")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/blog"));

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(!body.contains("Delete Blog Post"));
    assert!(body.contains("No Posts Yet"));
}

#[actix_web::test]
async fn wrong_phrase_keeps_the_modal_open() {
    let fx = Fixture::new();
    let post = fx.seed("Finding Calm", None).await;
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);
    let click_uri = format!("/me/admin/delete/{}", post.id);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&click_uri)
            .cookie(cookie.clone())
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/me/admin/delete/confirm")
        .cookie(cookie)
        .set_form([("confirmation", "delete")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(resp).await;
    assert!(body.contains("Delete Blog Post"));
    assert_eq!(fx.posts.len().await, 1);
}

#[actix_web::test]
async fn failed_delete_reopens_modal_with_error() {
    let fx = Fixture::new();
    let post = fx.seed("Finding Calm", None).await;
    fx.posts.fail_deletes(true);
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);
    let click_uri = format!("/me/admin/delete/{}", post.id);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&click_uri)
            .cookie(cookie.clone())
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/me/admin/delete/confirm")
        .cookie(cookie.clone())
        .set_form([("confirmation", "delete blogpost")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Delete Blog Post"));
    assert!(body.contains("Failed to delete post from database"));
    assert_eq!(fx.posts.len().await, 1);
}

#[actix_web::test]
async fn dropped_confirm_still_finishes_the_delete() {
    let fx = Fixture::new();
    let post = fx.seed("Finding Calm", None).await;
    let other = fx.seed("Second Post", None).await;
    fx.posts.delay_deletes(Duration::from_millis(200));
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);
    let click_uri = format!("/me/admin/delete/{}", post.id);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&click_uri)
            .cookie(cookie.clone())
            .to_request();
        test::call_service(&app, req).await;
    }

    // The client goes away while the store is still deleting.
    let req = test::TestRequest::post()
        .uri("/me/admin/delete/confirm")
        .cookie(cookie.clone())
        .set_form([("confirmation", "delete blogpost")])
        .to_request();
    let early =
        tokio::time::timeout(Duration::from_millis(20), test::call_service(&app, req)).await;
    assert!(early.is_err());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(fx.posts.len().await, 1);

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie.clone())
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(!body.contains("Deleting..."));
    assert!(!body.contains("Delete Blog Post"));

    // The flow accepts new clicks again.
    let req = test::TestRequest::post()
        .uri(&format!("/me/admin/delete/{}", other.id))
        .cookie(cookie.clone())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains(">Confirm</button>"));
}

#[actix_web::test]
async fn cancel_returns_to_idle() {
    let fx = Fixture::new();
    let post = fx.seed("Finding Calm", None).await;
    let cookie = fx.admin_cookie().await;
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri(&format!("/me/admin/delete/{}", post.id))
        .cookie(cookie.clone())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/me/admin/delete/cancel")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get()
        .uri("/me/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(!body.contains(">Confirm</button>"));
    assert_eq!(fx.posts.len().await, 1);
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/no/such/page").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Page Not Found"));
}

#[actix_web::test]
async fn health_reports_ok() {
    let fx = Fixture::new();
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
