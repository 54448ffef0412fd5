use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use async_trait::async_trait;
use uuid::Uuid;

use bloglist_core::RepoError;
use bloglist_core::domain::{Blog, User};
use bloglist_core::ports::{BaseRepository, UserRepository};
use bloglist_infra::{
    Argon2PasswordService, InMemoryUserRepository, JwtConfig, JwtTokenService,
};

use super::configure_routes;
use crate::state::AppState;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn test_state() -> AppState {
    AppState::in_memory(
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            ..JwtConfig::default()
        })),
        Arc::new(Argon2PasswordService::new()),
    )
}

async fn seed_user(state: &AppState, username: &str, password: &str) -> (User, String) {
    let hash = state.passwords.hash(password).unwrap();
    let user = state
        .users
        .insert(User::new(
            username.to_string(),
            Some(format!("{username} name")),
            hash,
        ))
        .await
        .unwrap();
    let token = state.tokens.generate_token(user.id, &user.username).unwrap();
    (user, token)
}

async fn seed_blog(state: &AppState, title: &str, owner: Option<&User>) -> Blog {
    let blog = state
        .blogs
        .insert(Blog::new(
            title.to_string(),
            "John Doe".to_string(),
            format!("https://example.com/{}", title.replace(' ', "-")),
            0,
            owner.map(|u| u.id),
        ))
        .await
        .unwrap();
    if let Some(owner) = owner {
        state.users.attach_blog(owner.id, blog.id).await.unwrap();
    }
    blog
}

/// User store whose blog list writes always fail.
struct BrokenBlogLists(InMemoryUserRepository);

#[async_trait]
impl BaseRepository<User, Uuid> for BrokenBlogLists {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        self.0.find_all().await
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        self.0.insert(entity).await
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        self.0.update(entity).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.0.delete(id).await
    }
}

#[async_trait]
impl UserRepository for BrokenBlogLists {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        self.0.find_by_username(username).await
    }

    async fn attach_blog(&self, _user_id: Uuid, _blog_id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Query("user_blogs unavailable".to_string()))
    }

    async fn detach_blog(&self, _user_id: Uuid, _blog_id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Query("user_blogs unavailable".to_string()))
    }
}

async fn blog_count(state: &AppState) -> usize {
    state.blogs.find_all().await.unwrap().len()
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

fn is_json<B>(resp: &ServiceResponse<B>) -> bool {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

// Blogs

#[actix_web::test]
async fn test_blogs_are_returned_as_json_with_id() {
    let state = test_state();
    let (owner, _) = seed_user(&state, "usertest", "sekret").await;
    seed_blog(&state, "First blog", Some(&owner)).await;
    seed_blog(&state, "Second blog", None).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/blogs").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(is_json(&resp));

    let body: Value = test::read_body_json(resp).await;
    let blogs = body.as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    for blog in blogs {
        assert!(blog["id"].is_string());
        assert!(blog.get("_id").is_none());
    }
    assert_eq!(blogs[0]["title"], "First blog");
    assert_eq!(blogs[0]["user"]["username"], "usertest");
    assert!(blogs[1]["user"].is_null());
}

#[actix_web::test]
async fn test_single_blog_lookup() {
    let state = test_state();
    let blog = seed_blog(&state, "First blog", None).await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/api/blogs/{}", blog.id)).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], blog.id.to_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/blogs/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "blog not found");
}

#[actix_web::test]
async fn test_malformatted_id_is_rejected() {
    let state = test_state();
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/blogs/5a3d5da59070081a82a3445").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "malformatted id" }));
}

#[actix_web::test]
async fn test_valid_blog_can_be_added() {
    let state = test_state();
    let (user, token) = seed_user(&state, "usertest", "sekret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Third blog",
            "author": "Alice Smith",
            "url": "https://example.com/third-blog",
            "likes": 4
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(is_json(&resp));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Third blog");
    assert_eq!(body["likes"], 4);
    assert_eq!(body["user"]["id"], user.id.to_string());

    let blogs = state.blogs.find_all().await.unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].user_id, Some(user.id));

    let stored_user = state.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored_user.blogs, vec![blogs[0].id]);
}

#[actix_web::test]
async fn test_missing_likes_defaults_to_zero() {
    let state = test_state();
    let (_, token) = seed_user(&state, "usertest", "sekret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Blog without likes",
            "author": "Test Author",
            "url": "https://example.com/no-likes"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["likes"], 0);
    assert_eq!(state.blogs.find_all().await.unwrap()[0].likes, 0);
}

#[actix_web::test]
async fn test_blog_without_required_fields_is_not_added() {
    let state = test_state();
    let (_, token) = seed_user(&state, "usertest", "sekret").await;
    seed_blog(&state, "First blog", None).await;
    let app = init_app!(state);

    let payloads = [
        json!({ "title": "", "author": "", "url": "" }),
        json!({ "author": "Test Author", "url": "https://example.com/no-title" }),
        json!({ "title": "Blog without URL", "author": "Test Author" }),
        json!({ "author": "Test Author" }),
    ];

    for payload in payloads {
        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Title, author, and URL are required");
    }

    assert_eq!(blog_count(&state).await, 1);
}

#[actix_web::test]
async fn test_blog_writes_survive_failed_blog_list_updates() {
    let mut state = test_state();
    state.users = Arc::new(BrokenBlogLists(InMemoryUserRepository::new()));
    let (user, token) = seed_user(&state, "usertest", "sekret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Unlisted blog",
            "author": "Alice Smith",
            "url": "https://example.com/unlisted"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;

    let blogs = state.blogs.find_all().await.unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(body["id"], blogs[0].id.to_string());
    assert_eq!(blogs[0].user_id, Some(user.id));
    let stored_user = state.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored_user.blogs.is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", blogs[0].id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(blog_count(&state).await, 0);
}

#[actix_web::test]
async fn test_negative_likes_are_rejected() {
    let state = test_state();
    let (_, token) = seed_user(&state, "usertest", "sekret").await;
    let blog = seed_blog(&state, "First blog", None).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Negative",
            "author": "Alice Smith",
            "url": "https://example.com/negative",
            "likes": -5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "`likes` must not be negative");

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", blog.id))
        .set_json(json!({ "likes": -1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(blog_count(&state).await, 1);
    assert_eq!(state.blogs.find_all().await.unwrap()[0].likes, 0);
}

#[actix_web::test]
async fn test_adding_blog_without_token_fails_with_401() {
    let state = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({
            "title": "Sneaky blog",
            "author": "Nobody",
            "url": "https://example.com/sneaky"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "token missing");
    assert_eq!(blog_count(&state).await, 0);
}

#[actix_web::test]
async fn test_adding_blog_with_bad_token_fails_with_401() {
    let state = test_state();
    let app = init_app!(state);

    let foreign = JwtTokenService::new(JwtConfig {
        secret: "someone-elses-secret".to_string(),
        ..JwtConfig::default()
    });
    let forged = bloglist_core::ports::TokenService::generate_token(
        &foreign,
        Uuid::new_v4(),
        "mallory",
    )
    .unwrap();

    for token in ["not-a-jwt", forged.as_str()] {
        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(bearer(token))
            .set_json(json!({ "title": "t", "author": "a", "url": "u" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "token invalid");
    }
}

#[actix_web::test]
async fn test_token_of_deleted_user_is_rejected() {
    let state = test_state();
    let (user, token) = seed_user(&state, "usertest", "sekret").await;
    state.users.delete(user.id).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "t", "author": "a", "url": "u" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "user not found");
}

#[actix_web::test]
async fn test_blog_can_be_updated() {
    let state = test_state();
    let blog = seed_blog(&state, "First blog", None).await;
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", blog.id))
        .set_json(json!({ "likes": 11 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["likes"], 11);
    assert_eq!(body["title"], "First blog");

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", blog.id))
        .set_json(json!({ "title": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", Uuid::new_v4()))
        .set_json(json!({ "likes": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_owner_can_delete_blog() {
    let state = test_state();
    let (user, token) = seed_user(&state, "usertest", "sekret").await;
    let blog = seed_blog(&state, "First blog", Some(&user)).await;
    seed_blog(&state, "Second blog", Some(&user)).await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", blog.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = state.blogs.find_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|b| b.title != "First blog"));

    let stored_user = state.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(!stored_user.blogs.contains(&blog.id));
    assert_eq!(stored_user.blogs.len(), 1);
}

#[actix_web::test]
async fn test_deleting_another_users_blog_is_forbidden() {
    let state = test_state();
    let (owner, _) = seed_user(&state, "owner", "sekret").await;
    let (_, intruder_token) = seed_user(&state, "intruder", "sekret").await;
    let blog = seed_blog(&state, "First blog", Some(&owner)).await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", blog.id))
        .insert_header(bearer(&intruder_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "only the creator can delete a blog");
    assert_eq!(blog_count(&state).await, 1);
}

#[actix_web::test]
async fn test_deleting_missing_blog_returns_404() {
    let state = test_state();
    let (_, token) = seed_user(&state, "usertest", "sekret").await;
    seed_blog(&state, "First blog", None).await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(blog_count(&state).await, 1);
}

#[actix_web::test]
async fn test_deleting_without_token_fails_with_401() {
    let state = test_state();
    let blog = seed_blog(&state, "First blog", None).await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", blog.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(blog_count(&state).await, 1);
}

// Users

#[actix_web::test]
async fn test_user_creation_succeeds_with_fresh_username() {
    let state = test_state();
    seed_user(&state, "usertest", "sekret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "mluukkai",
            "name": "Matti Luukkainen",
            "password": "salainen"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(is_json(&resp));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "mluukkai");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());

    let users = state.users.find_all().await.unwrap();
    assert_eq!(users.len(), 2);
    let stored = users.iter().find(|u| u.username == "mluukkai").unwrap();
    assert_ne!(stored.password_hash, "salainen");
}

#[actix_web::test]
async fn test_user_creation_fails_if_username_taken() {
    let state = test_state();
    seed_user(&state, "usertest", "sekret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "usertest",
            "name": "Superuser",
            "password": "salainen"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(is_json(&resp));

    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("expected `username` to be unique")
    );
    assert_eq!(state.users.find_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_user_creation_validates_input() {
    let state = test_state();
    let app = init_app!(state);

    let cases = [
        (
            json!({ "username": "ab", "password": "salainen" }),
            "Username must be at least 3 characters long",
        ),
        (
            json!({ "username": "validuser", "password": "ab" }),
            "Password must be at least 3 characters long",
        ),
        (
            json!({ "name": "Test User", "password": "salainen" }),
            "Username and password are required",
        ),
        (
            json!({ "username": "validuser", "name": "Test User" }),
            "Username and password are required",
        ),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected);
    }

    assert!(state.users.find_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_users_are_listed_with_their_blogs() {
    let state = test_state();
    let (user, _) = seed_user(&state, "viewtest", "sekret").await;
    seed_blog(&state, "First blog", Some(&user)).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(is_json(&resp));

    let body: Value = test::read_body_json(resp).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "viewtest");
    assert!(users[0].get("passwordHash").is_none());
    assert_eq!(users[0]["blogs"][0]["title"], "First blog");
}

// Login

#[actix_web::test]
async fn test_login_succeeds_with_valid_credentials() {
    let state = test_state();
    let (user, _) = seed_user(&state, "logintest", "secret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "logintest", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(is_json(&resp));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "logintest");
    assert_eq!(body["name"], "logintest name");

    let claims = state
        .tokens
        .validate_token(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_id, user.id);
}

#[actix_web::test]
async fn test_login_fails_without_revealing_cause() {
    let state = test_state();
    seed_user(&state, "logintest", "secret").await;
    let app = init_app!(state);

    let attempts = [
        json!({ "username": "logintest", "password": "wrongpassword" }),
        json!({ "username": "nonexistent", "password": "password" }),
        json!({}),
    ];

    for payload in attempts {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(is_json(&resp));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "invalid username or password" }));
    }
}

#[actix_web::test]
async fn test_login_token_authorizes_blog_creation() {
    let state = test_state();
    seed_user(&state, "logintest", "secret").await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "logintest", "password": "secret" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(token))
        .set_json(json!({ "title": "t", "author": "a", "url": "u" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

// Misc

#[actix_web::test]
async fn test_stats_summarize_stored_blogs() {
    let state = test_state();
    let app = init_app!(state);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/stats").to_request(),
    )
    .await;
    assert!(body["totalLikes"].is_null());
    assert!(body["favoriteBlog"].is_null());

    for (title, author, likes) in [
        ("React patterns", "Michael Chan", 7),
        ("Canonical string reduction", "Edsger W. Dijkstra", 12),
        ("First class tests", "Robert C. Martin", 10),
        ("Type wars", "Robert C. Martin", 2),
    ] {
        state
            .blogs
            .insert(Blog::new(
                title.to_string(),
                author.to_string(),
                "https://example.com".to_string(),
                likes,
                None,
            ))
            .await
            .unwrap();
    }

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/stats").to_request(),
    )
    .await;
    assert_eq!(body["totalLikes"], 31);
    assert_eq!(body["favoriteBlog"]["title"], "Canonical string reduction");
    assert_eq!(body["mostBlogs"], json!({ "author": "Robert C. Martin", "blogs": 2 }));
    assert_eq!(body["mostLikes"], json!({ "author": "Edsger W. Dijkstra", "likes": 12 }));
}

#[actix_web::test]
async fn test_malformed_json_gets_error_body() {
    let state = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_unknown_endpoint() {
    let state = test_state();
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nothing").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "unknown endpoint" }));
}

#[actix_web::test]
async fn test_health_check() {
    let state = test_state();
    let app = init_app!(state);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/health").to_request(),
    )
    .await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}
