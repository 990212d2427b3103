//! Integration tests for article listing, filtering, and pagination.
//!
//! Exercises `ArticleRepo::list` / `ArticleRepo::count` against a real
//! database:
//! - Page windows are 1-indexed and the total ignores pagination
//! - Status and author filters combine with the liveness check
//! - Keyword search matches title or body, case-insensitively
//! - Keyword search sees content updates
//! - Missing or invalid page parameters fall back to defaults
//! - Soft-deleted rows never appear in results or totals
//! - The joined author name prefers nickname over username
//! - View-count bumps leave `updated_at` alone

use sqlx::PgPool;
use vellum_db::models::article::{ArticleListQuery, CreateArticle};
use vellum_db::models::user::{CreateUser, User};
use vellum_db::repositories::{ArticleRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str, nickname: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "test-hash".to_string(),
            nickname: nickname.to_string(),
        },
    )
    .await
    .unwrap()
}

fn published(title: &str, content: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        content: content.to_string(),
        cover: None,
        summary: None,
        status: Some(1),
    }
}

fn query() -> ArticleListQuery {
    ArticleListQuery::default()
}

// ---------------------------------------------------------------------------
// Test: page window and total
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination_window_and_total(pool: PgPool) {
    let author = seed_user(&pool, "prolific", "").await;
    for n in 1..=25 {
        ArticleRepo::create(&pool, author.id, &published(&format!("Post {n:02}"), "body"))
            .await
            .unwrap();
    }

    let q = ArticleListQuery {
        page: Some(2),
        page_size: Some(10),
        ..query()
    };
    let items = ArticleRepo::list(&pool, &q).await.unwrap();
    let total = ArticleRepo::count(&pool, &q).await.unwrap();

    assert_eq!(total, 25, "total counts every match, not the page");
    assert_eq!(items.len(), 10);
    // Newest first: page 2 of 10 holds posts 15 down to 06.
    assert_eq!(items[0].article.title, "Post 15");
    assert_eq!(items[9].article.title, "Post 06");

    let last_page = ArticleRepo::list(
        &pool,
        &ArticleListQuery {
            page: Some(3),
            page_size: Some(10),
            ..query()
        },
    )
    .await
    .unwrap();
    assert_eq!(last_page.len(), 5, "final page is partial");
}

// ---------------------------------------------------------------------------
// Test: status filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_filter(pool: PgPool) {
    let author = seed_user(&pool, "mixed", "").await;
    for n in 1..=2 {
        ArticleRepo::create(
            &pool,
            author.id,
            &CreateArticle {
                title: format!("Draft {n}"),
                content: "wip".to_string(),
                cover: None,
                summary: None,
                status: Some(0),
            },
        )
        .await
        .unwrap();
    }
    for n in 1..=3 {
        ArticleRepo::create(&pool, author.id, &published(&format!("Live {n}"), "done"))
            .await
            .unwrap();
    }

    let q = ArticleListQuery {
        status: Some(1),
        ..query()
    };
    let items = ArticleRepo::list(&pool, &q).await.unwrap();
    let total = ArticleRepo::count(&pool, &q).await.unwrap();

    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|a| a.article.status == 1));
}

// ---------------------------------------------------------------------------
// Test: author filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_author_filter(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "").await;
    let bob = seed_user(&pool, "bob", "").await;
    for n in 1..=2 {
        ArticleRepo::create(&pool, alice.id, &published(&format!("Alice {n}"), "hers"))
            .await
            .unwrap();
    }
    for n in 1..=3 {
        ArticleRepo::create(&pool, bob.id, &published(&format!("Bob {n}"), "his"))
            .await
            .unwrap();
    }

    let q = ArticleListQuery {
        author_id: Some(bob.id),
        ..query()
    };
    assert_eq!(ArticleRepo::count(&pool, &q).await.unwrap(), 3);
    let items = ArticleRepo::list(&pool, &q).await.unwrap();
    assert!(items.iter().all(|a| a.article.author_id == bob.id));
}

// ---------------------------------------------------------------------------
// Test: keyword matches title or body, case-insensitively
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_keyword_matches_title_or_content(pool: PgPool) {
    let author = seed_user(&pool, "writer", "").await;
    ArticleRepo::create(
        &pool,
        author.id,
        &published("Ownership in practice", "moves and borrows"),
    )
    .await
    .unwrap();
    ArticleRepo::create(
        &pool,
        author.id,
        &published("Gardening notes", "thoughts on ownership of land"),
    )
    .await
    .unwrap();
    ArticleRepo::create(&pool, author.id, &published("Sourdough", "flour and water"))
        .await
        .unwrap();

    let q = ArticleListQuery {
        keyword: Some("OWNERSHIP".to_string()),
        ..query()
    };
    let items = ArticleRepo::list(&pool, &q).await.unwrap();
    assert_eq!(items.len(), 2, "matches title of one, body of the other");
    assert_eq!(ArticleRepo::count(&pool, &q).await.unwrap(), 2);

    let none = ArticleRepo::list(
        &pool,
        &ArticleListQuery {
            keyword: Some("quantum".to_string()),
            ..query()
        },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Test: keyword search sees content updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_keyword_sees_content_updates(pool: PgPool) {
    let author = seed_user(&pool, "editor", "").await;
    let article = ArticleRepo::create(&pool, author.id, &published("Post", "about alpacas"))
        .await
        .unwrap();

    let patch = vellum_db::models::article::UpdateArticle {
        content: Some("about capuchins".to_string()),
        ..Default::default()
    };
    ArticleRepo::update(&pool, article.id, &patch)
        .await
        .unwrap()
        .expect("article exists");

    let old = ArticleListQuery {
        keyword: Some("alpacas".to_string()),
        ..query()
    };
    assert!(ArticleRepo::list(&pool, &old).await.unwrap().is_empty());

    let new = ArticleListQuery {
        keyword: Some("capuchins".to_string()),
        ..query()
    };
    assert_eq!(ArticleRepo::list(&pool, &new).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: invalid page parameters fall back to defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_defaults_applied_for_invalid_page_params(pool: PgPool) {
    let author = seed_user(&pool, "dozen", "").await;
    for n in 1..=12 {
        ArticleRepo::create(&pool, author.id, &published(&format!("N{n}"), "body"))
            .await
            .unwrap();
    }

    // Zero and negative values behave like an absent parameter.
    for (page, page_size) in [(None, None), (Some(0), Some(0)), (Some(-1), Some(-5))] {
        let items = ArticleRepo::list(
            &pool,
            &ArticleListQuery {
                page,
                page_size,
                ..query()
            },
        )
        .await
        .unwrap();
        assert_eq!(items.len(), 10, "default page 1 of size 10");
    }

    let second = ArticleRepo::list(
        &pool,
        &ArticleListQuery {
            page: Some(2),
            ..query()
        },
    )
    .await
    .unwrap();
    assert_eq!(second.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: soft-deleted rows are invisible to list and count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleted_excluded(pool: PgPool) {
    let author = seed_user(&pool, "culler", "").await;
    let mut ids = Vec::new();
    for n in 1..=3 {
        let a = ArticleRepo::create(&pool, author.id, &published(&format!("Keep {n}"), "body"))
            .await
            .unwrap();
        ids.push(a.id);
    }
    assert!(ArticleRepo::soft_delete(&pool, ids[1]).await.unwrap());

    let items = ArticleRepo::list(&pool, &query()).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|a| a.article.id != ids[1]));
    assert_eq!(ArticleRepo::count(&pool, &query()).await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Test: author name prefers nickname, falls back to username
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_author_name_prefers_nickname(pool: PgPool) {
    let named = seed_user(&pool, "plain_handle", "Witty Writer").await;
    let unnamed = seed_user(&pool, "bare_handle", "").await;
    ArticleRepo::create(&pool, named.id, &published("Named", "body"))
        .await
        .unwrap();
    ArticleRepo::create(&pool, unnamed.id, &published("Unnamed", "body"))
        .await
        .unwrap();

    let items = ArticleRepo::list(&pool, &query()).await.unwrap();
    let by_title = |t: &str| {
        items
            .iter()
            .find(|a| a.article.title == t)
            .expect("listed")
    };
    assert_eq!(by_title("Named").author_name, "Witty Writer");
    assert_eq!(by_title("Unnamed").author_name, "bare_handle");
}

// ---------------------------------------------------------------------------
// Test: view-count bumps leave updated_at alone
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_view_count_does_not_touch_updated_at(pool: PgPool) {
    let author = seed_user(&pool, "viewer", "").await;
    let article = ArticleRepo::create(&pool, author.id, &published("Watched", "body"))
        .await
        .unwrap();

    ArticleRepo::increment_view_count(&pool, article.id)
        .await
        .unwrap();
    ArticleRepo::increment_view_count(&pool, article.id)
        .await
        .unwrap();

    let reloaded = ArticleRepo::find_by_id(&pool, article.id)
        .await
        .unwrap()
        .expect("article exists");
    assert_eq!(reloaded.view_count, 2);
    assert_eq!(
        reloaded.updated_at, article.updated_at,
        "view traffic is not an edit"
    );
}
