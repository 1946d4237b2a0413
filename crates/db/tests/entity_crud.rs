//! Integration tests for the content repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create / read / patch / delete round trips
//! - Display ordering and active-only filtering
//! - Unique constraints on user accounts
//! - Service media helpers

use geoline_core::content::ProjectStatus;
use geoline_db::models::blog::{CreateBlogPost, UpdateBlogPost};
use geoline_db::models::carousel::{CreateCarouselSlide, UpdateCarouselSlide};
use geoline_db::models::contact::CreateContactSubmission;
use geoline_db::models::faq::CreateFaq;
use geoline_db::models::portfolio::CreatePortfolioProject;
use geoline_db::models::service::CreateService;
use geoline_db::models::statistic::CreateStatistic;
use geoline_db::models::user::CreateUser;
use geoline_db::repositories::{
    BlogRepo, CarouselRepo, ContactSubmissionRepo, FaqRepo, PortfolioRepo, ServiceRepo,
    StatisticRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_slide(title: &str, order: i32, active: bool) -> CreateCarouselSlide {
    CreateCarouselSlide {
        title: title.to_string(),
        subtitle: None,
        image_path: format!("carousel/{title}.jpg"),
        button_text: None,
        button_link: None,
        sort_order: Some(order),
        is_active: Some(active),
    }
}

fn new_service(title: &str) -> CreateService {
    CreateService {
        title: title.to_string(),
        description: None,
        image_path: "services/main.jpg".to_string(),
        images: None,
        video_url: None,
        sort_order: None,
        is_active: None,
    }
}

fn new_project(title: &str, status: Option<ProjectStatus>) -> CreatePortfolioProject {
    CreatePortfolioProject {
        title: title.to_string(),
        description: None,
        image_path: format!("portfolio/{title}.jpg"),
        status,
        sort_order: None,
        is_active: None,
    }
}

fn new_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake".to_string(),
        is_superuser: false,
    }
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_carousel_crud(pool: PgPool) {
    let slide = CarouselRepo::create(&pool, &new_slide("hero", 0, true))
        .await
        .unwrap();
    assert_eq!(slide.sort_order, 0);
    assert!(slide.is_active);

    let found = CarouselRepo::find_by_id(&pool, slide.id).await.unwrap();
    assert_eq!(found.unwrap().title, "hero");

    let patch = UpdateCarouselSlide {
        subtitle: Some("new subtitle".into()),
        ..Default::default()
    };
    let updated = CarouselRepo::update(&pool, slide.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.subtitle.as_deref(), Some("new subtitle"));
    assert_eq!(updated.title, "hero", "unset fields keep their value");

    let replaced = CarouselRepo::set_image_path(&pool, slide.id, "carousel/new.jpg")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.image_path, "carousel/new.jpg");

    let deleted = CarouselRepo::delete(&pool, slide.id).await.unwrap().unwrap();
    assert_eq!(deleted.image_path, "carousel/new.jpg");
    assert!(CarouselRepo::find_by_id(&pool, slide.id).await.unwrap().is_none());
    assert!(CarouselRepo::delete(&pool, slide.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = CarouselRepo::update(&pool, 9999, &UpdateCarouselSlide::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_orders_and_filters(pool: PgPool) {
    CarouselRepo::create(&pool, &new_slide("third", 3, true)).await.unwrap();
    CarouselRepo::create(&pool, &new_slide("first", 1, true)).await.unwrap();
    CarouselRepo::create(&pool, &new_slide("hidden", 2, false)).await.unwrap();

    let all = CarouselRepo::list(&pool, false, 100, 0).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["first", "hidden", "third"]);

    let active = CarouselRepo::list(&pool, true, 100, 0).await.unwrap();
    let titles: Vec<&str> = active.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["first", "third"]);

    let page = CarouselRepo::list(&pool, false, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title, "hidden");
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_status_default_and_filter(pool: PgPool) {
    let default = PortfolioRepo::create(&pool, &new_project("a", None)).await.unwrap();
    assert_eq!(default.status, ProjectStatus::Future);

    PortfolioRepo::create(&pool, &new_project("b", Some(ProjectStatus::Completed)))
        .await
        .unwrap();

    let completed = PortfolioRepo::list(&pool, false, Some(ProjectStatus::Completed), 100, 0)
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "b");

    let all = PortfolioRepo::list(&pool, false, None, 100, 0).await.unwrap();
    assert_eq!(all.len(), 2);
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_service_images_keep_existing_primary(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Bathymetry")).await.unwrap();

    let updated = ServiceRepo::set_images(
        &pool,
        service.id,
        r#"["services/a.jpg"]"#,
        Some("services/a.jpg"),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.images.as_deref(), Some(r#"["services/a.jpg"]"#));
    assert_eq!(updated.image_path, "services/main.jpg");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_service_images_fill_empty_primary(pool: PgPool) {
    let mut input = new_service("Sonar");
    input.image_path = String::new();
    let service = ServiceRepo::create(&pool, &input).await.unwrap();

    let updated = ServiceRepo::set_images(&pool, service.id, "[]", Some("services/b.jpg"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.image_path, "services/b.jpg");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_service_video_set_and_clear(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("3D")).await.unwrap();

    let with_video = ServiceRepo::set_video(
        &pool,
        service.id,
        Some("services/videos/clip.mp4"),
        Some("services/thumb.jpg"),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(with_video.video_url.as_deref(), Some("services/videos/clip.mp4"));
    assert_eq!(with_video.image_path, "services/thumb.jpg");

    let cleared = ServiceRepo::set_video(&pool, service.id, None, None)
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.video_url.is_none());
    assert_eq!(cleared.image_path, "services/thumb.jpg");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_image_exists_matches_file_name(pool: PgPool) {
    ServiceRepo::create(&pool, &new_service("x")).await.unwrap();
    assert!(ServiceRepo::image_exists(&pool, "main.jpg").await.unwrap());
    assert!(!ServiceRepo::image_exists(&pool, "other.jpg").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_image_exists_treats_wildcards_literally(pool: PgPool) {
    let mut input = new_service("x");
    input.image_path = "services/site_1.jpg".into();
    ServiceRepo::create(&pool, &input).await.unwrap();

    assert!(ServiceRepo::image_exists(&pool, "site_1.jpg").await.unwrap());
    assert!(!ServiceRepo::image_exists(&pool, "site%.jpg").await.unwrap());
    assert!(!ServiceRepo::image_exists(&pool, "site_2.jpg").await.unwrap());
    assert!(!ServiceRepo::image_exists(&pool, "sit__1.jpg").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_service_set_image_path_with_and_without_gallery(pool: PgPool) {
    let mut input = new_service("x");
    input.images = Some(r#"["services/main.jpg"]"#.into());
    let service = ServiceRepo::create(&pool, &input).await.unwrap();

    let kept = ServiceRepo::set_image_path(&pool, service.id, "services/a.jpg", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.image_path, "services/a.jpg");
    assert_eq!(kept.images.as_deref(), Some(r#"["services/main.jpg"]"#));

    let swapped = ServiceRepo::set_image_path(
        &pool,
        service.id,
        "services/b.jpg",
        Some(r#"["services/b.jpg"]"#),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(swapped.images.as_deref(), Some(r#"["services/b.jpg"]"#));

    let missing = ServiceRepo::set_image_path(&pool, 9999, "services/c.jpg", None)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_blog_published_filter_and_patch(pool: PgPool) {
    let draft = BlogRepo::create(
        &pool,
        &CreateBlogPost {
            title: "Draft".into(),
            excerpt: None,
            content: None,
            image_path: None,
            author: None,
            category: None,
            is_published: None,
            published_at: None,
        },
    )
    .await
    .unwrap();
    assert!(!draft.is_published);
    assert!(draft.published_at.is_none());

    assert!(BlogRepo::list(&pool, true, 100, 0).await.unwrap().is_empty());

    let now = chrono::Utc::now();
    let published = BlogRepo::update(
        &pool,
        draft.id,
        &UpdateBlogPost {
            is_published: Some(true),
            published_at: Some(now),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(published.is_published);
    assert!(published.published_at.is_some());
    assert_eq!(BlogRepo::list(&pool, true, 100, 0).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// FAQ, statistics, submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_faq_delete_reports_rows(pool: PgPool) {
    let faq = FaqRepo::create(
        &pool,
        &CreateFaq {
            question: "Q?".into(),
            answer: "A.".into(),
            sort_order: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert!(FaqRepo::delete(&pool, faq.id).await.unwrap());
    assert!(!FaqRepo::delete(&pool, faq.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_statistic_label_exists(pool: PgPool) {
    StatisticRepo::create(
        &pool,
        &CreateStatistic {
            label: "Projects".into(),
            value: 789,
            icon: Some("flaticon-address".into()),
            sort_order: Some(3),
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert!(StatisticRepo::label_exists(&pool, "Projects").await.unwrap());
    assert!(!StatisticRepo::label_exists(&pool, "Clients").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_submission_unread_filter(pool: PgPool) {
    let input = CreateContactSubmission {
        name: "Aysel".into(),
        email: "aysel@example.com".into(),
        subject: None,
        message: "Hello".into(),
    };
    let first = ContactSubmissionRepo::create(&pool, &input).await.unwrap();
    ContactSubmissionRepo::create(&pool, &input).await.unwrap();
    assert!(!first.is_read);

    let read = ContactSubmissionRepo::mark_read(&pool, first.id)
        .await
        .unwrap()
        .unwrap();
    assert!(read.is_read);

    let unread = ContactSubmissionRepo::list(&pool, true, 100, 0).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_ne!(unread[0].id, first.id);

    let all = ContactSubmissionRepo::list(&pool, false, 100, 0).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id > all[1].id, "newest first");
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_unique_constraints(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("admin", "admin@geoline.com"))
        .await
        .unwrap();
    assert!(user.is_active);
    assert!(!user.is_superuser);

    let dup = UserRepo::create(&pool, &new_user("admin", "other@geoline.com")).await;
    let err = dup.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_users_username"));

    assert!(UserRepo::exists_by_username_or_email(&pool, "nobody", "admin@geoline.com")
        .await
        .unwrap());
    assert!(!UserRepo::exists_by_username_or_email(&pool, "nobody", "nobody@x.com")
        .await
        .unwrap());

    assert!(UserRepo::set_active(&pool, user.id, false).await.unwrap());
    let reloaded = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert!(!reloaded.is_active);
}
