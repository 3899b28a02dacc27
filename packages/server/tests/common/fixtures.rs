//! Test fixtures for seeding content and inspecting side effects.
//!
//! Tests run concurrently against the shared database, so fixtures never
//! truncate tables; tests use unique titles/emails and assert on their own
//! rows only.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_site_settings(pool: &PgPool, site_name: &str) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO site_settings (site_name, contact_email, contact_phone)
         VALUES ($1, 'hello@example.com', '+1 555 0100')
         RETURNING id",
    )
    .bind(site_name)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_hero_image(
    pool: &PgPool,
    title: &str,
    display_order: i32,
    is_active: bool,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO hero_images (title, image, position, is_active, display_order)
         VALUES ($1, 'hero/test.jpg', 'desktop', $2, $3)
         RETURNING id",
    )
    .bind(title)
    .bind(is_active)
    .bind(display_order)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_about_section(pool: &PgPool, title: &str, is_active: bool) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO about_sections (title, content, bullet_points, is_active)
         VALUES ($1, 'About copy', E'One\\nTwo', $2)
         RETURNING id",
    )
    .bind(title)
    .bind(is_active)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_service(
    pool: &PgPool,
    title: &str,
    display_order: i32,
    is_active: bool,
) -> Result<Uuid> {
    create_service_at(pool, title, display_order, is_active, 0).await
}

/// Insert a service backdated by `age_secs`, for exercising the
/// created-at tie-break within one display_order.
pub async fn create_service_at(
    pool: &PgPool,
    title: &str,
    display_order: i32,
    is_active: bool,
    age_secs: i32,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO services
             (title, service_type, description, topics, display_order, is_active, created_at)
         VALUES ($1, 'keynote', 'A service', 'Topic A, Topic B', $2, $3,
                 now() - ($4 * INTERVAL '1 second'))
         RETURNING id",
    )
    .bind(title)
    .bind(display_order)
    .bind(is_active)
    .bind(age_secs)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_impact_result(
    pool: &PgPool,
    title: &str,
    value: &str,
    display_order: i32,
    is_active: bool,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO impact_results (title, value, display_order, is_active)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(title)
    .bind(value)
    .bind(display_order)
    .bind(is_active)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_gallery_image(
    pool: &PgPool,
    title: &str,
    display_order: i32,
    is_active: bool,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO gallery_images (title, image, position, is_active, display_order)
         VALUES ($1, 'gallery/test.jpg', 'small', $2, $3)
         RETURNING id",
    )
    .bind(title)
    .bind(is_active)
    .bind(display_order)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_testimonial(
    pool: &PgPool,
    client_name: &str,
    display_order: i32,
    is_active: bool,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO testimonials
             (client_name, position, company, content, is_active, display_order)
         VALUES ($1, 'VP Operations', 'Acme Hotels', 'Wonderful session.', $2, $3)
         RETURNING id",
    )
    .bind(client_name)
    .bind(is_active)
    .bind(display_order)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_newsletter_content(
    pool: &PgPool,
    title: &str,
    is_active: bool,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO newsletter_content (title, subtitle, benefits, is_active)
         VALUES ($1, 'Insights monthly', E'Case Studies\\nEvent News', $2)
         RETURNING id",
    )
    .bind(title)
    .bind(is_active)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Insert a system log row backdated by `age_days` (for retention tests).
pub async fn create_system_log_aged(
    pool: &PgPool,
    message: &str,
    age_days: i32,
) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO system_logs (log_level, message, source, created_at)
         VALUES ('info', $1, 'tests', now() - ($2 * INTERVAL '1 day'))
         RETURNING id",
    )
    .bind(message)
    .bind(age_days)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn count_newsletter_subscriptions(pool: &PgPool, email: &str) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscriptions WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn count_system_logs_matching(pool: &PgPool, pattern: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM system_logs WHERE message LIKE $1")
        .bind(pattern)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn system_log_exists(pool: &PgPool, id: Uuid) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM system_logs WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
