//! Request payloads and data rows for the suites

use assay_domain::models::PostRequest;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::{Value, json};

/// Rows for the data-driven post creation check: title, body, user id.
const POST_ROWS: [(&str, &str, u32); 3] = [
    ("First Post", "First post body", 1),
    ("Second Post", "Second post body", 2),
    ("Third Post", "Third post body", 3),
];

/// Builds a post creation payload.
#[must_use]
pub fn build_post_request(user_id: u32, title: &str, body: &str) -> PostRequest {
    PostRequest::new(user_id, title, body)
}

/// Builds a post with a random author (1..=10) and timestamped content.
#[must_use]
pub fn build_random_post_request() -> PostRequest {
    random_post_request(&mut rand::rng(), Utc::now())
}

fn random_post_request<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> PostRequest {
    let user_id = rng.random_range(1..=10);
    let stamp = now.timestamp_millis();
    PostRequest::new(
        user_id,
        format!("Test Post {stamp}"),
        format!("This is a test post body created at {stamp}"),
    )
}

/// Builds a user object with `id`, `name` and `email`.
#[must_use]
pub fn build_user_data(id: u32, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
    })
}

/// Payloads for the data-driven post creation check.
#[must_use]
pub fn data_rows() -> Vec<PostRequest> {
    POST_ROWS
        .iter()
        .map(|&(title, body, user_id)| build_post_request(user_id, title, body))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_post_request() {
        let post = build_post_request(1, "T", "B");
        assert_eq!(post.user_id, Some(1));
        assert_eq!(post.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_random_post_request_ranges() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).single();
        let now = now.unwrap_or_default();
        let mut rng = rand::rng();
        for _ in 0..50 {
            let post = random_post_request(&mut rng, now);
            let user_id = post.user_id.unwrap_or_default();
            assert!((1..=10).contains(&user_id));
            assert_eq!(post.title.as_deref(), Some("Test Post 1700000000123"));
        }
    }

    #[test]
    fn test_build_user_data() {
        assert_eq!(
            build_user_data(3, "Ann", "ann@example.com"),
            json!({"id": 3, "name": "Ann", "email": "ann@example.com"})
        );
    }

    #[test]
    fn test_data_rows() {
        let rows = data_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].user_id, Some(3));
        assert_eq!(rows[0].body.as_deref(), Some("First post body"));
    }
}
