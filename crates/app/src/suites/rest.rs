//! JSONPlaceholder posts and users checks

use assay_application::ports::HttpClient;
use assay_application::suite::{Check, CheckResult, SuiteError};
use assay_application::test_data::{build_post_request, data_rows};
use assay_application::RestApiClient;
use assay_domain::constants::api::{
    APPLICATION_JSON, POSTS_ENDPOINT, STATUS_CREATED, STATUS_NOT_FOUND, STATUS_OK, TOTAL_POSTS,
    TOTAL_USERS, USER_ID_PARAM, USERS_ENDPOINT,
};
use assay_domain::models::{PostRequest, PostResponse, UserResponse};
use assay_infrastructure::ResponseValidator;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::ensure;

const POST_ID: u32 = 1;
const USER_ID: u32 = 1;
const MISSING_POST_ID: u32 = 99_999;
const MISSING_USER_ID: u32 = 9_999;

/// Every REST check, in execution order.
pub fn checks<C: HttpClient>(client: &RestApiClient<C>) -> Vec<Check<'_>> {
    let mut checks = vec![
        Check::new("create post", move || create_post(client)),
        Check::new("create empty post", move || create_empty_post(client)),
        Check::new("get post by id", move || get_post(client)),
        Check::new("list all posts", move || list_posts(client)),
        Check::new("filter posts by user", move || posts_by_user(client)),
        Check::new("update post", move || update_post(client)),
        Check::new("patch post", move || patch_post(client)),
        Check::new("delete post", move || delete_post(client)),
        Check::new("missing post is 404", move || missing_post(client)),
    ];
    checks.extend(data_rows().into_iter().map(move |row| {
        let name = format!(
            "create post from data row '{}'",
            row.title.as_deref().unwrap_or_default()
        );
        Check::new(name, move || create_post_from_row(client, row))
    }));
    checks.extend([
        Check::new("list posts response time", move || posts_response_time(client)),
        Check::new("list all users", move || list_users(client)),
        Check::new("get user by id", move || get_user(client)),
        Check::new("user structure", move || user_structure(client)),
        Check::new("user posts", move || user_posts(client)),
        Check::new("missing user is 404", move || missing_user(client)),
        Check::new("user emails are valid", move || user_emails(client)),
    ]);
    checks
}

async fn create_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let request = build_post_request(1, "Test Title", "Test Body Content");
    let response = client.post(POSTS_ENDPOINT, &request).await?;

    let created: PostResponse = ResponseValidator::of(&response)
        .status_code(STATUS_CREATED)?
        .content_type(APPLICATION_JSON)?
        .field_not_null("id")?
        .field_equals("title", "Test Title")?
        .field_equals("body", "Test Body Content")?
        .field_equals("userId", 1)?
        .extract_as()
        .ok_or_else(|| SuiteError::failed("Created post did not match the post shape"))?;

    ensure(created.id.is_some(), "Created post should have an ID")?;
    ensure(
        created.title.as_deref() == Some("Test Title"),
        "Created post should echo its title",
    )?;
    info!("Created post with ID: {:?}", created.id);
    Ok(())
}

async fn create_empty_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    // The demo API accepts empty bodies and still answers 201.
    let response = client.post(POSTS_ENDPOINT, &PostRequest::default()).await?;
    ResponseValidator::of(&response).status_code(STATUS_CREATED)?;
    info!("Empty post creation returned status: {}", response.status);
    Ok(())
}

async fn get_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get_by_id(POSTS_ENDPOINT, POST_ID).await?;

    let post: PostResponse = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .field_equals("id", POST_ID)?
        .field_not_null("title")?
        .field_not_null("body")?
        .field_not_null("userId")?
        .response_time_below(5_000)?
        .extract_as()
        .ok_or_else(|| SuiteError::failed("Post did not match the post shape"))?;

    ensure(post.id == Some(POST_ID), "Post id should match the requested id")?;
    ensure(
        post.title.is_some() && post.body.is_some(),
        "Post should have a title and body",
    )
}

async fn list_posts<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get(POSTS_ENDPOINT).await?;
    let posts = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .list_size("$", TOTAL_POSTS)?
        .response_time_below(10_000)?
        .extract_list("$");

    ensure(
        posts.len() == TOTAL_POSTS,
        format!("Should return {TOTAL_POSTS} posts"),
    )
}

async fn posts_by_user<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client
        .get_with_query(POSTS_ENDPOINT, [(USER_ID_PARAM, USER_ID)])
        .await?;
    let posts = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .list_not_empty("$")?
        .extract_list("$");

    let expected = json!(USER_ID);
    for post in &posts {
        ensure(
            post.get("userId") == Some(&expected),
            format!("All posts should belong to user {USER_ID}"),
        )?;
    }
    info!("Found {} posts for userId {USER_ID}", posts.len());
    Ok(())
}

async fn update_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let request = build_post_request(1, "Updated Title", "Updated Body");
    let response = client.put(POSTS_ENDPOINT, POST_ID, &request).await?;
    ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .field_equals("id", POST_ID)?
        .field_equals("title", "Updated Title")?
        .field_equals("body", "Updated Body")?;
    Ok(())
}

async fn patch_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client
        .patch(POSTS_ENDPOINT, POST_ID, &json!({"title": "Patched Title"}))
        .await?;
    ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .field_equals("title", "Patched Title")?;
    Ok(())
}

async fn delete_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.delete(POSTS_ENDPOINT, POST_ID).await?;
    ResponseValidator::of(&response).status_code(STATUS_OK)?;
    info!("Post {POST_ID} deleted successfully");
    Ok(())
}

async fn missing_post<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get_by_id(POSTS_ENDPOINT, MISSING_POST_ID).await?;
    ResponseValidator::of(&response).status_code(STATUS_NOT_FOUND)?;
    Ok(())
}

async fn create_post_from_row<C: HttpClient>(client: &RestApiClient<C>, row: PostRequest) -> CheckResult {
    let response = client.post(POSTS_ENDPOINT, &row).await?;
    ResponseValidator::of(&response)
        .status_code(STATUS_CREATED)?
        .field_not_null("id")?;
    info!(
        "Data-driven post created with title: {}",
        row.title.as_deref().unwrap_or_default()
    );
    Ok(())
}

async fn posts_response_time<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get(POSTS_ENDPOINT).await?;
    ResponseValidator::of(&response).response_time_below(10_000)?;
    info!("Response time: {}ms", response.elapsed_ms());
    Ok(())
}

async fn list_users<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get(USERS_ENDPOINT).await?;
    ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .list_size("$", TOTAL_USERS)?
        .response_time_below(5_000)?;
    info!("Retrieved {TOTAL_USERS} users");
    Ok(())
}

async fn get_user<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get_by_id(USERS_ENDPOINT, USER_ID).await?;

    let user: UserResponse = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .field_equals("id", USER_ID)?
        .field_not_null("name")?
        .field_not_null("username")?
        .field_not_null("email")?
        .extract_as()
        .ok_or_else(|| SuiteError::failed("User did not match the user shape"))?;

    ensure(user.id == Some(USER_ID), "User id should match the requested id")?;
    info!(
        "Retrieved user: {} ({})",
        user.name.as_deref().unwrap_or_default(),
        user.email.as_deref().unwrap_or_default()
    );
    Ok(())
}

async fn user_structure<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get_by_id(USERS_ENDPOINT, USER_ID).await?;
    let mut validator = ResponseValidator::of(&response).status_code(STATUS_OK)?;
    for field in [
        "id", "name", "username", "email", "address", "phone", "website", "company",
    ] {
        validator = validator.field_not_null(field)?;
    }
    validator.content_type(APPLICATION_JSON)?;
    Ok(())
}

async fn user_posts<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client
        .get_with_query(POSTS_ENDPOINT, [(USER_ID_PARAM, USER_ID)])
        .await?;
    let posts = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .list_not_empty("$")?
        .extract_list("$");
    info!("User {USER_ID} has {} posts", posts.len());
    Ok(())
}

async fn missing_user<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get_by_id(USERS_ENDPOINT, MISSING_USER_ID).await?;
    ResponseValidator::of(&response).status_code(STATUS_NOT_FOUND)?;
    Ok(())
}

async fn user_emails<C: HttpClient>(client: &RestApiClient<C>) -> CheckResult {
    let response = client.get(USERS_ENDPOINT).await?;
    let users = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .extract_list("$");

    for user in &users {
        let email = user.get("email").and_then(Value::as_str);
        let Some(email) = email else {
            return Err(SuiteError::failed("User email should not be null"));
        };
        ensure(email.contains('@'), format!("Email should contain @: {email}"))?;
        let id = user.get("id").unwrap_or(&Value::Null);
        debug!("User {id} has email: {email}");
    }
    Ok(())
}
