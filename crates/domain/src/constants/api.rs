//! JSONPlaceholder REST API constants

/// Public JSONPlaceholder base URL.
pub const JSONPLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

// Endpoints
/// Posts resource.
pub const POSTS_ENDPOINT: &str = "/posts";
/// Users resource.
pub const USERS_ENDPOINT: &str = "/users";
/// Comments resource.
pub const COMMENTS_ENDPOINT: &str = "/comments";
/// Albums resource.
pub const ALBUMS_ENDPOINT: &str = "/albums";
/// Photos resource.
pub const PHOTOS_ENDPOINT: &str = "/photos";
/// Todos resource.
pub const TODOS_ENDPOINT: &str = "/todos";

// Headers
/// `Content-Type` header name.
pub const CONTENT_TYPE: &str = "Content-Type";
/// `Accept` header name.
pub const ACCEPT: &str = "Accept";
/// `Authorization` header name.
pub const AUTHORIZATION: &str = "Authorization";
/// JSON media type.
pub const APPLICATION_JSON: &str = "application/json";

// Query parameters
/// Filter by owning user.
pub const USER_ID_PARAM: &str = "userId";
/// Filter by parent post.
pub const POST_ID_PARAM: &str = "postId";

// Status codes
/// 200 OK
pub const STATUS_OK: u16 = 200;
/// 201 Created
pub const STATUS_CREATED: u16 = 201;
/// 204 No Content
pub const STATUS_NO_CONTENT: u16 = 204;
/// 400 Bad Request
pub const STATUS_BAD_REQUEST: u16 = 400;
/// 401 Unauthorized
pub const STATUS_UNAUTHORIZED: u16 = 401;
/// 403 Forbidden
pub const STATUS_FORBIDDEN: u16 = 403;
/// 404 Not Found
pub const STATUS_NOT_FOUND: u16 = 404;
/// 500 Internal Server Error
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

// Timeouts (milliseconds)
/// Default response-time budget.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Tight response-time budget.
pub const SHORT_TIMEOUT_MS: u64 = 5_000;
/// Generous response-time budget.
pub const LONG_TIMEOUT_MS: u64 = 30_000;

// Dataset expectations
/// Number of posts served by JSONPlaceholder.
pub const TOTAL_POSTS: usize = 100;
/// Number of users served by JSONPlaceholder.
pub const TOTAL_USERS: usize = 10;
/// Highest existing post id.
pub const MAX_POST_ID: u32 = 100;
