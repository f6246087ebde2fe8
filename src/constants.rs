/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to the member API
pub const USER_AGENT: &str = "glemoa-client/0.1.0";
/// Default base URL of the member API when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Path prefix under which every member API endpoint is mounted
pub const DEFAULT_SERVICE_PREFIX: &str = "/glemoa-member";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Default location of the persisted session credentials
pub const DEFAULT_CREDENTIALS_PATH: &str = ".glemoa/credentials.json";
/// Default history base path used by the route table
pub const DEFAULT_ROUTER_BASE: &str = "/";

/// Storage key holding the access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Token refresh endpoint, called without authentication
pub const REFRESH_TOKEN_PATH: &str = "member/refreshToken";
/// Lists the ids of every post the member has bookmarked
pub const BOOKMARKED_POST_IDS_PATH: &str = "bookMark/viewBookMaredPostId";
/// Toggles the bookmark on a single post
pub const TOGGLE_BOOKMARK_PATH: &str = "bookMark/doBookMark";
/// Number of unread notifications
pub const COUNT_UNREAD_PATH: &str = "notification/count-unread";
/// Posts referenced by unread notifications
pub const SEARCH_UNREAD_PATH: &str = "notification/search-unread";
/// Posts referenced by read notifications
pub const SEARCH_READ_PATH: &str = "notification/search-read";
/// Prefix for marking a single notification as read, followed by the post id
pub const MARK_READ_PATH: &str = "notification/read";
/// Marks every notification as read
pub const MARK_ALL_READ_PATH: &str = "notification/read-all";
/// Prefix for deleting a single read notification, followed by the post id
pub const DELETE_NOTIFICATION_PATH: &str = "notification/delete";
/// Deletes every read notification
pub const DELETE_ALL_NOTIFICATIONS_PATH: &str = "notification/delete-all";

/// Scheme used in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";
