//! Designated per-user notification channels.

/// Path prefix shared by every notification channel.
pub const CHANNEL_PREFIX: &str = "/ws/notification/";
/// Path suffix closing every notification channel.
pub const CHANNEL_SUFFIX: &str = "/";
/// Identity used when a verified email has no matching user.
pub const ANONYMOUS_USER: &str = "Anonymous";

/// Canonical channel path for a user: `/ws/notification/{user_id}/`.
pub fn designated_channel(user_id: &str) -> String {
    format!("{}{}{}", CHANNEL_PREFIX, user_id, CHANNEL_SUFFIX)
}

/// Exact string comparison against the user's designated channel.
/// No normalization: trailing slash and case must match.
pub fn is_designated_channel(path: &str, user_id: &str) -> bool {
    path == designated_channel(user_id)
}
