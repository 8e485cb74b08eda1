pub mod atom;

pub use atom::render_feed;

// fixed feed identity
pub const FEED_TITLE: &str = "OpenBSD Current Updates";
pub const FEED_SITE: &str = "http://openbsd-current-rss.appspot.com";
pub const FEED_AUTHOR_NAME: &str = "sthen";
pub const FEED_AUTHOR_EMAIL: &str = "sthen@openbsd.org";
