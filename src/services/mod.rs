pub mod feed;

pub use self::feed::FeedService;
