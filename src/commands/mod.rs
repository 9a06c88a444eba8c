// Commands sent from the feed UI to the feed coroutine

pub mod feed_commands;

pub use feed_commands::FeedCommand;
