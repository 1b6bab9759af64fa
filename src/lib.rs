pub mod fake_feed;
pub mod select;
pub mod state;
