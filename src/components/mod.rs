pub mod app;
pub mod event_card;
pub mod event_card_state;
pub mod title_banner;
pub mod video_call;

pub use app::{App, FeedContext};
pub use event_card::EventCard;
pub use title_banner::TitleBanner;
pub use video_call::VideoCall;
