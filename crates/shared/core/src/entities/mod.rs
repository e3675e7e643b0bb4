mod category;
mod configuration;
mod direction;
mod session_id;
mod setting;

pub use category::TrafficCategory;
pub use configuration::FilterConfiguration;
pub use direction::Direction;
pub use session_id::{ParseSessionIdError, SessionId};
pub use setting::FilterSetting;
