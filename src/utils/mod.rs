pub mod stored;
pub mod time;

pub use stored::parse_stored;
pub use time::{from_millis, to_millis};
