pub mod exception;
pub mod param;
pub mod route;
pub mod session;

pub use exception::Exception;
pub use param::SegmentKind;
pub use route::{RoutePattern, Segment};
pub use session::CookieConfig;
