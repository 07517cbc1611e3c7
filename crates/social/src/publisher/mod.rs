//! Platform publisher implementations.

mod facebook;
mod instagram;
mod traits;

pub use facebook::FacebookPublisher;
pub use instagram::InstagramPublisher;
pub use traits::PlatformPublisher;
