pub mod extender;
pub mod seen;
pub mod window;

pub use extender::{Match, MatchExtender};
pub use seen::SeenBytes;
pub use window::SearchWindow;
