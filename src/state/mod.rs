pub mod calls;
pub mod intro;
pub mod lock;
pub mod pin;
pub mod schedule;
pub mod session;

pub use lock::{Effect, HitRegions, LockScreen, LockView, MediaCommand};
pub use schedule::Task;
pub use session::GestureSession;
