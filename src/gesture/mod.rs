pub mod input;
pub mod machine;
pub mod presenter;

pub use input::{InputArbiter, RawInput};
pub use machine::{GestureController, PanelSpec};
pub use presenter::{GeometryProvider, PanelPresenter};
