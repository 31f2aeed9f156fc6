pub mod loader;
pub mod log;

pub use loader::{load_inputs, load_text, ScreeningInputs};
pub use log::ScreeningLog;
