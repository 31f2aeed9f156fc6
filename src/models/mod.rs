pub mod skill;
pub mod screening;

pub use skill::*;
pub use screening::*;
