pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod lifecycle;
pub mod palette;
pub mod particles;
pub mod pointer;
pub mod render;
pub mod scheduler;
pub mod stats;
pub mod surface;
pub mod viewport;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use lifecycle::*;
pub use palette::*;
pub use particles::*;
pub use pointer::*;
pub use render::*;
pub use scheduler::*;
pub use stats::*;
pub use surface::*;
pub use viewport::*;
