//! Geometry value types whose memory layout matches the Vulkan structures
//! they stand in for, so they can be passed to the API by reference.

mod clear_rect;
mod extent;
mod rect;
mod validation;

pub use clear_rect::*;
pub use extent::*;
pub use rect::*;
pub use validation::*;
