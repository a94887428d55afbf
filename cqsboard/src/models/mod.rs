mod category;
mod snapshot;
mod video;

pub use category::*;
pub use snapshot::*;
pub use video::*;
