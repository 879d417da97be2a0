mod area;
mod length;
mod volume;

pub use area::{AreaMethod, RingArea};
pub use length::{Perimeter, PerimeterLengths};
pub use volume::{frustum_volume, FrustumVolume};
