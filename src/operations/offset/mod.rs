mod ring_offset_2d;

pub use ring_offset_2d::{ParallelPolicy, RingOffset2D};
