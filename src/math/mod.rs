pub mod intersect_2d;
pub mod polygon_2d;
pub mod spherical;

/// 2D point type. Geographic (degrees) or planar (meters) depending on context.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
