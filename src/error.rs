use thiserror::Error;

/// Top-level error type for the Taludis excavation kernel.
#[derive(Debug, Error)]
pub enum TaludisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Errors related to ring geometry and offset construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("ring needs at least 3 distinct vertices, got {0}")]
    TooFewVertices(usize),

    #[error("zero-length edge at index {index}")]
    DegenerateEdge { index: usize },

    #[error("offset lines meeting at vertex {vertex} are parallel")]
    ParallelOffsetLines { vertex: usize },

    #[error("offset vertex {vertex} is not finite")]
    NonFinite { vertex: usize },

    #[error("offset edge {edge} collapsed or reversed")]
    OffsetCollapsed { edge: usize },
}

/// Errors related to excavation parameters and calculator inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("slope angle {0}° must lie strictly between 0° and 90°")]
    DegenerateAngle(f64),

    #[error("depth {0} m must be positive and finite")]
    InvalidDepth(f64),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to coordinate reference systems.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("coordinate reference system {0} is not registered")]
    UnregisteredCrs(String),

    #[error("invalid projection definition for {crs}: {reason}")]
    InvalidDefinition { crs: &'static str, reason: String },

    #[error("projection to {crs} failed: {reason}")]
    Transform { crs: &'static str, reason: String },
}

/// Convenience type alias for results using [`TaludisError`].
pub type Result<T> = std::result::Result<T, TaludisError>;
