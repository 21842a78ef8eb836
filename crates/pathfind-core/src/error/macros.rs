//! Error macros for pathfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathfindError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex index outside the graph
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $count:expr) => {
        if $vertex >= $count {
            return Err($crate::error::PathfindError::invalid_vertex(
                $vertex, $count,
            ));
        }
    };
}
