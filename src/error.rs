use thiserror::Error;

/// Errors raised while constructing entities from response bags.
///
/// Missing or wrong-shaped data never errors (it falls back to defaults);
/// only a present, well-shaped value that violates a documented range does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} value out of range (Min = {min} : Max = {max}), got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
