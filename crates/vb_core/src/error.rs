use std::fmt;

#[derive(Debug)]
pub enum BoardError {
    MeshIncomplete { expected: usize, found: usize, missing: Vec<String> },
    UnknownZone(String),
    UnknownControlPoint(String),
    UnknownRotation(String),
    ValidationError(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::MeshIncomplete { expected, found, missing } => {
                write!(
                    f,
                    "Incomplete mesh: expected {} control points, found {} (missing: {})",
                    expected,
                    found,
                    missing.join(", ")
                )
            }
            BoardError::UnknownZone(zone) => {
                write!(f, "Unknown zone: {}", zone)
            }
            BoardError::UnknownControlPoint(point) => {
                write!(f, "Unknown control point: {}", point)
            }
            BoardError::UnknownRotation(id) => {
                write!(f, "Unknown rotation: {}", id)
            }
            BoardError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
            BoardError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            BoardError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            BoardError::DeserializationError(err.to_string())
        } else {
            BoardError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
