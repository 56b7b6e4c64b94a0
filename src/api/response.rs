use serde::{Deserialize, Serialize};

pub const CODE_OK: i32 = 0;
pub const CODE_ERROR: i32 = -1;

/// Standard response envelope. Every endpoint answers HTTP 200 with this
/// shape, failure lives in `code`/`message` and forces `data` to null.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_OK,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn empty() -> Self {
        Self {
            code: CODE_OK,
            message: "success".to_string(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: CODE_ERROR,
            message: message.into(),
            data: None,
        }
    }
}

pub type InferOut = ApiResponse<String>;
pub type EngineListOut = ApiResponse<Vec<String>>;
