use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CallableRequest {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CallableResponse<T> {
    pub result: T,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CallableErrorBody {
    pub error: ErrorDetails,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetails {
    pub status: String,
    pub message: String,
}
