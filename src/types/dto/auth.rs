use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for the token endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Response model containing the bearer token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "bearer")
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_wire_format() {
        let response = TokenResponse {
            access_token: "abc.def.ghi".to_string(),
            token_type: "bearer".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
    }
}
