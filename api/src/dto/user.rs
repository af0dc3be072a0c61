use serde::Deserialize;
use validator::Validate;
use vb_core::domain::entities::user::{Credentials, RegisterUser};

use super::ScriptGuard;

/// Request body for `POST /api/register`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 30, message = "First name must be 2 to 30 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, max = 30, message = "Last name must be 2 to 30 characters"))]
    pub last_name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
}

impl ScriptGuard for RegisterRequest {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.password.as_str(),
        ]
    }
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
        }
    }
}

/// Request body for `POST /api/login`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcd1".to_string(),
        }
    }

    #[test]
    fn test_register_request_validation() {
        assert!(request().validate().is_ok());

        let mut short_name = request();
        short_name.first_name = "A".to_string();
        let errors = short_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));

        let mut bad_email = request();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_register_request_script_guard() {
        assert!(!request().contains_script());

        let mut scripted = request();
        scripted.last_name = "<SCRIPT>alert(1)</SCRIPT>".to_string();
        assert!(scripted.contains_script());
    }

    #[test]
    fn test_register_request_reads_camel_case() {
        let body = r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","password":"Abcd1"}"#;
        let parsed: RegisterRequest = serde_json::from_str(body).unwrap();
        assert_eq!(RegisterUser::from(parsed).first_name, "Ada");
    }
}
