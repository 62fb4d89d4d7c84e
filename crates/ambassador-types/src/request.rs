//! Request bodies.
//!
//! Every endpoint accepts an explicit shape with optional fields. Nothing is
//! trusted until `validate` has turned it into the checked form the services
//! consume.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::role::RoleId;

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Missing(field)),
    }
}

fn email(value: String) -> Result<String, ValidationError> {
    let value = value.trim().to_string();
    if !value.contains('@') {
        return Err(ValidationError::Invalid {
            field: "email",
            reason: "must contain '@'",
        });
    }
    Ok(value)
}

fn optional_email(value: Option<String>) -> Result<Option<String>, ValidationError> {
    value.map(email).transpose()
}

fn confirmed(
    password: Option<String>,
    confirm: Option<String>,
) -> Result<String, ValidationError> {
    let password = required(password, "password")?;
    if confirm.as_deref() != Some(password.as_str()) {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(password)
}

/// Plaintext secret that never shows up in `Debug` output
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// POST /api/register
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

/// Checked registration
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Secret,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<NewAccount, ValidationError> {
        let email = email(required(self.email, "email")?)?;
        let password = confirmed(self.password, self.password_confirm)?;
        Ok(NewAccount {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email,
            password: Secret(password),
        })
    }
}

/// POST /api/login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Checked login attempt
#[derive(Debug, Clone)]
pub struct LoginAttempt {
    pub email: String,
    pub password: Secret,
}

impl LoginRequest {
    pub fn validate(self) -> Result<LoginAttempt, ValidationError> {
        Ok(LoginAttempt {
            email: required(self.email, "email")?.trim().to_string(),
            password: Secret(required(self.password, "password")?),
        })
    }
}

/// PUT /api/users/info and PUT /api/users/{id}
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<i64>,
}

impl UpdateProfileRequest {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            email: optional_email(self.email)?,
            ..self
        })
    }

    /// The same update with any role change dropped (self-service edits)
    pub fn without_role(self) -> Self {
        Self {
            role_id: None,
            ..self
        }
    }
}

/// PUT /api/users/password
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl UpdatePasswordRequest {
    pub fn validate(self) -> Result<Secret, ValidationError> {
        confirmed(self.password, self.password_confirm).map(Secret)
    }
}

/// POST /api/users (administrative creation)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<i64>,
}

/// Checked administrative user creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: Option<RoleId>,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        Ok(NewUser {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: email(required(self.email, "email")?)?,
            role_id: self.role_id.map(RoleId),
        })
    }
}

/// POST /api/products and PUT /api/products/{id}
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

/// Checked new product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

impl ProductRequest {
    fn check_price(&self) -> Result<(), ValidationError> {
        match self.price {
            Some(p) if !p.is_finite() || p < 0.0 => Err(ValidationError::Invalid {
                field: "price",
                reason: "must be a non-negative number",
            }),
            _ => Ok(()),
        }
    }

    /// Validate for creation: title is mandatory
    pub fn validate_new(self) -> Result<NewProduct, ValidationError> {
        self.check_price()?;
        Ok(NewProduct {
            title: required(self.title, "title")?,
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }

    /// Validate a partial update
    pub fn validate_update(self) -> Result<Self, ValidationError> {
        self.check_price()?;
        if matches!(self.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(ValidationError::Missing("title"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            password: Some(password.to_string()),
            password_confirm: Some(confirm.to_string()),
        }
    }

    #[test]
    fn test_register_rejects_mismatched_passwords() {
        let err = register("abc", "xyz").validate().unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
    }

    #[test]
    fn test_register_rejects_missing_confirmation() {
        let req = RegisterRequest {
            password_confirm: None,
            ..register("abc", "abc")
        };
        assert_eq!(req.validate().unwrap_err(), ValidationError::PasswordMismatch);
    }

    #[test]
    fn test_register_requires_email_and_password() {
        let req = RegisterRequest {
            email: None,
            ..register("abc", "abc")
        };
        assert_eq!(req.validate().unwrap_err(), ValidationError::Missing("email"));

        let req = RegisterRequest {
            password: Some("   ".to_string()),
            ..register("abc", "abc")
        };
        assert_eq!(req.validate().unwrap_err(), ValidationError::Missing("password"));
    }

    #[test]
    fn test_register_accepts_matching_passwords() {
        let account = register("abc", "abc").validate().unwrap();
        assert_eq!(account.email, "ada@example.com");
        assert_eq!(account.password.expose(), "abc");
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let account = register("hunter2", "hunter2").validate().unwrap();
        let rendered = format!("{account:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_update_profile_checks_email_only_when_present() {
        let req = UpdateProfileRequest {
            first_name: Some("New".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UpdateProfileRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Invalid { field: "email", .. })
        ));
    }

    #[test]
    fn test_update_profile_without_role_drops_role() {
        let req = UpdateProfileRequest {
            role_id: Some(1),
            ..Default::default()
        };
        assert_eq!(req.role_id, Some(1));
        assert_eq!(req.without_role().role_id, None);
    }

    #[test]
    fn test_product_validation() {
        let req = ProductRequest {
            title: Some("Mug".to_string()),
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(req.validate_new().is_err());

        let req = ProductRequest {
            title: None,
            price: Some(3.0),
            ..Default::default()
        };
        assert_eq!(req.validate_new().unwrap_err(), ValidationError::Missing("title"));

        let update = ProductRequest {
            price: Some(9.5),
            ..Default::default()
        };
        assert!(update.validate_update().is_ok());
    }
}
