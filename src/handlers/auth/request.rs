//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH},
    utils::{validate_password, validate_username},
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(
        length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH),
        custom(function = "validate_password")
    )]
    pub password: String,
}

/// Login request (users and admins alike)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}
