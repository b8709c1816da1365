//! Authentication service
//!
//! Users and admins are separate principals with separate tables; both log in
//! with email and password and receive an HS256 bearer token whose `role`
//! claim tells them apart.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    constants::roles,
    db::repositories::{AdminRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Admin, User},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // principal id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Freshly issued access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register_user(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        if UserRepository::exists(pool, username, email).await? {
            return Err(AppError::AlreadyExists(
                "Username or email already registered".to_string(),
            ));
        }

        let password_hash = Self::hash_password(password)?;
        let user = UserRepository::create(pool, username, email, &password_hash).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Login a user with email and password
    pub async fn login_user(
        pool: &PgPool,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(User, IssuedToken)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = Self::issue_token(&user.id, &user.username, roles::USER, jwt)?;
        Ok((user, token))
    }

    /// Register a new admin
    pub async fn register_admin(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<Admin> {
        if AdminRepository::exists(pool, username, email).await? {
            return Err(AppError::AlreadyExists(
                "Admin with this username or email already exists".to_string(),
            ));
        }

        let password_hash = Self::hash_password(password)?;
        let admin = AdminRepository::create(pool, username, email, &password_hash).await?;

        tracing::info!(admin_id = %admin.id, username = %admin.username, "Admin registered");
        Ok(admin)
    }

    /// Login an admin with email and password
    pub async fn login_admin(
        pool: &PgPool,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(Admin, IssuedToken)> {
        let admin = AdminRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &admin.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = Self::issue_token(&admin.id, &admin.username, roles::ADMIN, jwt)?;
        Ok((admin, token))
    }

    /// Sign an access token for a principal
    pub fn issue_token(
        id: &Uuid,
        username: &str,
        role: &str,
        jwt: &JwtConfig,
    ) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(jwt.expiry_hours);

        let claims = Claims {
            sub: id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: jwt.expiry_hours * 3600,
        })
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
