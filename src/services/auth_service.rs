//! Authentication service: registration, login, session tokens, and
//! password utilities.

use std::collections::BTreeMap;
use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, info};
use mongodb::Database;

use crate::config::CONFIG;
use crate::constants::{ERR_EMAIL_TAKEN, ERR_INVALID_CREDENTIALS, LOGIN_PATH, REGISTER_PATH};
use crate::errors::AppError;
use crate::models::{Claims, LoginForm, RegisterForm, User};
use crate::stores::{MongoUserStore, UserStore};
use crate::utils::mask_email;

/// Service for account operations.
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(db: &Database) -> Self {
        Self {
            store: Arc::new(MongoUserStore::new(db)),
        }
    }

    /// Create an AuthService over any user store (dependency injection).
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Get the underlying store (for sharing and seeding in tests).
    pub fn store(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.store)
    }

    /// Create a new account. Duplicate emails bounce back to the
    /// registration form.
    pub async fn register(&self, form: RegisterForm) -> Result<User, AppError> {
        if self.store.find_by_email(&form.email).await?.is_some() {
            return Err(AppError::Validation {
                redirect_to: REGISTER_PATH.to_string(),
                errors: BTreeMap::from([(
                    "email".to_string(),
                    vec![ERR_EMAIL_TAKEN.to_string()],
                )]),
            });
        }

        let password_hash = hash_password(&form.password)?;
        let now = mongodb::bson::DateTime::now();
        let user = User {
            id: None,
            name: form.name,
            email: form.email.to_lowercase(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let id = self.store.insert(&user).await?;
        info!("Registered user {}", mask_email(&user.email));

        Ok(User {
            id: Some(id),
            ..user
        })
    }

    /// Authenticate a user and return a signed session token.
    ///
    /// Failure deliberately does not reveal whether the email exists.
    pub async fn login(&self, form: LoginForm) -> Result<(User, String), AppError> {
        let user = self
            .store
            .find_by_email(&form.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(&form.password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        let token = generate_token(&user)?;
        info!("User {} logged in", mask_email(&user.email));

        Ok((user, token))
    }
}

/// 302 back to the login form with the standard credentials error.
fn invalid_credentials() -> AppError {
    AppError::Validation {
        redirect_to: LOGIN_PATH.to_string(),
        errors: BTreeMap::from([(
            "email".to_string(),
            vec![ERR_INVALID_CREDENTIALS.to_string()],
        )]),
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    Ok(verify(password, hash)?)
}

/// Generate a signed session token for a user.
pub fn generate_token(user: &User) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.session_lifetime_hours as usize * 3600);

    let claims = Claims {
        sub: user.id_hex(),
        email: user.email.clone(),
        exp,
        iat: now,
    };

    debug!("Generated session token for {}", mask_email(&user.email));

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.session_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decode and verify a session token.
pub fn decode_token(token: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.session_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
