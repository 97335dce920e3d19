//! Connection gatekeeper: decides whether a socket may attach to the requested channel.
//!
//! Every outcome other than "verified user on their own channel" is `false`. The gate
//! only computes the decision; closing unauthorized sockets is left to the handler.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::error::AppResult;
use crate::models::{
    first_value, is_designated_channel, ConnectionContext, Verification, ANONYMOUS_USER,
    AUTHORIZATION_PARAM,
};
use crate::services::{TokenVerifier, UserDirectory};

#[derive(Clone)]
pub struct Gatekeeper {
    verifier: Arc<dyn TokenVerifier>,
    directory: Arc<dyn UserDirectory>,
}

impl Gatekeeper {
    pub fn new(verifier: Arc<dyn TokenVerifier>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            verifier,
            directory,
        }
    }

    /// Run the check for a connection and record the result in `user_auth`.
    pub async fn annotate(&self, ctx: &mut ConnectionContext) {
        ctx.user_auth = self.authorize(&ctx.query, &ctx.path).await;
    }

    /// `false` without any outbound call when no `Authorization` parameter is present.
    pub async fn authorize(&self, query: &HashMap<String, Vec<String>>, path: &str) -> bool {
        match first_value(query, AUTHORIZATION_PARAM) {
            Some(token) => self.is_authenticated(token, path).await,
            None => {
                debug!(path = %path, "no token, connection not authorized");
                false
            }
        }
    }

    /// Verify the token, resolve the user and match the path. Faults are logged and deny.
    #[instrument(skip_all, fields(path = %path, token = %token_fingerprint(token)))]
    pub async fn is_authenticated(&self, token: &str, path: &str) -> bool {
        match self.check(token, path).await {
            Ok(allowed) => {
                debug!(allowed, "authorization decided");
                allowed
            }
            Err(e) => {
                warn!(error = %e, "authorization check failed, denying");
                false
            }
        }
    }

    async fn check(&self, token: &str, path: &str) -> AppResult<bool> {
        let email = match self.verifier.verify(token).await?.into_verification() {
            Verification::Verified(email) => email,
            Verification::Rejected => {
                debug!("token rejected by auth service");
                return Ok(false);
            }
            Verification::Unverified => {
                debug!("email not verified");
                return Ok(false);
            }
            Verification::MissingEmail => {
                warn!("auth service verified token without an email");
                return Ok(false);
            }
        };
        let user_id = self.get_user_id(&email).await?;
        Ok(is_designated_channel(path, &user_id))
    }

    /// User id as a string, or `"Anonymous"` when no user has this email.
    pub async fn get_user_id(&self, email: &str) -> AppResult<String> {
        match self.directory.find_user_id(email).await? {
            Some(id) => Ok(id),
            None => {
                warn!("verified email has no matching user, resolving as {}", ANONYMOUS_USER);
                Ok(ANONYMOUS_USER.to_string())
            }
        }
    }
}

/// Short SHA-256 prefix used to correlate a token in logs without exposing it.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..6])
}
