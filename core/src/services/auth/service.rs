//! Main authentication service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use ag_shared::utils::mask_email;

use crate::domain::entities::revocation::RevocationPolicy;
use crate::domain::entities::user::{NewUser, User, UserProfile};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AuditLogRepository, NoOpAuditLogRepository, RevocationRepository, UserRepository};
use crate::services::audit::AuditService;
use crate::services::credentials::{CredentialVerifier, PasswordHasher};
use crate::services::token::{AuthenticatedSession, TokenIssuer};

use super::validation::{SignInInput, SignUpInput};

/// Authentication service for the complete email/password flow
pub struct AuthService<U, R, H, A = NoOpAuditLogRepository>
where
    U: UserRepository,
    R: RevocationRepository,
    H: PasswordHasher,
    A: AuditLogRepository + 'static,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Store of logged-out tokens
    revocation_repository: Arc<R>,
    /// Hashes new passwords
    hasher: Arc<H>,
    /// Checks presented passwords
    verifier: CredentialVerifier<H>,
    /// Signs session tokens
    issuer: TokenIssuer,
    /// How long revocation entries must live
    policy: RevocationPolicy,
    /// Optional audit service for logging security events
    audit_service: Option<Arc<AuditService<A>>>,
}

impl<U, R, H> AuthService<U, R, H, NoOpAuditLogRepository>
where
    U: UserRepository,
    R: RevocationRepository,
    H: PasswordHasher,
{
    /// Create a new authentication service without audit logging
    pub fn new(
        user_repository: Arc<U>,
        revocation_repository: Arc<R>,
        hasher: Arc<H>,
        issuer: TokenIssuer,
    ) -> Self {
        Self::assemble(user_repository, revocation_repository, hasher, issuer, None)
    }
}

impl<U, R, H, A> AuthService<U, R, H, A>
where
    U: UserRepository,
    R: RevocationRepository,
    H: PasswordHasher,
    A: AuditLogRepository + 'static,
{
    /// Create a new authentication service with audit logging
    pub fn with_audit(
        user_repository: Arc<U>,
        revocation_repository: Arc<R>,
        hasher: Arc<H>,
        issuer: TokenIssuer,
        audit_service: Arc<AuditService<A>>,
    ) -> Self {
        Self::assemble(
            user_repository,
            revocation_repository,
            hasher,
            issuer,
            Some(audit_service),
        )
    }

    fn assemble(
        user_repository: Arc<U>,
        revocation_repository: Arc<R>,
        hasher: Arc<H>,
        issuer: TokenIssuer,
        audit_service: Option<Arc<AuditService<A>>>,
    ) -> Self {
        let policy = issuer.revocation_policy();
        Self {
            user_repository,
            revocation_repository,
            verifier: CredentialVerifier::new(Arc::clone(&hasher)),
            hasher,
            issuer,
            policy,
            audit_service,
        }
    }

    /// Register a new account and open a session for it
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token and public profile of the new user
    /// * `Err(DomainError::ValidationErr)` - Input rejected by the chain
    /// * `Err(DomainError::Auth(AuthError::DuplicateAccount))` - Email taken;
    ///   the existing account is left untouched and no token is issued
    pub async fn sign_up(&self, input: SignUpInput) -> DomainResult<AuthResponse> {
        let valid = input.prepare()?;
        let masked = mask_email(&valid.email);
        debug!(email = %masked, "Sign-up attempt");

        if self.user_repository.find_by_email(&valid.email).await?.is_some() {
            info!(email = %masked, "Sign-up rejected, email already registered");
            return Err(AuthError::DuplicateAccount.into());
        }

        let password_hash = self.hasher.hash(&valid.password).await?;
        let user = User::new(NewUser {
            email: valid.email,
            name: valid.name,
            password_hash,
        });

        // the unique key settles a race between two sign-ups for one email
        let user = self
            .user_repository
            .create(user)
            .await
            .map_err(|e| match e {
                DomainError::DuplicateEntry { .. } => AuthError::DuplicateAccount.into(),
                other => other,
            })?;

        let profile = user.profile();
        let issued = self.issuer.issue(&profile)?;

        info!(user_id = %user.id, email = %masked, "User signed up");
        if let Some(ref audit) = self.audit_service {
            audit.log_sign_up(user.id, &user.email).await;
        }

        Ok(AuthResponse::new(issued, profile))
    }

    /// Check credentials and open a session
    ///
    /// Unknown email, wrong password and inactive account all come back as
    /// the same `InvalidCredentials`.
    pub async fn sign_in(&self, input: SignInInput) -> DomainResult<AuthResponse> {
        let valid = input.prepare()?;
        let masked = mask_email(&valid.email);

        let user = match self.user_repository.find_by_email(&valid.email).await? {
            Some(user) => user,
            None => {
                return Err(self.reject_sign_in(&valid.email, None, "unknown email").await);
            }
        };

        if !self.verifier.verify(&user.password_hash, &valid.password).await {
            return Err(self
                .reject_sign_in(&valid.email, Some(&user), "wrong password")
                .await);
        }

        if !user.is_active {
            return Err(self
                .reject_sign_in(&valid.email, Some(&user), "inactive account")
                .await);
        }

        let profile = user.profile();
        let issued = self.issuer.issue(&profile)?;

        info!(user_id = %user.id, email = %masked, "User signed in");
        if let Some(ref audit) = self.audit_service {
            audit.log_sign_in(&user.email, Some(user.id), None).await;
        }

        Ok(AuthResponse::new(issued, profile))
    }

    async fn reject_sign_in(&self, email: &str, user: Option<&User>, reason: &str) -> DomainError {
        warn!(email = %mask_email(email), reason, "Sign-in rejected");
        if let Some(ref audit) = self.audit_service {
            audit.log_sign_in(email, user.map(|u| u.id), Some(reason)).await;
        }
        AuthError::InvalidCredentials.into()
    }

    /// Revoke the session's token
    ///
    /// Logging out an already revoked token succeeds.
    pub async fn logout(&self, session: &AuthenticatedSession) -> DomainResult<()> {
        self.logout_at(session, Utc::now()).await
    }

    /// Revoke the session's token as if the clock read `now`
    pub async fn logout_at(&self, session: &AuthenticatedSession, now: DateTime<Utc>) -> DomainResult<()> {
        let entry = self
            .policy
            .entry_for(&session.token, &session.claims, session.user_id, now)?;
        let purge_after = entry.purge_after;

        match self.revocation_repository.record(entry).await {
            Ok(()) => {
                info!(user_id = %session.user_id, %purge_after, "Session revoked");
            }
            Err(DomainError::DuplicateEntry { .. }) => {
                debug!(user_id = %session.user_id, "Session was already revoked");
            }
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "Failed to revoke session");
                return Err(e);
            }
        }

        if let Some(ref audit) = self.audit_service {
            audit.log_logout(session.user_id).await;
        }
        Ok(())
    }

    /// Profile of the session's user, as carried in the token
    pub async fn profile(&self, session: &AuthenticatedSession) -> UserProfile {
        if let Some(ref audit) = self.audit_service {
            audit.log_profile_access(session.user_id).await;
        }
        UserProfile {
            id: session.user_id,
            email: session.claims.email.clone(),
            name: session.claims.name.clone(),
        }
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }
}
