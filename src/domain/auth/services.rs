use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Session, User};
use super::errors::{AuthError, RepositoryError};
use super::ports::{PasswordHasher, SessionRepository, UserRepository};
use super::value_objects::{CandidateStatus, Decision, Email, Password, SessionToken};

/// Configuration for the authentication service
#[derive(Debug, Clone, Copy)]
pub struct AuthServiceConfig {
  /// Lifetime of an issued session, in seconds
  pub session_ttl_seconds: i64,
}

/// Authentication service implementing core business logic
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  session_repo: Arc<dyn SessionRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  config: AuthServiceConfig,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      user_repo,
      session_repo,
      password_hasher,
      config,
    }
  }

  /// Registers a new candidate account.
  ///
  /// The account is created with `role = user` and `status = pending`;
  /// only an admin decision later moves it out of `pending`.
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` if the email is already taken.
  pub async fn register(
    &self,
    name: String,
    phone: String,
    email: Email,
    password: Password,
  ) -> Result<User, AuthError> {
    if let Some(_existing) = self.user_repo.find_by_email(&email).await? {
      return Err(AuthError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    let user = User::register(name, phone, email.into_inner(), password_hash.into_inner());

    // A concurrent registration can still race the uniqueness check above;
    // the unique index reports it as a duplicate key.
    match self.user_repo.create(user).await {
      Ok(user) => Ok(user),
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AuthError::EmailAlreadyExists)
      }
      Err(e) => Err(e),
    }
  }

  /// Authenticates a user and issues a new session.
  ///
  /// # Returns
  /// A tuple containing (User, Session, SessionToken) on success. The plain
  /// token is returned exactly once; only its hash is persisted.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or a wrong
  /// password, with no state change in either case.
  pub async fn login(
    &self,
    email: Email,
    password: Password,
  ) -> Result<(User, Session, SessionToken), AuthError> {
    let user = self
      .user_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    let password_hash = super::value_objects::PasswordHash::from_hash(&user.password_hash)?;

    let is_valid = self.password_hasher.verify(&password, &password_hash).await?;
    if !is_valid {
      return Err(AuthError::InvalidCredentials);
    }

    let (session, token) = self.issue_session(user.id).await?;

    Ok((user, session, token))
  }

  /// Logs out a user by invalidating their session token.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if the session is not found.
  pub async fn logout(&self, token: SessionToken) -> Result<(), AuthError> {
    let session = self
      .session_repo
      .find_by_token_hash(&token.hash())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    self.session_repo.delete(session.id).await?;

    Ok(())
  }

  /// Rotates a session: the presented token is invalidated and a fresh one
  /// issued for the same user.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if the presented token does not
  /// resolve to a live session.
  pub async fn refresh(
    &self,
    token: SessionToken,
  ) -> Result<(User, Session, SessionToken), AuthError> {
    let session = self.resolve_session(&token).await?;

    let user = self
      .user_repo
      .find_by_id(session.user_id)
      .await?
      .ok_or(AuthError::UserNotFound)?;

    self.session_repo.delete(session.id).await?;

    let (new_session, new_token) = self.issue_session(user.id).await?;

    Ok((user, new_session, new_token))
  }

  /// Validates a session token and returns the associated user.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if the session is invalid or
  /// expired; an expired session is deleted on sight.
  pub async fn validate_session(&self, token: SessionToken) -> Result<User, AuthError> {
    let session = self.resolve_session(&token).await?;

    let user = self
      .user_repo
      .find_by_id(session.user_id)
      .await?
      .ok_or(AuthError::UserNotFound)?;

    Ok(user)
  }

  /// Looks up a live session for `token`, evicting it if expired
  async fn resolve_session(&self, token: &SessionToken) -> Result<Session, AuthError> {
    let session = self
      .session_repo
      .find_by_token_hash(&token.hash())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    if session.is_expired() {
      self.session_repo.delete(session.id).await?;
      return Err(AuthError::InvalidSession);
    }

    Ok(session)
  }

  async fn issue_session(&self, user_id: Uuid) -> Result<(Session, SessionToken), AuthError> {
    let token = SessionToken::generate();
    let session = Session::with_duration(
      user_id,
      token.hash().into_inner(),
      Duration::seconds(self.config.session_ttl_seconds),
    );

    let created = self.session_repo.create(session).await?;

    Ok((created, token))
  }
}

/// Review service: admin decisions over candidate accounts and the
/// candidate listings
pub struct ReviewService {
  user_repo: Arc<dyn UserRepository>,
}

impl ReviewService {
  /// Creates a new instance of ReviewService
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// Applies an admin decision to a candidate account.
  ///
  /// The status field is overwritten unconditionally: re-deciding an
  /// already-decided account succeeds and leaves no audit trail. There is no
  /// exposed path back to `pending`.
  ///
  /// # Errors
  /// Returns `AuthError::UserNotFound` if `user_id` does not exist.
  pub async fn decide(&self, user_id: Uuid, decision: Decision) -> Result<User, AuthError> {
    self
      .user_repo
      .set_status(user_id, decision.into_status())
      .await?
      .ok_or(AuthError::UserNotFound)
  }

  /// Lists candidate accounts with the given status, in no guaranteed order
  pub async fn list_by_status(&self, status: CandidateStatus) -> Result<Vec<User>, AuthError> {
    self.user_repo.list_by_status(status).await
  }

  /// Lists all candidate accounts regardless of status
  pub async fn list_candidates(&self) -> Result<Vec<User>, AuthError> {
    self.user_repo.list_candidates().await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::{PasswordHash, Role, TokenHash};
  use async_trait::async_trait;
  use std::sync::Mutex;

  struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
  }

  impl InMemoryUserRepo {
    fn new() -> Self {
      Self {
        users: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl UserRepository for InMemoryUserRepo {
    async fn create(&self, user: User) -> Result<User, AuthError> {
      let mut users = self.users.lock().unwrap();
      if users.iter().any(|u| u.email == user.email) {
        return Err(AuthError::Repository(RepositoryError::DuplicateKey(
          user.email.clone(),
        )));
      }
      users.push(user.clone());
      Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
      Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .find(|u| u.email == email.as_str())
          .cloned(),
      )
    }

    async fn set_status(
      &self,
      id: Uuid,
      status: CandidateStatus,
    ) -> Result<Option<User>, AuthError> {
      let mut users = self.users.lock().unwrap();
      match users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
          user.set_status(status);
          Ok(Some(user.clone()))
        }
        None => Ok(None),
      }
    }

    async fn list_by_status(&self, status: CandidateStatus) -> Result<Vec<User>, AuthError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .filter(|u| u.role == Role::User && u.status == status)
          .cloned()
          .collect(),
      )
    }

    async fn list_candidates(&self) -> Result<Vec<User>, AuthError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .filter(|u| u.role == Role::User)
          .cloned()
          .collect(),
      )
    }
  }

  struct InMemorySessionRepo {
    sessions: Mutex<Vec<Session>>,
  }

  impl InMemorySessionRepo {
    fn new() -> Self {
      Self {
        sessions: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl SessionRepository for InMemorySessionRepo {
    async fn create(&self, session: Session) -> Result<Session, AuthError> {
      self.sessions.lock().unwrap().push(session.clone());
      Ok(session)
    }

    async fn find_by_token_hash(
      &self,
      token_hash: &TokenHash,
    ) -> Result<Option<Session>, AuthError> {
      Ok(
        self
          .sessions
          .lock()
          .unwrap()
          .iter()
          .find(|s| s.token_hash == token_hash.as_str())
          .cloned(),
      )
    }

    async fn delete(&self, session_id: Uuid) -> Result<(), AuthError> {
      self.sessions.lock().unwrap().retain(|s| s.id != session_id);
      Ok(())
    }
  }

  /// Argon2-backed hasher reusing the value-object primitives
  struct TestHasher;

  #[async_trait]
  impl PasswordHasher for TestHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
      Ok(password.hash()?)
    }

    async fn verify(
      &self,
      password: &Password,
      hashed_password: &PasswordHash,
    ) -> Result<bool, AuthError> {
      Ok(hashed_password.verify(password)?)
    }
  }

  fn auth_service() -> (AuthService, Arc<InMemoryUserRepo>) {
    let user_repo = Arc::new(InMemoryUserRepo::new());
    let service = AuthService::new(
      user_repo.clone(),
      Arc::new(InMemorySessionRepo::new()),
      Arc::new(TestHasher),
      AuthServiceConfig {
        session_ttl_seconds: 3600,
      },
    );
    (service, user_repo)
  }

  async fn register_candidate(service: &AuthService, email: &str) -> User {
    service
      .register(
        "Awa Diallo".to_string(),
        "+221770000000".to_string(),
        Email::new(email).unwrap(),
        Password::new("candidate_pw_1").unwrap(),
      )
      .await
      .unwrap()
  }

  #[tokio::test]
  async fn test_register_creates_pending_candidate() {
    let (service, _) = auth_service();

    let user = register_candidate(&service, "a@x.com").await;

    assert_eq!(user.role, Role::User);
    assert_eq!(user.status, CandidateStatus::Pending);
    // The stored hash is Argon2id, never the plain password
    assert!(user.password_hash.starts_with("$argon2id$"));
  }

  #[tokio::test]
  async fn test_register_duplicate_email_rejected() {
    let (service, repo) = auth_service();

    register_candidate(&service, "a@x.com").await;
    let result = service
      .register(
        "Other Person".to_string(),
        "+221770000001".to_string(),
        Email::new("a@x.com").unwrap(),
        Password::new("other_pw_123").unwrap(),
      )
      .await;

    assert!(matches!(result, Err(AuthError::EmailAlreadyExists)));
    assert_eq!(repo.users.lock().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_login_issues_session() {
    let (service, _) = auth_service();
    register_candidate(&service, "a@x.com").await;

    let (user, session, token) = service
      .login(
        Email::new("a@x.com").unwrap(),
        Password::new("candidate_pw_1").unwrap(),
      )
      .await
      .unwrap();

    assert_eq!(user.email, "a@x.com");
    assert_eq!(session.user_id, user.id);
    assert!(!session.is_expired());
    // Only the hash is stored
    assert_eq!(session.token_hash, token.hash().into_inner());
  }

  #[tokio::test]
  async fn test_login_wrong_password_rejected() {
    let (service, _) = auth_service();
    register_candidate(&service, "a@x.com").await;

    let result = service
      .login(
        Email::new("a@x.com").unwrap(),
        Password::new("wrong_password").unwrap(),
      )
      .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
  }

  #[tokio::test]
  async fn test_login_unknown_email_rejected() {
    let (service, _) = auth_service();

    let result = service
      .login(
        Email::new("ghost@x.com").unwrap(),
        Password::new("whatever_pw1").unwrap(),
      )
      .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
  }

  #[tokio::test]
  async fn test_logout_invalidates_session() {
    let (service, _) = auth_service();
    register_candidate(&service, "a@x.com").await;

    let (_, _, token) = service
      .login(
        Email::new("a@x.com").unwrap(),
        Password::new("candidate_pw_1").unwrap(),
      )
      .await
      .unwrap();

    let token_copy = SessionToken::from_string(token.as_str().to_string()).unwrap();
    service.logout(token).await.unwrap();

    let result = service.validate_session(token_copy).await;
    assert!(matches!(result, Err(AuthError::InvalidSession)));
  }

  #[tokio::test]
  async fn test_refresh_rotates_token() {
    let (service, _) = auth_service();
    register_candidate(&service, "a@x.com").await;

    let (_, _, old_token) = service
      .login(
        Email::new("a@x.com").unwrap(),
        Password::new("candidate_pw_1").unwrap(),
      )
      .await
      .unwrap();

    let old_copy = SessionToken::from_string(old_token.as_str().to_string()).unwrap();
    let (_, _, new_token) = service.refresh(old_token).await.unwrap();

    // The old token no longer validates; the new one does
    assert!(matches!(
      service.validate_session(old_copy).await,
      Err(AuthError::InvalidSession)
    ));
    assert!(service.validate_session(new_token).await.is_ok());
  }

  #[tokio::test]
  async fn test_decide_then_list_by_status() {
    let (service, repo) = auth_service();
    let accepted = register_candidate(&service, "a@x.com").await;
    let still_pending = register_candidate(&service, "b@x.com").await;

    let review = ReviewService::new(repo.clone());
    review.decide(accepted.id, Decision::Accepted).await.unwrap();

    let accepted_list = review
      .list_by_status(CandidateStatus::Accepted)
      .await
      .unwrap();
    assert!(accepted_list.iter().any(|u| u.id == accepted.id));
    assert!(!accepted_list.iter().any(|u| u.id == still_pending.id));

    let refused_list = review
      .list_by_status(CandidateStatus::Refused)
      .await
      .unwrap();
    assert!(refused_list.is_empty());
  }

  #[tokio::test]
  async fn test_decide_refused_is_symmetric() {
    let (service, repo) = auth_service();
    let candidate = register_candidate(&service, "a@x.com").await;

    let review = ReviewService::new(repo.clone());
    let updated = review.decide(candidate.id, Decision::Refused).await.unwrap();

    assert_eq!(updated.status, CandidateStatus::Refused);
    let refused_list = review
      .list_by_status(CandidateStatus::Refused)
      .await
      .unwrap();
    assert!(refused_list.iter().any(|u| u.id == candidate.id));
  }

  #[tokio::test]
  async fn test_decide_overwrites_prior_decision() {
    let (service, repo) = auth_service();
    let candidate = register_candidate(&service, "a@x.com").await;

    let review = ReviewService::new(repo.clone());
    review.decide(candidate.id, Decision::Accepted).await.unwrap();
    let updated = review.decide(candidate.id, Decision::Refused).await.unwrap();

    // Silent overwrite, no transition guard
    assert_eq!(updated.status, CandidateStatus::Refused);
  }

  #[tokio::test]
  async fn test_decide_unknown_user_not_found() {
    let (_, repo) = auth_service();
    let review = ReviewService::new(repo);

    let result = review.decide(Uuid::new_v4(), Decision::Accepted).await;
    assert!(matches!(result, Err(AuthError::UserNotFound)));
  }

  #[tokio::test]
  async fn test_list_candidates_excludes_admins() {
    let (service, repo) = auth_service();
    register_candidate(&service, "a@x.com").await;

    // Seed an admin directly; admins never appear in candidate listings
    let mut admin = User::register(
      "Admin".to_string(),
      "+221770000009".to_string(),
      "admin@x.com".to_string(),
      "hash".to_string(),
    );
    admin.role = Role::Admin;
    repo.users.lock().unwrap().push(admin);

    let review = ReviewService::new(repo.clone());
    let candidates = review.list_candidates().await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].email, "a@x.com");
  }
}
