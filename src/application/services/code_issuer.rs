//! Code issuance: validate a requested code or generate a fresh one.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::{GENERATED_CODE_LENGTH, generate_code, validate_code};
use serde_json::json;

/// Maximum number of random candidates tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Produces valid, currently unused codes for new links.
///
/// The issuer only reads the store. It never reserves a code, so a code it
/// returns can still be taken by a concurrent insert; the store's unique
/// constraint catches that and the insert fails with [`AppError::Conflict`].
pub struct CodeIssuer<R: LinkRepository + ?Sized> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> CodeIssuer<R> {
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Returns the code to use for a new link.
    ///
    /// With `requested_code`, the code is checked and returned unchanged.
    /// Without it, up to [`MAX_GENERATION_ATTEMPTS`] random
    /// [`GENERATED_CODE_LENGTH`]-character candidates are tried.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidFormat`] if the requested code is malformed (no store call is made)
    /// - [`AppError::Conflict`] if the requested code is taken
    /// - [`AppError::GenerationExhausted`] if every generated candidate collided
    /// - [`AppError::Internal`] on store errors
    pub async fn issue_code(&self, requested_code: Option<&str>) -> Result<String, AppError> {
        match requested_code {
            Some(code) => self.claim_requested(code).await,
            None => self.generate_unique().await,
        }
    }

    async fn claim_requested(&self, code: &str) -> Result<String, AppError> {
        if !validate_code(code) {
            return Err(AppError::invalid_format(
                "Code must match [A-Za-z0-9]{6,8}",
                json!({ "code": code }),
            ));
        }

        if self.link_repository.exists(code).await? {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": code }),
            ));
        }

        Ok(code.to_string())
    }

    async fn generate_unique(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generate_code(GENERATED_CODE_LENGTH);

            if !self.link_repository.exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::generation_exhausted(
            "Failed to generate unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use mockall::Sequence;

    fn issuer(repo: MockLinkRepository) -> CodeIssuer<MockLinkRepository> {
        CodeIssuer::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_requested_code_returned_unchanged() {
        let mut repo = MockLinkRepository::new();
        repo.expect_exists()
            .withf(|code| code == "MyCode12")
            .times(1)
            .returning(|_| Ok(false));

        let code = issuer(repo).issue_code(Some("MyCode12")).await.unwrap();

        assert_eq!(code, "MyCode12");
    }

    #[tokio::test]
    async fn test_invalid_requested_code_skips_store() {
        for bad in ["", "abc", "abc-123", "toolongcode", " abc123"] {
            let mut repo = MockLinkRepository::new();
            repo.expect_exists().times(0);

            let result = issuer(repo).issue_code(Some(bad)).await;

            assert!(
                matches!(result, Err(AppError::InvalidFormat { .. })),
                "code {bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_taken_requested_code_conflicts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_exists().times(1).returning(|_| Ok(true));

        let result = issuer(repo).issue_code(Some("abc123")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_generated_code_shape() {
        let mut repo = MockLinkRepository::new();
        repo.expect_exists().times(1).returning(|_| Ok(false));

        let code = issuer(repo).issue_code(None).await.unwrap();

        assert_eq!(code.len(), GENERATED_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_generation_retries_after_collision() {
        let mut repo = MockLinkRepository::new();
        let mut seq = Sequence::new();
        repo.expect_exists()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        repo.expect_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        let result = issuer(repo).issue_code(None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generation_exhausted_after_bounded_attempts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Ok(true));

        let result = issuer(repo).issue_code(None).await;

        assert!(matches!(
            result,
            Err(AppError::GenerationExhausted { .. })
        ));
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut repo = MockLinkRepository::new();
        repo.expect_exists()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let result = issuer(repo).issue_code(None).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
