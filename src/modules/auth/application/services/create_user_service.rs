use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::ports::{
    incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserOutput, CreateUserUseCase},
    outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};
use crate::auth::application::services::token_hasher::{
    generate_verification_token, hash_token,
};

#[derive(Clone)]
pub struct CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    async fn ensure_unique(&self, command: &CreateUserCommand) -> Result<(), CreateUserError> {
        let repo_err = |e: crate::auth::application::ports::outgoing::UserQueryError| {
            CreateUserError::RepositoryError(e.to_string())
        };

        if self
            .query
            .find_by_username(command.username())
            .await
            .map_err(repo_err)?
            .is_some()
        {
            return Err(CreateUserError::UsernameTaken);
        }

        if self
            .query
            .find_by_email(command.email())
            .await
            .map_err(repo_err)?
            .is_some()
        {
            return Err(CreateUserError::EmailTaken);
        }

        if let Some(alias) = command.anonymous_username() {
            if self
                .query
                .find_by_anonymous_username(alias)
                .await
                .map_err(repo_err)?
                .is_some()
            {
                return Err(CreateUserError::AnonymousUsernameTaken);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> CreateUserUseCase for CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<CreateUserOutput, CreateUserError> {
        self.ensure_unique(&command).await?;

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let verification_token = generate_verification_token();

        let data = CreateUserData {
            username: command.username().to_string(),
            anonymous_username: command.anonymous_username().map(str::to_string),
            email: command.email().to_string(),
            password_hash,
            verification_token_hash: hash_token(&verification_token),
        };

        let created = self.repository.create_user(data).await.map_err(|e| match e {
            // Lost a race with a concurrent registration.
            UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
            other => CreateUserError::RepositoryError(other.to_string()),
        })?;

        debug!(user_id = %created.id, "User row created");

        Ok(CreateUserOutput {
            user_id: created.id,
            username: created.username,
            email: created.email,
            anonymous_username: created.anonymous_username,
            verification_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::{
        HashError, UserQueryError, UserResult,
    };
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Query {}
        #[async_trait]
        impl UserQuery for Query {
            async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
            async fn find_by_anonymous_username(
                &self,
                anonymous_username: &str,
            ) -> Result<Option<User>, UserQueryError>;
        }
    }

    mock! {
        pub Repo {}
        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
            async fn activate_by_token_hash(&self, token_hash: &str) -> Result<UserResult, UserRepositoryError>;
            async fn delete_user_cascade(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
        }
    }

    struct FakeHasher;

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!("Not used in create user tests")
        }
    }

    fn existing_user(username: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            anonymous_username: None,
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            is_verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn command(alias: Option<&str>) -> CreateUserCommand {
        CreateUserCommand::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "password123".to_string(),
            alias.map(str::to_string),
        )
        .unwrap()
    }

    fn empty_query() -> MockQuery {
        let mut query = MockQuery::new();
        query.expect_find_by_username().returning(|_| Ok(None));
        query.expect_find_by_email().returning(|_| Ok(None));
        query
            .expect_find_by_anonymous_username()
            .returning(|_| Ok(None));
        query
    }

    fn service(query: MockQuery, repo: MockRepo) -> CreateUserService<MockQuery, MockRepo> {
        CreateUserService::new(query, repo, Arc::new(FakeHasher))
    }

    #[tokio::test]
    async fn creates_user_with_hashed_password_and_token() {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .withf(|data| {
                data.password_hash == "hashed:password123"
                    && data.verification_token_hash.len() == 64
                    && data.anonymous_username.as_deref() == Some("ali")
            })
            .returning(|data| {
                Ok(UserResult {
                    id: Uuid::new_v4(),
                    username: data.username,
                    anonymous_username: data.anonymous_username,
                    email: data.email,
                    is_verified: false,
                })
            });

        let result = service(empty_query(), repo)
            .execute(command(Some("ali")))
            .await
            .unwrap();

        assert_eq!(result.username, "alice");
        assert_eq!(result.email, "alice@example.com");
        assert_eq!(result.verification_token.len(), 64);
    }

    #[tokio::test]
    async fn stored_token_hash_matches_mailed_token() {
        let stored = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
        let captured = stored.clone();

        let mut repo = MockRepo::new();
        repo.expect_create_user().returning(move |data| {
            *captured.lock().unwrap() = data.verification_token_hash.clone();
            Ok(UserResult {
                id: Uuid::new_v4(),
                username: data.username,
                anonymous_username: None,
                email: data.email,
                is_verified: false,
            })
        });

        let result = service(empty_query(), repo)
            .execute(command(None))
            .await
            .unwrap();

        assert_eq!(*stored.lock().unwrap(), hash_token(&result.verification_token));
    }

    #[tokio::test]
    async fn rejects_taken_username() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_username()
            .returning(|name| Ok(Some(existing_user(name))));

        let result = service(query, MockRepo::new()).execute(command(None)).await;

        assert!(matches!(result, Err(CreateUserError::UsernameTaken)));
    }

    #[tokio::test]
    async fn rejects_taken_email() {
        let mut query = MockQuery::new();
        query.expect_find_by_username().returning(|_| Ok(None));
        query
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user("someone"))));

        let result = service(query, MockRepo::new()).execute(command(None)).await;

        assert!(matches!(result, Err(CreateUserError::EmailTaken)));
    }

    #[tokio::test]
    async fn rejects_taken_alias() {
        let mut query = MockQuery::new();
        query.expect_find_by_username().returning(|_| Ok(None));
        query.expect_find_by_email().returning(|_| Ok(None));
        query
            .expect_find_by_anonymous_username()
            .returning(|_| Ok(Some(existing_user("other"))));

        let result = service(query, MockRepo::new())
            .execute(command(Some("ali")))
            .await;

        assert!(matches!(result, Err(CreateUserError::AnonymousUsernameTaken)));
    }

    #[tokio::test]
    async fn unique_violation_at_insert_maps_to_already_exists() {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .returning(|_| Err(UserRepositoryError::UserAlreadyExists));

        let result = service(empty_query(), repo).execute(command(None)).await;

        assert!(matches!(result, Err(CreateUserError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn query_failure_is_reported_as_repository_error() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_username()
            .returning(|_| Err(UserQueryError::DatabaseError("db down".to_string())));

        let result = service(query, MockRepo::new()).execute(command(None)).await;

        assert!(matches!(result, Err(CreateUserError::RepositoryError(_))));
    }
}
