use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::PostCommand;
use crate::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostQuery, PostQueryError, PostRepository,
    PostRepositoryError, PostView,
};

mock! {
    pub Query {}
    #[async_trait]
    impl PostQuery for Query {
        async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostView>, PostQueryError>;
        async fn list(
            &self,
            filter: PostListFilter,
            page: PageRequest,
        ) -> Result<PageResult<PostView>, PostQueryError>;
    }
}

mock! {
    pub Repo {}
    #[async_trait]
    impl PostRepository for Repo {
        async fn create(
            &self,
            owner: Option<UserId>,
            command: PostCommand,
        ) -> Result<PostView, PostRepositoryError>;
        async fn update(&self, post_id: Uuid, command: PostCommand) -> Result<(), PostRepositoryError>;
        async fn delete_cascade(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
    }
}
