//! Entry points for front-ends. Each use case delegates to a shared
//! repository; none of them adds behavior of its own.

use std::sync::Arc;

use crate::models::User;
use crate::repository::{Fetched, RepositoryError, UserRepository};

#[derive(Clone)]
pub struct GetUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUsersUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Fetched<Vec<User>>, RepositoryError> {
        self.repository.get_users().await
    }
}

#[derive(Clone)]
pub struct GetUserByIdUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64) -> Result<Fetched<User>, RepositoryError> {
        self.repository.get_user_by_id(id).await
    }
}
