//! Users service

use crate::{
    error::AppResult,
    models::{
        enums::UserRole,
        user::{CreateUser, User},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        self.repository.users_list(role).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        self.repository.users_create(data).await
    }
}
