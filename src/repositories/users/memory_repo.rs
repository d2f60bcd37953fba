//! 인메모리 사용자 저장소
//!
//! 통합 테스트와 로컬 실험용 구현입니다. MongoDB unique 인덱스와 동일하게
//! `username`, `email` 중복을 `ConflictError`로 거부합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::user_repo::{parse_object_id, UserRepository, DUPLICATE_USER_MESSAGE};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    /// 사용자를 찾아 변경 함수를 적용하고 `updatedAt`을 갱신합니다.
    fn modify<F>(&self, id: &str, apply: F) -> AppResult<Option<User>>
    where
        F: FnOnce(&mut User),
    {
        let object_id = parse_object_id(id)?;
        let mut users = self.write()?;

        Ok(users.get_mut(&object_id).map(|user| {
            apply(user);
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        Ok(self.read()?.get(&object_id).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>> {
        if username.is_none() && email.is_none() {
            return Ok(None);
        }

        Ok(self
            .read()?
            .values()
            .find(|user| {
                username.is_some_and(|username| user.username == username)
                    || email.is_some_and(|email| user.email == email)
            })
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        let duplicate = users
            .values()
            .any(|existing| existing.username == user.username || existing.email == user.email);
        if duplicate {
            return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
        }

        let object_id = ObjectId::new();
        user.id = Some(object_id);
        users.insert(object_id, user.clone());

        Ok(user)
    }

    async fn set_refresh_token(&self, id: &str, refresh_token: Option<&str>) -> AppResult<()> {
        self.modify(id, |user| user.refresh_token = refresh_token.map(str::to_string))?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> AppResult<()> {
        self.modify(id, |user| user.password_hash = password_hash.to_string())?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    async fn update_account(&self, id: &str, full_name: &str, email: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        {
            let users = self.read()?;
            let taken = users
                .iter()
                .any(|(other_id, other)| *other_id != object_id && other.email == email);
            if taken {
                return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
            }
        }

        self.modify(id, |user| {
            user.full_name = full_name.to_string();
            user.email = email.to_string();
        })
    }

    async fn update_avatar(&self, id: &str, avatar_url: &str) -> AppResult<Option<User>> {
        self.modify(id, |user| user.avatar = avatar_url.to_string())
    }

    async fn update_cover_image(&self, id: &str, cover_image_url: &str) -> AppResult<Option<User>> {
        self.modify(id, |user| user.cover_image = Some(cover_image_url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            "Test User".to_string(),
            "hash".to_string(),
            "https://cdn.example.com/a.png".to_string(),
            None,
        )
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_rejects_duplicates() {
        let repo = InMemoryUserRepository::new();

        let saved = repo.insert(user("alice", "alice@example.com")).await.unwrap();
        assert!(saved.id.is_some());

        let same_username = repo.insert(user("alice", "other@example.com")).await;
        assert!(matches!(same_username, Err(AppError::ConflictError(_))));

        let same_email = repo.insert(user("other", "alice@example.com")).await;
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));

        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_find_by_username_or_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("alice", "alice@example.com")).await.unwrap();

        assert!(repo.find_by_username_or_email(Some("alice"), None).await.unwrap().is_some());
        assert!(repo.find_by_username_or_email(None, Some("alice@example.com")).await.unwrap().is_some());
        assert!(repo.find_by_username_or_email(Some("bob"), Some("alice@example.com")).await.unwrap().is_some());
        assert!(repo.find_by_username_or_email(Some("bob"), None).await.unwrap().is_none());
        assert!(repo.find_by_username_or_email(None, None).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_refresh_token_set_and_clear() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.insert(user("alice", "alice@example.com")).await.unwrap();
        let id = saved.id_string().unwrap();

        repo.set_refresh_token(&id, Some("token")).await.unwrap();
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.refresh_token.as_deref(), Some("token"));

        repo.set_refresh_token(&id, None).await.unwrap();
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert!(found.refresh_token.is_none());
    }

    #[actix_web::test]
    async fn test_update_account_rejects_email_of_other_user() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.insert(user("alice", "alice@example.com")).await.unwrap();
        repo.insert(user("bob", "bob@example.com")).await.unwrap();
        let id = alice.id_string().unwrap();

        let result = repo.update_account(&id, "Alice", "bob@example.com").await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        let updated = repo.update_account(&id, "Alice A.", "alice@example.com").await.unwrap().unwrap();
        assert_eq!(updated.full_name, "Alice A.");
    }

    #[actix_web::test]
    async fn test_missing_user() {
        let repo = InMemoryUserRepository::new();
        let id = ObjectId::new().to_hex();

        assert!(repo.find_by_id(&id).await.unwrap().is_none());
        assert!(repo.update_avatar(&id, "url").await.unwrap().is_none());
        assert!(matches!(repo.set_refresh_token(&id, None).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.find_by_id("bad-id").await, Err(AppError::ValidationError(_))));
    }
}
