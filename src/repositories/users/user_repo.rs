//! User Repository
//!
//! 사용자 문서의 영속성을 담당합니다. 서비스 계층은 [`UserRepository`] trait에만
//! 의존하며, 운영 환경에서는 [`MongoUserRepository`], 테스트에서는
//! [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository)가 주입됩니다.
//!
//! ## 중복 처리
//!
//! `username`과 `email`에는 unique 인덱스가 걸려 있으며, 동시에 같은 값으로 가입하거나
//! 수정하려 할 때 발생하는 duplicate key 에러(11000)는 `ConflictError`로 변환됩니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;

const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;
pub const DUPLICATE_USER_MESSAGE: &str = "User with email or username already exists";

/// 사용자 저장소 인터페이스
///
/// 모든 `id` 인자는 ObjectId hex 문자열이며, 형식이 잘못된 경우 `ValidationError`를 반환합니다.
/// `update_*` 메서드는 대상 사용자가 없으면 `Ok(None)`을 반환합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자명 또는 이메일이 일치하는 사용자를 찾습니다.
    ///
    /// 두 인자가 모두 `None`이면 `Ok(None)`을 반환합니다.
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 `_id`가 채워진 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 저장된 리프레시 토큰을 교체합니다. `None`이면 필드를 제거합니다.
    async fn set_refresh_token(&self, id: &str, refresh_token: Option<&str>) -> AppResult<()>;

    async fn update_password(&self, id: &str, password_hash: &str) -> AppResult<()>;

    async fn update_account(&self, id: &str, full_name: &str, email: &str) -> AppResult<Option<User>>;

    async fn update_avatar(&self, id: &str, avatar_url: &str) -> AppResult<Option<User>>;

    async fn update_cover_image(&self, id: &str, cover_image_url: &str) -> AppResult<Option<User>>;
}

/// ObjectId hex 문자열 파싱
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::ValidationError("Invalid user id".to_string()))
}

/// MongoDB `users` 컬렉션 기반 저장소
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// unique 인덱스를 생성합니다. 이미 존재하면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }

    /// `$set`과 `updatedAt` 갱신을 적용하고 변경된 문서를 반환합니다.
    async fn set_fields(&self, id: &str, fields: Document) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let mut set = fields;
        set.insert("updatedAt", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(map_write_error)
    }
}

/// duplicate key 에러는 `ConflictError`로, 나머지는 `DatabaseError`로 변환합니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key_error(&error) {
        AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_ERROR_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_ERROR_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>> {
        let mut conditions = Vec::new();
        if let Some(username) = username {
            conditions.push(doc! { "username": username });
        }
        if let Some(email) = email {
            conditions.push(doc! { "email": email });
        }

        if conditions.is_empty() {
            return Ok(None);
        }

        self.collection
            .find_one(doc! { "$or": conditions })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(object_id);

        log::info!("👤 사용자 생성: {} ({})", user.username, object_id.to_hex());
        Ok(user)
    }

    async fn set_refresh_token(&self, id: &str, refresh_token: Option<&str>) -> AppResult<()> {
        let object_id = parse_object_id(id)?;

        let update = match refresh_token {
            Some(token) => doc! {
                "$set": { "refreshToken": token, "updatedAt": DateTime::now() }
            },
            None => doc! {
                "$unset": { "refreshToken": 1 },
                "$set": { "updatedAt": DateTime::now() }
            },
        };

        let result = self.collection
            .update_one(doc! { "_id": object_id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("User does not exist".to_string()));
        }

        Ok(())
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> AppResult<()> {
        self.set_fields(id, doc! { "password": password_hash })
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    async fn update_account(&self, id: &str, full_name: &str, email: &str) -> AppResult<Option<User>> {
        self.set_fields(id, doc! { "fullName": full_name, "email": email }).await
    }

    async fn update_avatar(&self, id: &str, avatar_url: &str) -> AppResult<Option<User>> {
        self.set_fields(id, doc! { "avatar": avatar_url }).await
    }

    async fn update_cover_image(&self, id: &str, cover_image_url: &str) -> AppResult<Option<User>> {
        self.set_fields(id, doc! { "coverImage": cover_image_url }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);

        assert!(matches!(parse_object_id("not-an-object-id"), Err(AppError::ValidationError(_))));
    }
}
