use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use storefront_sdk::User;
use uuid::Uuid;

use super::entity::user;
use crate::domain::error::DomainError;
use crate::domain::repos::{StoredUser, UsersRepository};

#[derive(Debug, Clone, Copy, Default)]
pub struct OrmUsersRepository;

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    async fn find_by_email<C: ConnectionTrait>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<Option<StoredUser>, DomainError> {
        let found = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await?;

        Ok(found.map(|m| StoredUser {
            password_hash: m.password.clone(),
            user: User::from(m),
        }))
    }

    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<User>, DomainError> {
        let found = user::Entity::find_by_id(id).one(conn).await?;
        Ok(found.map(User::from))
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        stored: StoredUser,
    ) -> Result<(), DomainError> {
        let StoredUser {
            user,
            password_hash,
        } = stored;

        let row = user::ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(password_hash),
            is_admin: Set(user.is_admin),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };

        user::Entity::insert(row)
            .exec_without_returning(conn)
            .await
            .map_err(|e| DomainError::from_insert(e, DomainError::email_taken))?;
        Ok(())
    }
}
