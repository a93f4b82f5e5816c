// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::{Profile, UserRole},
        user::{UpdateMePayload, UpdateUserPayload},
    },
};

// Dados de um perfil novo, já com a senha em hash
pub struct NewProfile<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: &'a str,
    pub role: UserRole,
    pub assigned_stadium_id: Option<Uuid>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub dni: Option<&'a str>,
}

// O repositório de perfis, responsável por todas as interações com a tabela 'profiles'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn list(&self) -> Result<Vec<Profile>, AppError> {
        let profiles = sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY full_name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(profiles)
    }

    // Cria um perfil; e-mail duplicado vira um erro amigável
    pub async fn create(&self, new: NewProfile<'_>) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (
                email, password_hash, full_name, role,
                assigned_stadium_id, phone, address, dni
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.full_name)
        .bind(new.role)
        .bind(new.assigned_stadium_id)
        .bind(new.phone)
        .bind(new.address)
        .bind(new.dni)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() && db_err.constraint() == Some("profiles_email_key") {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateUserPayload) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles SET
                full_name = COALESCE($2, full_name),
                role = COALESCE($3, role),
                assigned_stadium_id = COALESCE($4, assigned_stadium_id),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                dni = COALESCE($7, dni),
                avatar_url = COALESCE($8, avatar_url),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.full_name.as_deref())
        .bind(payload.role)
        .bind(payload.assigned_stadium_id)
        .bind(payload.phone.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.dni.as_deref())
        .bind(payload.avatar_url.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    pub async fn update_contact(&self, id: Uuid, payload: &UpdateMePayload) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles SET
                full_name = COALESCE($2, full_name),
                phone = COALESCE($3, phone),
                address = COALESCE($4, address),
                avatar_url = COALESCE($5, avatar_url),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.full_name.as_deref())
        .bind(payload.phone.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.avatar_url.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    /// Devolve `false` se o perfil não existia.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
