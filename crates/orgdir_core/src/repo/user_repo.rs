//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `users` table.
//! - Annotate reads with the owning organization's name via a join.
//!
//! # Invariants
//! - Write paths must call `UserDraft::validate()` before SQL.
//! - Zero changed rows on update/delete maps to `UserNotFound`.
//! - Duplicate emails map to `EmailTaken`; a missing foreign-key target maps
//!   to `OrganizationMissing`. Both are detected from extended result codes.

use super::{
    ensure_connection_ready, is_foreign_key_violation, is_unique_violation, RepoError, RepoResult,
};
use crate::model::organization::OrganizationId;
use crate::model::user::{User, UserDraft, UserId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT
    users.id,
    users.organization_id,
    users.first_name,
    users.last_name,
    users.email,
    users.phone,
    users.role,
    users.department,
    users.status,
    users.created_at,
    users.updated_at,
    organizations.name AS organization_name
FROM users
LEFT JOIN organizations ON users.organization_id = organizations.id";

/// Query options for listing users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserListQuery {
    /// Restrict the listing to one organization's users.
    pub organization_id: Option<OrganizationId>,
}

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    fn create_user(&self, draft: &UserDraft) -> RepoResult<UserId>;
    fn update_user(&self, id: UserId, draft: &UserDraft) -> RepoResult<()>;
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
#[derive(Debug)]
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "users")?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>> {
        let mut sql = USER_SELECT_SQL.to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(organization_id) = query.organization_id {
            sql.push_str(" WHERE users.organization_id = ?");
            bind_values.push(Value::Integer(organization_id));
        }

        sql.push_str(" ORDER BY users.created_at DESC, users.id DESC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE users.id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn create_user(&self, draft: &UserDraft) -> RepoResult<UserId> {
        draft.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO users (
                organization_id,
                first_name,
                last_name,
                email,
                phone,
                role,
                department,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                draft.organization_id,
                draft.first_name.as_str(),
                draft.last_name.as_str(),
                draft.email.as_str(),
                draft.phone.as_deref(),
                draft.role.as_deref(),
                draft.department.as_deref(),
                draft.resolved_status(),
            ],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) => Err(map_user_constraint(err, draft)),
        }
    }

    fn update_user(&self, id: UserId, draft: &UserDraft) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE users
             SET
                organization_id = ?1,
                first_name = ?2,
                last_name = ?3,
                email = ?4,
                phone = ?5,
                role = ?6,
                department = ?7,
                status = ?8,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?9;",
            params![
                draft.organization_id,
                draft.first_name.as_str(),
                draft.last_name.as_str(),
                draft.email.as_str(),
                draft.phone.as_deref(),
                draft.role.as_deref(),
                draft.department.as_deref(),
                draft.resolved_status(),
                id,
            ],
        );

        match changed {
            Ok(0) => Err(RepoError::UserNotFound(id)),
            Ok(_) => Ok(()),
            Err(err) => Err(map_user_constraint(err, draft)),
        }
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::UserNotFound(id));
        }

        Ok(())
    }
}

fn map_user_constraint(err: rusqlite::Error, draft: &UserDraft) -> RepoError {
    if is_unique_violation(&err) {
        return RepoError::EmailTaken(draft.email.clone());
    }
    if is_foreign_key_violation(&err) {
        return RepoError::OrganizationMissing(draft.organization_id);
    }
    err.into()
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        id: row.get("id")?,
        organization_id: row.get("organization_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        role: row.get("role")?,
        department: row.get("department")?,
        status: row.get("status")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        organization_name: row.get("organization_name")?,
    })
}
