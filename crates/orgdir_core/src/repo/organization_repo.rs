//! Organization repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `organizations` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `OrganizationDraft::validate()` before SQL.
//! - Zero changed rows on update/delete maps to `OrganizationNotFound`.
//! - Duplicate emails map to `EmailTaken` via extended result codes.

use super::{ensure_connection_ready, is_unique_violation, RepoError, RepoResult};
use crate::model::organization::{Organization, OrganizationDraft, OrganizationId};
use rusqlite::{params, Connection, Row};

const ORGANIZATION_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    phone,
    address,
    website,
    description,
    created_at,
    updated_at
FROM organizations";

/// Repository interface for organization CRUD operations.
pub trait OrganizationRepository {
    fn list_organizations(&self) -> RepoResult<Vec<Organization>>;
    fn get_organization(&self, id: OrganizationId) -> RepoResult<Option<Organization>>;
    fn create_organization(&self, draft: &OrganizationDraft) -> RepoResult<OrganizationId>;
    fn update_organization(&self, id: OrganizationId, draft: &OrganizationDraft)
        -> RepoResult<()>;
    fn delete_organization(&self, id: OrganizationId) -> RepoResult<()>;
}

/// SQLite-backed organization repository.
#[derive(Debug)]
pub struct SqliteOrganizationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrganizationRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "organizations")?;
        Ok(Self { conn })
    }
}

impl OrganizationRepository for SqliteOrganizationRepository<'_> {
    fn list_organizations(&self) -> RepoResult<Vec<Organization>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ORGANIZATION_SELECT_SQL}
             ORDER BY created_at DESC, id DESC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut organizations = Vec::new();
        while let Some(row) = rows.next()? {
            organizations.push(parse_organization_row(row)?);
        }

        Ok(organizations)
    }

    fn get_organization(&self, id: OrganizationId) -> RepoResult<Option<Organization>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ORGANIZATION_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_organization_row(row)?));
        }

        Ok(None)
    }

    fn create_organization(&self, draft: &OrganizationDraft) -> RepoResult<OrganizationId> {
        draft.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO organizations (name, email, phone, address, website, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.name.as_str(),
                draft.email.as_str(),
                draft.phone.as_deref(),
                draft.address.as_deref(),
                draft.website.as_deref(),
                draft.description.as_deref(),
            ],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::EmailTaken(draft.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update_organization(
        &self,
        id: OrganizationId,
        draft: &OrganizationDraft,
    ) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE organizations
             SET
                name = ?1,
                email = ?2,
                phone = ?3,
                address = ?4,
                website = ?5,
                description = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                draft.name.as_str(),
                draft.email.as_str(),
                draft.phone.as_deref(),
                draft.address.as_deref(),
                draft.website.as_deref(),
                draft.description.as_deref(),
                id,
            ],
        );

        match changed {
            Ok(0) => Err(RepoError::OrganizationNotFound(id)),
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::EmailTaken(draft.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn delete_organization(&self, id: OrganizationId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM organizations WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::OrganizationNotFound(id));
        }

        Ok(())
    }
}

fn parse_organization_row(row: &Row<'_>) -> RepoResult<Organization> {
    Ok(Organization {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        address: row.get("address")?,
        website: row.get("website")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
