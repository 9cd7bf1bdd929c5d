use orgdir_core::db::open_db_in_memory;
use orgdir_core::{
    OrganizationDraft, OrganizationRepository, OrganizationService, RepoError,
    SqliteOrganizationRepository, ValidationError,
};

fn draft(name: &str, email: &str) -> OrganizationDraft {
    OrganizationDraft {
        name: name.to_string(),
        email: email.to_string(),
        ..OrganizationDraft::default()
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    let mut acme = draft("Acme", "a@x.com");
    acme.phone = Some("555-0100".to_string());
    acme.website = Some("https://acme.example".to_string());
    let id = repo.create_organization(&acme).unwrap();
    assert!(id > 0);

    let loaded = repo.get_organization(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Acme");
    assert_eq!(loaded.email, "a@x.com");
    assert_eq!(loaded.phone.as_deref(), Some("555-0100"));
    assert_eq!(loaded.address, None);
    assert!(loaded.created_at > 0);
    assert!(loaded.updated_at >= loaded.created_at);
}

#[test]
fn get_missing_organization_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    assert!(repo.get_organization(42).unwrap().is_none());
}

#[test]
fn duplicate_email_yields_conflict_and_no_second_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    repo.create_organization(&draft("Acme", "a@x.com")).unwrap();
    let err = repo
        .create_organization(&draft("Other", "a@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::EmailTaken(email) if email == "a@x.com"));

    let all = repo.list_organizations().unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn create_rejects_missing_required_fields_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    let err = repo.create_organization(&draft("", "a@x.com")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingField("name"))
    ));

    let err = repo.create_organization(&draft("Acme", " ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingField("email"))
    ));

    assert!(repo.list_organizations().unwrap().is_empty());
}

#[test]
fn update_overwrites_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    let id = repo.create_organization(&draft("Acme", "a@x.com")).unwrap();

    let mut updated = draft("Acme Corp", "corp@x.com");
    updated.description = Some("rebranded".to_string());
    repo.update_organization(id, &updated).unwrap();

    let loaded = repo.get_organization(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Acme Corp");
    assert_eq!(loaded.email, "corp@x.com");
    assert_eq!(loaded.description.as_deref(), Some("rebranded"));
    // Update resupplies the full field set, so an omitted phone clears it.
    assert_eq!(loaded.phone, None);
}

#[test]
fn update_not_found_mutates_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    let id = repo.create_organization(&draft("Acme", "a@x.com")).unwrap();

    let err = repo
        .update_organization(id + 1, &draft("Ghost", "ghost@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::OrganizationNotFound(missing) if missing == id + 1));

    let loaded = repo.get_organization(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Acme");
}

#[test]
fn update_to_taken_email_yields_conflict() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    repo.create_organization(&draft("Acme", "a@x.com")).unwrap();
    let other = repo
        .create_organization(&draft("Other", "o@x.com"))
        .unwrap();

    let err = repo
        .update_organization(other, &draft("Other", "a@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::EmailTaken(email) if email == "a@x.com"));
}

#[test]
fn delete_removes_row_and_missing_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    let id = repo.create_organization(&draft("Acme", "a@x.com")).unwrap();
    repo.delete_organization(id).unwrap();
    assert!(repo.get_organization(id).unwrap().is_none());

    let err = repo.delete_organization(id).unwrap_err();
    assert!(matches!(err, RepoError::OrganizationNotFound(missing) if missing == id));
}

#[test]
fn list_orders_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();

    let first = repo.create_organization(&draft("First", "1@x.com")).unwrap();
    let second = repo
        .create_organization(&draft("Second", "2@x.com"))
        .unwrap();
    let third = repo.create_organization(&draft("Third", "3@x.com")).unwrap();

    let listed = repo.list_organizations().unwrap();
    let ids: Vec<i64> = listed.iter().map(|org| org.id).collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[test]
fn service_delegates_to_repository() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrganizationRepository::try_new(&conn).unwrap();
    let service = OrganizationService::new(repo);

    let id = service.create(&draft("Acme", "a@x.com")).unwrap();
    assert_eq!(service.list().unwrap().len(), 1);
    assert_eq!(service.get(id).unwrap().unwrap().name, "Acme");

    service.update(id, &draft("Acme Corp", "a@x.com")).unwrap();
    assert_eq!(service.get(id).unwrap().unwrap().name, "Acme Corp");

    service.delete(id).unwrap();
    assert!(service.get(id).unwrap().is_none());
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();

    let err = SqliteOrganizationRepository::try_new(&conn).unwrap_err();
    assert!(matches!(
        err,
        RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
}
