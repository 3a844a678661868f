//! End-to-end tests for contact persistence against both store backends.

use carnet::contacts::{get_all_users, ContactError, DUPLICATE};
use carnet::models::User;
use carnet::store::{DocumentStore, JsonFileStore, MemoryStore};
use pretty_assertions::assert_eq;

fn patrick() -> User {
    User::with_contact("Patrick", "Martin", "0668500036", "1 rue du chemin, 75000 Paris")
}

fn file_store() -> (tempfile::TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("db.json"));
    (dir, store)
}

// ---------------------------------------------------------------------------
// full lifecycle
// ---------------------------------------------------------------------------

fn lifecycle<S: DocumentStore>(store: &mut S) {
    let user = patrick();

    let id = user.save(store, false).unwrap();
    assert!(id >= 0);
    assert!(user.exists(&*store).unwrap());

    let doc = user
        .db_instance(&*store)
        .unwrap()
        .expect("saved record should be found");
    assert_eq!(doc.id as i64, id);
    assert_eq!(User::from_document(&doc).unwrap(), user);

    let first = user.delete(store).unwrap();
    let second = user.delete(store).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(!user.exists(&*store).unwrap());
}

#[test]
fn lifecycle_in_memory() {
    lifecycle(&mut MemoryStore::new());
}

#[test]
fn lifecycle_on_disk() {
    let (_dir, mut store) = file_store();
    lifecycle(&mut store);
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

#[test]
fn duplicate_save_is_refused_on_disk() {
    let (_dir, mut store) = file_store();
    let first = User::new("John", "Smith").save(&mut store, false).unwrap();
    let second = User::new("John", "Smith").save(&mut store, false).unwrap();

    assert!(first > 0);
    assert_eq!(second, DUPLICATE);
    assert_eq!(store.all().unwrap().len(), 1);
}

#[test]
fn validated_save_propagates_error_and_writes_nothing() {
    let (_dir, mut store) = file_store();
    let user = User::with_contact("Patrick#@&", "#@&$$", "0123456789", "1 rue du chemin, 75015, Paris");

    let err = user.save(&mut store, true).unwrap_err();
    assert!(matches!(err, ContactError::Validation(_)));
    assert_eq!(err.to_string(), "Nom \"Patrick#@& #@&$$\" invalide");
    assert!(!store.path().exists());
}

#[test]
fn validated_save_of_good_record_succeeds() {
    let (_dir, mut store) = file_store();
    let user = User::with_contact("Jean", "Smith", "0123456789", "1 rue du chemin, 75015, Paris");
    assert!(user.save(&mut store, true).unwrap() > 0);
    assert!(user.exists(&store).unwrap());
}

// ---------------------------------------------------------------------------
// read-all accessor
// ---------------------------------------------------------------------------

#[test]
fn get_all_users_reads_what_another_handle_wrote() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let mut writer = JsonFileStore::open(&path);
    patrick().save(&mut writer, false).unwrap();
    User::new("Adrien", "Klein").save(&mut writer, false).unwrap();

    let reader = JsonFileStore::open(&path);
    let users = get_all_users(&reader).unwrap();
    assert_eq!(users, vec![patrick(), User::new("Adrien", "Klein")]);
}

#[test]
fn get_all_users_accepts_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(
        &path,
        r#"{
    "_default": {
        "1": {
            "first_name": "Maxime",
            "last_name": "Lefranc",
            "phone_number": "0123456443",
            "address": "18 rue Sabaneta, 34000 Montpellier"
        },
        "4": {
            "first_name": "Adrien",
            "last_name": "Klein"
        }
    }
}"#,
    )
    .unwrap();

    let mut store = JsonFileStore::open(&path);
    let users = get_all_users(&store).unwrap();
    assert_eq!(
        users,
        vec![
            User::with_contact("Maxime", "Lefranc", "0123456443", "18 rue Sabaneta, 34000 Montpellier"),
            User::new("Adrien", "Klein"),
        ]
    );

    // New ids continue after the highest one in the file.
    assert_eq!(patrick().save(&mut store, false).unwrap(), 5);
}

#[test]
fn get_all_users_on_empty_store() {
    let (_dir, store) = file_store();
    assert!(get_all_users(&store).unwrap().is_empty());
}
