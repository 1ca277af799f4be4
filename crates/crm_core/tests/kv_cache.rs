use crm_core::cache::persisted_cell::try_read_value;
use crm_core::db::{open_db, open_db_in_memory};
use crm_core::{
    read_value, write_value, KvError, KvRepository, KvResult, MemoryKvRepository, PersistedCell,
    SqliteKvRepository,
};

/// Repository whose writes always fail; reads see nothing.
struct ReadOnlyRepository;

impl KvRepository for ReadOnlyRepository {
    fn get(&self, _key: &str) -> KvResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> KvResult<()> {
        Err(KvError::Unavailable(format!("read-only store rejected `{key}`")))
    }

    fn remove(&self, _key: &str) -> KvResult<()> {
        Ok(())
    }

    fn keys(&self) -> KvResult<Vec<String>> {
        Ok(Vec::new())
    }
}

#[test]
fn read_missing_key_returns_default_without_writing_it() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::new(&conn);

    let value: Vec<String> = read_value(&repo, "crm.tags", vec!["seed".to_string()]);

    assert_eq!(value, vec!["seed".to_string()]);
    assert!(repo.get("crm.tags").unwrap().is_none());
    assert!(repo.keys().unwrap().is_empty());
}

#[test]
fn write_fully_replaces_prior_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::new(&conn);

    write_value(&repo, "crm.numbers", &vec![1, 2, 3]).unwrap();
    write_value(&repo, "crm.numbers", &vec![9]).unwrap();

    let value: Vec<i32> = read_value(&repo, "crm.numbers", Vec::new());
    assert_eq!(value, vec![9]);
    assert_eq!(repo.keys().unwrap(), vec!["crm.numbers".to_string()]);
}

#[test]
fn unparseable_stored_value_falls_back_to_default() {
    let repo = MemoryKvRepository::new();
    repo.set("crm.numbers", "{not json").unwrap();

    let value: Vec<i32> = read_value(&repo, "crm.numbers", vec![7]);
    assert_eq!(value, vec![7]);

    let err = try_read_value::<Vec<i32>, _>(&repo, "crm.numbers").unwrap_err();
    assert!(matches!(err, KvError::Codec { ref key, .. } if key == "crm.numbers"));
}

#[test]
fn cell_writes_every_mutation_through() {
    let repo = MemoryKvRepository::new();
    let mut cell = PersistedCell::load(&repo, "crm.names", Vec::<String>::new);
    assert!(repo.get("crm.names").unwrap().is_none());

    cell.update(&repo, |names| names.push("Sarah".to_string()));
    assert_eq!(repo.get("crm.names").unwrap().as_deref(), Some(r#"["Sarah"]"#));

    cell.set(&repo, vec!["James".to_string()]);
    assert_eq!(repo.get("crm.names").unwrap().as_deref(), Some(r#"["James"]"#));
    assert!(!cell.is_degraded());
}

#[test]
fn failed_write_keeps_memory_value_and_marks_degraded() {
    let repo = ReadOnlyRepository;
    let mut cell = PersistedCell::load(&repo, "crm.names", Vec::<String>::new);

    let len = cell.update(&repo, |names| {
        names.push("Emily".to_string());
        names.len()
    });

    assert_eq!(len, 1);
    assert_eq!(cell.get(), &vec!["Emily".to_string()]);
    assert!(cell.is_degraded());
}

#[test]
fn values_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteKvRepository::new(&conn);
        let mut cell = PersistedCell::load(&repo, "crm.names", Vec::<String>::new);
        cell.set(&repo, vec!["Anna".to_string(), "David".to_string()]);
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteKvRepository::new(&conn);
    let cell = PersistedCell::load(&repo, "crm.names", Vec::<String>::new);
    assert_eq!(cell.get(), &vec!["Anna".to_string(), "David".to_string()]);

    repo.remove("crm.names").unwrap();
    assert!(repo.get("crm.names").unwrap().is_none());
}
