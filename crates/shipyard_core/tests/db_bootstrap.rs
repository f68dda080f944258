use rusqlite::Connection;
use shipyard_core::db::{open_db, open_db_in_memory, schema_version, DbError, SCHEMA_VERSION};

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name;",
        )
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("SELECT name FROM pragma_table_info('{table}') ORDER BY cid;"))
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn fresh_database_gets_fleet_tables_and_stamp() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    assert_eq!(table_names(&conn), ["containers", "ships"]);
}

#[test]
fn tables_hold_only_record_fields() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(column_names(&conn, "ships"), ["id", "name", "tonnage"]);
    assert_eq!(column_names(&conn, "containers"), ["id", "contents", "weight"]);
}

#[test]
fn reopening_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.db");

    let conn = open_db(&path).unwrap();
    conn.execute("INSERT INTO ships (name, tonnage) VALUES ('Endeavour', 366);", [])
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let name: String = conn
        .query_row("SELECT name FROM ships;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "Endeavour");
}

#[test]
fn unknown_schema_stamp_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foreign.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 7;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 7);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unopenable_path_reports_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("fleet.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Open { .. }));
    assert!(err.to_string().contains("no-such-dir"));
}

#[test]
fn schema_rejects_non_positive_values_directly() {
    let conn = open_db_in_memory().unwrap();

    let ship = conn.execute("INSERT INTO ships (name, tonnage) VALUES ('Ghost', 0);", []);
    let container = conn.execute(
        "INSERT INTO containers (contents, weight) VALUES ('air', -1);",
        [],
    );

    assert!(ship.is_err());
    assert!(container.is_err());
}
