use shipyard_core::db::{open_db, open_db_in_memory};
use shipyard_core::{Ship, ShipService, ShipServiceError, SqliteShipRepository};
use std::collections::HashSet;

#[test]
fn batch_with_zero_tonnage_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    let err = service
        .add_ships(&[Ship::new("Titanic", 100_000.0), Ship::new("Ghost", 0.0)])
        .unwrap_err();

    assert!(matches!(
        err,
        ShipServiceError::InvalidTonnage { index: 1, tonnage } if tonnage == 0.0
    ));
    assert!(service.get_all_ships().unwrap().is_empty());
}

#[test]
fn first_offending_ship_is_reported() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    let err = service
        .add_ships(&[
            Ship::new("Ok", 10.0),
            Ship::new("Sunk", -5.0),
            Ship::new("Ghost", 0.0),
        ])
        .unwrap_err();

    assert!(matches!(
        err,
        ShipServiceError::InvalidTonnage { index: 1, tonnage } if tonnage == -5.0
    ));
}

#[test]
fn valid_batch_is_persisted_in_input_order_with_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    let persisted = service
        .add_ships(&[
            Ship::new("Titanic", 46_328.0),
            Ship::new("Olympic", 45_324.0),
            Ship::new("Britannic", 48_158.0),
        ])
        .unwrap();

    let names: Vec<_> = persisted.iter().map(|ship| ship.name.as_str()).collect();
    assert_eq!(names, ["Titanic", "Olympic", "Britannic"]);

    let ids: Vec<_> = persisted.iter().map(|ship| ship.id.unwrap()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    assert_eq!(service.get_all_ships().unwrap(), persisted);
}

#[test]
fn get_ship_by_id_returns_persisted_ship() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    let persisted = service.add_ship(&Ship::new("Endurance", 348.0)).unwrap();
    let id = persisted.id.unwrap();

    assert_eq!(service.get_ship_by_id(id).unwrap(), persisted);
}

#[test]
fn get_ship_by_unknown_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    let err = service.get_ship_by_id(42).unwrap_err();
    assert!(matches!(err, ShipServiceError::NotFound(42)));
}

#[test]
fn rejected_batch_does_not_touch_earlier_committed_batch() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    let committed = service
        .add_ships(&[Ship::new("Mayflower", 180.0)])
        .unwrap();
    service
        .add_ships(&[Ship::new("Speedwell", 60.0), Ship::new("Ghost", 0.0)])
        .unwrap_err();
    let later = service.add_ships(&[Ship::new("Fortune", 55.0)]).unwrap();

    let all = service.get_all_ships().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], committed[0]);
    assert_eq!(all[1], later[0]);
}

#[test]
fn ids_stay_unique_across_batches() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    for round in 0..5 {
        service
            .add_ships(&[
                Ship::new(format!("a{round}"), 1.0),
                Ship::new(format!("b{round}"), 2.0),
            ])
            .unwrap();
    }

    let ids: HashSet<_> = service
        .get_all_ships()
        .unwrap()
        .into_iter()
        .map(|ship| ship.id.unwrap())
        .collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn empty_batch_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());

    assert!(service.add_ships(&[]).unwrap().is_empty());
    assert!(service.get_all_ships().unwrap().is_empty());
}

#[test]
fn committed_ships_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.db");

    let persisted = {
        let conn = open_db(&path).unwrap();
        let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());
        service
            .add_ships(&[Ship::new("Victory", 3_500.0), Ship::new("Ghost", 0.0)])
            .unwrap_err();
        service.add_ships(&[Ship::new("Victory", 3_500.0)]).unwrap()
    };

    let conn = open_db(&path).unwrap();
    let service = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());
    assert_eq!(service.get_all_ships().unwrap(), persisted);
}
