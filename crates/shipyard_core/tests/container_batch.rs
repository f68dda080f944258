use shipyard_core::db::open_db_in_memory;
use shipyard_core::{
    Container, ContainerService, ContainerServiceError, Ship, ShipService,
    SqliteContainerRepository, SqliteShipRepository,
};

#[test]
fn valid_containers_are_all_retrievable() {
    let conn = open_db_in_memory().unwrap();
    let service = ContainerService::new(SqliteContainerRepository::try_new(&conn).unwrap());

    let persisted = service
        .add_containers(&[Container::new("toys", 5.0), Container::new("candy", 5.0)])
        .unwrap();

    assert_eq!(persisted.len(), 2);
    assert_ne!(persisted[0].id, persisted[1].id);
    assert_eq!(service.get_all_containers().unwrap(), persisted);
}

#[test]
fn negative_weight_rolls_back_whole_batch() {
    let conn = open_db_in_memory().unwrap();
    let service = ContainerService::new(SqliteContainerRepository::try_new(&conn).unwrap());

    let err = service
        .add_containers(&[
            Container::new("toys", 5.0),
            Container::new("candy", 5.0),
            Container::new("debt", -2.5),
        ])
        .unwrap_err();

    match err {
        ContainerServiceError::NegativeWeight { index, weight } => {
            assert_eq!(index, 2);
            assert_eq!(weight, -2.5);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.get_all_containers().unwrap().is_empty());
}

#[test]
fn zero_weight_is_rejected_for_single_add() {
    let conn = open_db_in_memory().unwrap();
    let service = ContainerService::new(SqliteContainerRepository::try_new(&conn).unwrap());

    let err = service.add_container(&Container::new("nothing", 0.0)).unwrap_err();
    assert!(matches!(
        err,
        ContainerServiceError::NegativeWeight { index: 0, .. }
    ));
}

#[test]
fn lookup_contract_holds() {
    let conn = open_db_in_memory().unwrap();
    let service = ContainerService::new(SqliteContainerRepository::try_new(&conn).unwrap());

    let saved = service.add_container(&Container::new("tea", 12.5)).unwrap();
    let id = saved.id.unwrap();

    assert_eq!(service.get_container_by_id(id).unwrap(), saved);
    assert!(matches!(
        service.get_container_by_id(id + 1),
        Err(ContainerServiceError::NotFound(missing)) if missing == id + 1
    ));
}

#[test]
fn ship_and_container_batches_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let ships = ShipService::new(SqliteShipRepository::try_new(&conn).unwrap());
    let containers = ContainerService::new(SqliteContainerRepository::try_new(&conn).unwrap());

    ships.add_ships(&[Ship::new("Carrier", 90_000.0)]).unwrap();
    containers
        .add_containers(&[Container::new("spice", 3.0), Container::new("void", 0.0)])
        .unwrap_err();

    assert_eq!(ships.get_all_ships().unwrap().len(), 1);
    assert!(containers.get_all_containers().unwrap().is_empty());
}

#[test]
fn persisted_container_serializes_with_id() {
    let conn = open_db_in_memory().unwrap();
    let service = ContainerService::new(SqliteContainerRepository::try_new(&conn).unwrap());

    let saved = service.add_container(&Container::new("coffee", 20.0)).unwrap();
    let json = serde_json::to_value(&saved).unwrap();

    assert_eq!(json["id"], saved.id.unwrap());
    assert_eq!(json["weight"], 20.0);
}
