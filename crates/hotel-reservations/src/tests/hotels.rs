use super::common::*;
use crate::domain::{EntityKind, Hotel, HotelId};
use crate::managers::HotelManager;
use crate::repository::RecordError;
use crate::storage::RecordStore;

fn h1() -> HotelId {
    HotelId::from("H1")
}

#[test]
fn create_then_display_returns_same_record() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();

    hotels.create(hotel()).expect("hotel created");
    assert_eq!(hotels.display(&h1()).expect("hotel found"), hotel());
}

#[test]
fn create_rejects_duplicate_ids() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();

    assert!(hotels.create(hotel()).is_ok());
    match hotels.create(Hotel::new("H1", "Other", "Cali", 9)) {
        Err(RecordError::Duplicate { entity, id }) => {
            assert_eq!(entity, EntityKind::Hotel);
            assert_eq!(id, "H1");
        }
        other => panic!("expected duplicate, got {other:?}"),
    }
    assert_eq!(hotels.list(), vec![hotel()]);
}

#[test]
fn delete_removes_only_the_matching_hotel() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");
    hotels
        .create(Hotel::new("H2", "Casa Medina", "Bogota", 5))
        .expect("create");

    let removed = hotels.delete(&h1()).expect("delete existing");
    assert_eq!(removed, hotel());
    let remaining: Vec<String> = hotels
        .list()
        .into_iter()
        .map(|hotel| hotel.hotel_id.0)
        .collect();
    assert_eq!(remaining, vec!["H2".to_string()]);
}

#[test]
fn delete_of_missing_id_leaves_store_untouched() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");
    let before = std::fs::read(workspace.hotels_path()).expect("store written");

    let err = hotels.delete(&HotelId::from("H99")).expect_err("missing hotel");
    assert!(err.is_not_found());
    assert_eq!(
        std::fs::read(workspace.hotels_path()).expect("store still there"),
        before
    );
}

#[test]
fn display_of_missing_hotel_is_not_found() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");

    assert!(hotels
        .display(&HotelId::from("H99"))
        .expect_err("missing")
        .is_not_found());
}

#[test]
fn modify_overwrites_known_fields() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");

    let updated = hotels.modify(&h1(), "name", "Nuevo").expect("name updated");
    assert_eq!(updated.name, "Nuevo");
    hotels
        .modify(&h1(), "rooms_available", "10")
        .expect("rooms updated");
    assert_eq!(hotels.display(&h1()).expect("found").rooms_available, 10);
}

#[test]
fn modify_with_unknown_field_keeps_bytes_identical() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");
    let before = std::fs::read(workspace.hotels_path()).expect("store written");

    match hotels.modify(&h1(), "nonexistent_field", "X") {
        Err(RecordError::UnknownField { field, .. }) => assert_eq!(field, "nonexistent_field"),
        other => panic!("expected unknown field, got {other:?}"),
    }
    assert_eq!(std::fs::read(workspace.hotels_path()).expect("store"), before);
}

#[test]
fn modify_of_missing_hotel_is_not_found() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");

    assert!(hotels
        .modify(&HotelId::from("H99"), "name", "X")
        .expect_err("missing")
        .is_not_found());
    assert!(hotels
        .modify(&HotelId::from("H99"), "falso", "X")
        .expect_err("missing")
        .is_not_found());
}

#[test]
fn modify_rejects_unparseable_room_counts() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");

    assert!(matches!(
        hotels.modify(&h1(), "rooms_available", "many"),
        Err(RecordError::InvalidValue { .. })
    ));
    assert_eq!(hotels.display(&h1()).expect("found"), hotel());
}

#[test]
fn modify_cannot_rename_onto_existing_id() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");
    hotels
        .create(Hotel::new("H2", "Casa Medina", "Bogota", 5))
        .expect("create");

    assert!(matches!(
        hotels.modify(&HotelId::from("H2"), "hotel_id", "H1"),
        Err(RecordError::Duplicate { .. })
    ));

    let renamed = hotels
        .modify(&HotelId::from("H2"), "hotel_id", "H3")
        .expect("rename to free id");
    assert_eq!(renamed.hotel_id, HotelId::from("H3"));
    assert!(hotels.exists(&HotelId::from("H3")));
    assert!(!hotels.exists(&HotelId::from("H2")));
}

#[test]
fn reserve_room_counts_down_to_zero_then_fails() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels.create(hotel()).expect("create");

    assert_eq!(hotels.reserve_room(&h1()), Ok(1));
    assert_eq!(hotels.reserve_room(&h1()), Ok(0));
    assert_eq!(
        hotels.reserve_room(&h1()),
        Err(RecordError::NoRoomsAvailable {
            hotel_id: "H1".to_string()
        })
    );
    assert_eq!(hotels.display(&h1()).expect("found").rooms_available, 0);
    assert!(hotels
        .reserve_room(&HotelId::from("H99"))
        .expect_err("missing")
        .is_not_found());
}

#[test]
fn reserve_room_succeeds_exactly_n_times() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels
        .create(Hotel::new("H5", "Five", "Medellin", 5))
        .expect("create");
    let id = HotelId::from("H5");

    let successes = (0..6).filter(|_| hotels.reserve_room(&id).is_ok()).count();
    assert_eq!(successes, 5);
    assert_eq!(hotels.display(&id).expect("found").rooms_available, 0);
}

#[test]
fn cancel_reservation_has_no_upper_bound() {
    let workspace = Workspace::new();
    let hotels = workspace.hotels();
    hotels
        .create(Hotel::new("H0", "Full", "Cartagena", 0))
        .expect("create");
    let id = HotelId::from("H0");

    assert_eq!(hotels.cancel_reservation(&id), Ok(1));
    assert_eq!(hotels.cancel_reservation(&id), Ok(2));
    assert_eq!(hotels.display(&id).expect("found").rooms_available, 2);
    assert!(hotels
        .cancel_reservation(&HotelId::from("H99"))
        .expect_err("missing")
        .is_not_found());
}

#[test]
fn save_failures_do_not_change_the_result() {
    let store = MemoryStore::read_only(vec![hotel()]);
    let hotels = HotelManager::new(store.clone());

    assert_eq!(hotels.reserve_room(&h1()), Ok(1));
    assert!(hotels.create(Hotel::new("H2", "Casa", "Bogota", 1)).is_ok());
    assert_eq!(store.load(), vec![hotel()]);
}

#[test]
fn state_lives_in_the_store_not_the_manager() {
    let store = MemoryStore::seeded(Vec::new());
    let writer = HotelManager::new(store.clone());
    let reader = HotelManager::new(store);

    writer.create(hotel()).expect("create");
    writer.reserve_room(&h1()).expect("reserve");
    assert_eq!(reader.display(&h1()).expect("found").rooms_available, 1);
}
