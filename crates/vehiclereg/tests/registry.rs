//! End-to-end behaviour of the store and validators through the public API.

use vehiclereg::{
    Error, KeyField, PlateFormat, RawVehicle, ValidationError, Validator, VehicleRecord,
    VehicleStore,
};

fn record(vin: &str, plate: &str, mileage: u32, year: u16) -> VehicleRecord {
    VehicleRecord::new("Toyota", "Corolla", vin, plate, mileage, year)
}

fn raw(vin: &str, plate: &str) -> RawVehicle {
    RawVehicle {
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        vin: vin.to_string(),
        plate: plate.to_string(),
        plate_format: None,
        mileage: "85200".to_string(),
        year: "2020".to_string(),
    }
}

#[test]
fn duplicate_vin_or_plate_in_any_case_keeps_one_record() {
    let cases = [
        ("A1B2C3D4E5F6G7H8J", "XYZ789GP"),
        ("a1b2c3d4e5f6g7h8j", "XYZ789GP"),
        ("JH4KA7561PC008269", "ABC123GP"),
        ("JH4KA7561PC008269", "abc123gp"),
    ];

    for (vin, plate) in cases {
        let mut store = VehicleStore::new();
        store
            .add(record("A1B2C3D4E5F6G7H8J", "ABC123GP", 0, 2000))
            .unwrap();

        let err = store.add(record(vin, plate, 0, 2000)).unwrap_err();
        assert!(err.is_duplicate_key(), "{vin}/{plate} should collide");
        assert_eq!(store.list_all().len(), 1);
    }
}

#[test]
fn duplicate_reports_which_key_collided() {
    let mut store = VehicleStore::new();
    store
        .add(record("A1B2C3D4E5F6G7H8J", "ABC123GP", 0, 2000))
        .unwrap();

    match store.add(record("JH4KA7561PC008269", "ABC123GP", 0, 2000)) {
        Err(Error::DuplicateKey { field, value }) => {
            assert_eq!(field, KeyField::Plate);
            assert_eq!(value, "ABC123GP");
        }
        other => panic!("expected duplicate plate, got {other:?}"),
    }
}

#[test]
fn find_by_vin_plate_and_case_variants() {
    let mut store = VehicleStore::new();
    let added = record("A1B2C3D4E5F6G7H8J", "AB12CDGP", 5, 2001);
    store.add(added.clone()).unwrap();

    for key in [
        "A1B2C3D4E5F6G7H8J",
        "a1b2c3d4e5f6g7h8j",
        "a1B2c3D4e5F6g7H8j",
        "AB12CDGP",
        "ab12cdgp",
        "Ab12CdGp",
    ] {
        assert_eq!(store.find_by_key(key).unwrap(), &added, "lookup by {key}");
    }
}

#[test]
fn delete_removes_record_from_lookup_and_listing() {
    let mut store = VehicleStore::new();
    store
        .add(record("A1B2C3D4E5F6G7H8J", "ABC123GP", 1, 2000))
        .unwrap();
    store
        .add(record("JH4KA7561PC008269", "XYZ789GP", 2, 2001))
        .unwrap();

    store.delete_by_vin("A1B2C3D4E5F6G7H8J").unwrap();

    assert_eq!(store.list_all().len(), 1);
    assert!(store.find_by_key("A1B2C3D4E5F6G7H8J").unwrap_err().is_not_found());
    assert!(store.find_by_key("ABC123GP").unwrap_err().is_not_found());
}

#[test]
fn delete_unknown_vin_changes_nothing() {
    let mut store = VehicleStore::new();
    store
        .add(record("A1B2C3D4E5F6G7H8J", "ABC123GP", 1, 2000))
        .unwrap();
    let before = store.list_all().to_vec();

    let err = store.delete_by_vin("JH4KA7561PC008269").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.list_all(), before.as_slice());
}

#[test]
fn aggregate_stats_empty_and_populated() {
    let mut store = VehicleStore::new();

    let empty = store.aggregate_stats();
    assert_eq!(empty.count, 0);
    assert_eq!(empty.average_mileage, None);
    assert_eq!(empty.min_year, None);
    assert_eq!(empty.max_year, None);

    store
        .add(record("A1B2C3D4E5F6G7H8J", "AAA111GP", 100, 2000))
        .unwrap();
    store
        .add(record("JH4KA7561PC008269", "BBB222GP", 200, 2010))
        .unwrap();
    store
        .add(record("1HGCM82633A004352", "CCC333GP", 300, 2020))
        .unwrap();

    let stats = store.aggregate_stats();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total_mileage, 600);
    assert_eq!(stats.average_mileage, Some(200.0));
    assert_eq!(stats.min_year, Some(2000));
    assert_eq!(stats.max_year, Some(2020));
}

#[test]
fn vin_validator_length_and_alphabet() {
    let validator = Validator::default();

    assert_eq!(
        validator.validate_vin("A1B2C3D4E5F6G7H8J").unwrap(),
        "A1B2C3D4E5F6G7H8J"
    );
    assert!(validator.validate_vin("A1B2C3D4E5F6G7H8").is_err());
    assert!(validator.validate_vin("A1B2C3D4E5F6G7H8JJ").is_err());
    assert!(validator.validate_vin("A1B2C3D4E5F6G7H8!").is_err());
}

#[test]
fn plate_validator_formats() {
    let validator = Validator::default();

    assert!(validator.validate_plate("ABC123GP", PlateFormat::Old).is_ok());
    assert!(validator.validate_plate("AB12CDGP", PlateFormat::New).is_ok());
    assert!(validator.validate_plate("ABCD123GP", PlateFormat::Old).is_err());
    assert!(validator.validate_plate("ABCD123GP", PlateFormat::New).is_err());
}

#[test]
fn list_all_preserves_insertion_order() {
    let mut store = VehicleStore::new();
    let r1 = record("A1B2C3D4E5F6G7H8J", "AAA111GP", 1, 2000);
    let r2 = record("JH4KA7561PC008269", "BB22CCGP", 2, 2001);
    let r3 = record("1HGCM82633A004352", "CCC333GP", 3, 2002);

    store.add(r1.clone()).unwrap();
    store.add(r2.clone()).unwrap();
    store.add(r3.clone()).unwrap();

    assert_eq!(store.list_all(), [r1, r2, r3].as_slice());
}

#[test]
fn validated_input_flows_into_store() {
    let validator = Validator::default();
    let mut store = VehicleStore::new();

    let first = validator
        .validate_record(&raw("a1b2c3d4e5f6g7h8j", "abc123gp"))
        .unwrap();
    store.add(first).unwrap();

    let second = validator
        .validate_record(&raw("A1B2C3D4E5F6G7H8J", "AB12CDGP"))
        .unwrap();
    assert!(store.add(second).unwrap_err().is_duplicate_key());

    let rejected = validator.validate_record(&raw("A1B2C3D4E5F6G7H8J", "ABCD123GP"));
    assert!(matches!(
        rejected,
        Err(ValidationError::InvalidFormat { .. })
    ));
    assert_eq!(store.len(), 1);
}
