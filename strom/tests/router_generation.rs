use std::sync::Arc;

use chrono::TimeZone;
use chrono_tz::Europe::Berlin;
use strom::{ControlArea, GenerationType, PowerPlantUnit, Region, Strom, StromError};
use strom_mock::MockConnector;

fn strom() -> Strom {
    Strom::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

fn unit(api_id: &str, name: &str, capacity_mw: f64) -> PowerPlantUnit {
    PowerPlantUnit {
        eic: format!("11W{api_id}"),
        see: String::new(),
        plant_name: name.to_string(),
        block_name: "Block 1".to_string(),
        company: "Testwerk GmbH".to_string(),
        kind: GenerationType::FossilGas,
        capacity_mw,
        control_area: ControlArea::Amprion,
        api_id: api_id.to_string(),
        commissioned: Some(2001),
        decommissioned: None,
    }
}

#[tokio::test]
async fn per_type_table_keeps_directions_as_separate_columns() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();

    let table = strom
        .generation_by_type(Region::Germany, start, end)
        .await
        .unwrap();

    assert_eq!(table.len(), 96);
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Solar",
            "Hydro Pumped Storage",
            "Hydro Pumped Storage (consumption)"
        ]
    );
}

#[tokio::test]
async fn nett_collapses_the_storage_pair() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();

    let table = strom
        .generation_by_type_nett(Region::Germany, start, end)
        .await
        .unwrap();

    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Solar", "Hydro Pumped Storage"]);

    // Mock storage: generation = 100 + v, consumption = 40 + v, so the net
    // series is constant 60.
    let storage = table.column("Hydro Pumped Storage").unwrap();
    assert!(storage.iter().all(|&v| v == 60.0));
}

#[tokio::test]
async fn multi_day_request_spans_several_windows() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 21, 0, 0, 0).unwrap();

    let table = strom
        .generation_by_type(Region::Germany, start, end)
        .await
        .unwrap();
    // Three civil days at quarter-hour cadence, window boundaries
    // deduplicated exactly once.
    assert_eq!(table.len(), 3 * 96);
}

#[tokio::test]
async fn per_unit_table_has_one_column_per_unit() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();

    let units = vec![unit("9001", "Kraftwerk Nord", 350.0), unit("9100", "GuD Süd", 470.0)];
    let table = strom
        .generation_by_unit(&units, start, end)
        .await
        .unwrap();

    assert_eq!(table.len(), 96);
    let north = table.column("Kraftwerk Nord Block 1").unwrap();
    let south = table.column("GuD Süd Block 1").unwrap();
    // Mock offsets every unit's series by its capacity.
    assert_eq!(south[0] - north[0], 120.0);
}

#[tokio::test]
async fn duplicate_units_are_rejected() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();

    let units = vec![unit("9001", "A", 1.0), unit("9001", "B", 2.0)];
    assert!(matches!(
        strom.generation_by_unit(&units, start, end).await,
        Err(StromError::InvalidArg(_))
    ));
    assert!(matches!(
        strom.generation_by_unit(&[], start, end).await,
        Err(StromError::InvalidArg(_))
    ));
}
