//! Decoding of the SMARD power-plant metadata into reference records.

use std::collections::HashMap;

use serde::Deserialize;

use strom_types::{ControlArea, GenerationType, PowerPlantUnit, StromError};

const CONNECTOR: &str = "strom-smard";

#[derive(Debug, Deserialize)]
struct MetadataPayload {
    plants: Vec<PlantEntry>,
}

#[derive(Debug, Deserialize)]
struct PlantEntry {
    name: String,
    company: String,
    resource: String,
    #[serde(rename = "regionId")]
    region_id: String,
    blocks: Vec<BlockEntry>,
}

#[derive(Debug, Deserialize)]
struct BlockEntry {
    id: String,
    name: String,
    #[serde(rename = "blockCode")]
    block_code: String,
    power: f64,
    #[serde(rename = "productionId")]
    production_id: Option<serde_json::Value>,
    commissioning: Option<serde_json::Value>,
    status: String,
}

/// Resource keys as they appear in the metadata document.
const RESOURCE_MAPPINGS: &[(&str, GenerationType)] = &[
    ("KW-Energieträger.Wind (Onshore)", GenerationType::WindOnshore),
    ("KW-Energieträger.Steinkohle", GenerationType::FossilHardCoal),
    ("KW-Energieträger.Erdgas", GenerationType::FossilGas),
    ("KW-Energieträger.Pumpspeicher", GenerationType::HydroPumpedStorage),
    (
        "KW-Energieträger.Sonstige konventionelle Energieträger",
        GenerationType::Other,
    ),
    ("KW-Energieträger.Photovoltaik", GenerationType::Solar),
    ("KW-Energieträger.Wind (Offshore)", GenerationType::WindOffshore),
    ("KW-Energieträger.Laufwasser", GenerationType::HydroRunOfRiver),
    ("KW-Energieträger.Mineralölprodukte", GenerationType::FossilOil),
    ("KW-Energieträger.Abfall", GenerationType::Waste),
    ("KW-Energieträger.Kernenergie", GenerationType::Nuclear),
    ("KW-Energieträger.Braunkohle", GenerationType::FossilBrownCoal),
    (
        "KW-Energieträger.Speicherwasser (ohne Pumpspeicher)",
        GenerationType::HydroReservoir,
    ),
    ("KW-Energieträger.Batteriespeicher", GenerationType::BatteryStorage),
    ("KW-Energieträger.Biomasse", GenerationType::Biomass),
    ("KW-Energieträger.Wasserkraft", GenerationType::Hydro),
];

fn resource_type(key: &str) -> Option<GenerationType> {
    RESOURCE_MAPPINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, t)| t)
}

/// First run of four consecutive digits in a free-form year field
/// (e.g. "endgültig stillgelegt 2021").
fn first_year(s: &str) -> Option<i32> {
    let bytes = s.as_bytes();
    for i in 0..bytes.len().saturating_sub(3) {
        if bytes[i..i + 4].iter().all(u8::is_ascii_digit) {
            return s[i..i + 4].parse().ok();
        }
    }
    None
}

fn commissioning_year(value: Option<&serde_json::Value>) -> Option<i32> {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Some(serde_json::Value::String(s)) => first_year(s),
        _ => None,
    }
}

fn production_id(value: Option<&serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn translated(lang: &HashMap<String, String>, key: &str) -> String {
    lang.get(key).cloned().unwrap_or_default()
}

/// Decode the power-plant metadata and translation documents into per-unit
/// reference records.
///
/// Blocks without a production id are not present in the chart-data API and
/// are skipped, as are blocks whose resource key has no generation type.
/// Blocks sharing one production id are merged: capacity is summed, every
/// other field is taken from the first block.
///
/// # Errors
/// `SourceUnavailable` when either document does not decode.
pub fn decode_power_plant_metadata(
    metadata_json: &str,
    translations: &HashMap<String, String>,
) -> Result<Vec<PowerPlantUnit>, StromError> {
    let payload: MetadataPayload = serde_json::from_str(metadata_json)
        .map_err(|e| StromError::source(CONNECTOR, format!("malformed plant metadata: {e}")))?;

    let mut units: Vec<PowerPlantUnit> = Vec::new();
    for plant in &payload.plants {
        let Some(control_area) = ControlArea::from_str_opt(&plant.region_id) else {
            tracing::debug!(region = %plant.region_id, "skipping plant outside the four control areas");
            continue;
        };
        let Some(kind) = resource_type(&plant.resource) else {
            tracing::debug!(resource = %plant.resource, "skipping plant with unmapped resource");
            continue;
        };
        for block in &plant.blocks {
            let Some(api_id) = production_id(block.production_id.as_ref()) else {
                continue;
            };
            let see = if block.id.contains("SEE") {
                block.id.clone()
            } else {
                String::new()
            };
            let unit = PowerPlantUnit {
                eic: block.block_code.clone(),
                see,
                plant_name: translated(translations, &plant.name),
                block_name: translated(translations, &block.name),
                company: plant.company.clone(),
                kind,
                capacity_mw: block.power,
                control_area,
                api_id,
                commissioned: commissioning_year(block.commissioning.as_ref()),
                decommissioned: first_year(&block.status),
            };
            match units.iter_mut().find(|u| u.api_id == unit.api_id) {
                Some(existing) => existing.capacity_mw += unit.capacity_mw,
                None => units.push(unit),
            }
        }
    }
    Ok(units)
}
