//! Demo data loaded at startup

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use freightdesk::{Carrier, ContactInfo, Load, LoadStatus};

fn at(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .expect("demo timestamps are well-formed")
}

#[allow(clippy::too_many_arguments)]
fn carrier(
    mc_number: &str,
    company_name: &str,
    status: &str,
    insurance_valid: bool,
    safety_rating: &str,
    verified: bool,
    phone: &str,
    email: &str,
) -> Carrier {
    Carrier {
        mc_number: mc_number.to_string(),
        company_name: company_name.to_string(),
        status: status.to_string(),
        insurance_valid,
        safety_rating: safety_rating.to_string(),
        verified,
        contact_info: ContactInfo {
            phone: phone.to_string(),
            email: email.to_string(),
        },
    }
}

pub fn demo_carriers() -> Vec<Carrier> {
    vec![
        carrier(
            "MC123456",
            "Swift Transportation",
            "active",
            true,
            "A",
            true,
            "+1-555-0123",
            "dispatch@swifttrans.com",
        ),
        carrier(
            "MC789012",
            "Schneider National",
            "active",
            true,
            "A+",
            true,
            "+1-555-0456",
            "operations@schneider.com",
        ),
        carrier(
            "MC345678",
            "J.B. Hunt Transport",
            "suspended",
            false,
            "C",
            false,
            "+1-555-0789",
            "info@jbhunt.com",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn load(
    load_id: &str,
    (origin, destination): (&str, &str),
    (pickup, delivery): (&str, &str),
    equipment_type: &str,
    loadboard_rate: f64,
    notes: &str,
    weight: u32,
    commodity_type: &str,
    (miles, deadhead_miles): (u32, u32),
) -> Load {
    Load {
        load_id: load_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        pickup_datetime: at(pickup),
        delivery_datetime: at(delivery),
        equipment_type: equipment_type.to_string(),
        loadboard_rate,
        negotiated_rate: None,
        notes: notes.to_string(),
        weight,
        commodity_type: commodity_type.to_string(),
        status: LoadStatus::Available,
        miles,
        deadhead_miles,
        booked_by: None,
        final_rate: None,
    }
}

pub fn demo_loads() -> Vec<Load> {
    vec![
        load(
            "L001",
            ("Dallas, TX", "Houston, TX"),
            ("2025-09-10T08:00:00", "2025-09-11T18:00:00"),
            "Flatbed",
            1500.0,
            "Fragile equipment",
            10000,
            "Machinery",
            (240, 15),
        ),
        load(
            "L002",
            ("Chicago, IL", "Detroit, MI"),
            ("2025-09-12T07:00:00", "2025-09-13T20:00:00"),
            "Reefer",
            1200.0,
            "Perishable goods",
            8000,
            "Food",
            (280, 25),
        ),
        load(
            "L003",
            ("Los Angeles, CA", "Phoenix, AZ"),
            ("2025-09-14T09:00:00", "2025-09-15T16:00:00"),
            "Dry Van",
            800.0,
            "General freight",
            15000,
            "Electronics",
            (370, 30),
        ),
        load(
            "L004",
            ("Miami, FL", "Atlanta, GA"),
            ("2025-09-16T06:00:00", "2025-09-17T14:00:00"),
            "Flatbed",
            1100.0,
            "Construction materials",
            12000,
            "Building Materials",
            (660, 20),
        ),
        load(
            "L005",
            ("Seattle, WA", "Portland, OR"),
            ("2025-09-18T10:00:00", "2025-09-19T15:00:00"),
            "Reefer",
            600.0,
            "Temperature controlled",
            5000,
            "Pharmaceuticals",
            (175, 10),
        ),
    ]
}

/// Read a JSON array of loads (the `loads.json` format)
pub fn loads_from_file(path: &Path) -> Result<Vec<Load>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read loads from {:?}", path))?;
    let loads: Vec<Load> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse loads file {:?}", path))?;
    Ok(loads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_set_shape() {
        let carriers = demo_carriers();
        assert_eq!(carriers.len(), 3);
        assert_eq!(carriers.iter().filter(|c| c.verified).count(), 2);

        let loads = demo_loads();
        let rates: Vec<f64> = loads.iter().map(|l| l.loadboard_rate).collect();
        assert_eq!(rates, vec![1500.0, 1200.0, 800.0, 1100.0, 600.0]);
        assert!(loads.iter().all(|l| l.status == LoadStatus::Available));
    }

    #[test]
    fn test_loads_from_file() {
        let path = std::env::temp_dir()
            .join(format!("freightdesk-loads-{}.json", uuid::Uuid::new_v4()));
        let json = serde_json::to_string(&demo_loads()[..2]).unwrap();
        std::fs::write(&path, json).unwrap();

        let loads = loads_from_file(&path).unwrap();
        assert_eq!(loads.len(), 2);
        assert_eq!(loads[1].load_id, "L002");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_loads_from_missing_file() {
        let path = std::env::temp_dir().join("freightdesk-does-not-exist.json");
        assert!(loads_from_file(&path).is_err());
    }
}
