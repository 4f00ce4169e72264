//! Demo data: six Washington DC-area docks and four carriers under the
//! `default` tenant. Loaded at startup when the dock store is empty.

use coords::models::{
    generate_id, utc_now, Carrier, CarrierStatus, Dock, DockStatus, Location, LocationType,
};
use coords::protocol::generate_l1;
use coords::{CoordsError, Stores};

const DEMO_TENANT: &str = "default";

/// Seed demo docks, carriers, and locations. Returns `false` without
/// touching anything when the tenant already has docks.
pub async fn seed_demo_data(stores: &Stores) -> Result<bool, CoordsError> {
    if !stores.docks.list(DEMO_TENANT, None).await?.is_empty() {
        return Ok(false);
    }

    let demo_docks: [(&str, f64, f64, &str, DockStatus); 6] = [
        ("Dock A1", 38.9072, -77.0369, "@demo/dock-a1", DockStatus::Available),
        ("Dock A2", 38.9082, -77.0359, "@demo/dock-a2", DockStatus::Occupied),
        ("Dock B1", 38.9062, -77.0379, "@demo/dock-b1", DockStatus::Available),
        ("Dock B2", 38.9092, -77.0349, "@demo/dock-b2", DockStatus::Maintenance),
        ("Dock C1", 38.9052, -77.0389, "@demo/dock-c1", DockStatus::Available),
        ("Dock C2", 38.9102, -77.0339, "@demo/dock-c2", DockStatus::Reserved),
    ];

    for (i, (name, lat, lng, handle, status)) in demo_docks.into_iter().enumerate() {
        let l1_raw = generate_l1(lat, lng, 0.0);
        let location_id = generate_id("loc_");

        stores
            .locations
            .put(Location {
                location_id: location_id.clone(),
                name: name.to_string(),
                lat,
                lng,
                l1_raw: Some(l1_raw.clone()),
                l2_handle: Some(handle.to_string()),
                tenant_id: DEMO_TENANT.into(),
                location_type: LocationType::Dock,
                metadata: serde_json::Value::Object(Default::default()),
                created_at: utc_now(),
            })
            .await?;

        stores
            .docks
            .put(Dock {
                dock_id: generate_id("dock_"),
                name: name.to_string(),
                location_id,
                tenant_id: DEMO_TENANT.into(),
                status,
                assigned_carrier_id: None,
                capacity: 1,
                lat,
                lng,
                l1_raw: Some(l1_raw),
                l2_handle: Some(handle.to_string()),
                last_activity: None,
                turnaround_avg_mins: 40.0 + (i as f64) * 5.0,
                created_at: utc_now(),
                updated_at: utc_now(),
            })
            .await?;
    }

    let demo_carriers: [(&str, &str, f64, f64, CarrierStatus); 4] = [
        ("Carrier Alpha", "TRK-001", 38.9150, -77.0400, CarrierStatus::Enroute),
        ("Carrier Bravo", "TRK-002", 38.9000, -77.0300, CarrierStatus::Loading),
        ("Carrier Charlie", "TRK-003", 38.9200, -77.0450, CarrierStatus::Enroute),
        ("Carrier Delta", "TRK-004", 38.8950, -77.0250, CarrierStatus::Arrived),
    ];

    for (name, code, lat, lng, status) in demo_carriers {
        let enroute = status == CarrierStatus::Enroute;
        stores
            .carriers
            .put(Carrier {
                carrier_id: generate_id("carrier_"),
                name: name.to_string(),
                code: code.to_string(),
                tenant_id: DEMO_TENANT.into(),
                status,
                current_lat: Some(lat),
                current_lng: Some(lng),
                destination_dock_id: None,
                eta_minutes: enroute.then_some(15),
                distance_km: enroute.then_some(5.2),
                driver_name: Some(format!("Driver {code}")),
                driver_phone: Some("+1-555-0100".into()),
                created_at: utc_now(),
                updated_at: utc_now(),
            })
            .await?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_once_and_is_idempotent() {
        let stores = Stores::in_memory();
        assert!(seed_demo_data(&stores).await.unwrap());
        assert!(!seed_demo_data(&stores).await.unwrap());

        let docks = stores.docks.list(DEMO_TENANT, None).await.unwrap();
        assert_eq!(docks.len(), 6);
        for dock in &docks {
            let l1 = dock.l1_raw.as_deref().unwrap();
            let parsed = coords::protocol::parse_l1(l1).unwrap();
            assert!(parsed.checksum_valid);
        }

        let carriers = stores.carriers.list(DEMO_TENANT, None).await.unwrap();
        assert_eq!(carriers.len(), 4);
    }
}
