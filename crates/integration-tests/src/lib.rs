//! Integration tests for Sales Tracker.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sales-tracker-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `report_scenarios` - End-to-end report computations over fixed data sets
//! - `record_store` - Reports driven through the `RecordStore` seam
//!
//! Fixtures are written as stored JSON documents, so every test also checks
//! that previously persisted data still loads.

use sales_tracker_core::{Dataset, Sale, User};
use serde_json::json;

/// A stored sale as it was written before payment methods existed.
///
/// # Panics
///
/// Panics if the document does not deserialize, which means the stored
/// format is no longer readable.
#[must_use]
pub fn sale(id: &str, date: &str, value: f64, attendant_id: &str) -> Sale {
    serde_json::from_value(json!({
        "id": id,
        "clientName": format!("Cliente {id}"),
        "clientPhone": "(11) 90000-0000",
        "value": value,
        "date": date,
        "attendantName": format!("Atendente {attendant_id}"),
        "attendantId": attendant_id,
    }))
    .expect("stored sale document should deserialize")
}

/// A stored attendant account.
///
/// # Panics
///
/// Panics if the document does not deserialize.
#[must_use]
pub fn attendant(id: &str, commission: Option<f64>) -> User {
    let mut doc = json!({
        "id": id,
        "name": format!("Atendente {id}"),
        "email": format!("{id}@empresa.com"),
        "passwordHash": "$argon2id$v=19$m=19456,t=2,p=1$fixture$fixture",
        "role": "attendant",
    });
    if let (Some(pct), Some(fields)) = (commission, doc.as_object_mut()) {
        fields.insert("commission".to_owned(), json!(pct));
    }
    serde_json::from_value(doc).expect("stored user document should deserialize")
}

/// The three-sale, two-attendant data set most scenarios start from.
#[must_use]
pub fn scenario() -> Dataset {
    Dataset {
        users: vec![attendant("a1", Some(5.0)), attendant("a2", Some(10.0))],
        sales: vec![
            sale("s1", "2024-01-05", 100.0, "a1"),
            sale("s2", "2024-01-20", 50.0, "a1"),
            sale("s3", "2024-02-01", 200.0, "a2"),
        ],
    }
}

/// Ids of `sales`, in order.
#[must_use]
pub fn ids(sales: &[Sale]) -> Vec<&str> {
    sales.iter().map(|s| s.id.as_str()).collect()
}
