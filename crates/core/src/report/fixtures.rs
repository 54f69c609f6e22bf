//! Shared test records.

use rust_decimal::Decimal;

use crate::models::{Sale, User};
use crate::types::{Email, PaymentMethod, Role, SaleDate, SaleId, UserId};

pub fn sale(id: &str, date: &str, value: i64, attendant: &str) -> Sale {
    Sale {
        id: SaleId::new(id),
        client_name: format!("Cliente {id}"),
        client_phone: "11999990000".to_owned(),
        value: Decimal::new(value, 0),
        date: SaleDate::from_raw(date),
        attendant_name: format!("Atendente {attendant}"),
        attendant_id: UserId::new(attendant),
        payment_method: PaymentMethod::Pix,
    }
}

pub fn attendant(id: &str, commission: Option<i64>) -> User {
    User {
        id: UserId::new(id),
        name: format!("Atendente {id}"),
        email: Email::parse(&format!("{id}@empresa.com")).unwrap_or_else(|e| panic!("{e}")),
        password_hash: String::new(),
        role: Role::Attendant,
        commission: commission.map(|c| Decimal::new(c, 0)),
    }
}

/// Jan-05 (100, a1), Jan-20 (50, a1), Feb-01 (200, a2), all 2024.
pub fn scenario_sales() -> Vec<Sale> {
    vec![
        sale("s1", "2024-01-05", 100, "a1"),
        sale("s2", "2024-01-20", 50, "a1"),
        sale("s3", "2024-02-01", 200, "a2"),
    ]
}

/// a1 at 5%, a2 at 10%.
pub fn scenario_attendants() -> Vec<User> {
    vec![attendant("a1", Some(5)), attendant("a2", Some(10))]
}
