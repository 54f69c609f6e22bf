//! Sale records and sale entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{User, ValidationError};
use crate::types::{PaymentMethod, SaleDate, SaleId, UserId};

/// A recorded sale.
///
/// Sales are immutable once recorded. `attendant_name` is the attendant's
/// name at the moment the sale was entered and is never refreshed; reports
/// show it as-is even if the account was renamed or deleted later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique key.
    pub id: SaleId,
    /// Customer name.
    pub client_name: String,
    /// Customer phone, as typed.
    pub client_phone: String,
    /// Amount in reais.
    pub value: Decimal,
    /// Calendar date of the sale.
    pub date: SaleDate,
    /// Attendant name snapshot.
    pub attendant_name: String,
    /// Attendant who recorded the sale. May point at a deleted account.
    pub attendant_id: UserId,
    /// Payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Fields entered on the new-sale form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    pub client_name: String,
    pub client_phone: String,
    pub value: Decimal,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl SaleDraft {
    /// Validate the draft and record it under `attendant`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the client name is blank, the value is
    /// negative, or no payment method was chosen.
    pub fn into_sale(self, id: SaleId, attendant: &User) -> Result<Sale, ValidationError> {
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(ValidationError::Blank("client name"));
        }
        if self.value < Decimal::ZERO {
            return Err(ValidationError::NegativeValue(self.value));
        }
        if self.payment_method == PaymentMethod::Unknown {
            return Err(ValidationError::MissingPaymentMethod);
        }

        Ok(Sale {
            id,
            client_name: client_name.to_owned(),
            client_phone: self.client_phone.trim().to_owned(),
            value: self.value,
            date: SaleDate::from(self.date),
            attendant_name: attendant.name.clone(),
            attendant_id: attendant.id.clone(),
            payment_method: self.payment_method,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Email, Role};

    fn attendant() -> User {
        User {
            id: UserId::new("1"),
            name: "João Silva".to_owned(),
            email: Email::parse("joao@empresa.com").unwrap(),
            password_hash: String::new(),
            role: Role::Attendant,
            commission: Some(Decimal::new(5, 0)),
        }
    }

    fn draft() -> SaleDraft {
        SaleDraft {
            client_name: " Carlos Pereira ".to_owned(),
            client_phone: "(11) 98888-7777".to_owned(),
            value: Decimal::new(25_000, 2),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            payment_method: PaymentMethod::Pix,
        }
    }

    #[test]
    fn test_into_sale_snapshots_attendant() {
        let sale = draft().into_sale(SaleId::new("s1"), &attendant()).unwrap();
        assert_eq!(sale.client_name, "Carlos Pereira");
        assert_eq!(sale.attendant_id.as_str(), "1");
        assert_eq!(sale.attendant_name, "João Silva");
        assert_eq!(sale.date.as_str(), "2024-03-15");
    }

    #[test]
    fn test_into_sale_validation() {
        let mut negative = draft();
        negative.value = Decimal::new(-1, 0);
        assert!(matches!(
            negative.into_sale(SaleId::new("s1"), &attendant()),
            Err(ValidationError::NegativeValue(_))
        ));

        let mut blank = draft();
        blank.client_name = "  ".to_owned();
        assert_eq!(
            blank.into_sale(SaleId::new("s1"), &attendant()),
            Err(ValidationError::Blank("client name"))
        );

        let mut unpaid = draft();
        unpaid.payment_method = PaymentMethod::Unknown;
        assert_eq!(
            unpaid.into_sale(SaleId::new("s1"), &attendant()),
            Err(ValidationError::MissingPaymentMethod)
        );
    }

    #[test]
    fn test_deserialize_legacy_record() {
        let json = r#"{
            "id": "1718000000000",
            "clientName": "Fernanda Lima",
            "clientPhone": "11999990000",
            "value": 349.9,
            "date": "2024-06-10",
            "attendantName": "Maria Santos",
            "attendantId": "2",
            "paymentMethod": "boleto"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.value, Decimal::new(3499, 1));
        assert_eq!(sale.payment_method, PaymentMethod::Boleto);
        assert_eq!(sale.date.year_month(), Some((2024, 6)));
    }

    #[test]
    fn test_deserialize_without_payment_method() {
        let json = r#"{
            "id": "s2",
            "clientName": "Roberto",
            "clientPhone": "",
            "value": "10.00",
            "date": "2024-06-11",
            "attendantName": "Maria Santos",
            "attendantId": "2"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment_method, PaymentMethod::Unknown);
    }
}
