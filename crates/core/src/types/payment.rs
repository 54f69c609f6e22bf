//! Payment methods accepted at sale entry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a sale was paid.
///
/// Stored records use the short codes `boleto`, `pix` and `cartao`. Any other
/// code, a `null`, or a missing field deserializes to [`PaymentMethod::Unknown`]
/// so that old or hand-edited data still loads and aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentMethod {
    /// Bank slip.
    Boleto,
    /// Instant transfer.
    Pix,
    /// Credit card.
    CreditCard,
    /// Missing or unrecognized code.
    #[default]
    Unknown,
}

impl PaymentMethod {
    /// Every method an attendant can pick when entering a sale.
    pub const SELECTABLE: [Self; 3] = [Self::Boleto, Self::Pix, Self::CreditCard];

    /// Storage code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Boleto => "boleto",
            Self::Pix => "pix",
            Self::CreditCard => "cartao",
            Self::Unknown => "unknown",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boleto => "Boleto",
            Self::Pix => "PIX",
            Self::CreditCard => "Cartão de Crédito",
            Self::Unknown => "N/A",
        }
    }

    /// Resolve a storage code, falling back to `Unknown`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "boleto" => Self::Boleto,
            "pix" => Self::Pix,
            "cartao" => Self::CreditCard,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    /// Strict parse for user input; unlike deserialization, unknown codes are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_code(s) {
            Self::Unknown => Err(format!(
                "invalid payment method: {s} (expected boleto, pix or cartao)"
            )),
            method => Ok(method),
        }
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.as_deref().map_or(Self::Unknown, Self::from_code))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_roundtrip_through_json() {
        for method in PaymentMethod::SELECTABLE {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(serde_json::from_str::<PaymentMethod>(&json).unwrap(), method);
        }
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"cartao\""
        );
    }

    #[test]
    fn test_unrecognized_and_null_degrade_to_unknown() {
        let parsed: PaymentMethod = serde_json::from_str("\"cheque\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Unknown);

        let parsed: PaymentMethod = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, PaymentMethod::Unknown);
        assert_eq!(parsed.label(), "N/A");
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("pix".parse::<PaymentMethod>().unwrap(), PaymentMethod::Pix);
        assert!("unknown".parse::<PaymentMethod>().is_err());
        assert!("PIX".parse::<PaymentMethod>().is_err());
    }
}
