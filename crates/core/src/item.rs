//! Inventory item record, creation payload and update patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::id::ItemId;

/// One physical inventory item at a rack/bin location.
///
/// Owned exclusively by the ledger; nothing else mutates these records.
/// Field names in the serialized form are a compatibility contract with
/// existing data files and consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub make: String,
    pub model: String,
    pub specification: String,
    pub rack: String,
    pub bin: String,
    /// Units on hand. Never negative.
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Item {
    /// Case-insensitive substring match across the descriptive and
    /// location fields.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [
            &self.name,
            &self.make,
            &self.model,
            &self.specification,
            &self.rack,
            &self.bin,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Payload for creating an item. The ledger assigns the identifier and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub make: String,
    pub model: String,
    pub specification: String,
    pub rack: String,
    pub bin: String,
    pub quantity: i64,
}

impl NewItem {
    /// All descriptive/location fields must be non-blank and the initial
    /// quantity non-negative.
    pub fn validate(&self) -> LedgerResult<()> {
        let fields = [
            ("name", &self.name),
            ("make", &self.make),
            ("model", &self.model),
            ("specification", &self.specification),
            ("rack", &self.rack),
            ("bin", &self.bin),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(LedgerError::validation(format!("{label} cannot be empty")));
            }
        }
        if self.quantity < 0 {
            return Err(LedgerError::validation("quantity cannot be negative"));
        }
        Ok(())
    }
}

/// Partial update for an item: each field independently present or absent.
///
/// Absent fields leave the record untouched. Quantity is validated before
/// anything is persisted; the other fields carry no constraints on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub specification: Option<String>,
    pub rack: Option<String>,
    pub bin: Option<String>,
    pub quantity: Option<i64>,
}

impl ItemPatch {
    pub fn validate(&self) -> LedgerResult<()> {
        if let Some(q) = self.quantity {
            if q < 0 {
                return Err(LedgerError::validation("quantity cannot be negative"));
            }
        }
        Ok(())
    }

    /// Merge the present fields over `item`. Timestamps and actor stamping
    /// are the ledger's job.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(make) = &self.make {
            item.make = make.clone();
        }
        if let Some(model) = &self.model {
            item.model = model.clone();
        }
        if let Some(specification) = &self.specification {
            item.specification = specification.clone();
        }
        if let Some(rack) = &self.rack {
            item.rack = rack.clone();
        }
        if let Some(bin) = &self.bin {
            item.bin = bin.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_item() -> NewItem {
        NewItem {
            name: "Bearing 6204".to_string(),
            make: "SKF".to_string(),
            model: "6204-2RS".to_string(),
            specification: "20x47x14mm sealed".to_string(),
            rack: "R1".to_string(),
            bin: "B3".to_string(),
            quantity: 40,
        }
    }

    fn sample_item() -> Item {
        let now = Utc::now();
        Item {
            id: ItemId::new(1),
            name: "Bearing 6204".to_string(),
            make: "SKF".to_string(),
            model: "6204-2RS".to_string(),
            specification: "20x47x14mm sealed".to_string(),
            rack: "R1".to_string(),
            bin: "B3".to_string(),
            quantity: 40,
            created_at: now,
            updated_at: now,
            updated_by: "alice".to_string(),
        }
    }

    #[test]
    fn new_item_with_blank_field_is_rejected() {
        let mut new = sample_new_item();
        new.rack = "   ".to_string();
        let err = new.validate().unwrap_err();
        assert!(matches!(err, LedgerError::Validation(msg) if msg.contains("rack")));
    }

    #[test]
    fn new_item_with_negative_quantity_is_rejected() {
        let mut new = sample_new_item();
        new.quantity = -1;
        assert!(matches!(new.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn zero_quantity_is_a_valid_creation() {
        let mut new = sample_new_item();
        new.quantity = 0;
        assert!(new.validate().is_ok());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut item = sample_item();
        let patch = ItemPatch {
            rack: Some("R9".to_string()),
            quantity: Some(12),
            ..ItemPatch::default()
        };
        patch.apply_to(&mut item);

        assert_eq!(item.rack, "R9");
        assert_eq!(item.quantity, 12);
        assert_eq!(item.name, "Bearing 6204");
        assert_eq!(item.bin, "B3");
    }

    #[test]
    fn negative_patch_quantity_is_rejected() {
        let patch = ItemPatch {
            quantity: Some(-1),
            ..ItemPatch::default()
        };
        assert!(matches!(patch.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let item = sample_item();
        assert!(item.matches("skf"));
        assert!(item.matches("6204"));
        assert!(item.matches("b3"));
        assert!(!item.matches("gasket"));
    }

    #[test]
    fn serialized_field_names_follow_the_compat_contract() {
        let value = serde_json::to_value(sample_item()).unwrap();
        let object = value.as_object().unwrap();
        for key in ["createdAt", "updatedAt", "updatedBy", "rack", "bin"] {
            assert!(object.contains_key(key), "missing field {key}");
        }
        assert!(!object.contains_key("created_at"));
    }
}
