//! Shared identity + lifecycle timestamps, embedded by every model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::EntityId;

/// Identity and timestamps common to all models.
///
/// Models embed this by composition (usually with `#[serde(flatten)]`) rather
/// than inheriting from it.
///
/// Invariant: `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModelBaseRecord")]
pub struct ModelBase {
    id: EntityId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unchecked wire form of [`ModelBase`].
#[derive(Deserialize)]
struct ModelBaseRecord {
    id: EntityId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ModelBaseRecord> for ModelBase {
    type Error = DomainError;

    fn try_from(record: ModelBaseRecord) -> Result<Self, Self::Error> {
        if record.updated_at < record.created_at {
            return Err(DomainError::invalid_value("updated_at must not precede created_at"));
        }

        Ok(Self {
            id: record.id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl ModelBase {
    /// Fresh random id, both timestamps set to now.
    pub fn new() -> Self {
        Self::with_id_at(EntityId::new(), Utc::now())
    }

    /// Deterministic constructor.
    pub fn with_id_at(id: EntityId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Mark the record as modified now.
    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    /// Mark the record as modified at `at`.
    ///
    /// Clamped so `updated_at` never precedes `created_at`.
    pub fn touch_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at.max(self.created_at);
    }
}

impl Default for ModelBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_base_has_equal_timestamps() {
        let base = ModelBase::with_id_at(EntityId::new(), test_time());
        assert_eq!(base.created_at(), base.updated_at());
    }

    #[test]
    fn touch_at_moves_updated_at_forward() {
        let mut base = ModelBase::with_id_at(EntityId::new(), test_time());
        let later = test_time() + Duration::minutes(5);

        base.touch_at(later);

        assert_eq!(base.created_at(), test_time());
        assert_eq!(base.updated_at(), later);
    }

    #[test]
    fn touch_at_never_precedes_created_at() {
        let mut base = ModelBase::with_id_at(EntityId::new(), test_time());

        base.touch_at(test_time() - Duration::days(1));

        assert_eq!(base.updated_at(), base.created_at());
    }

    #[test]
    fn touch_keeps_identity() {
        let id = EntityId::new();
        let mut base = ModelBase::with_id_at(id, test_time());
        base.touch();
        assert_eq!(base.id(), &id);
        assert!(base.updated_at() >= base.created_at());
    }

    #[test]
    fn serializes_flat_fields() {
        let base = ModelBase::with_id_at(EntityId::new(), test_time());
        let value = serde_json::to_value(&base).unwrap();

        assert_eq!(value["id"], serde_json::json!(base.id().to_string()));
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn deserialization_round_trips() {
        let mut base = ModelBase::with_id_at(EntityId::new(), test_time());
        base.touch_at(test_time() + Duration::minutes(5));

        let value = serde_json::to_value(&base).unwrap();
        let back: ModelBase = serde_json::from_value(value).unwrap();
        assert_eq!(back, base);
    }

    #[test]
    fn deserialization_rejects_updated_before_created() {
        let value = serde_json::json!({
            "id": EntityId::new().to_string(),
            "created_at": "2024-05-02T00:00:00Z",
            "updated_at": "2024-05-01T00:00:00Z",
        });

        let err = serde_json::from_value::<ModelBase>(value).unwrap_err();
        assert!(err.to_string().contains("updated_at must not precede created_at"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: no sequence of touches can move `updated_at` below `created_at`.
            #[test]
            fn updated_at_never_precedes_created_at(
                offsets in proptest::collection::vec(-10_000i64..10_000, 0..20)
            ) {
                let mut base = ModelBase::with_id_at(EntityId::new(), test_time());
                for offset in offsets {
                    base.touch_at(test_time() + Duration::seconds(offset));
                    prop_assert!(base.updated_at() >= base.created_at());
                }
            }
        }
    }
}
