use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use hbnb_core::{DomainError, DomainResult, Entity, EntityId, ModelBase};

use crate::name::AmenityName;

const NAME_FIELD: &str = "name";

/// An amenity a place can offer ("Wifi", "Pool", ...).
///
/// Serializes flat: `{"id", "created_at", "updated_at", "name"}`.
/// Deserializing revalidates the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    base: ModelBase,
    name: AmenityName,
}

impl Amenity {
    /// Create a new amenity from a raw name.
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self::with_name(ModelBase::new(), AmenityName::parse(name)?))
    }

    /// Create a new amenity from an untyped name value.
    pub fn from_value(name: &Value) -> DomainResult<Self> {
        Ok(Self::with_name(ModelBase::new(), AmenityName::from_value(name)?))
    }

    /// Create a new amenity from a request body of the form `{"name": ...}`.
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let fields = payload
            .as_object()
            .ok_or_else(|| DomainError::invalid_type("amenity payload must be an object"))?;
        let name = fields
            .get(NAME_FIELD)
            .ok_or_else(|| DomainError::invalid_value("name is required"))?;
        Self::from_value(name)
    }

    /// Assemble an amenity from parts that are already validated.
    pub fn with_name(base: ModelBase, name: AmenityName) -> Self {
        Self { base, name }
    }

    pub fn name(&self) -> &AmenityName {
        &self.name
    }

    pub fn base(&self) -> &ModelBase {
        &self.base
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at()
    }

    /// Rename the amenity. On error the amenity is left untouched.
    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        self.set_name_at(name, Utc::now())
    }

    pub fn set_name_at(&mut self, name: &str, at: DateTime<Utc>) -> DomainResult<()> {
        self.name = AmenityName::parse(name)?;
        self.base.touch_at(at);
        Ok(())
    }

    /// Apply a partial update from a JSON object.
    ///
    /// Only `name` is mutable; `id`, `created_at`, `updated_at` and unknown
    /// keys are ignored. All values are validated before any is applied.
    pub fn update(&mut self, fields: &Map<String, Value>) -> DomainResult<()> {
        self.update_at(fields, Utc::now())
    }

    pub fn update_at(
        &mut self,
        fields: &Map<String, Value>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let name = fields
            .get(NAME_FIELD)
            .map(AmenityName::from_value)
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        self.base.touch_at(at);
        Ok(())
    }
}

impl Entity for Amenity {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        self.base.id()
    }
}
