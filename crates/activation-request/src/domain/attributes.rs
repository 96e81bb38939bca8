//! # Identity Attributes
//!
//! Ordered, unique-key string map carried by every activation request.
//!
//! ## Security
//!
//! Values hold activation codes, recovery codes and PUKs. Every entry is
//! zeroed when dropped and `Debug` output only ever shows keys.

use super::errors::ValidationError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Attribute key for the standard activation code.
pub const CODE_KEY: &str = "code";

/// Attribute key for the recovery code.
pub const RECOVERY_CODE_KEY: &str = "recoveryCode";

/// Attribute key for the Personal Unlock Key.
pub const PUK_KEY: &str = "puk";

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
struct Attribute {
    name: String,
    value: String,
}

/// Identity attributes in insertion order.
///
/// Keys are unique. Only the variant constructors and the decoder fill this
/// map, so a request's attributes cannot change after construction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct IdentityAttributes {
    entries: Vec<Attribute>,
}

impl IdentityAttributes {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, rejecting a repeated key.
    pub(crate) fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        if self.contains_key(&name) {
            return Err(ValidationError::DuplicateKey { key: name });
        }
        self.entries.push(Attribute {
            name,
            value: value.into(),
        });
        Ok(())
    }

    /// Value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether `name` is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|a| a.name == name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.name.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
    }
}

impl fmt::Debug for IdentityAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the values
        f.debug_map()
            .entries(self.entries.iter().map(|a| (&a.name, "***")))
            .finish()
    }
}

impl Serialize for IdentityAttributes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for attribute in &self.entries {
            map.serialize_entry(&attribute.name, &attribute.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IdentityAttributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = IdentityAttributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string identity attributes")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attributes = IdentityAttributes::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    attributes
                        .insert(name, value)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}
