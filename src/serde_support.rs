//! Text, JSON, and binary encodings through `serde`
//!
//! A UUID is always serialized as its canonical string, including in compact formats, and the nil
//! UUID as an empty string.

#![cfg(feature = "serde")]
#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use std::fmt;

use serde::{de, Deserializer, Serializer};

use crate::{Error, Uuid};

impl serde::Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_nil() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(&self.encode())
        }
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    /// Reads a string, or in human-readable formats also `null`, which yields the nil UUID.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(VisitorImpl)
        } else {
            deserializer.deserialize_str(VisitorImpl)
        }
    }
}

struct VisitorImpl;

impl VisitorImpl {
    fn reject<E: de::Error>(value: impl fmt::Display) -> E {
        de::Error::custom(Error::InvalidFormat(value.to_string()))
    }
}

impl<'de> de::Visitor<'de> for VisitorImpl {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a UUID string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse::<Self::Value>().map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        Uuid::try_parse_ascii(value).map_err(de::Error::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Uuid::NIL)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Uuid::NIL)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Err(Self::reject(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Err(Self::reject(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Err(Self::reject(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Err(Self::reject(value))
    }
}
