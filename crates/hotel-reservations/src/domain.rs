use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::repository::RecordError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Caller-supplied hotel key, unique within the hotel store.
    HotelId
);
record_id!(
    /// Caller-supplied customer key, unique within the customer store.
    CustomerId
);
record_id!(
    /// Caller-supplied reservation key, unique within the reservation store.
    ReservationId
);

/// Which store a record belongs to; used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Hotel,
    Customer,
    Reservation,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Hotel => "hotel",
            EntityKind::Customer => "customer",
            EntityKind::Reservation => "reservation",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shape shared by every persisted entity: a string key plus a fixed set of named fields.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync {
    const KIND: EntityKind;
    /// Attribute names exactly as they appear in the persisted JSON.
    const FIELDS: &'static [&'static str];

    fn key(&self) -> &str;

    /// Overwrite one attribute from its textual form.
    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), RecordError>;
}

fn unknown_field<R: Record>(field: &str) -> RecordError {
    RecordError::UnknownField {
        entity: R::KIND,
        field: field.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub location: String,
    pub rooms_available: u32,
}

impl Hotel {
    pub fn new(
        hotel_id: impl Into<HotelId>,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms_available: u32,
    ) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            name: name.into(),
            location: location.into(),
            rooms_available,
        }
    }
}

impl Record for Hotel {
    const KIND: EntityKind = EntityKind::Hotel;
    const FIELDS: &'static [&'static str] = &["hotel_id", "name", "location", "rooms_available"];

    fn key(&self) -> &str {
        self.hotel_id.as_str()
    }

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), RecordError> {
        match field {
            "hotel_id" => self.hotel_id = HotelId::from(raw),
            "name" => self.name = raw.to_string(),
            "location" => self.location = raw.to_string(),
            "rooms_available" => {
                self.rooms_available = raw.trim().parse::<u32>().map_err(|err| {
                    RecordError::InvalidValue {
                        field: field.to_string(),
                        value: raw.to_string(),
                        reason: err.to_string(),
                    }
                })?;
            }
            _ => return Err(unknown_field::<Self>(field)),
        }
        Ok(())
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel {}", self.hotel_id)?;
        writeln!(f, "  name: {}", self.name)?;
        writeln!(f, "  location: {}", self.location)?;
        write!(f, "  rooms available: {}", self.rooms_available)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Customer {
    const KIND: EntityKind = EntityKind::Customer;
    const FIELDS: &'static [&'static str] = &["customer_id", "name", "email"];

    fn key(&self) -> &str {
        self.customer_id.as_str()
    }

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), RecordError> {
        match field {
            "customer_id" => self.customer_id = CustomerId::from(raw),
            "name" => self.name = raw.to_string(),
            "email" => self.email = raw.to_string(),
            _ => return Err(unknown_field::<Self>(field)),
        }
        Ok(())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer {}", self.customer_id)?;
        writeln!(f, "  name: {}", self.name)?;
        write!(f, "  email: {}", self.email)
    }
}

/// Links a customer to a hotel. Neither reference is checked by the reservation store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
}

impl Reservation {
    pub fn new(
        reservation_id: impl Into<ReservationId>,
        customer_id: impl Into<CustomerId>,
        hotel_id: impl Into<HotelId>,
    ) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
        }
    }
}

impl Record for Reservation {
    const KIND: EntityKind = EntityKind::Reservation;
    const FIELDS: &'static [&'static str] = &["reservation_id", "customer_id", "hotel_id"];

    fn key(&self) -> &str {
        self.reservation_id.as_str()
    }

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), RecordError> {
        match field {
            "reservation_id" => self.reservation_id = ReservationId::from(raw),
            "customer_id" => self.customer_id = CustomerId::from(raw),
            "hotel_id" => self.hotel_id = HotelId::from(raw),
            _ => return Err(unknown_field::<Self>(field)),
        }
        Ok(())
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation {}", self.reservation_id)?;
        writeln!(f, "  customer: {}", self.customer_id)?;
        write!(f, "  hotel: {}", self.hotel_id)
    }
}
