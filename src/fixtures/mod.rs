//! Sample request payloads for manual testing.
//!
//! These records are not tied to any environment. They serialize to the JSON
//! bodies the address, product and listing endpoints accept, so they can be
//! pasted straight into a Bruno request.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Shipping,
    Billing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Address {
    pub address_type: AddressType,
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
    pub is_default: bool,
}

/// A trading card. Stats are strings because the product API takes them that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub series: &'static str,
    pub rarity: &'static str,
    pub hp: &'static str,
    pub attack: &'static str,
    pub defense: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub condition: &'static str,
    /// Decimal price, kept as a string to avoid float rounding
    pub price: &'static str,
    pub quantity: u32,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Addresses {
    pub shipping: Address,
    pub billing: Address,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Products {
    pub charizard: Product,
    pub pikachu: Product,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Listings {
    pub charizard_nm: Listing,
    pub pikachu_played: Listing,
}

/// All sample payloads, grouped by endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SampleData {
    pub addresses: Addresses,
    pub products: Products,
    pub listings: Listings,
}

static SAMPLE_DATA: SampleData = SampleData {
    addresses: Addresses {
        shipping: Address {
            address_type: AddressType::Shipping,
            street: "123 Main Street",
            city: "Paris",
            state: "Île-de-France",
            postal_code: "75001",
            country: "France",
            is_default: true,
        },
        billing: Address {
            address_type: AddressType::Billing,
            street: "456 Business Ave",
            city: "Lyon",
            state: "Auvergne-Rhône-Alpes",
            postal_code: "69001",
            country: "France",
            is_default: false,
        },
    },
    products: Products {
        charizard: Product {
            name: "Charizard",
            series: "Base Set",
            rarity: "Rare Holo",
            hp: "120",
            attack: "100",
            defense: "78",
        },
        pikachu: Product {
            name: "Pikachu",
            series: "Base Set",
            rarity: "Common",
            hp: "60",
            attack: "55",
            defense: "40",
        },
    },
    listings: Listings {
        charizard_nm: Listing {
            condition: "Near Mint",
            price: "299.99",
            quantity: 1,
            description: "Perfect condition Charizard from Base Set. Never played, stored in protective sleeve.",
        },
        pikachu_played: Listing {
            condition: "Played",
            price: "45.00",
            quantity: 3,
            description: "Played condition Pikachu. Some edge wear but still displayable.",
        },
    },
};

/// The built-in sample payloads.
///
/// # Example
///
/// ```rust
/// use bruno_env::fixtures::{sample_data, to_json_pretty};
///
/// let body = to_json_pretty(&sample_data().products.pikachu).unwrap();
/// assert!(body.contains("\"name\": \"Pikachu\""));
/// ```
pub fn sample_data() -> &'static SampleData {
    &SAMPLE_DATA
}

/// Pretty-print a payload as a JSON request body.
pub fn to_json_pretty<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

impl SampleData {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        to_json_pretty(self)
    }
}
