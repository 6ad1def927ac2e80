//! Vendor types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vendor the couple is tracking (caterer, florist, photographer, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique vendor identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Business name
    pub name: String,
    /// Service category
    pub category: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Quoted cost
    pub cost: Option<f64>,
    /// Whether the vendor has been booked
    pub booked: bool,
}

/// Payload for creating a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVendor {
    /// Business name
    pub name: String,
    /// Service category
    pub category: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Quoted cost
    pub cost: Option<f64>,
    /// Whether the vendor has been booked
    #[serde(default)]
    pub booked: bool,
}

/// Partial update for a vendor; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorUpdate {
    /// New business name
    pub name: Option<String>,
    /// New service category
    pub category: Option<String>,
    /// New contact email
    pub email: Option<String>,
    /// New contact phone
    pub phone: Option<String>,
    /// New quoted cost
    pub cost: Option<f64>,
    /// New booked flag
    pub booked: Option<bool>,
}
