//! Vendor data contract.

use async_trait::async_trait;
use promessa_core::{NewVendor, Vendor, VendorUpdate};
use promessa_error::PromessaResult;
use uuid::Uuid;

/// Remote-store operations over vendors.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// List the user's vendors.
    async fn list_vendors(&self, user_id: Uuid) -> PromessaResult<Vec<Vendor>>;

    /// Create a vendor.
    async fn create_vendor(&self, user_id: Uuid, vendor: NewVendor) -> PromessaResult<Vendor>;

    /// Apply a partial update to a vendor.
    async fn update_vendor(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
        update: VendorUpdate,
    ) -> PromessaResult<Vendor>;

    /// Delete a vendor.
    async fn delete_vendor(&self, user_id: Uuid, vendor_id: Uuid) -> PromessaResult<()>;
}
