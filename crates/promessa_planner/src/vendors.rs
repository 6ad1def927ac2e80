//! Vendor service.

use crate::{require_name, require_non_negative};
use promessa_core::{NewVendor, Vendor, VendorUpdate};
use promessa_error::PromessaResult;
use promessa_interface::VendorRepository;
use std::sync::Arc;
use uuid::Uuid;

/// The vendor book for one user.
#[derive(Clone)]
pub struct VendorService {
    user_id: Uuid,
    repo: Arc<dyn VendorRepository>,
}

impl VendorService {
    /// Bind the service to a user and repository.
    pub fn new(user_id: Uuid, repo: Arc<dyn VendorRepository>) -> Self {
        Self { user_id, repo }
    }

    /// All vendors.
    pub async fn vendors(&self) -> PromessaResult<Vec<Vendor>> {
        self.repo.list_vendors(self.user_id).await
    }

    /// Create a vendor.
    #[tracing::instrument(skip(self, vendor), fields(user_id = %self.user_id))]
    pub async fn create(&self, vendor: NewVendor) -> PromessaResult<Vendor> {
        require_name("Vendor", &vendor.name)?;
        if let Some(cost) = vendor.cost {
            require_non_negative(cost)?;
        }
        self.repo.create_vendor(self.user_id, vendor).await
    }

    /// Apply a partial update to a vendor.
    #[tracing::instrument(skip(self, update), fields(user_id = %self.user_id))]
    pub async fn update(&self, vendor_id: Uuid, update: VendorUpdate) -> PromessaResult<Vendor> {
        if let Some(name) = &update.name {
            require_name("Vendor", name)?;
        }
        if let Some(cost) = update.cost {
            require_non_negative(cost)?;
        }
        self.repo.update_vendor(self.user_id, vendor_id, update).await
    }

    /// Delete a vendor.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn delete(&self, vendor_id: Uuid) -> PromessaResult<()> {
        self.repo.delete_vendor(self.user_id, vendor_id).await
    }
}
