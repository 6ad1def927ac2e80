//! Shared handler state.

use promessa_interface::{
    BudgetRepository, GuestRepository, IdentityProvider, RoleRepository, SeatingRepository,
    TaskRepository, TimelineRepository, VendorRepository,
};
use promessa_planner::{BudgetService, ChecklistService, GuestDirectory, VendorService};
use promessa_seating::SeatingPlanner;
use promessa_storage::LocalStore;
use std::sync::Arc;
use uuid::Uuid;

/// Everything the route handlers need: one repository per entity, the
/// identity collaborator and the device-local fallback store.
#[derive(Clone)]
pub struct AppState {
    /// Guest directory store
    pub guests: Arc<dyn GuestRepository>,
    /// Seating chart store
    pub seating: Arc<dyn SeatingRepository>,
    /// Task store
    pub tasks: Arc<dyn TaskRepository>,
    /// Timeline store
    pub timelines: Arc<dyn TimelineRepository>,
    /// Budget store
    pub budget: Arc<dyn BudgetRepository>,
    /// Vendor store
    pub vendors: Arc<dyn VendorRepository>,
    /// Role store
    pub roles: Arc<dyn RoleRepository>,
    /// Identity collaborator
    pub identity: Arc<dyn IdentityProvider>,
    /// Device-local fallback store
    pub local: Arc<dyn LocalStore>,
}

impl AppState {
    /// A seating planner loaded for one user, running the local-chart
    /// migration if the remote store is empty for them.
    pub async fn seating_planner(
        &self,
        user_id: Uuid,
    ) -> promessa_error::PromessaResult<SeatingPlanner> {
        SeatingPlanner::load(
            user_id,
            self.seating.clone(),
            self.guests.clone(),
            self.local.clone(),
        )
        .await
    }

    /// The guest directory service for one user.
    pub fn guest_directory(&self, user_id: Uuid) -> GuestDirectory {
        GuestDirectory::new(user_id, self.guests.clone())
    }

    /// The checklist service for one user.
    pub fn checklist(&self, user_id: Uuid) -> ChecklistService {
        ChecklistService::new(user_id, self.tasks.clone(), self.timelines.clone())
    }

    /// The budget service for one user.
    pub fn budget(&self, user_id: Uuid) -> BudgetService {
        BudgetService::new(user_id, self.budget.clone())
    }

    /// The vendor service for one user.
    pub fn vendor_book(&self, user_id: Uuid) -> VendorService {
        VendorService::new(user_id, self.vendors.clone())
    }
}
