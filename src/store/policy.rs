//! Post-update refresh policies

use crate::models::{MaintenanceRequest, Stage};

/// Decides whether a confirmed request update must be followed by a full reload.
///
/// Some updates have server-side effects on other collections (scrapping a
/// request marks its equipment `Scrapped`); the policy is evaluated against
/// the record returned by the server, never against the outgoing patch.
pub trait RefreshPolicy: Send + Sync {
    fn should_refresh(&self, updated: &MaintenanceRequest) -> bool;
}

/// Reload when the updated request ends up in the given stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOnStage(pub Stage);

impl Default for RefreshOnStage {
    fn default() -> Self {
        Self(Stage::Scrap)
    }
}

impl RefreshPolicy for RefreshOnStage {
    fn should_refresh(&self, updated: &MaintenanceRequest) -> bool {
        updated.stage == self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRefresh;

impl RefreshPolicy for NeverRefresh {
    fn should_refresh(&self, _updated: &MaintenanceRequest) -> bool {
        false
    }
}
