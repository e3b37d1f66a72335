//! Data models for GearGuard

pub mod dashboard;
pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;

// Re-export commonly used types
pub use dashboard::{ActivityEntry, CategoryCount, DashboardSnapshot, DashboardStats, TeamRequestCount};
pub use enums::{EquipmentStatus, Priority, RequestType, Stage};
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
pub use request::{CreateRequest, MaintenanceRequest, RequestFilter, UpdateRequest};
pub use team::{CreateTeam, CreateTeamMember, Team, TeamMember, UpdateTeamMember};

/// Records carrying a server-assigned identifier
pub trait Identified {
    fn id(&self) -> i32;
}
