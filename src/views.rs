//! Derived views over a snapshot of the store's collections.
//!
//! Everything here is a pure function of its inputs: nothing is cached and
//! the input order is preserved unless a function says it sorts.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    Equipment, EquipmentStatus, MaintenanceRequest, RequestType, Stage, TeamMember,
};

/// Shown for requests whose equipment is not (or no longer) known
pub const UNKNOWN_EQUIPMENT: &str = "Unknown Equipment";

/// Number of entries in the dashboard's upcoming maintenance panel
pub const UPCOMING_LIMIT: usize = 5;

pub fn equipment_by_status(equipment: &[Equipment], status: EquipmentStatus) -> Vec<&Equipment> {
    equipment.iter().filter(|e| e.status == status).collect()
}

pub fn equipment_by_team(equipment: &[Equipment], team_id: i32) -> Vec<&Equipment> {
    equipment
        .iter()
        .filter(|e| e.team_id == Some(team_id))
        .collect()
}

/// Display name of equipment `id`, tolerating dangling references
pub fn equipment_name(equipment: &[Equipment], id: i32) -> &str {
    equipment
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.as_str())
        .unwrap_or(UNKNOWN_EQUIPMENT)
}

pub fn requests_by_stage(requests: &[MaintenanceRequest], stage: Stage) -> Vec<&MaintenanceRequest> {
    requests.iter().filter(|r| r.stage == stage).collect()
}

pub fn requests_for_equipment(requests: &[MaintenanceRequest], equipment_id: i32) -> Vec<&MaintenanceRequest> {
    requests
        .iter()
        .filter(|r| r.equipment_id == equipment_id)
        .collect()
}

pub fn preventive_requests(requests: &[MaintenanceRequest]) -> Vec<&MaintenanceRequest> {
    requests
        .iter()
        .filter(|r| r.request_type == RequestType::Preventive)
        .collect()
}

/// Scheduled before `today` and still open
pub fn is_overdue(request: &MaintenanceRequest, today: NaiveDate) -> bool {
    !request.stage.is_closed() && request.scheduled_date.is_some_and(|d| d < today)
}

pub fn overdue_requests(requests: &[MaintenanceRequest], today: NaiveDate) -> Vec<&MaintenanceRequest> {
    requests.iter().filter(|r| is_overdue(r, today)).collect()
}

/// Stable sort by scheduled date; undated requests go last
pub fn sorted_by_scheduled_date(requests: &[MaintenanceRequest]) -> Vec<&MaintenanceRequest> {
    let mut sorted: Vec<&MaintenanceRequest> = requests.iter().collect();
    sorted.sort_by_key(|r| (r.scheduled_date.is_none(), r.scheduled_date));
    sorted
}

/// Preventive requests scheduled today or later, soonest first, at most `limit`
pub fn upcoming_preventive(
    requests: &[MaintenanceRequest],
    today: NaiveDate,
    limit: usize,
) -> Vec<&MaintenanceRequest> {
    let mut upcoming: Vec<&MaintenanceRequest> = requests
        .iter()
        .filter(|r| r.request_type == RequestType::Preventive)
        .filter(|r| r.scheduled_date.is_some_and(|d| d >= today))
        .collect();
    upcoming.sort_by_key(|r| r.scheduled_date);
    upcoming.truncate(limit);
    upcoming
}

pub fn members_of_team(members: &[TeamMember], team_id: i32) -> Vec<&TeamMember> {
    members.iter().filter(|m| m.team_id == team_id).collect()
}

// ---------------------------------------------------------------------------
// Kanban
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn<'a> {
    pub stage: Stage,
    pub requests: Vec<&'a MaintenanceRequest>,
}

/// One column per stage, in [`Stage::ALL`] order, empty columns included
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard<'a> {
    pub columns: Vec<KanbanColumn<'a>>,
}

impl<'a> KanbanBoard<'a> {
    pub fn column(&self, stage: Stage) -> &[&'a MaintenanceRequest] {
        self.columns
            .iter()
            .find(|c| c.stage == stage)
            .map(|c| c.requests.as_slice())
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.requests.len()).sum()
    }
}

pub fn kanban_board(requests: &[MaintenanceRequest]) -> KanbanBoard<'_> {
    KanbanBoard {
        columns: Stage::ALL
            .iter()
            .map(|&stage| KanbanColumn {
                stage,
                requests: requests_by_stage(requests, stage),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// Preventive requests scheduled on `day`
pub fn requests_on_day(requests: &[MaintenanceRequest], day: NaiveDate) -> Vec<&MaintenanceRequest> {
    requests
        .iter()
        .filter(|r| r.request_type == RequestType::Preventive && r.scheduled_date == Some(day))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub requests: Vec<&'a MaintenanceRequest>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay<'a>>,
}

impl<'a> CalendarMonth<'a> {
    pub fn day(&self, day: u32) -> Option<&CalendarDay<'a>> {
        self.days.iter().find(|d| d.date.day() == day)
    }

    /// Total preventive requests scheduled in the month
    pub fn scheduled(&self) -> usize {
        self.days.iter().map(|d| d.requests.len()).sum()
    }
}

/// Every day of `year`-`month` with its preventive requests.
/// Returns `None` for an invalid month.
pub fn calendar_month(requests: &[MaintenanceRequest], year: i32, month: u32) -> Option<CalendarMonth<'_>> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut days = Vec::with_capacity(31);

    while date.month() == month {
        days.push(CalendarDay {
            date,
            requests: requests_on_day(requests, date),
        });
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    Some(CalendarMonth { year, month, days })
}
