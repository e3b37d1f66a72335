//! In-process stand-in for the GearGuard REST API

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};

use gearguard::models::{
    ActivityEntry, CategoryCount, CreateEquipment, CreateRequest, CreateTeam, CreateTeamMember,
    DashboardStats, Equipment, EquipmentStatus, MaintenanceRequest, Priority, RequestType, Stage,
    Team, TeamMember, TeamRequestCount, UpdateEquipment, UpdateRequest, UpdateTeamMember,
};

#[derive(Default)]
pub struct Db {
    pub equipment: Vec<Equipment>,
    pub requests: Vec<MaintenanceRequest>,
    pub teams: Vec<Team>,
    pub members: Vec<TeamMember>,
    pub activity: Vec<ActivityEntry>,
    pub next_id: i32,
    /// Number of GET /equipment calls
    pub equipment_loads: usize,
}

impl Db {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Shared = Arc<Mutex<Db>>;

type Rejection = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, Rejection>;

fn not_found(what: &str) -> Rejection {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{} not found", what) })),
    )
}

fn deleted(what: &str) -> Json<Value> {
    Json(json!({ "message": format!("{} deleted successfully", what) }))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two teams, three machines, three requests, twelve activity entries
pub fn seeded() -> Db {
    let teams = vec![
        Team { id: 1, name: "Mechanics".into(), description: Some("Heavy machinery".into()), ..Default::default() },
        Team { id: 2, name: "IT Support".into(), description: None, ..Default::default() },
    ];
    let members = vec![
        TeamMember { id: 1, team_id: 1, name: "Ravi Kumar".into(), role: Some("Lead".into()), ..Default::default() },
        TeamMember { id: 2, team_id: 2, name: "Nina Patel".into(), role: Some("Specialist".into()), ..Default::default() },
    ];
    let equipment = vec![
        Equipment {
            id: 1,
            name: "CNC Lathe".into(),
            serial_number: "CNC-001".into(),
            category: "Machinery".into(),
            department: "Production".into(),
            team_id: Some(1),
            team_name: Some("Mechanics".into()),
            ..Default::default()
        },
        Equipment {
            id: 2,
            name: "Server Rack".into(),
            serial_number: "SRV-001".into(),
            category: "IT".into(),
            department: "IT".into(),
            team_id: Some(2),
            team_name: Some("IT Support".into()),
            ..Default::default()
        },
        Equipment {
            id: 3,
            name: "Old Press".into(),
            serial_number: "PRS-001".into(),
            category: "Machinery".into(),
            department: "Production".into(),
            status: EquipmentStatus::Scrapped,
            ..Default::default()
        },
    ];
    let requests = vec![
        MaintenanceRequest {
            id: 1,
            subject: "Spindle noise".into(),
            equipment_id: 1,
            request_type: RequestType::Corrective,
            stage: Stage::New,
            priority: Priority::High,
            scheduled_date: Some(date(2025, 1, 10)),
            team_id: Some(1),
            team_name: Some("Mechanics".into()),
            ..Default::default()
        },
        MaintenanceRequest {
            id: 2,
            subject: "Quarterly check".into(),
            equipment_id: 2,
            request_type: RequestType::Preventive,
            stage: Stage::InProgress,
            scheduled_date: Some(date(2025, 3, 1)),
            team_id: Some(2),
            team_name: Some("IT Support".into()),
            ..Default::default()
        },
        MaintenanceRequest {
            id: 3,
            subject: "Filter swap".into(),
            equipment_id: 1,
            request_type: RequestType::Preventive,
            stage: Stage::New,
            scheduled_date: Some(date(2025, 4, 1)),
            team_id: Some(1),
            team_name: Some("Mechanics".into()),
            ..Default::default()
        },
    ];
    let activity = (1..=12)
        .rev()
        .map(|id| ActivityEntry {
            id,
            action: "Request Created".into(),
            description: Some(format!("entry {}", id)),
            timestamp: None,
            equipment_id: None,
            request_id: None,
        })
        .collect();

    Db {
        equipment,
        requests,
        teams,
        members,
        activity,
        next_id: 100,
        equipment_loads: 0,
    }
}

/// Serve `db` on an ephemeral port; returns the API base URL
pub async fn spawn(db: Db) -> (String, Shared) {
    let shared = Arc::new(Mutex::new(db));
    let app = router(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), shared)
}

fn router(db: Shared) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        // Equipment
        .route("/equipment", get(list_equipment).post(create_equipment))
        .route(
            "/equipment/:id",
            get(get_equipment).put(update_equipment).delete(delete_equipment),
        )
        .route("/equipment/by-team/:id", get(equipment_by_team))
        .route("/equipment/by-status/:status", get(equipment_by_status))
        // Requests
        .route("/requests", get(list_requests).post(create_request))
        .route("/requests/preventive", get(preventive_requests))
        .route(
            "/requests/:id",
            get(get_request).put(update_request).delete(delete_request),
        )
        .route("/requests/by-equipment/:id", get(requests_by_equipment))
        .route("/requests/by-stage/:stage", get(requests_by_stage))
        // Teams
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/members", get(list_members).post(create_member))
        .route("/teams/members/:id", put(update_member).delete(delete_member))
        .route("/teams/:id", get(get_team).delete(delete_team))
        .route("/teams/:id/members", get(team_members))
        // Dashboard
        .route("/dashboard/stats", get(stats))
        .route("/dashboard/requests-by-team", get(requests_by_team))
        .route("/dashboard/equipment-by-category", get(equipment_by_category))
        .route("/dashboard/recent-activity", get(recent_activity))
        .with_state(db);

    Router::new().nest("/api", api)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "timestamp": "2025-06-01T08:00:00.000001" }))
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

async fn list_equipment(State(db): State<Shared>) -> Json<Vec<Equipment>> {
    let mut db = db.lock().unwrap();
    db.equipment_loads += 1;
    Json(db.equipment.clone())
}

async fn get_equipment(State(db): State<Shared>, Path(id): Path<i32>) -> ApiResult<Equipment> {
    let db = db.lock().unwrap();
    db.equipment
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Equipment"))
}

async fn create_equipment(
    State(db): State<Shared>,
    Json(data): Json<CreateEquipment>,
) -> (StatusCode, Json<Equipment>) {
    let mut db = db.lock().unwrap();
    let equipment = Equipment {
        id: db.next_id(),
        name: data.name,
        serial_number: data.serial_number,
        category: data.category,
        department: data.department,
        assigned_employee: data.assigned_employee,
        location: data.location,
        status: data.status.unwrap_or_default(),
        team_id: data.team_id,
        purchase_date: data.purchase_date,
        warranty_expiry: data.warranty_expiry,
        notes: data.notes,
        created_at: Some(Utc::now().naive_utc()),
        ..Default::default()
    };
    db.equipment.push(equipment.clone());
    (StatusCode::CREATED, Json(equipment))
}

async fn update_equipment(
    State(db): State<Shared>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipment>,
) -> ApiResult<Equipment> {
    let mut guard = db.lock().unwrap();
    let db = &mut *guard;
    let teams = &db.teams;
    let equipment = db
        .equipment
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| not_found("Equipment"))?;

    if let Some(name) = data.name {
        equipment.name = name;
    }
    if let Some(category) = data.category {
        equipment.category = category;
    }
    if let Some(department) = data.department {
        equipment.department = department;
    }
    if let Some(employee) = data.assigned_employee {
        equipment.assigned_employee = employee;
    }
    if let Some(location) = data.location {
        equipment.location = location;
    }
    if let Some(status) = data.status {
        equipment.status = status;
    }
    if let Some(team_id) = data.team_id {
        equipment.team_id = team_id;
        equipment.team_name = team_id
            .and_then(|id| teams.iter().find(|t| t.id == id))
            .map(|t| t.name.clone());
    }
    if let Some(notes) = data.notes {
        equipment.notes = notes;
    }
    Ok(Json(equipment.clone()))
}

async fn delete_equipment(State(db): State<Shared>, Path(id): Path<i32>) -> Result<Json<Value>, Rejection> {
    let mut db = db.lock().unwrap();
    let before = db.equipment.len();
    db.equipment.retain(|e| e.id != id);
    if db.equipment.len() == before {
        return Err(not_found("Equipment"));
    }
    Ok(deleted("Equipment"))
}

async fn equipment_by_team(State(db): State<Shared>, Path(id): Path<i32>) -> Json<Vec<Equipment>> {
    let db = db.lock().unwrap();
    Json(db.equipment.iter().filter(|e| e.team_id == Some(id)).cloned().collect())
}

async fn equipment_by_status(
    State(db): State<Shared>,
    Path(status): Path<String>,
) -> Json<Vec<Equipment>> {
    let db = db.lock().unwrap();
    Json(
        db.equipment
            .iter()
            .filter(|e| e.status.as_str() == status)
            .cloned()
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn list_requests(
    State(db): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<MaintenanceRequest>> {
    let db = db.lock().unwrap();
    let filtered = db
        .requests
        .iter()
        .filter(|r| params.get("stage").map_or(true, |s| r.stage.as_str() == s))
        .filter(|r| params.get("type").map_or(true, |t| r.request_type.as_str() == t))
        .filter(|r| {
            params
                .get("team_id")
                .map_or(true, |t| r.team_id.map(|id| id.to_string()).as_deref() == Some(t))
        })
        .cloned()
        .collect();
    Json(filtered)
}

async fn get_request(State(db): State<Shared>, Path(id): Path<i32>) -> ApiResult<MaintenanceRequest> {
    let db = db.lock().unwrap();
    db.requests
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Request"))
}

async fn create_request(
    State(db): State<Shared>,
    Json(data): Json<CreateRequest>,
) -> Result<(StatusCode, Json<MaintenanceRequest>), Rejection> {
    let mut db = db.lock().unwrap();
    let equipment = db
        .equipment
        .iter()
        .find(|e| e.id == data.equipment_id)
        .cloned()
        .ok_or_else(|| not_found("Equipment"))?;

    let request = MaintenanceRequest {
        id: db.next_id(),
        subject: data.subject,
        equipment_id: equipment.id,
        equipment_name: Some(equipment.name),
        request_type: data.request_type,
        priority: data.priority.unwrap_or_default(),
        stage: data.stage.unwrap_or_default(),
        description: data.description,
        scheduled_date: Some(data.scheduled_date),
        duration_hours: data.duration_hours.unwrap_or(1.0),
        assigned_technician: data.assigned_technician,
        team_id: equipment.team_id,
        department: Some(equipment.department),
        ..Default::default()
    };
    db.requests.push(request.clone());
    Ok((StatusCode::CREATED, Json(request)))
}

/// Mirrors the real server: scrapping marks the equipment scrapped,
/// repairing stamps the completion time.
async fn update_request(
    State(db): State<Shared>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRequest>,
) -> ApiResult<MaintenanceRequest> {
    let mut guard = db.lock().unwrap();
    let db = &mut *guard;
    let request = db
        .requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| not_found("Request"))?;

    let old_stage = request.stage;
    if let Some(subject) = data.subject {
        request.subject = subject;
    }
    if let Some(stage) = data.stage {
        request.stage = stage;
    }
    if let Some(priority) = data.priority {
        request.priority = priority;
    }
    if let Some(technician) = data.assigned_technician {
        request.assigned_technician = technician;
    }
    if let Some(description) = data.description {
        request.description = description;
    }
    if let Some(hours) = data.duration_hours {
        request.duration_hours = hours;
    }

    if request.stage == Stage::Repaired && old_stage != Stage::Repaired {
        request.completed_at = Some(Utc::now().naive_utc());
    }
    if request.stage == Stage::Scrap && old_stage != Stage::Scrap {
        if let Some(equipment) = db.equipment.iter_mut().find(|e| e.id == request.equipment_id) {
            equipment.status = EquipmentStatus::Scrapped;
        }
    }

    Ok(Json(request.clone()))
}

async fn delete_request(State(db): State<Shared>, Path(id): Path<i32>) -> Result<Json<Value>, Rejection> {
    let mut db = db.lock().unwrap();
    let before = db.requests.len();
    db.requests.retain(|r| r.id != id);
    if db.requests.len() == before {
        return Err(not_found("Request"));
    }
    Ok(deleted("Request"))
}

async fn requests_by_equipment(
    State(db): State<Shared>,
    Path(id): Path<i32>,
) -> Json<Vec<MaintenanceRequest>> {
    let db = db.lock().unwrap();
    Json(db.requests.iter().filter(|r| r.equipment_id == id).cloned().collect())
}

async fn requests_by_stage(
    State(db): State<Shared>,
    Path(stage): Path<String>,
) -> Json<Vec<MaintenanceRequest>> {
    let db = db.lock().unwrap();
    Json(
        db.requests
            .iter()
            .filter(|r| r.stage.as_str() == stage)
            .cloned()
            .collect(),
    )
}

async fn preventive_requests(State(db): State<Shared>) -> Json<Vec<MaintenanceRequest>> {
    let db = db.lock().unwrap();
    Json(
        db.requests
            .iter()
            .filter(|r| r.request_type == RequestType::Preventive)
            .cloned()
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

async fn list_teams(State(db): State<Shared>) -> Json<Vec<Team>> {
    Json(db.lock().unwrap().teams.clone())
}

async fn get_team(State(db): State<Shared>, Path(id): Path<i32>) -> ApiResult<Team> {
    let db = db.lock().unwrap();
    db.teams
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Team"))
}

async fn create_team(
    State(db): State<Shared>,
    Json(data): Json<CreateTeam>,
) -> (StatusCode, Json<Team>) {
    let mut db = db.lock().unwrap();
    let team = Team {
        id: db.next_id(),
        name: data.name,
        description: data.description,
        ..Default::default()
    };
    db.teams.push(team.clone());
    (StatusCode::CREATED, Json(team))
}

async fn delete_team(State(db): State<Shared>, Path(id): Path<i32>) -> Result<Json<Value>, Rejection> {
    let mut db = db.lock().unwrap();
    let before = db.teams.len();
    db.teams.retain(|t| t.id != id);
    if db.teams.len() == before {
        return Err(not_found("Team"));
    }
    db.members.retain(|m| m.team_id != id);
    // Equipment and requests keep existing but lose their team
    for equipment in db.equipment.iter_mut().filter(|e| e.team_id == Some(id)) {
        equipment.team_id = None;
        equipment.team_name = None;
    }
    for request in db.requests.iter_mut().filter(|r| r.team_id == Some(id)) {
        request.team_id = None;
        request.team_name = None;
    }
    Ok(deleted("Team"))
}

async fn list_members(State(db): State<Shared>) -> Json<Vec<TeamMember>> {
    Json(db.lock().unwrap().members.clone())
}

async fn team_members(State(db): State<Shared>, Path(id): Path<i32>) -> Json<Vec<TeamMember>> {
    let db = db.lock().unwrap();
    Json(db.members.iter().filter(|m| m.team_id == id).cloned().collect())
}

async fn create_member(
    State(db): State<Shared>,
    Json(data): Json<CreateTeamMember>,
) -> (StatusCode, Json<TeamMember>) {
    let mut db = db.lock().unwrap();
    let member = TeamMember {
        id: db.next_id(),
        team_id: data.team_id,
        name: data.name,
        role: data.role,
        email: data.email,
        phone: data.phone,
        ..Default::default()
    };
    db.members.push(member.clone());
    (StatusCode::CREATED, Json(member))
}

async fn update_member(
    State(db): State<Shared>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTeamMember>,
) -> ApiResult<TeamMember> {
    let mut db = db.lock().unwrap();
    let member = db
        .members
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| not_found("Member"))?;

    if let Some(name) = data.name {
        member.name = name;
    }
    if let Some(role) = data.role {
        member.role = role;
    }
    if let Some(email) = data.email {
        member.email = email;
    }
    if let Some(phone) = data.phone {
        member.phone = phone;
    }
    Ok(Json(member.clone()))
}

async fn delete_member(State(db): State<Shared>, Path(id): Path<i32>) -> Result<Json<Value>, Rejection> {
    let mut db = db.lock().unwrap();
    let before = db.members.len();
    db.members.retain(|m| m.id != id);
    if db.members.len() == before {
        return Err(not_found("Member"));
    }
    Ok(deleted("Member"))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

async fn stats(State(db): State<Shared>) -> Json<DashboardStats> {
    let db = db.lock().unwrap();
    let today = Utc::now().date_naive();
    let open = || db.requests.iter().filter(|r| !r.stage.is_closed());

    Json(DashboardStats {
        total_equipment: db
            .equipment
            .iter()
            .filter(|e| e.status == EquipmentStatus::Usable)
            .count() as u32,
        active_requests: open().count() as u32,
        overdue_requests: open()
            .filter(|r| r.scheduled_date.is_some_and(|d| d < today))
            .count() as u32,
        total_teams: db.teams.len() as u32,
        critical_requests: open().filter(|r| r.priority == Priority::Critical).count() as u32,
    })
}

async fn requests_by_team(State(db): State<Shared>) -> Json<Vec<TeamRequestCount>> {
    let db = db.lock().unwrap();
    Json(
        db.teams
            .iter()
            .map(|t| TeamRequestCount {
                team: t.name.clone(),
                count: db.requests.iter().filter(|r| r.team_id == Some(t.id)).count() as u32,
            })
            .collect(),
    )
}

async fn equipment_by_category(State(db): State<Shared>) -> Json<Vec<CategoryCount>> {
    let db = db.lock().unwrap();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for equipment in &db.equipment {
        match counts.iter_mut().find(|c| c.category == equipment.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: equipment.category.clone(),
                count: 1,
            }),
        }
    }
    Json(counts)
}

async fn recent_activity(
    State(db): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<ActivityEntry>> {
    let db = db.lock().unwrap();
    let limit = params
        .get("limit")
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(10);
    Json(db.activity.iter().take(limit).cloned().collect())
}
