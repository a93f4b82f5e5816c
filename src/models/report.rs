// src/models/report.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;

use crate::models::asset::AssetStatus;

// Os cards do painel administrativo
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub employees: i64,
    pub stadiums: i64,
    pub assets_by_status: Vec<AssetStatusCount>,
    pub check_ins_today: i64,
    pub pending_requests: i64,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatusCount {
    pub status: AssetStatus,
    pub total: i64,
}

// Fichajes por dia e por predio
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportRow {
    pub day: NaiveDate,
    pub stadium_id: Uuid,
    pub stadium_name: String,
    pub check_ins: i64,
    pub check_outs: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReportRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
