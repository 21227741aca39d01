//! Attendance log entity.
//!
//! One row per activity ping. The `ldap` column holds the full
//! `user@domain` form as written by the logging source; the roster keys
//! agents by the bare username.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub ldap: String,
    pub logged_at: DateTimeWithTimeZone,
    pub url_type: String,
    pub in_office: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
