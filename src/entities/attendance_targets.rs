//! Monthly attendance target entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_targets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Month name, e.g. "March".
    pub month: String,
    pub year: i32,
    /// Display label, e.g. "March 2024".
    #[sea_orm(unique)]
    pub month_year: String,
    pub days_in_month: i32,
    pub days_to_work: i32,
    pub adjusted_days_to_work: i32,
    pub hours_in_month: f64,
    pub hours_to_work: f64,
    pub adjusted_hours_to_work: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
