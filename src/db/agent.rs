//! Agent roster repository.

use crate::entities::{agents, prelude::*};
use sea_orm::*;

/// List all agents ordered by display name.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<agents::Model>, DbErr> {
    Agents::find()
        .order_by_asc(agents::Column::DisplayName)
        .all(db)
        .await
}
