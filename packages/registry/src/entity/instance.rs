use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Natural key distinguishing one configured server from another.
    #[sea_orm(unique)]
    pub name: String,

    // Instance configuration
    pub port: i32,
    pub revision: i32,
    /// Two-letter language code. Not validated against real languages.
    #[sea_orm(column_type = "String(StringLen::N(2))")]
    pub lang: String,

    /// References pak.id / save.id. Not backed by an enforced constraint:
    /// deleting the target row succeeds and leaves the reference dangling,
    /// so readers must handle a missing target.
    pub pak_id: i32,
    pub save_id: i32,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
