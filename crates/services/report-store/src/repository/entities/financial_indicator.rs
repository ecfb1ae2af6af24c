//! Financial indicator database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::FinancialIndicator;

/// Metric definitions referenced by reported values.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_indicators")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stable machine-readable key, e.g. `REVENUE`
    #[sea_orm(unique)]
    pub indicator_code: String,
    /// Human-readable name, e.g. 营业收入
    pub indicator_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reported_data::Entity")]
    ReportedData,
}

impl Related<super::reported_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportedData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FinancialIndicator {
    fn from(model: Model) -> Self {
        FinancialIndicator {
            id: model.id,
            indicator_code: model.indicator_code,
            indicator_name: model.indicator_name,
            description: model.description,
        }
    }
}
