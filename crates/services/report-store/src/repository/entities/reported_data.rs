//! Reported value database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::ReportedValue;

use super::exact_decimal::ExactDecimal;

/// One observed value of one indicator within one report.
///
/// `(report_id, indicator_id)` is unique. Rows are never updated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reported_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_id: i32,
    pub indicator_id: i32,
    /// Exact fixed-point value, DECIMAL(20, 4) (TEXT on SQLite)
    #[sea_orm(column_type = "Decimal(Some((20, 4)))")]
    pub indicator_value: ExactDecimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::financial_report::Entity",
        from = "Column::ReportId",
        to = "super::financial_report::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FinancialReport,
    #[sea_orm(
        belongs_to = "super::financial_indicator::Entity",
        from = "Column::IndicatorId",
        to = "super::financial_indicator::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    FinancialIndicator,
}

impl Related<super::financial_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialReport.def()
    }
}

impl Related<super::financial_indicator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialIndicator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ReportedValue {
    fn from(model: Model) -> Self {
        ReportedValue {
            id: model.id,
            report_id: model.report_id,
            indicator_id: model.indicator_id,
            indicator_value: model.indicator_value.into(),
        }
    }
}
