//! Financial report database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::FinancialReport;

/// Fiscal period column, stored as its two-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum PeriodType {
    #[sea_orm(string_value = "Q1")]
    Q1,
    #[sea_orm(string_value = "H1")]
    H1,
    #[sea_orm(string_value = "Q3")]
    Q3,
    #[sea_orm(string_value = "FY")]
    Fy,
}

impl From<domain::PeriodType> for PeriodType {
    fn from(period: domain::PeriodType) -> Self {
        match period {
            domain::PeriodType::FirstQuarter => PeriodType::Q1,
            domain::PeriodType::HalfYear => PeriodType::H1,
            domain::PeriodType::ThreeQuarters => PeriodType::Q3,
            domain::PeriodType::FullYear => PeriodType::Fy,
        }
    }
}

impl From<PeriodType> for domain::PeriodType {
    fn from(period: PeriodType) -> Self {
        match period {
            PeriodType::Q1 => domain::PeriodType::FirstQuarter,
            PeriodType::H1 => domain::PeriodType::HalfYear,
            PeriodType::Q3 => domain::PeriodType::ThreeQuarters,
            PeriodType::Fy => domain::PeriodType::FullYear,
        }
    }
}

/// One disclosure document for a bank covering a specific period.
///
/// `(bank_id, report_year, period_type)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bank_id: i32,
    /// Fiscal year
    pub report_year: i32,
    pub period_type: PeriodType,
    /// Publication date
    pub report_date: Date,
    pub source_url: Option<String>,
    /// Defaults to CNY
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bank::Entity",
        from = "Column::BankId",
        to = "super::bank::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bank,
    #[sea_orm(has_many = "super::reported_data::Entity")]
    ReportedData,
}

impl Related<super::bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bank.def()
    }
}

impl Related<super::reported_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportedData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FinancialReport {
    fn from(model: Model) -> Self {
        FinancialReport {
            id: model.id,
            bank_id: model.bank_id,
            report_year: model.report_year,
            period_type: model.period_type.into(),
            report_date: model.report_date,
            source_url: model.source_url,
            currency: model.currency,
        }
    }
}
