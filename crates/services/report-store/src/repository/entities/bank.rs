//! Bank database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Bank;

/// Listed banks tracked by the store.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "banks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name
    pub bank_name: String,
    /// Exchange ticker, e.g. `600036.SH`
    #[sea_orm(unique)]
    pub stock_code: String,
    pub created_at: DateTimeUtc,
    /// Refreshed on every update
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::financial_report::Entity")]
    FinancialReports,
}

impl Related<super::financial_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialReports.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Convert database model to domain entity
impl From<Model> for Bank {
    fn from(model: Model) -> Self {
        Bank {
            id: model.id,
            bank_name: model.bank_name,
            stock_code: model.stock_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
