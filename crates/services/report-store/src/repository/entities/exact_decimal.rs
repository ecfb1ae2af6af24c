//! Fixed-point column value that survives every supported backend exactly.
//!
//! MySQL and PostgreSQL store it as `DECIMAL(20, 4)`. SQLite has no exact
//! numeric type, so the column is TEXT there and the value is parsed back
//! from its string form instead of passing through `f64`.

use std::str::FromStr;

use domain::{VALUE_PRECISION, VALUE_SCALE};
use rust_decimal::Decimal;
use sea_orm::sea_query::{ArrayType, ColumnType, Nullable, ValueType, ValueTypeErr};
use sea_orm::{ColIdx, DbErr, QueryResult, TryGetError, TryGetable, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExactDecimal(pub Decimal);

impl From<Decimal> for ExactDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<ExactDecimal> for Decimal {
    fn from(value: ExactDecimal) -> Self {
        value.0
    }
}

impl From<ExactDecimal> for Value {
    fn from(value: ExactDecimal) -> Self {
        Value::from(value.0)
    }
}

impl Nullable for ExactDecimal {
    fn null() -> Value {
        Value::Decimal(None)
    }
}

impl ValueType for ExactDecimal {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        <Decimal as ValueType>::try_from(v).map(Self)
    }

    fn type_name() -> String {
        "ExactDecimal".to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::Decimal
    }

    fn column_type() -> ColumnType {
        ColumnType::Decimal(Some((VALUE_PRECISION, VALUE_SCALE)))
    }
}

impl TryGetable for ExactDecimal {
    fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
        match Decimal::try_get_by(res, index) {
            Ok(value) => Ok(Self(value)),
            Err(TryGetError::Null(column)) => Err(TryGetError::Null(column)),
            // TEXT column on SQLite
            Err(TryGetError::DbErr(_)) => {
                let raw = String::try_get_by(res, index)?;
                Decimal::from_str(raw.trim()).map(Self).map_err(|e| {
                    TryGetError::DbErr(DbErr::TryIntoErr {
                        from: "String",
                        into: "Decimal",
                        source: Box::new(e),
                    })
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn binds_as_decimal_value() {
        let value: Value = ExactDecimal(dec!(150000.1234)).into();
        assert_eq!(value, Value::Decimal(Some(Box::new(dec!(150000.1234)))));
    }

    #[test]
    fn converts_back_from_value() {
        let value = Value::from(dec!(-0.0001));
        assert_eq!(
            <ExactDecimal as ValueType>::try_from(value).unwrap(),
            ExactDecimal(dec!(-0.0001))
        );
        assert!(<ExactDecimal as ValueType>::try_from(Value::Int(Some(1))).is_err());
    }
}
