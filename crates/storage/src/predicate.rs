//! Evaluation of filter clauses against Arrow columns.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, Float64Array, Int64Array, Scalar, StringArray};
use arrow::compute::kernels::boolean::{not, or_kleene};
use arrow::compute::kernels::cmp;
use arrow::compute::{cast, cast_with_options, CastOptions};
use arrow::datatypes::DataType;
use arrow::error::ArrowError;

use spectra_common::{FilterClause, FilterOp, FilterValue};

/// Evaluate a clause over one column.
///
/// Rows where the column is null evaluate to null and are dropped by the
/// reader's row filter.
pub fn evaluate(clause: &FilterClause, column: &ArrayRef) -> Result<BooleanArray, ArrowError> {
    let column = decode_dictionary(column)?;

    match (clause.op, &clause.value) {
        (FilterOp::In, FilterValue::List(values)) => any_equal(&clause.field, &column, values),
        (FilterOp::NotIn, FilterValue::List(values)) => {
            not(&any_equal(&clause.field, &column, values)?)
        }
        (FilterOp::In | FilterOp::NotIn, _) => Err(ArrowError::InvalidArgumentError(format!(
            "Operator '{}' on '{}' requires a list value",
            clause.op, clause.field
        ))),
        (op, FilterValue::List(_)) => Err(ArrowError::InvalidArgumentError(format!(
            "Operator '{}' on '{}' does not accept a list value",
            op, clause.field
        ))),
        (op, value) => {
            let (column, literal) = coerce(&clause.field, &column, value)?;
            compare(op, &column, &literal)
        }
    }
}

/// Check a clause's shape before any data is read.
pub fn validate(clause: &FilterClause) -> Result<(), ArrowError> {
    let is_list = matches!(clause.value, FilterValue::List(_));
    if clause.op.is_membership() != is_list {
        return Err(ArrowError::InvalidArgumentError(format!(
            "Malformed filter {}: operator '{}' {} a list value",
            clause,
            clause.op,
            if is_list { "does not accept" } else { "requires" }
        )));
    }
    if let FilterValue::List(values) = &clause.value {
        if values.iter().any(|v| matches!(v, FilterValue::List(_))) {
            return Err(ArrowError::InvalidArgumentError(format!(
                "Malformed filter {}: nested lists are not supported",
                clause
            )));
        }
    }
    Ok(())
}

/// Replace a dictionary-encoded column by its decoded values.
pub(crate) fn decode_dictionary(column: &ArrayRef) -> Result<ArrayRef, ArrowError> {
    match column.data_type() {
        DataType::Dictionary(_, value_type) => cast(column, value_type),
        _ => Ok(Arc::clone(column)),
    }
}

fn any_equal(
    field: &str,
    column: &ArrayRef,
    values: &[FilterValue],
) -> Result<BooleanArray, ArrowError> {
    let mut matched = BooleanArray::from(vec![false; column.len()]);
    for value in values {
        let (coerced, literal) = coerce(field, column, value)?;
        let equal = cmp::eq(&coerced, &literal)?;
        matched = or_kleene(&matched, &equal)?;
    }
    Ok(matched)
}

fn compare(
    op: FilterOp,
    column: &ArrayRef,
    literal: &Scalar<ArrayRef>,
) -> Result<BooleanArray, ArrowError> {
    match op {
        FilterOp::Eq => cmp::eq(column, literal),
        FilterOp::Ne => cmp::neq(column, literal),
        FilterOp::Lt => cmp::lt(column, literal),
        FilterOp::Le => cmp::lt_eq(column, literal),
        FilterOp::Gt => cmp::gt(column, literal),
        FilterOp::Ge => cmp::gt_eq(column, literal),
        FilterOp::In | FilterOp::NotIn => Err(ArrowError::InvalidArgumentError(format!(
            "Operator '{}' cannot compare a single value",
            op
        ))),
    }
}

/// Broad kind of a column or literal, for rejecting mixed comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Text,
    Number,
    Boolean,
    Other,
}

fn column_kind(data_type: &DataType) -> Kind {
    match data_type {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => Kind::Text,
        DataType::Boolean => Kind::Boolean,
        t if t.is_numeric() => Kind::Number,
        _ => Kind::Other,
    }
}

fn literal_kind(value: &FilterValue) -> Kind {
    match value {
        FilterValue::Str(_) => Kind::Text,
        FilterValue::Int(_) | FilterValue::Float(_) => Kind::Number,
        FilterValue::Bool(_) => Kind::Boolean,
        FilterValue::List(_) => Kind::Other,
    }
}

/// Bring a column and a literal to a common type. Integer columns compared
/// with a fractional literal are widened to Float64 so `member < 0.5` keeps
/// its meaning; otherwise the literal is cast to the column type.
///
/// Text, number and boolean never compare with each other: `member == "0"`
/// is an error, not a match. Other column types (timestamps, dates) take
/// whatever literal casts to them.
fn coerce(
    field: &str,
    column: &ArrayRef,
    value: &FilterValue,
) -> Result<(ArrayRef, Scalar<ArrayRef>), ArrowError> {
    let (column_kind, literal_kind) = (column_kind(column.data_type()), literal_kind(value));
    if column_kind != Kind::Other && literal_kind != Kind::Other && column_kind != literal_kind {
        return Err(ArrowError::InvalidArgumentError(format!(
            "Cannot compare column '{}' of type {} with {:?} literal {:?}",
            field,
            column.data_type(),
            literal_kind,
            value
        )));
    }

    let column = match value {
        FilterValue::Float(_) if column.data_type().is_integer() => {
            cast(column, &DataType::Float64)?
        }
        _ => Arc::clone(column),
    };

    let literal: ArrayRef = match value {
        FilterValue::Bool(b) => Arc::new(BooleanArray::from(vec![*b])),
        FilterValue::Int(i) => Arc::new(Int64Array::from(vec![*i])),
        FilterValue::Float(f) => Arc::new(Float64Array::from(vec![*f])),
        FilterValue::Str(s) => Arc::new(StringArray::from(vec![s.as_str()])),
        FilterValue::List(_) => {
            return Err(ArrowError::InvalidArgumentError(
                "Nested list values are not supported in filters".to_string(),
            ))
        }
    };

    let literal = if literal.data_type() == column.data_type() {
        literal
    } else {
        let options = CastOptions {
            safe: false,
            ..Default::default()
        };
        cast_with_options(&literal, column.data_type(), &options)?
    };

    Ok((column, Scalar::new(literal)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{DictionaryArray, Int32Array};
    use arrow::datatypes::Int32Type;

    fn stations() -> ArrayRef {
        Arc::new(StringArray::from(vec![
            Some("00N000E"),
            Some("10N010E"),
            None,
            Some("00N000E"),
        ]))
    }

    fn members() -> ArrayRef {
        Arc::new(Int32Array::from(vec![0, 1, 2, 3]))
    }

    fn flags(result: &BooleanArray) -> Vec<Option<bool>> {
        result.iter().collect()
    }

    #[test]
    fn test_string_equality() {
        let clause = FilterClause::new("station_name", FilterOp::Eq, "00N000E");
        let result = evaluate(&clause, &stations()).unwrap();
        assert_eq!(flags(&result), vec![Some(true), Some(false), None, Some(true)]);
    }

    #[test]
    fn test_integer_literal_cast_to_column_type() {
        let clause = FilterClause::new("member", FilterOp::Ge, 2i64);
        let result = evaluate(&clause, &members()).unwrap();
        assert_eq!(
            flags(&result),
            vec![Some(false), Some(false), Some(true), Some(true)]
        );
    }

    #[test]
    fn test_fractional_literal_widens_integer_column() {
        let clause = FilterClause::new("member", FilterOp::Lt, 0.5);
        let result = evaluate(&clause, &members()).unwrap();
        assert_eq!(
            flags(&result),
            vec![Some(true), Some(false), Some(false), Some(false)]
        );
    }

    #[test]
    fn test_membership() {
        let values = FilterValue::List(vec![FilterValue::Int(1), FilterValue::Int(3)]);
        let clause = FilterClause::new("member", FilterOp::In, values.clone());
        let result = evaluate(&clause, &members()).unwrap();
        assert_eq!(
            flags(&result),
            vec![Some(false), Some(true), Some(false), Some(true)]
        );

        let clause = FilterClause::new("member", FilterOp::NotIn, values);
        let result = evaluate(&clause, &members()).unwrap();
        assert_eq!(
            flags(&result),
            vec![Some(true), Some(false), Some(true), Some(false)]
        );
    }

    #[test]
    fn test_dictionary_column() {
        let dict: DictionaryArray<Int32Type> =
            vec!["00N000E", "10N010E", "00N000E"].into_iter().collect();
        let column: ArrayRef = Arc::new(dict);
        let clause = FilterClause::new("station_name", FilterOp::Ne, "00N000E");
        let result = evaluate(&clause, &column).unwrap();
        assert_eq!(flags(&result), vec![Some(false), Some(true), Some(false)]);
    }

    #[test]
    fn test_text_and_number_do_not_mix() {
        let clause = FilterClause::new("member", FilterOp::Eq, "0");
        let err = evaluate(&clause, &members()).unwrap_err();
        assert!(err.to_string().contains("Cannot compare column 'member'"), "{}", err);

        let clause = FilterClause::new("station_name", FilterOp::Eq, 0i64);
        assert!(evaluate(&clause, &stations()).is_err());

        let values = FilterValue::List(vec![FilterValue::Int(1), FilterValue::Str("3".into())]);
        let clause = FilterClause::new("member", FilterOp::In, values);
        assert!(evaluate(&clause, &members()).is_err());
    }

    #[test]
    fn test_boolean_literal_on_number_column() {
        let clause = FilterClause::new("member", FilterOp::Eq, true);
        assert!(evaluate(&clause, &members()).is_err());
    }

    #[test]
    fn test_validate_shapes() {
        assert!(validate(&FilterClause::new("member", FilterOp::Eq, 0i64)).is_ok());
        assert!(validate(&FilterClause::new("member", FilterOp::In, 0i64)).is_err());
        assert!(validate(&FilterClause::new(
            "member",
            FilterOp::Eq,
            FilterValue::List(vec![FilterValue::Int(0)])
        ))
        .is_err());
        assert!(validate(&FilterClause::new(
            "member",
            FilterOp::In,
            FilterValue::List(vec![FilterValue::List(vec![])])
        ))
        .is_err());
    }
}
