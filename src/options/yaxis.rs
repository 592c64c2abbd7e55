use crate::classifier::QueryFieldValue;
use crate::field::catalog::aggregate_output_type;
use crate::widget::DisplayType;
use super::types::{FieldValue, FieldValueOption};

/// Functions selectable as a widget's y-axis.
///
/// Big number widgets accept any function. Elsewhere a function with a
/// known output type must produce something plottable.
pub fn filter_y_axis_options(display: DisplayType) -> impl Fn(&FieldValueOption) -> bool {
    move |option| {
        let FieldValue::Function { name, .. } = &option.value else {
            return false;
        };
        if display == DisplayType::BigNumber {
            return true;
        }
        match aggregate_output_type(name, None) {
            Some(ty) => ty.is_legal_y_axis(),
            None => true,
        }
    }
}

/// Parameters selectable for the function in `field_value`.
///
/// A custom measurement is only offered to functions it declares support
/// for. Functions and equations are never parameters. Otherwise the
/// resulting aggregate (or the parameter itself) must be plottable, except
/// for big number widgets which take anything.
pub fn filter_y_axis_aggregate_params(
    field_value: &QueryFieldValue,
    display: DisplayType,
) -> impl Fn(&FieldValueOption) -> bool + '_ {
    move |option| {
        let function = field_value.function_name();

        if let (FieldValue::CustomMeasurement { functions, .. }, Some(function)) = (&option.value, function) {
            return functions.iter().any(|f| f == function);
        }
        if display == DisplayType::BigNumber {
            return true;
        }
        let Some(function) = function else {
            return true;
        };

        if let Some(ty) = aggregate_output_type(function, Some(option.value.name())) {
            return ty.is_legal_y_axis();
        }
        if option.value.is_function_or_equation() {
            return false;
        }
        option.value.data_type().is_some_and(|ty| ty.is_legal_y_axis())
    }
}

/// Columns selectable in a table outside of a function. Custom measurements
/// only make sense inside a function that supports them.
pub fn filter_table_column_options(option: &FieldValueOption) -> bool {
    !matches!(option.value, FieldValue::CustomMeasurement { .. })
}
