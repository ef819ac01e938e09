use crate::filter::{Field, FieldType};
use tracing::debug;

pub trait FieldSource {
    fn field_count(&self) -> usize;

    fn field_name(&self, index: usize) -> Option<&str>;

    fn field_value(&self, name: &str) -> Option<&str>;

    /// Input identifiers bound to `name`, in form order.
    fn bound_inputs(&self, name: &str) -> Vec<&str>;
}

pub trait InputTypeResolver {
    fn data_type(&self, input: &str) -> Option<&str>;
}

/// Reads every property of `source` in declared order.
///
/// Properties that cannot be read are left out. Unbound or blank ones are kept so the
/// generator decides on them.
pub fn collect_fields(source: &dyn FieldSource, types: &dyn InputTypeResolver) -> Vec<Field> {
    let mut fields = Vec::with_capacity(source.field_count());

    for index in 0..source.field_count() {
        let Some(name) = source.field_name(index) else {
            debug!(index, "no property name at index");
            continue;
        };
        let Some(value) = source.field_value(name) else {
            debug!(field = name, "property has no current value");
            continue;
        };

        let inputs = source.bound_inputs(name);
        let Some(first) = inputs.first() else {
            fields.push(Field::new(name, FieldType::Other, value.trim()).unbound());
            continue;
        };

        let Some(data_type) = types.data_type(first) else {
            debug!(field = name, input = *first, "bound input has no declared type");
            continue;
        };

        fields.push(Field::new(
            name,
            FieldType::from_declared(data_type),
            value.trim(),
        ));
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Collection {
        props: Vec<(&'static str, &'static str, Vec<&'static str>)>,
    }

    impl FieldSource for Collection {
        fn field_count(&self) -> usize {
            self.props.len()
        }

        fn field_name(&self, index: usize) -> Option<&str> {
            self.props.get(index).map(|p| p.0)
        }

        fn field_value(&self, name: &str) -> Option<&str> {
            self.props.iter().find(|p| p.0 == name).map(|p| p.1)
        }

        fn bound_inputs(&self, name: &str) -> Vec<&str> {
            self.props
                .iter()
                .find(|p| p.0 == name)
                .map(|p| p.2.clone())
                .unwrap_or_default()
        }
    }

    struct Form(HashMap<&'static str, &'static str>);

    impl InputTypeResolver for Form {
        fn data_type(&self, input: &str) -> Option<&str> {
            self.0.get(input).copied()
        }
    }

    #[test]
    fn test_collect_keeps_order_and_trims() {
        let source = Collection {
            props: vec![
                ("Zeta", "  z  ", vec!["ZetaEdit"]),
                ("Alpha", "a", vec!["AlphaEdit"]),
            ],
        };
        let form = Form(HashMap::from([("ZetaEdit", "String"), ("AlphaEdit", "String")]));

        let fields = collect_fields(&source, &form);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert_eq!(fields[0].value, "z");
    }

    #[test]
    fn test_collect_uses_first_bound_input() {
        let source = Collection {
            props: vec![("DueDate", "9/1/2023", vec!["DueDateEdit", "DueDateText"])],
        };
        let form = Form(HashMap::from([("DueDateEdit", "DATE"), ("DueDateText", "String")]));

        let fields = collect_fields(&source, &form);
        assert_eq!(fields[0].field_type, FieldType::Date);
    }

    #[test]
    fn test_collect_ignores_later_date_input() {
        let source = Collection {
            props: vec![("DueDate", "9/1/2023", vec!["DueDateText", "DueDateEdit"])],
        };
        let form = Form(HashMap::from([("DueDateText", "String"), ("DueDateEdit", "DATE")]));

        let fields = collect_fields(&source, &form);
        assert_eq!(fields[0].field_type, FieldType::Other);
    }

    #[test]
    fn test_collect_marks_unbound() {
        let source = Collection {
            props: vec![("Hidden", "x", vec![])],
        };
        let fields = collect_fields(&source, &Form(HashMap::new()));
        assert!(!fields[0].bound);
    }

    #[test]
    fn test_collect_skips_untyped_input() {
        let source = Collection {
            props: vec![("Item", "x", vec!["Missing"])],
        };
        assert!(collect_fields(&source, &Form(HashMap::new())).is_empty());
    }
}
