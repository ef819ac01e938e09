use clap::ValueEnum;
use serde_yaml::{Mapping, Value as YamlValue};

pub const DEFAULT_VARIABLE: &str = "vFilterString";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Only the filter text
    #[default]
    Plain,
    /// `name=filter`
    Assign,
    /// One-entry YAML mapping
    Yaml,
}

/// Blank names fall back to the default variable.
pub fn variable_name(name: Option<&str>) -> &str {
    match name {
        Some(n) if !n.trim().is_empty() => n.trim(),
        _ => DEFAULT_VARIABLE,
    }
}

pub fn format_assignment(variable: &str, filter: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => filter.to_string(),
        OutputFormat::Assign => format!("{}={}", variable, filter),
        OutputFormat::Yaml => {
            let mut map = Mapping::new();
            map.insert(
                YamlValue::String(variable.to_string()),
                YamlValue::String(filter.to_string()),
            );
            serde_yaml::to_string(&map)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| format!("{}: {:?}", variable, filter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variable_name_default() {
        assert_eq!(variable_name(None), "vFilterString");
        assert_eq!(variable_name(Some("  ")), "vFilterString");
        assert_eq!(variable_name(Some("vWhere")), "vWhere");
    }

    #[test]
    fn test_plain_and_assign() {
        let filter = " ( A = N'x' ) ";
        assert_eq!(format_assignment("v", filter, OutputFormat::Plain), filter);
        assert_eq!(
            format_assignment("v", filter, OutputFormat::Assign),
            "v= ( A = N'x' ) "
        );
    }

    #[test]
    fn test_yaml_round_trips_value() {
        let filter = " ( A = N'x' ) ";
        let out = format_assignment("vFilterString", filter, OutputFormat::Yaml);
        let parsed: YamlValue = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed["vFilterString"], filter);
    }
}
