use super::ast::{DatePart, Field, FieldType, Operator, Predicate, SQL_WILDCARD};
use super::clause;
use super::date::{self, DatePattern};
use crate::error::{FilterError, Result};
use crate::source::{collect_fields, FieldSource, InputTypeResolver};
use tracing::{debug, trace, warn};

pub const DEFAULT_WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub wildcard: String,
    pub date_pattern: DatePattern,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD.to_string(),
            date_pattern: DatePattern::default(),
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.wildcard.is_empty() {
            return Err(FilterError::Config("wildcard marker is empty".to_string()));
        }
        if self.date_pattern.as_str().trim().is_empty() {
            return Err(FilterError::Config("date pattern is empty".to_string()));
        }
        if !self.date_pattern.is_decomposable() {
            warn!(
                pattern = self.date_pattern.as_str(),
                "date pattern has fewer than three tokens; wildcard dates will be ignored"
            );
        }
        Ok(())
    }
}

pub struct FilterGenerator {
    config: FilterConfig,
}

impl FilterGenerator {
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn generate(
        &self,
        source: &dyn FieldSource,
        types: &dyn InputTypeResolver,
    ) -> Result<String> {
        let fields = collect_fields(source, types);
        self.generate_fields(&fields)
    }

    /// Builds the AND-joined filter for `fields`, in order.
    ///
    /// A non-wildcard date that does not parse fails the whole call. A wildcard date that
    /// does not split into year, month and day adds nothing.
    pub fn generate_fields(&self, fields: &[Field]) -> Result<String> {
        let mut clauses = Vec::new();

        for field in fields {
            for predicate in self.predicates_for(field)? {
                let rendered = clause::render(&predicate);
                trace!(field = %field.name, clause = %rendered, "predicate");
                clauses.push(rendered);
            }
        }

        debug!(clauses = clauses.len(), "filter generated");
        Ok(clause::join(&clauses))
    }

    fn predicates_for(&self, field: &Field) -> Result<Vec<Predicate>> {
        let value = field.value.trim();
        if value.is_empty() || !field.bound {
            return Ok(Vec::new());
        }

        let (value, op) = if value.contains(self.config.wildcard.as_str()) {
            (value.replace(self.config.wildcard.as_str(), SQL_WILDCARD), Operator::Like)
        } else {
            (value.to_string(), Operator::Eq)
        };

        match (field.field_type, op) {
            (FieldType::Date, Operator::Like) => Ok(self.date_part_predicates(&field.name, &value)),
            (FieldType::Date, Operator::Eq) => {
                let normalized =
                    date::normalize_date(&field.name, &value, &self.config.date_pattern)
                        .inspect_err(|_| warn!(field = %field.name, %value, "unparsable date"))?;
                Ok(vec![Predicate::new(field.name.as_str(), op, normalized)])
            }
            (FieldType::Other, _) => Ok(vec![Predicate::new(field.name.as_str(), op, value)]),
        }
    }

    fn date_part_predicates(&self, name: &str, value: &str) -> Vec<Predicate> {
        let parts = date::decompose(value, &self.config.date_pattern);
        if !parts.is_complete() {
            debug!(field = name, value, "wildcard date is incomplete; skipping");
            return Vec::new();
        }

        DatePart::EMIT_ORDER
            .into_iter()
            .filter_map(|part| {
                let literal = parts.get(part)?;
                (literal != SQL_WILDCARD).then(|| {
                    Predicate::new(clause::datepart_expr(part, name), Operator::Like, literal)
                })
            })
            .collect()
    }
}
