use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Date,
    Other,
}

impl FieldType {
    /// Input data types are compared case-insensitively; only `DATE` is special.
    pub fn from_declared(data_type: &str) -> Self {
        if data_type.trim().eq_ignore_ascii_case("date") {
            FieldType::Date
        } else {
            FieldType::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub value: String,
    pub bound: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            value: value.into(),
            bound: true,
        }
    }

    pub fn unbound(mut self) -> Self {
        self.bound = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Like,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Like => "LIKE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SQL_WILDCARD: &str = "%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    /// Emission order for decomposed dates, independent of the pattern's own order.
    pub const EMIT_ORDER: [DatePart; 3] = [DatePart::Month, DatePart::Day, DatePart::Year];

    pub fn classify(token: &str) -> Option<Self> {
        let token = token.to_ascii_lowercase();
        if token.contains('y') {
            Some(DatePart::Year)
        } else if token.contains('m') {
            Some(DatePart::Month)
        } else if token.contains('d') {
            Some(DatePart::Day)
        } else {
            None
        }
    }

    pub fn sql_unit(self) -> &'static str {
        match self {
            DatePart::Year => "yyyy",
            DatePart::Month => "mm",
            DatePart::Day => "dd",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePartMap {
    year: Option<String>,
    month: Option<String>,
    day: Option<String>,
}

impl DatePartMap {
    pub fn get(&self, part: DatePart) -> Option<&str> {
        self.slot(part).as_deref()
    }

    /// Keeps the first literal assigned to a part.
    pub fn insert(&mut self, part: DatePart, literal: impl Into<String>) -> bool {
        let slot = self.slot_mut(part);
        if slot.is_some() {
            return false;
        }
        *slot = Some(literal.into());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    fn slot(&self, part: DatePart) -> &Option<String> {
        match part {
            DatePart::Year => &self.year,
            DatePart::Month => &self.month,
            DatePart::Day => &self.day,
        }
    }

    fn slot_mut(&mut self, part: DatePart) -> &mut Option<String> {
        match part {
            DatePart::Year => &mut self.year,
            DatePart::Month => &mut self.month,
            DatePart::Day => &mut self.day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub left: String,
    pub op: Operator,
    pub literal: String,
}

impl Predicate {
    pub fn new(left: impl Into<String>, op: Operator, literal: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            op,
            literal: literal.into(),
        }
    }
}
