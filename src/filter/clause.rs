use super::ast::{DatePart, Operator, Predicate};

pub const AND: &str = " AND ";

/// Renders ` ( left op N'literal' ) `. The literal is embedded as-is, quotes included.
pub fn build(left: &str, op: Operator, literal: &str) -> String {
    format!(" ( {} {} N'{}' ) ", left, op, literal)
}

pub fn render(predicate: &Predicate) -> String {
    build(&predicate.left, predicate.op, &predicate.literal)
}

pub fn datepart_expr(part: DatePart, field: &str) -> String {
    format!("DATEPART( {}, {})", part.sql_unit(), field)
}

pub fn join(clauses: &[String]) -> String {
    clauses.join(AND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_eq() {
        assert_eq!(build("Item", Operator::Eq, "AB-100"), " ( Item = N'AB-100' ) ");
    }

    #[test]
    fn test_build_does_not_escape_quotes() {
        assert_eq!(
            build("Name", Operator::Like, "O'Brien%"),
            " ( Name LIKE N'O'Brien%' ) "
        );
    }

    #[test]
    fn test_datepart_expr() {
        assert_eq!(datepart_expr(DatePart::Month, "DueDate"), "DATEPART( mm, DueDate)");
        assert_eq!(datepart_expr(DatePart::Day, "DueDate"), "DATEPART( dd, DueDate)");
        assert_eq!(datepart_expr(DatePart::Year, "DueDate"), "DATEPART( yyyy, DueDate)");
    }

    #[test]
    fn test_join() {
        let clauses = vec![build("A", Operator::Eq, "x"), build("B", Operator::Eq, "y")];
        assert_eq!(join(&clauses), " ( A = N'x' )  AND  ( B = N'y' ) ");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_render_predicate() {
        let predicate = Predicate::new(datepart_expr(DatePart::Year, "D"), Operator::Like, "2023");
        assert_eq!(render(&predicate), " ( DATEPART( yyyy, D) LIKE N'2023' ) ");
    }
}
