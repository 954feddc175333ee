use std::io::Write;

use crate::ast::Expression;

const INDENT_WIDTH: usize = 2;

/// Renders `expr` pre-order, one node per line, children indented two
/// spaces deeper than their parent. Binary nodes list the left child first.
pub fn render(expr: &Expression) -> Vec<String> {
    let mut lines = vec![];
    render_node(expr, 0, &mut lines);
    lines
}

fn render_node(expr: &Expression, depth: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(depth * INDENT_WIDTH);
    match expr {
        Expression::Literal(value) => lines.push(format!("{}{}", pad, value)),
        Expression::Unary(op, operand) => {
            lines.push(format!("{}{}", pad, op.lexeme));
            render_node(operand, depth + 1, lines);
        }
        Expression::Binary(lhs, op, rhs) => {
            lines.push(format!("{}{}", pad, op.lexeme));
            render_node(lhs, depth + 1, lines);
            render_node(rhs, depth + 1, lines);
        }
    }
}

pub fn write_tree(expr: &Expression, w: &mut dyn Write) -> std::io::Result<()> {
    for line in render(expr) {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse, tokenize};

    fn render_str(input: &str) -> Vec<String> {
        render(&parse(&tokenize(input).unwrap()).unwrap())
    }

    #[test]
    fn binary_tree_left_before_right() {
        assert_eq!(render_str("1+2*3"), vec!["+", "  1", "  *", "    2", "    3"]);
    }

    #[test]
    fn unary_chain_indents_each_level() {
        assert_eq!(render_str("--5"), vec!["-", "  -", "    5"]);
    }

    #[test]
    fn single_literal() {
        assert_eq!(render_str("(42)"), vec!["42"]);
    }

    #[test]
    fn left_associative_shape() {
        assert_eq!(
            render_str("10-3-2"),
            vec!["-", "  -", "    10", "    3", "  2"]
        );
    }

    #[test]
    fn write_tree_streams_lines() {
        let expr = parse(&tokenize("-(4/2)").unwrap()).unwrap();
        let mut out = Vec::new();
        write_tree(&expr, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-\n  /\n    4\n    2\n");
    }
}
