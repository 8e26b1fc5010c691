use crate::domain::model::{cell_text, Cell, RuleStats, Table, UnifyReport};
use crate::domain::rules::FieldRule;

/// Applies `rules` to `table` and returns the augmented table.
pub fn unify(mut table: Table, rules: &[FieldRule]) -> Table {
    unify_in_place(&mut table, rules);
    table
}

/// 依規則順序為每條規則寫入目標欄位，並回傳統計
///
/// Each target row receives the first non-empty trimmed text among the
/// rule's primary and fallback columns, or `""`. Absent and null source
/// cells both read as `""`; absent source columns are never created.
pub fn unify_in_place(table: &mut Table, rules: &[FieldRule]) -> UnifyReport {
    let mut report = UnifyReport::default();

    for rule in rules {
        let (values, stats) = resolve_rule(table, rule);
        table.set_column(rule.target, values);
        report.rules.push(stats);
    }

    report
}

fn resolve_rule(table: &Table, rule: &FieldRule) -> (Vec<Option<Cell>>, RuleStats) {
    let rows = table.row_count();

    let mut resolved: Vec<String> = (0..rows)
        .map(|row| trimmed_text(table, rule.primary, row))
        .collect();
    let from_primary = resolved.iter().filter(|v| !v.is_empty()).count();

    let mut from_fallbacks = Vec::with_capacity(rule.fallbacks.len());
    for fallback in rule.fallbacks {
        let mut filled = 0;
        // 缺少的欄位視同整欄空白，不需掃描
        if table.has_column(fallback) {
            for (row, value) in resolved.iter_mut().enumerate() {
                if value.is_empty() {
                    *value = trimmed_text(table, fallback, row);
                    if !value.is_empty() {
                        filled += 1;
                    }
                }
            }
        }
        from_fallbacks.push(filled);
    }

    let unresolved = resolved.iter().filter(|v| v.is_empty()).count();

    tracing::debug!(
        target_column = rule.target,
        present_sources = rule.sources().filter(|s| table.has_column(s)).count(),
        "Resolved rule"
    );

    let values = resolved.into_iter().map(|v| Some(Cell::Text(v))).collect();
    let stats = RuleStats {
        target: rule.target,
        from_primary,
        from_fallbacks,
        unresolved,
    };

    (values, stats)
}

fn trimmed_text(table: &Table, column: &str, row: usize) -> String {
    cell_text(table.cell(column, row)).trim().to_string()
}
