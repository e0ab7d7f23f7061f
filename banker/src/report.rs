//! Plain-text rendering of need tables, search traces and verdicts.

use crate::core::types::{AlgorithmResult, Process, Units};

/// Render `[a, b, c]`.
pub fn format_units(units: &[Units]) -> String {
    let parts: Vec<String> = units.iter().map(Units::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// One row per process: id, allocation, max, need.
pub fn render_need_table(processes: &[Process]) -> String {
    let rows: Vec<[String; 4]> = processes
        .iter()
        .map(|p| {
            [
                p.id.clone(),
                format_units(&p.allocation),
                format_units(&p.max),
                format_units(&p.need),
            ]
        })
        .collect();
    let header = ["process", "allocation", "max", "need"].map(String::from);

    let mut widths = header.clone().map(|cell| cell.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(&rows)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect();
            format!("{}\n", cells.join("  ").trim_end())
        })
        .collect()
}

/// Numbered trace lines followed by the verdict.
pub fn render_result(processes: &[Process], result: &AlgorithmResult) -> String {
    let mut lines: Vec<String> = result
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let need = processes
                .iter()
                .find(|p| p.id == step.process_id)
                .map(|p| format_units(&p.need))
                .unwrap_or_default();
            let outcome = match &step.work_after {
                Some(after) => format!("granted, work becomes {}", format_units(after)),
                None => "must wait".to_string(),
            };
            format!(
                "step {}: {} need {} vs work {} -> {}",
                index + 1,
                step.process_id,
                need,
                format_units(&step.work),
                outcome
            )
        })
        .collect();

    match &result.safe_sequence {
        Some(sequence) if result.safe => {
            lines.push("verdict: SAFE".to_string());
            lines.push(format!("safe sequence: {}", sequence.join(" -> ")));
        }
        _ => lines.push("verdict: UNSAFE (no remaining process can be granted)".to_string()),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::need::derive_needs;
    use crate::core::safety::evaluate_safety;
    use crate::core::types::SafetyInput;
    use crate::test_support::{process, textbook_processes};

    #[test]
    fn need_table_aligns_columns() {
        let processes = derive_needs(&[
            process("P0", &[0, 1], &[7, 5]),
            process("P10", &[2, 0], &[3, 2]),
        ]);
        assert_eq!(
            render_need_table(&processes),
            "process  allocation  max     need\n\
             P0       [0, 1]      [7, 5]  [7, 4]\n\
             P10      [2, 0]      [3, 2]  [1, 2]\n"
        );
    }

    #[test]
    fn safe_result_lists_sequence() {
        let processes = derive_needs(&textbook_processes());
        let result = evaluate_safety(&SafetyInput {
            processes: &processes,
            available: &[3, 3, 2],
            resource_count: 3,
        });
        let text = render_result(&processes, &result);
        assert!(text.starts_with("step 1: P0 need [7, 4, 3] vs work [3, 3, 2] -> must wait\n"));
        assert!(text.contains(
            "step 2: P1 need [1, 2, 2] vs work [3, 3, 2] -> granted, work becomes [5, 3, 2]\n"
        ));
        assert!(text.ends_with("verdict: SAFE\nsafe sequence: P1 -> P3 -> P0 -> P2 -> P4\n"));
    }

    #[test]
    fn unsafe_result_has_no_sequence() {
        let processes = derive_needs(&[process("A", &[0], &[2])]);
        let result = evaluate_safety(&SafetyInput {
            processes: &processes,
            available: &[1],
            resource_count: 1,
        });
        assert_eq!(
            render_result(&processes, &result),
            "step 1: A need [2] vs work [1] -> must wait\n\
             verdict: UNSAFE (no remaining process can be granted)\n"
        );
    }
}
