use crate::engine::MstEngine;
use crate::error::{MstError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Reads a weighted graph from a file and builds an engine for it.
///
/// Format:
/// - one edge per line as `u,v,w`, ids starting from 0,
/// - an optional `nodes N` line fixing the node count; without it the
///   count is the largest id plus one,
/// - blank lines and lines starting with `#` are skipped.
///
/// <div class="warning">
///
/// > A pair listed twice keeps the weight of its last line.
///
/// </div>
///
/// Example input:
/// ```text
/// nodes 5
/// 0,1,1
/// 1,2,2
/// 2,3,3
/// 0,3,10
/// ```
pub fn from_file(path: &str) -> Result<MstEngine> {
    let file = File::open(path)?;
    parse_weighted_edges(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<MstEngine> {
    parse_weighted_edges(BufReader::new(Cursor::new(input)))
}

fn parse_weighted_edges<R: BufRead>(reader: R) -> Result<MstEngine> {
    let mut declared_nodes = None;
    let mut edges = Vec::new();
    let mut max_node = None;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(count) = line.strip_prefix("nodes") {
            declared_nodes = Some(parse_field::<usize>(count, line_no, "node count")?);
            continue;
        }

        let parts: Vec<_> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(MstError::Parse {
                line: line_no,
                reason: format!("expected 'u,v,w', got '{line}'"),
            });
        }
        let u = parse_field::<usize>(parts[0], line_no, "node id")?;
        let v = parse_field::<usize>(parts[1], line_no, "node id")?;
        let w = parse_field::<f64>(parts[2], line_no, "weight")?;
        max_node = max_node.max(Some(u.max(v)));
        edges.push((line_no, u, v, w));
    }

    let n = declared_nodes.unwrap_or(max_node.map_or(0, |m| m + 1));
    let mut engine = MstEngine::new(n);
    for (line_no, u, v, w) in edges {
        engine.add_edge(u, v, w).map_err(|e| MstError::Parse {
            line: line_no,
            reason: e.to_string(),
        })?;
    }
    Ok(engine)
}

fn parse_field<T: std::str::FromStr>(raw: &str, line: usize, what: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| MstError::Parse {
        line,
        reason: format!("invalid {what} '{}'", raw.trim()),
    })
}
