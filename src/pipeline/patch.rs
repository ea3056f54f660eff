use crate::error::{Result, SyncError};

/// Location of the generated region inside a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Zero-based line index of the start sentinel
    pub start_line: usize,
    /// Zero-based line index of the end sentinel
    pub end_line: usize,
}

/// Find the first line holding `start_marker` and the first line holding
/// `end_marker`.
pub fn locate_region(lines: &[&str], start_marker: &str, end_marker: &str) -> Result<Region> {
    let find = |marker: &str| {
        lines
            .iter()
            .position(|line| line.contains(marker))
            .ok_or_else(|| SyncError::MissingSentinel {
                marker: marker.to_string(),
            })
    };
    let start_line = find(start_marker)?;
    let end_line = find(end_marker)?;

    if end_line <= start_line {
        return Err(SyncError::MisorderedSentinels {
            start_line: start_line + 1,
            end_line: end_line + 1,
        });
    }

    Ok(Region {
        start_line,
        end_line,
    })
}

/// Replace everything strictly between the two sentinel lines with `entries`.
///
/// Lines outside the region, sentinels included, are copied byte for byte
/// (line terminators too). Nothing is returned unless both sentinels exist in
/// the right order.
pub fn patch_region(
    content: &str,
    entries: &[String],
    start_marker: &str,
    end_marker: &str,
) -> Result<String> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let region = locate_region(&lines, start_marker, end_marker)?;

    let mut patched = String::with_capacity(content.len());
    for line in &lines[..=region.start_line] {
        patched.push_str(line);
    }
    for entry in entries {
        patched.push_str(entry);
    }
    for line in &lines[region.end_line..] {
        patched.push_str(line);
    }

    Ok(patched)
}
