//! Grid cell coordinates and their `"x,y"` text form used in project files.

/// Integer grid coordinate `(x, y)`; `(0, 0)` is the top-left cell.
pub type Cell = (i32, i32);

/// Format a cell as the `"x,y"` key stored in project files.
pub fn cell_key(cell: Cell) -> String {
    format!("{},{}", cell.0, cell.1)
}

/// Parse an `"x,y"` key.
///
/// Returns `None` unless the key has exactly two comma-separated parts that
/// both parse as integers. Whitespace is not allowed (`"1, 2"` is rejected).
pub fn parse_cell_key(key: &str) -> Option<Cell> {
    let mut parts = key.split(',');
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Whether a cell lies inside a `width` x `height` grid.
pub fn in_bounds(cell: Cell, width: u32, height: u32) -> bool {
    cell.0 >= 0 && cell.1 >= 0 && (cell.0 as u32) < width && (cell.1 as u32) < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_key_format() {
        assert_eq!(cell_key((2, 3)), "2,3");
        assert_eq!(cell_key((0, 0)), "0,0");
        assert_eq!(cell_key((-1, 12)), "-1,12");
    }

    #[test]
    fn test_parse_valid_keys() {
        assert_eq!(parse_cell_key("2,3"), Some((2, 3)));
        assert_eq!(parse_cell_key("10,0"), Some((10, 0)));
        assert_eq!(parse_cell_key("-1,2"), Some((-1, 2)));
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert_eq!(parse_cell_key(""), None);
        assert_eq!(parse_cell_key("7"), None);
        assert_eq!(parse_cell_key("1,2,3"), None);
        assert_eq!(parse_cell_key("a,b"), None);
        assert_eq!(parse_cell_key("1.5,2"), None);
        assert_eq!(parse_cell_key("1,"), None);
        assert_eq!(parse_cell_key("1, 2"), None);
        assert_eq!(parse_cell_key(" 4,5"), None);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds((0, 0), 3, 2));
        assert!(in_bounds((2, 1), 3, 2));
        assert!(!in_bounds((3, 1), 3, 2));
        assert!(!in_bounds((2, 2), 3, 2));
        assert!(!in_bounds((-1, 0), 3, 2));
        assert!(!in_bounds((0, -1), 3, 2));
    }
}
