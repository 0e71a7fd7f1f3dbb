pub(crate) struct ParseError {
    pub(crate) index: usize,
}

/// Splits a command line on whitespace, keeping quoted runs together so
/// names like `"Mary Ann"` arrive as one item.
pub(crate) fn parse_items(input: &str) -> Result<Vec<String>, ParseError> {
    for (index, ch) in input.char_indices() {
        if ch.is_control() {
            return Err(ParseError { index });
        }
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut open_index = 0usize;
    for (index, ch) in input.char_indices() {
        if let Some(active) = quote {
            if ch == active {
                quote = None;
                items.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
            continue;
        }

        if ch == '"' || ch == '\'' {
            if !current.is_empty() {
                items.push(std::mem::take(&mut current));
            }
            quote = Some(ch);
            open_index = index;
            continue;
        }

        if ch.is_whitespace() {
            if !current.is_empty() {
                items.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(ch);
    }

    if quote.is_some() {
        return Err(ParseError { index: open_index });
    }

    if !current.is_empty() {
        items.push(current);
    }
    Ok(items)
}

pub(crate) fn format_parse_error(input: &str, index: usize) -> String {
    let mut caret_pos = 0usize;
    for (byte_idx, _) in input.char_indices() {
        if byte_idx >= index {
            break;
        }
        caret_pos += 1;
    }
    let mut marker = String::new();
    marker.push_str(&" ".repeat(caret_pos));
    marker.push('^');
    format!(
        "Invalid character at position {}:\n{}\n{}",
        caret_pos + 1,
        input,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(input: &str) -> Vec<String> {
        parse_items(input).unwrap_or_default()
    }

    #[test]
    fn quoted_names_stay_together() {
        assert_eq!(items("name 1 \"Mary Ann\""), vec!["name", "1", "Mary Ann"]);
        assert_eq!(items("course 'Old Course'"), vec!["course", "Old Course"]);
        assert_eq!(items("name 2 \"\""), vec!["name", "2", ""]);
    }

    #[test]
    fn unbalanced_quote_points_at_opening() {
        let err = parse_items("name 1 \"Mary").err().map(|e| e.index);
        assert_eq!(err, Some(7));
    }
}
