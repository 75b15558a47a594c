/// Joins backslash-continued lines into logical lines.
///
/// pkg-config reads a trailing backslash as "the entry continues on the
/// next line"; the backslash and the line break both disappear from the
/// joined result.
#[must_use]
pub fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    for line in content.lines() {
        match line.strip_suffix('\\') {
            Some(stem) => pending.push_str(stem),
            None => {
                pending.push_str(line);
                lines.push(std::mem::take(&mut pending));
            }
        }
    }
    if !pending.is_empty() {
        lines.push(pending);
    }
    lines
}

/// Extracts `name=value` variable assignments in file order.
///
/// Values are kept raw: surrounding whitespace is preserved and `${...}`
/// references stay unexpanded. `Keyword: value` field lines are not
/// assignments even when the value contains an equals sign.
#[must_use]
pub fn variables(content: &str) -> Vec<(String, String)> {
    logical_lines(content)
        .iter()
        .filter_map(|line| split_assignment(line))
        .collect()
}

/// Whether any logical line assigns the named variable.
#[must_use]
pub fn declares_variable(content: &str, name: &str) -> bool {
    logical_lines(content).iter().any(|line| {
        line.strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('='))
    })
}

fn split_assignment(line: &str) -> Option<(String, String)> {
    let eq = line.find('=')?;
    // field keywords like `Cflags: -DX=1` never form a valid name, since
    // neither ':' nor ' ' is a name character
    let name = &line[..eq];
    if name.is_empty() || !name.chars().all(is_name_char) {
        return None;
    }
    Some((name.to_string(), line[eq + 1..].to_string()))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}
