use crate::wagner_fischer::Edit;
use thiserror::Error;

/// Renders a value in the numbered script format, one edit per line:
/// `<line> <marker> <payload>` with markers `*` (replace, payload
/// `old|new`), ` ` (equal), `-` (delete), `+` (insert).
pub trait ToScript: Sized {
    fn to_script(&self) -> String;
}

/// Parses the format produced by [`ToScript`].
pub trait FromScript: Sized {
    fn from_script(s: &str) -> Result<Self, PatchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("invalid script format: {0}")]
    InvalidFormat(String),
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("element {position} does not match the script: expected '{expected}', found '{found}'")]
    ContextMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}

impl<T: ToString> ToScript for Edit<T> {
    fn to_script(&self) -> String {
        match self {
            Edit::Equal(el) => format!("  {}", el.to_string()),
            Edit::Insert(el) => format!("+ {}", el.to_string()),
            Edit::Delete(el) => format!("- {}", el.to_string()),
            Edit::Replace(old, new) => format!("* {}|{}", old.to_string(), new.to_string()),
        }
    }
}

impl FromScript for Edit<String> {
    fn from_script(s: &str) -> Result<Self, PatchError> {
        let bytes = s.as_bytes();
        if bytes.len() < 2 || bytes[1] != b' ' {
            return Err(PatchError::InvalidFormat(s.to_string()));
        }

        let payload = &s[2..];
        match bytes[0] {
            b' ' => Ok(Edit::Equal(payload.to_string())),
            b'+' => Ok(Edit::Insert(payload.to_string())),
            b'-' => Ok(Edit::Delete(payload.to_string())),
            b'*' => match payload.split_once('|') {
                Some((old, new)) => Ok(Edit::Replace(old.to_string(), new.to_string())),
                None => Err(PatchError::InvalidFormat(s.to_string())),
            },
            _ => Err(PatchError::UnexpectedToken(s.to_string())),
        }
    }
}

impl<T: ToString> ToScript for Vec<Edit<T>> {
    fn to_script(&self) -> String {
        self.iter()
            .enumerate()
            .map(|(n, e)| format!("{} {}\n", n + 1, e.to_script()))
            .collect()
    }
}

impl FromScript for Vec<Edit<String>> {
    fn from_script(s: &str) -> Result<Self, PatchError> {
        if s.is_empty() {
            return Ok(vec![]);
        }

        let body = s.strip_suffix('\n').ok_or_else(|| {
            PatchError::InvalidFormat("script does not end with a newline".to_string())
        })?;

        // can't use `.lines()` because of Windows \r
        // would break the roundtrip property
        body.split('\n')
            .enumerate()
            .map(|(n, line)| parse_numbered_line(n + 1, line))
            .collect()
    }
}

fn parse_numbered_line(expected: usize, line: &str) -> Result<Edit<String>, PatchError> {
    // line = "4 * fff|ddd"
    let (number, edit) = line
        .split_once(' ')
        .ok_or_else(|| PatchError::InvalidFormat(line.to_string()))?;
    let number = number
        .parse::<usize>()
        .map_err(|_| PatchError::InvalidFormat(line.to_string()))?;
    if number != expected {
        return Err(PatchError::InvalidFormat(format!(
            "expected line {}, found line {}",
            expected, number
        )));
    }
    Edit::from_script(edit)
}
