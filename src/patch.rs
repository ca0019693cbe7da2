use crate::serialization::PatchError;
use crate::wagner_fischer::Edit;
use std::fmt::Display;

/// Applies an edit script to a sequence, producing the transformed one.
///
/// Delete, Equal and Replace consume one element of `old` each and must
/// find the element the script recorded for them; Insert consumes
/// nothing. The script must account for every element of `old`.
pub fn apply<T: Eq + Clone + Display>(old: &[T], edits: &[Edit<T>]) -> Result<Vec<T>, PatchError> {
    let mut result = Vec::new();
    let mut pos = 0;

    for edit in edits {
        match edit {
            Edit::Insert(el) => result.push(el.clone()),
            Edit::Equal(el) => {
                check_context(old, pos, el)?;
                result.push(el.clone());
                pos += 1;
            }
            Edit::Replace(el, new) => {
                check_context(old, pos, el)?;
                result.push(new.clone());
                pos += 1;
            }
            Edit::Delete(el) => {
                check_context(old, pos, el)?;
                pos += 1;
            }
        }
    }

    if pos != old.len() {
        return Err(PatchError::InvalidFormat(format!(
            "script leaves {} trailing elements unconsumed",
            old.len() - pos
        )));
    }

    Ok(result)
}

fn check_context<T: Eq + Display>(old: &[T], pos: usize, expected: &T) -> Result<(), PatchError> {
    match old.get(pos) {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(PatchError::ContextMismatch {
            position: pos,
            expected: expected.to_string(),
            found: found.to_string(),
        }),
        None => Err(PatchError::InvalidFormat(format!(
            "script consumes more than {} elements",
            old.len()
        ))),
    }
}
