//! Parameter validation against an operation's field lists.

use crate::error::ValidationError;
use crate::params::{Params, HEADERS_FIELD};

/// Check `params` against the required and accepted field names.
///
/// Missing `params` is treated as empty. Required fields are checked first,
/// in order, and the first absent one is reported. Then every present field
/// must appear in `accepted` (or be the implicit `headers` field).
pub fn validate(
    params: Option<&Params>,
    required: &[&str],
    accepted: &[&str],
) -> Result<(), ValidationError> {
    let empty = Params::default();
    let params = params.unwrap_or(&empty);

    if let Some(missing) = required.iter().find(|name| !params.contains(name)) {
        return Err(ValidationError::missing(*missing));
    }

    if let Some(unknown) = params
        .names()
        .find(|name| *name != HEADERS_FIELD && !accepted.contains(name))
    {
        return Err(ValidationError::unrecognized(unknown));
    }

    Ok(())
}
