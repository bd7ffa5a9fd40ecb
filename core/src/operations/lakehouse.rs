//! Console readiness check.

use super::{OperationDescriptor, JSON};
use crate::http::{HttpMethod, ResponseType};

/// Readiness check of the lakehouse console. Takes no parameters.
pub static TEST_LH_CONSOLE: OperationDescriptor = OperationDescriptor {
    id: "testLHConsole",
    method: HttpMethod::Get,
    path: "/ready",
    fields: &[],
    accept: JSON,
    response_type: ResponseType::Json,
};
