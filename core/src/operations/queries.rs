//! Saved queries.

use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

const QUERY_NAME: Field = Field::path("queryName", "query_name");

pub static SAVE_QUERY: OperationDescriptor = OperationDescriptor {
    id: "saveQuery",
    method: HttpMethod::Post,
    path: "/queries/{query_name}",
    fields: &[
        QUERY_NAME,
        Field::body("createdBy", "created_by").required(),
        Field::body("description", "description").required(),
        Field::body("queryString", "query_string").required(),
        Field::body("createdOn", "created_on"),
        Field::body("engineId", "engine_id"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_QUERY: OperationDescriptor = OperationDescriptor {
    id: "deleteQuery",
    method: HttpMethod::Delete,
    path: "/queries/{query_name}",
    fields: &[QUERY_NAME, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_QUERY: OperationDescriptor = OperationDescriptor {
    id: "updateQuery",
    method: HttpMethod::Patch,
    path: "/queries/{query_name}",
    fields: &[
        QUERY_NAME,
        Field::body("queryString", "query_string").required(),
        Field::body("description", "description").required(),
        Field::body("newQueryName", "new_query_name").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_QUERIES: OperationDescriptor = OperationDescriptor {
    id: "getQueries",
    method: HttpMethod::Get,
    path: "/queries",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};
