use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

pub static EXPLAIN_ANALYZE_STATEMENT: OperationDescriptor = OperationDescriptor {
    id: "explainAnalyzeStatement",
    method: HttpMethod::Post,
    path: "/explainanalyze",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        Field::body("engineId", "engine_id").required(),
        Field::body("schemaName", "schema_name").required(),
        Field::body("statement", "statement").required(),
        Field::body("verbose", "verbose"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static EXPLAIN_STATEMENT: OperationDescriptor = OperationDescriptor {
    id: "explainStatement",
    method: HttpMethod::Post,
    path: "/explain",
    fields: &[
        Field::body("engineId", "engine_id").required(),
        Field::body("statement", "statement").required(),
        Field::body("catalogName", "catalog_name"),
        Field::body("format", "format"),
        Field::body("schemaName", "schema_name"),
        Field::body("type", "type"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};
