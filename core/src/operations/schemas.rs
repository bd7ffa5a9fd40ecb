use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

pub static CREATE_SCHEMA: OperationDescriptor = OperationDescriptor {
    id: "createSchema",
    method: HttpMethod::Post,
    path: "/schemas/schema",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        Field::body("engineId", "engine_id").required(),
        Field::body("schemaName", "schema_name").required(),
        Field::body("bucketName", "bucket_name"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_SCHEMA: OperationDescriptor = OperationDescriptor {
    id: "deleteSchema",
    method: HttpMethod::Delete,
    path: "/schemas/schema",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        Field::body("engineId", "engine_id").required(),
        Field::body("schemaName", "schema_name").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static GET_SCHEMAS: OperationDescriptor = OperationDescriptor {
    id: "getSchemas",
    method: HttpMethod::Get,
    path: "/schemas",
    fields: &[
        Field::query("engineId", "engine_id").required(),
        Field::query("catalogName", "catalog_name").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};
