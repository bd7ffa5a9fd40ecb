//! Tables, snapshots and SQL execution.

use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

/// Runs a SQL statement. Form field names are camelCase on the wire.
pub static POST_QUERY: OperationDescriptor = OperationDescriptor {
    id: "postQuery",
    method: HttpMethod::Post,
    path: "/query",
    fields: &[
        Field::query("engine", "engine").required(),
        Field::form("catalog", "catalog").required(),
        Field::form("schema", "schema").required(),
        Field::form("sqlQuery", "sqlQuery").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_TABLE: OperationDescriptor = OperationDescriptor {
    id: "deleteTable",
    method: HttpMethod::Delete,
    path: "/tables/table",
    fields: &[
        Field::body("deleteTables", "delete_tables").required(),
        Field::body("engineId", "engine_id").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_TABLE: OperationDescriptor = OperationDescriptor {
    id: "updateTable",
    method: HttpMethod::Patch,
    path: "/tables/table",
    fields: &[
        Field::query("engineId", "engine_id").required(),
        Field::query("catalogName", "catalog_name").required(),
        Field::query("schemaName", "schema_name").required(),
        Field::query("tableName", "table_name").required(),
        Field::body("addColumns", "add_columns"),
        Field::body("dropColumns", "drop_columns"),
        Field::body("newTableName", "new_table_name"),
        Field::body("renameColumns", "rename_columns"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_TABLE_SNAPSHOTS: OperationDescriptor = OperationDescriptor {
    id: "getTableSnapshots",
    method: HttpMethod::Get,
    path: "/tables/table/snapshots",
    fields: &[
        Field::query("engineId", "engine_id").required(),
        Field::query("catalogName", "catalog_name").required(),
        Field::query("schemaName", "schema_name").required(),
        Field::query("tableName", "table_name").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static ROLLBACK_SNAPSHOT: OperationDescriptor = OperationDescriptor {
    id: "rollbackSnapshot",
    method: HttpMethod::Post,
    path: "/tables/table/rollback",
    fields: &[
        Field::body("engineId", "engine_id").required(),
        Field::body("catalogName", "catalog_name").required(),
        Field::body("schemaName", "schema_name").required(),
        Field::body("snapshotId", "snapshot_id").required(),
        Field::body("tableName", "table_name").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_TABLES: OperationDescriptor = OperationDescriptor {
    id: "getTables",
    method: HttpMethod::Get,
    path: "/tables",
    fields: &[
        Field::query("engineId", "engine_id").required(),
        Field::query("catalogName", "catalog_name").required(),
        Field::query("schemaName", "schema_name").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static PARSE_CSV: OperationDescriptor = OperationDescriptor {
    id: "parseCsv",
    method: HttpMethod::Post,
    path: "/parse/csv",
    fields: &[
        Field::form("engine", "engine").required(),
        Field::form("parseFile", "parse_file").required(),
        Field::form("fileType", "file_type").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};
