//! Database catalog registrations.

use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

pub static GET_DATABASES: OperationDescriptor = OperationDescriptor {
    id: "getDatabases",
    method: HttpMethod::Get,
    path: "/databases",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static CREATE_DATABASE_CATALOG: OperationDescriptor = OperationDescriptor {
    id: "createDatabaseCatalog",
    method: HttpMethod::Post,
    path: "/databases/database",
    fields: &[
        Field::body("databaseDisplayName", "database_display_name").required(),
        Field::body("databaseType", "database_type").required(),
        Field::body("catalogName", "catalog_name").required(),
        Field::body("databaseDetails", "database_details"),
        Field::body("description", "description"),
        Field::body("tags", "tags"),
        Field::body("createdBy", "created_by"),
        Field::body("createdOn", "created_on"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_DATABASE_CATALOG: OperationDescriptor = OperationDescriptor {
    id: "deleteDatabaseCatalog",
    method: HttpMethod::Delete,
    path: "/databases/database",
    fields: &[
        Field::body("databaseId", "database_id").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_DATABASE: OperationDescriptor = OperationDescriptor {
    id: "updateDatabase",
    method: HttpMethod::Patch,
    path: "/databases/database",
    fields: &[
        Field::body("databaseId", "database_id").required(),
        Field::body("databaseDetails", "database_details"),
        Field::body("databaseDisplayName", "database_display_name"),
        Field::body("description", "description"),
        Field::body("tags", "tags"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};
