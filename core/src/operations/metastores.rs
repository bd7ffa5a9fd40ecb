//! Metastore catalogs and their attachment to engines.

use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

pub static GET_METASTORES: OperationDescriptor = OperationDescriptor {
    id: "getMetastores",
    method: HttpMethod::Get,
    path: "/catalogs",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_HMS: OperationDescriptor = OperationDescriptor {
    id: "getHMS",
    method: HttpMethod::Get,
    path: "/metastores",
    fields: &[
        Field::query("catalogName", "catalog_name"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static ADD_METASTORE_TO_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "addMetastoreToEngine",
    method: HttpMethod::Post,
    path: "/catalogs/add_catalog_to_engine",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        Field::body("engineId", "engine_id").required(),
        Field::body("createdBy", "created_by"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static REMOVE_CATALOG_FROM_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "removeCatalogFromEngine",
    method: HttpMethod::Delete,
    path: "/catalogs/catalog",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        Field::body("engineId", "engine_id").required(),
        Field::body("createdBy", "created_by"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};
