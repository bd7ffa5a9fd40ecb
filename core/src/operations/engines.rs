//! Engine provisioning and lifecycle.
//!
//! Create, update and scale answer with an opaque byte stream; the caller's
//! `accept` value is forwarded as-is.

use super::{Field, OperationDescriptor, ACCEPT, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

const ENGINE_ID: Field = Field::body("engineId", "engine_id").required();
const CREATED_BY: Field = Field::body("createdBy", "created_by");
const COORDINATOR: Field = Field::body("coordinator", "coordinator");
const WORKER: Field = Field::body("worker", "worker");

pub static PAUSE_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "pauseEngine",
    method: HttpMethod::Post,
    path: "/engines/engine/pause",
    fields: &[ENGINE_ID, CREATED_BY, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_ENGINES: OperationDescriptor = OperationDescriptor {
    id: "getEngines",
    method: HttpMethod::Get,
    path: "/engines",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_DEPLOYMENTS: OperationDescriptor = OperationDescriptor {
    id: "getDeployments",
    method: HttpMethod::Get,
    path: "/instance",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static UPDATE_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "updateEngine",
    method: HttpMethod::Patch,
    path: "/engines/engine",
    fields: &[
        ENGINE_ID,
        COORDINATOR,
        Field::body("description", "description"),
        Field::body("engineDisplayName", "engine_display_name"),
        Field::body("tags", "tags"),
        WORKER,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
        ACCEPT,
    ],
    accept: None,
    response_type: ResponseType::Stream,
};

pub static CREATE_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "createEngine",
    method: HttpMethod::Post,
    path: "/engines/engine",
    fields: &[
        Field::body("origin", "origin").required(),
        Field::body("type", "type").required(),
        Field::body("version", "version"),
        COORDINATOR,
        WORKER,
        Field::body("description", "description"),
        Field::body("engineDisplayName", "engine_display_name"),
        Field::body("firstTimeUse", "first_time_use"),
        Field::body("region", "region"),
        Field::body("associatedCatalogs", "associated_catalogs"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
        ACCEPT,
    ],
    accept: None,
    response_type: ResponseType::Stream,
};

pub static RESUME_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "resumeEngine",
    method: HttpMethod::Post,
    path: "/engines/engine/resume",
    fields: &[ENGINE_ID, CREATED_BY, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static SCALE_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "scaleEngine",
    method: HttpMethod::Post,
    path: "/engines/engine/scale",
    fields: &[
        ENGINE_ID,
        COORDINATOR,
        WORKER,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
        ACCEPT,
    ],
    accept: None,
    response_type: ResponseType::Stream,
};

pub static DELETE_ENGINE: OperationDescriptor = OperationDescriptor {
    id: "deleteEngine",
    method: HttpMethod::Delete,
    path: "/engines/engine",
    fields: &[ENGINE_ID, CREATED_BY, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: None,
    response_type: ResponseType::Json,
};
