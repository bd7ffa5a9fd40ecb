//! Bucket registration and lifecycle.

use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

const BUCKET_ID: Field = Field::body("bucketId", "bucket_id").required();

pub static GET_BUCKETS: OperationDescriptor = OperationDescriptor {
    id: "getBuckets",
    method: HttpMethod::Get,
    path: "/buckets",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_BUCKET_OBJECTS: OperationDescriptor = OperationDescriptor {
    id: "getBucketObjects",
    method: HttpMethod::Get,
    path: "/buckets/bucket/objects",
    fields: &[
        Field::query("bucketId", "bucket_id").required(),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DEACTIVATE_BUCKET: OperationDescriptor = OperationDescriptor {
    id: "deactivateBucket",
    method: HttpMethod::Post,
    path: "/buckets/bucket/deactivate",
    fields: &[BUCKET_ID, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static REGISTER_BUCKET: OperationDescriptor = OperationDescriptor {
    id: "registerBucket",
    method: HttpMethod::Post,
    path: "/buckets/bucket",
    fields: &[
        Field::body("bucketDetails", "bucket_details").required(),
        Field::body("description", "description").required(),
        Field::body("tableType", "table_type").required(),
        Field::body("bucketType", "bucket_type").required(),
        Field::body("catalogName", "catalog_name").required(),
        Field::body("managedBy", "managed_by").required(),
        Field::body("bucketDisplayName", "bucket_display_name"),
        Field::body("bucketTags", "bucket_tags"),
        Field::body("catalogTags", "catalog_tags"),
        Field::body("thriftUri", "thrift_uri"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static UNREGISTER_BUCKET: OperationDescriptor = OperationDescriptor {
    id: "unregisterBucket",
    method: HttpMethod::Delete,
    path: "/buckets/bucket",
    fields: &[BUCKET_ID, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_BUCKET: OperationDescriptor = OperationDescriptor {
    id: "updateBucket",
    method: HttpMethod::Patch,
    path: "/buckets/bucket",
    fields: &[
        BUCKET_ID,
        Field::body("accessKey", "access_key"),
        Field::body("bucketDisplayName", "bucket_display_name"),
        Field::body("description", "description"),
        Field::body("secretKey", "secret_key"),
        Field::body("tags", "tags"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static ACTIVATE_BUCKET: OperationDescriptor = OperationDescriptor {
    id: "activateBucket",
    method: HttpMethod::Post,
    path: "/buckets/bucket/activate",
    fields: &[BUCKET_ID, LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};
