//! Access management: user and group grants on engines, catalogs, databases,
//! metastores and buckets, plus data policies.

use super::{Field, OperationDescriptor, AUTH_INSTANCE_ID, JSON, LH_INSTANCE_ID};
use crate::http::{HttpMethod, ResponseType};

const GROUPS: Field = Field::body("groups", "groups");
const USERS: Field = Field::body("users", "users");

pub static CREATE_DB_CONN_USERS: OperationDescriptor = OperationDescriptor {
    id: "createDbConnUsers",
    method: HttpMethod::Post,
    path: "/access/databases",
    fields: &[
        Field::body("databaseId", "database_id").required(),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static LIST_DATA_POLICIES: OperationDescriptor = OperationDescriptor {
    id: "listDataPolicies",
    method: HttpMethod::Get,
    path: "/access/data_policies",
    fields: &[
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
        Field::query("catalogName", "catalog_name"),
        Field::query("status", "status"),
        Field::query("includeMetadata", "include_metadata"),
        Field::query("includeRules", "include_rules"),
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static CREATE_DATA_POLICY: OperationDescriptor = OperationDescriptor {
    id: "createDataPolicy",
    method: HttpMethod::Post,
    path: "/access/data_policies",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        Field::body("dataArtifact", "data_artifact").required(),
        Field::body("policyName", "policy_name").required(),
        Field::body("rules", "rules").required(),
        Field::body("description", "description"),
        Field::body("status", "status"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_DATA_POLICIES: OperationDescriptor = OperationDescriptor {
    id: "deleteDataPolicies",
    method: HttpMethod::Delete,
    path: "/access/data_policies",
    fields: &[
        Field::body("dataPolicies", "data_policies"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static GET_ENGINE_USERS: OperationDescriptor = OperationDescriptor {
    id: "getEngineUsers",
    method: HttpMethod::Get,
    path: "/access/engines/{engine_id}",
    fields: &[
        Field::path("engineId", "engine_id"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_ENGINE_USERS: OperationDescriptor = OperationDescriptor {
    id: "deleteEngineUsers",
    method: HttpMethod::Delete,
    path: "/access/engines/{engine_id}",
    fields: &[
        Field::path("engineId", "engine_id"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_ENGINE_USERS: OperationDescriptor = OperationDescriptor {
    id: "updateEngineUsers",
    method: HttpMethod::Patch,
    path: "/access/engines/{engine_id}",
    fields: &[
        Field::path("engineId", "engine_id"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_DB_CONN_USERS: OperationDescriptor = OperationDescriptor {
    id: "deleteDbConnUsers",
    method: HttpMethod::Delete,
    path: "/access/databases/{database_id}",
    fields: &[
        Field::path("databaseId", "database_id"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static GET_DB_CONN_USERS: OperationDescriptor = OperationDescriptor {
    id: "getDbConnUsers",
    method: HttpMethod::Get,
    path: "/access/databases/{database_id}",
    fields: &[
        Field::path("databaseId", "database_id"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static UPDATE_DB_CONN_USERS: OperationDescriptor = OperationDescriptor {
    id: "updateDbConnUsers",
    method: HttpMethod::Patch,
    path: "/access/databases/{database_id}",
    fields: &[
        Field::path("databaseId", "database_id"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static CREATE_CATALOG_USERS: OperationDescriptor = OperationDescriptor {
    id: "createCatalogUsers",
    method: HttpMethod::Post,
    path: "/access/catalogs",
    fields: &[
        Field::body("catalogName", "catalog_name").required(),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_CATALOG_USERS: OperationDescriptor = OperationDescriptor {
    id: "getCatalogUsers",
    method: HttpMethod::Get,
    path: "/access/catalogs/{catalog_name}",
    fields: &[
        Field::path("catalogName", "catalog_name"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_CATALOG_USERS: OperationDescriptor = OperationDescriptor {
    id: "deleteCatalogUsers",
    method: HttpMethod::Delete,
    path: "/access/catalogs/{catalog_name}",
    fields: &[
        Field::path("catalogName", "catalog_name"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_CATALOG_USERS: OperationDescriptor = OperationDescriptor {
    id: "updateCatalogUsers",
    method: HttpMethod::Patch,
    path: "/access/catalogs/{catalog_name}",
    fields: &[
        Field::path("catalogName", "catalog_name"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static EVALUATE: OperationDescriptor = OperationDescriptor {
    id: "evaluate",
    method: HttpMethod::Post,
    path: "/access/evaluation",
    fields: &[
        Field::body("resources", "resources"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_POLICIES_LIST: OperationDescriptor = OperationDescriptor {
    id: "getPoliciesList",
    method: HttpMethod::Get,
    path: "/access/policies",
    fields: &[
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
        Field::query("catalogList", "catalog_list"),
        Field::query("engineList", "engine_list"),
        Field::query("dataPoliciesList", "data_policies_list"),
        Field::query("includeDataPolicies", "include_data_policies"),
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static CREATE_METASTORE_USERS: OperationDescriptor = OperationDescriptor {
    id: "createMetastoreUsers",
    method: HttpMethod::Post,
    path: "/access/metastores",
    fields: &[
        Field::body("metastoreName", "metastore_name").required(),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_METASTORE_USERS: OperationDescriptor = OperationDescriptor {
    id: "getMetastoreUsers",
    method: HttpMethod::Get,
    path: "/access/metastores/{metastore_name}",
    fields: &[
        Field::path("metastoreName", "metastore_name"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_METASTORE_USERS: OperationDescriptor = OperationDescriptor {
    id: "deleteMetastoreUsers",
    method: HttpMethod::Delete,
    path: "/access/metastores/{metastore_name}",
    fields: &[
        Field::path("metastoreName", "metastore_name"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_METASTORE_USERS: OperationDescriptor = OperationDescriptor {
    id: "updateMetastoreUsers",
    method: HttpMethod::Patch,
    path: "/access/metastores/{metastore_name}",
    fields: &[
        Field::path("metastoreName", "metastore_name"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static CREATE_BUCKET_USERS: OperationDescriptor = OperationDescriptor {
    id: "createBucketUsers",
    method: HttpMethod::Post,
    path: "/access/buckets",
    fields: &[
        Field::body("bucketId", "bucket_id").required(),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_DEFAULT_POLICIES: OperationDescriptor = OperationDescriptor {
    id: "getDefaultPolicies",
    method: HttpMethod::Get,
    path: "/access/default_policies",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_POLICY_VERSION: OperationDescriptor = OperationDescriptor {
    id: "getPolicyVersion",
    method: HttpMethod::Get,
    path: "/access/policy_versions",
    fields: &[LH_INSTANCE_ID, AUTH_INSTANCE_ID],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static GET_DATA_POLICY: OperationDescriptor = OperationDescriptor {
    id: "getDataPolicy",
    method: HttpMethod::Get,
    path: "/access/data_policies/{policy_name}",
    fields: &[
        Field::path("policyName", "policy_name"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static REPLACE_DATA_POLICY: OperationDescriptor = OperationDescriptor {
    id: "replaceDataPolicy",
    method: HttpMethod::Put,
    path: "/access/data_policies/{policy_name}",
    fields: &[
        Field::path("policyName", "policy_name"),
        Field::body("catalogName", "catalog_name").required(),
        Field::body("dataArtifact", "data_artifact").required(),
        Field::body("rules", "rules").required(),
        Field::body("description", "description"),
        Field::body("status", "status"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_DATA_POLICY: OperationDescriptor = OperationDescriptor {
    id: "deleteDataPolicy",
    method: HttpMethod::Delete,
    path: "/access/data_policies/{policy_name}",
    fields: &[
        Field::path("policyName", "policy_name"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static GET_BUCKET_USERS: OperationDescriptor = OperationDescriptor {
    id: "getBucketUsers",
    method: HttpMethod::Get,
    path: "/access/buckets/{bucket_id}",
    fields: &[
        Field::path("bucketId", "bucket_id"),
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};

pub static DELETE_BUCKET_USERS: OperationDescriptor = OperationDescriptor {
    id: "deleteBucketUsers",
    method: HttpMethod::Delete,
    path: "/access/buckets/{bucket_id}",
    fields: &[
        Field::path("bucketId", "bucket_id"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: None,
    response_type: ResponseType::Json,
};

pub static UPDATE_BUCKET_USERS: OperationDescriptor = OperationDescriptor {
    id: "updateBucketUsers",
    method: HttpMethod::Patch,
    path: "/access/buckets/{bucket_id}",
    fields: &[
        Field::path("bucketId", "bucket_id"),
        GROUPS,
        USERS,
        LH_INSTANCE_ID,
        AUTH_INSTANCE_ID,
    ],
    accept: JSON,
    response_type: ResponseType::Json,
};
