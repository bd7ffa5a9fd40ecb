//! Declarative operation registry.
//!
//! # Design
//! Every remote operation is one `OperationDescriptor` static: method, URL
//! template and the fields it accepts, each tagged with its wire name and
//! where it lands in the request. Validation and request assembly read these
//! tables; there is no per-operation code. The `registry!` invocation at the
//! bottom ties each descriptor to an `Operation` variant and to a typed
//! method on `LakehouseService`.

mod access;
mod buckets;
mod databases;
mod engines;
mod explain;
mod lakehouse;
mod metastores;
mod queries;
mod schemas;
mod tables;

use crate::error::ApiError;
use crate::http::{HttpMethod, ResponseType, Transport};
use crate::params::Params;
use crate::response::{Payload, Response};
use crate::service::LakehouseService;

/// Where a field is placed in the assembled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
    Form,
    Header,
}

/// One accepted parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Caller-facing name.
    pub name: &'static str,
    /// Name on the wire: placeholder, query key, body key, form key or header.
    pub wire: &'static str,
    pub location: Location,
    pub required: bool,
}

impl Field {
    const fn new(name: &'static str, wire: &'static str, location: Location) -> Self {
        Self {
            name,
            wire,
            location,
            required: false,
        }
    }

    /// Path fields are always required; a template cannot be half-resolved.
    pub const fn path(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Location::Path).required()
    }

    pub const fn query(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Location::Query)
    }

    pub const fn body(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Location::Body)
    }

    pub const fn form(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Location::Form)
    }

    pub const fn header(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Location::Header)
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Instance identifier headers most operations accept.
pub(crate) const LH_INSTANCE_ID: Field = Field::header("lhInstanceId", "LHInstanceId");
pub(crate) const AUTH_INSTANCE_ID: Field = Field::header("authInstanceId", "AuthInstanceId");

/// Content negotiation passthrough for operations returning a byte stream.
pub(crate) const ACCEPT: Field = Field::header("accept", "Accept");

pub(crate) const JSON: Option<&str> = Some("application/json");

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation identifier, also reported in the analytics header.
    pub id: &'static str,
    pub method: HttpMethod,
    /// URL template relative to the service URL, with `{wire_name}` tokens.
    pub path: &'static str,
    pub fields: &'static [Field],
    /// Fixed `Accept` header, if the operation sets one.
    pub accept: Option<&'static str>,
    pub response_type: ResponseType,
}

impl OperationDescriptor {
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }

    pub fn accepted_fields(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    pub fn fields_at(&self, location: Location) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(move |f| f.location == location)
    }

    /// Whether the operation sends a JSON body.
    pub fn has_body(&self) -> bool {
        self.fields_at(Location::Body).next().is_some()
    }

    /// Whether the operation sends form fields.
    pub fn has_form(&self) -> bool {
        self.fields_at(Location::Form).next().is_some()
    }

    /// Placeholder names in the order the template declares them.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            out.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        out
    }
}

macro_rules! registry {
    ($($variant:ident => $method:ident = $desc:path;)*) => {
        /// Every operation the client knows how to invoke.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            pub fn descriptor(self) -> &'static OperationDescriptor {
                match self {
                    $(Operation::$variant => &$desc,)*
                }
            }
        }

        impl<T: Transport> LakehouseService<T> {
            $(
                #[doc = concat!("Invoke the `", stringify!($variant), "` operation.")]
                pub async fn $method(&self, params: Params) -> Result<Response<Payload>, ApiError> {
                    self.call(Operation::$variant, params).await
                }
            )*
        }
    };
}

impl Operation {
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    /// Look an operation up by its identifier, e.g. `"getEngineUsers"`.
    pub fn from_id(id: &str) -> Option<Operation> {
        Operation::ALL.iter().copied().find(|op| op.id() == id)
    }
}

registry! {
    CreateDbConnUsers => create_db_conn_users = access::CREATE_DB_CONN_USERS;
    ListDataPolicies => list_data_policies = access::LIST_DATA_POLICIES;
    CreateDataPolicy => create_data_policy = access::CREATE_DATA_POLICY;
    DeleteDataPolicies => delete_data_policies = access::DELETE_DATA_POLICIES;
    GetEngineUsers => get_engine_users = access::GET_ENGINE_USERS;
    DeleteEngineUsers => delete_engine_users = access::DELETE_ENGINE_USERS;
    UpdateEngineUsers => update_engine_users = access::UPDATE_ENGINE_USERS;
    DeleteDbConnUsers => delete_db_conn_users = access::DELETE_DB_CONN_USERS;
    GetDbConnUsers => get_db_conn_users = access::GET_DB_CONN_USERS;
    UpdateDbConnUsers => update_db_conn_users = access::UPDATE_DB_CONN_USERS;
    CreateCatalogUsers => create_catalog_users = access::CREATE_CATALOG_USERS;
    GetCatalogUsers => get_catalog_users = access::GET_CATALOG_USERS;
    DeleteCatalogUsers => delete_catalog_users = access::DELETE_CATALOG_USERS;
    UpdateCatalogUsers => update_catalog_users = access::UPDATE_CATALOG_USERS;
    Evaluate => evaluate = access::EVALUATE;
    GetPoliciesList => get_policies_list = access::GET_POLICIES_LIST;
    CreateMetastoreUsers => create_metastore_users = access::CREATE_METASTORE_USERS;
    GetMetastoreUsers => get_metastore_users = access::GET_METASTORE_USERS;
    DeleteMetastoreUsers => delete_metastore_users = access::DELETE_METASTORE_USERS;
    UpdateMetastoreUsers => update_metastore_users = access::UPDATE_METASTORE_USERS;
    CreateBucketUsers => create_bucket_users = access::CREATE_BUCKET_USERS;
    GetDefaultPolicies => get_default_policies = access::GET_DEFAULT_POLICIES;
    GetPolicyVersion => get_policy_version = access::GET_POLICY_VERSION;
    GetDataPolicy => get_data_policy = access::GET_DATA_POLICY;
    ReplaceDataPolicy => replace_data_policy = access::REPLACE_DATA_POLICY;
    DeleteDataPolicy => delete_data_policy = access::DELETE_DATA_POLICY;
    GetBucketUsers => get_bucket_users = access::GET_BUCKET_USERS;
    DeleteBucketUsers => delete_bucket_users = access::DELETE_BUCKET_USERS;
    UpdateBucketUsers => update_bucket_users = access::UPDATE_BUCKET_USERS;

    GetBuckets => get_buckets = buckets::GET_BUCKETS;
    GetBucketObjects => get_bucket_objects = buckets::GET_BUCKET_OBJECTS;
    DeactivateBucket => deactivate_bucket = buckets::DEACTIVATE_BUCKET;
    RegisterBucket => register_bucket = buckets::REGISTER_BUCKET;
    UnregisterBucket => unregister_bucket = buckets::UNREGISTER_BUCKET;
    UpdateBucket => update_bucket = buckets::UPDATE_BUCKET;
    ActivateBucket => activate_bucket = buckets::ACTIVATE_BUCKET;

    GetDatabases => get_databases = databases::GET_DATABASES;
    CreateDatabaseCatalog => create_database_catalog = databases::CREATE_DATABASE_CATALOG;
    DeleteDatabaseCatalog => delete_database_catalog = databases::DELETE_DATABASE_CATALOG;
    UpdateDatabase => update_database = databases::UPDATE_DATABASE;

    PauseEngine => pause_engine = engines::PAUSE_ENGINE;
    GetEngines => get_engines = engines::GET_ENGINES;
    GetDeployments => get_deployments = engines::GET_DEPLOYMENTS;
    UpdateEngine => update_engine = engines::UPDATE_ENGINE;
    CreateEngine => create_engine = engines::CREATE_ENGINE;
    ResumeEngine => resume_engine = engines::RESUME_ENGINE;
    ScaleEngine => scale_engine = engines::SCALE_ENGINE;
    DeleteEngine => delete_engine = engines::DELETE_ENGINE;

    ExplainAnalyzeStatement => explain_analyze_statement = explain::EXPLAIN_ANALYZE_STATEMENT;
    ExplainStatement => explain_statement = explain::EXPLAIN_STATEMENT;

    TestLhConsole => test_lh_console = lakehouse::TEST_LH_CONSOLE;

    GetMetastores => get_metastores = metastores::GET_METASTORES;
    GetHms => get_hms = metastores::GET_HMS;
    AddMetastoreToEngine => add_metastore_to_engine = metastores::ADD_METASTORE_TO_ENGINE;
    RemoveCatalogFromEngine => remove_catalog_from_engine = metastores::REMOVE_CATALOG_FROM_ENGINE;

    SaveQuery => save_query = queries::SAVE_QUERY;
    DeleteQuery => delete_query = queries::DELETE_QUERY;
    UpdateQuery => update_query = queries::UPDATE_QUERY;
    GetQueries => get_queries = queries::GET_QUERIES;

    CreateSchema => create_schema = schemas::CREATE_SCHEMA;
    DeleteSchema => delete_schema = schemas::DELETE_SCHEMA;
    GetSchemas => get_schemas = schemas::GET_SCHEMAS;

    PostQuery => post_query = tables::POST_QUERY;
    DeleteTable => delete_table = tables::DELETE_TABLE;
    UpdateTable => update_table = tables::UPDATE_TABLE;
    GetTableSnapshots => get_table_snapshots = tables::GET_TABLE_SNAPSHOTS;
    RollbackSnapshot => rollback_snapshot = tables::ROLLBACK_SNAPSHOT;
    GetTables => get_tables = tables::GET_TABLES;
    ParseCsv => parse_csv = tables::PARSE_CSV;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_and_resolvable() {
        let mut seen = HashSet::new();
        for op in Operation::ALL {
            assert!(seen.insert(op.id()), "duplicate id {}", op.id());
            assert_eq!(Operation::from_id(op.id()), Some(*op));
        }
        assert_eq!(Operation::from_id("noSuchOperation"), None);
    }

    #[test]
    fn every_placeholder_has_a_path_field() {
        for op in Operation::ALL {
            let desc = op.descriptor();
            let placeholders = desc.placeholders();
            let path_wires: Vec<_> = desc.fields_at(Location::Path).map(|f| f.wire).collect();
            assert_eq!(placeholders, path_wires, "{}", desc.id);
        }
    }

    #[test]
    fn field_names_are_unique_per_operation() {
        for op in Operation::ALL {
            let desc = op.descriptor();
            let mut names = HashSet::new();
            for field in desc.fields {
                assert!(names.insert(field.name), "{}: duplicate {}", desc.id, field.name);
                assert_ne!(field.name, crate::params::HEADERS_FIELD, "{}", desc.id);
            }
        }
    }

    #[test]
    fn body_and_form_are_exclusive() {
        for op in Operation::ALL {
            let desc = op.descriptor();
            assert!(!(desc.has_body() && desc.has_form()), "{}", desc.id);
        }
    }

    #[test]
    fn stream_operations_take_accept_from_params() {
        for op in Operation::ALL {
            let desc = op.descriptor();
            if desc.response_type == ResponseType::Stream {
                assert!(desc.accept.is_none(), "{}", desc.id);
                assert!(desc.fields.contains(&ACCEPT), "{}", desc.id);
            }
        }
    }

    #[test]
    fn placeholders_follow_template_order() {
        let desc = OperationDescriptor {
            id: "example",
            method: HttpMethod::Get,
            path: "/catalogs/{catalog_name}/schemas/{schema_name}",
            fields: &[],
            accept: None,
            response_type: ResponseType::Json,
        };
        assert_eq!(desc.placeholders(), vec!["catalog_name", "schema_name"]);
    }

    #[test]
    fn required_fields_keep_declaration_order() {
        let desc = Operation::RollbackSnapshot.descriptor();
        assert_eq!(
            desc.required_fields(),
            vec!["engineId", "catalogName", "schemaName", "snapshotId", "tableName"]
        );
        assert!(desc.accepted_fields().contains(&"lhInstanceId"));
    }
}
