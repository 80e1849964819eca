//! Task profiles and the request / result types that flow through the gateway.

pub mod params;
pub mod profile;
pub mod profiles;
pub mod request;
pub mod result;
pub mod schema;

pub use params::{resolve_parameters, ParamKind, ParamSpec};
pub use profile::{ProfileRegistry, TaskProfile};
pub use request::{FileAttachment, TaskRequest};
pub use result::{FieldValue, Record, ResultMode, StructuredResult};
pub use schema::{FallbackPlan, FieldKind, FieldSpec, OutputSchema, RecordSchema};
