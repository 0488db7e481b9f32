pub mod model;
pub mod operation;
pub mod route;

pub use model::{ModelDescriptor, ModelField};
pub use operation::{OperationDescriptor, StatusEntry};
pub use route::{BodyTag, FuncTypeSegment, RouteSegment};
