pub mod management;

pub use management::{ManagementRequest, ManagementResponse, Outcome, ReleaseInfo};
