pub mod error;
pub mod feature_flags;

// ET3 domain modules
pub mod case;
pub mod ccd;
pub mod common;
pub mod document;
pub mod link_status;
pub mod respondent;

pub use error::*;
pub use feature_flags::*;

pub use case::*;
// ccd types are NOT glob re-exported since the remote shapes mirror the
// view-model names (Document vs DocumentApi and so on).
// Use shared_types::ccd::* explicitly instead.
pub use common::*;
pub use document::*;
pub use link_status::*;
pub use respondent::*;
