pub mod create_distributor;
pub mod update_root;
pub mod claim;
pub mod recover;

pub use create_distributor::*;
pub use update_root::*;
pub use claim::*;
pub use recover::*;
