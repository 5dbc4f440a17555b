//! Pure data structures shared by the gateways and the view controllers.

pub mod inventory;
pub mod paging;
pub mod product;

pub use inventory::*;
pub use paging::*;
pub use product::*;
