//! Interactive budget sessions and the flow diagram derived from them.

pub mod error;
pub mod flow;
pub mod service;
pub mod types;


pub use error::BudgetError;
pub use flow::{FlowBand, FlowTarget, SAVINGS_FLOW_COLOR, flow_bands};
pub use service::BudgetAllocator;
pub use types::{BudgetCategoryState, BudgetSession, CategoryEdit, EditOutcome};
