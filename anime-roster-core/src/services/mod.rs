//! 业务逻辑服务层

mod roster_service;

pub use roster_service::RosterService;
