//! 预订模块 - 订单校验与名额预留
//!
//! - [`policy`] - 可订性规则 (预检和存储端条件扣减共用同一条规则)
//! - [`BookingService`] - 全有或全无的两阶段下单

pub mod policy;
pub mod service;

pub use service::{BookingService, OrderError};
