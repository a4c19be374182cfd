//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`lessons`] - 课程查询、搜索和更新接口
//! - [`orders`] - 下单接口

pub mod health;
pub mod lessons;
pub mod orders;
