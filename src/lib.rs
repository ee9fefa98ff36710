//! Student Tracker - 学生跟踪系统数据访问层
//!
//! 基于 SeaORM 的仓库层，覆盖用户、班级、考勤、任务、测验、成绩、笔记、通知、资源和直播课。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod storage;
pub mod utils;
