//! # ODM操作实现模块

pub mod odm_operations_impl;
