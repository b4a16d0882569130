//! Infrastructure Layer - 基础设施层
//!
//! 宿主传输层：把外部请求转换为求值命令，并原样转发响应信封

pub mod http;
