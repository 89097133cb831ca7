//! # Pulse Core
//!
//! 仪表盘的领域内核：实体、数据源端口 (Port)、错误类型、时钟与配置。
//! 本 crate 不包含任何具体实现，所有数据源与绘制后端均通过 Trait 注入。

pub mod common;
pub mod config;
pub mod error;

pub mod finance {
    pub mod entity;
    pub mod port;
}

pub mod news {
    pub mod entity;
    pub mod port;
}

pub mod weather {
    pub mod entity;
    pub mod port;
}

pub mod overview {
    pub mod entity;
    pub mod port;
}

pub mod render {
    pub mod entity;
    pub mod error;
    pub mod port;
}
