use crate::{config::Config, services::bookmark::BookmarkService};

/// 应用程序的共享状态
#[derive(Clone)]
pub struct AppState {
    /// 应用配置
    pub config: Config,

    /// 书签服务
    pub bookmark_service: BookmarkService,
}

impl AppState {
    pub fn new(config: Config, bookmark_service: BookmarkService) -> Self {
        Self {
            config,
            bookmark_service,
        }
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.config.is_production()
    }
}
