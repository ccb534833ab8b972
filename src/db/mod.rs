//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new(&config.database).await?;
//! let events = database.get_database().collection::<Event>("events");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 묶어 리포지토리 계층에 제공합니다.
/// `Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// URI를 파싱해 클라이언트를 만들고, `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패 또는 서버에 연결할 수 없는 경우
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("event_scheduler".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&config.name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
