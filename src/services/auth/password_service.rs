//! bcrypt 비밀번호 해싱 서비스
//!
//! 해싱과 검증은 CPU를 오래 점유하므로 `web::block`으로 블로킹 스레드 풀에서 실행합니다.

use actix_web::web;

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(config: PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub async fn hash(&self, plain: &str) -> AppResult<String> {
        let plain = plain.to_owned();
        let cost = self.cost;

        let start = std::time::Instant::now();
        let hashed = web::block(move || bcrypt::hash(plain, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start.elapsed());

        Ok(hashed)
    }

    /// 평문과 저장된 해시를 비교합니다.
    ///
    /// 손상된 해시 문자열은 에러가 아니라 불일치로 취급합니다.
    pub async fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        let plain = plain.to_owned();
        let hashed = hashed.to_owned();

        let matched = web::block(move || bcrypt::verify(plain, &hashed))
            .await
            .context("비밀번호 검증 작업 실패")?;

        Ok(matched.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::new(PasswordConfig { bcrypt_cost: 4 })
    }

    #[actix_web::test]
    async fn test_hash_and_verify() {
        let service = service();
        let hashed = service.hash("password123").await.unwrap();

        assert_ne!(hashed, "password123");
        assert!(service.verify("password123", &hashed).await.unwrap());
        assert!(!service.verify("password124", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_garbage_hash_does_not_match() {
        assert!(!service().verify("password123", "not-a-hash").await.unwrap());
    }
}
