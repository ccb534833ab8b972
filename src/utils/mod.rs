//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 문자 종류 검사, 정규식 이스케이프
//! - [`validation`] - 필드 검증 규칙과 ObjectId/날짜 파싱
//! - [`pagination`] - 페이지 번호를 skip/limit 오프셋으로 변환

pub mod string_utils;
pub mod validation;
pub mod pagination;
