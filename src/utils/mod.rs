//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 문자열 처리 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티

pub mod string_utils;
