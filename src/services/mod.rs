//! 애플리케이션 서비스 계층

pub mod users;
