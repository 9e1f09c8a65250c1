pub mod duty_log;
pub mod export;
pub mod hos;
