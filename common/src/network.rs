pub mod address;
pub mod codec;
pub mod constants;
pub mod dispatch;
pub mod ipv4;
pub mod ipv6;
pub mod validate;
