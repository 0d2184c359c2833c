//! Infrastructure 層
//!
//! ドメイン層が定義する trait の実装と、HTTP API の DTO を提供します。

pub mod dto;
pub mod repository;
