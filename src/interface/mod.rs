//! Interface layer
//! CLI 파싱, 조립(composition root), 웹 화면.

pub mod cli;
pub mod composition;
pub mod web;
