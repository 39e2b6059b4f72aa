// src/lib.rs
pub mod app;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mappers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
