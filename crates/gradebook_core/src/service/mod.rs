//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the gradebook session flow.
//! - Keep UI front ends decoupled from storage details.

pub mod gradebook_service;
pub mod view;
