//! Rehab Assistant - Interactive Rehabilitation Intake Wizard
//!
//! This crate implements a linear four-step intake wizard that collects a
//! student's name, year level, pain rating, and affected body areas plus
//! activity type, then produces a rule-based recovery recommendation and
//! appends a human-readable report block to a durable sink.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
