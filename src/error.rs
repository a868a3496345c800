// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Campus
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Campus operations
#[derive(Error, Debug)]
pub enum CampusError {
    /// API-related errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network connectivity error (the request never reached the backend)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Backend error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The backend answered but the body could not be decoded
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for Campus operations
pub type Result<T> = std::result::Result<T, CampusError>;
