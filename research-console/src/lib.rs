// Static pipeline stage descriptors
pub mod stages;

// Simulated stage progression
pub mod ticker;

// Research session lifecycle
pub mod session;

// HTTP client for the research endpoint
pub mod client;

// Command line and environment configuration
pub mod config;

// Application state, navigation and key handling
pub mod app;

// Terminal rendering
pub mod ui;
