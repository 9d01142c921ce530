//! Simulation setup tests.
