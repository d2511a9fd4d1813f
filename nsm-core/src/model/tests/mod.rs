//! Integration tests for the model module.
//!
//! These tests verify the complete model building and execution workflow,
//! including dependency resolution, Euler stepping and warning collection.

#[cfg(test)]
mod basic;
#[cfg(test)]
mod build_errors;
#[cfg(test)]
mod numerics;
