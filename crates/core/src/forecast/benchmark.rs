//! Benchmark test for forecast performance.
