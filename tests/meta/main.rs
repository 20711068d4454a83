//! Repository structure checks run alongside the test suite
